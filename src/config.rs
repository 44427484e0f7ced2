use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::generator::sampler::DEFAULT_MAX_ATTEMPTS;
use crate::generator::{
    DEFAULT_MAX_WORD_LENGTH, DEFAULT_MIN_TOTAL_LENGTH, DEFAULT_WORD_COUNT, SelectionConstraints,
};

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct Config {
    #[serde(default = "default_word_count")]
    pub word_count: usize,
    #[serde(default = "default_max_word_length")]
    pub max_word_length: usize,
    #[serde(default)]
    pub any_length: bool,
    #[serde(default = "default_min_total_length")]
    pub min_total_length: usize,
    #[serde(default = "default_dictionary")]
    pub dictionary: PathBuf,
    #[serde(default = "default_max_attempts")]
    pub max_attempts: usize,
    #[serde(default)]
    pub lowercase: bool,
}

fn default_word_count() -> usize {
    DEFAULT_WORD_COUNT
}
fn default_max_word_length() -> usize {
    DEFAULT_MAX_WORD_LENGTH
}
fn default_min_total_length() -> usize {
    DEFAULT_MIN_TOTAL_LENGTH
}
pub fn default_dictionary() -> PathBuf {
    PathBuf::from("passdict.txt")
}
fn default_max_attempts() -> usize {
    DEFAULT_MAX_ATTEMPTS
}

impl Default for Config {
    fn default() -> Self {
        Self {
            word_count: default_word_count(),
            max_word_length: default_max_word_length(),
            any_length: false,
            min_total_length: default_min_total_length(),
            dictionary: default_dictionary(),
            max_attempts: default_max_attempts(),
            lowercase: false,
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = fs::read_to_string(path)
                .with_context(|| format!("reading config {}", path.display()))?;
            let config: Config = toml::from_str(&content)
                .with_context(|| format!("parsing config {}", path.display()))?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("passdict")
            .join("config.toml")
    }

    pub fn constraints(&self) -> crate::error::Result<SelectionConstraints> {
        SelectionConstraints::new(
            self.word_count,
            (!self.any_length).then_some(self.max_word_length),
            self.min_total_length,
        )
    }
}
