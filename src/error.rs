use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PassdictError {
    #[error("dictionary contains no usable words after filtering")]
    EmptyDictionary,

    #[error("cannot pick {requested} distinct words from a dictionary of {available} distinct words")]
    InsufficientPool { requested: usize, available: usize },

    #[error("cannot satisfy requested word and/or letter count conditions after {attempts} attempts")]
    SamplingExhausted { attempts: usize },

    #[error("invalid constraint: {0}")]
    InvalidConstraint(String),

    #[error("failed to read dictionary {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PassdictError {
    /// Suggested way out for the user, if the failure is one they can fix
    /// by loosening the request.
    pub fn remedy(&self) -> Option<&'static str> {
        match self {
            PassdictError::SamplingExhausted { .. } => Some(
                "Try again with fewer words, more letters per word, and/or smaller total letter count.",
            ),
            PassdictError::InsufficientPool { .. } => {
                Some("Try again with fewer words or more letters per word.")
            }
            PassdictError::EmptyDictionary => {
                Some("Check the dictionary file or allow more letters per word.")
            }
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, PassdictError>;
