use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use log::debug;
use rand::Rng;
use rand::seq::SliceRandom;

use crate::error::{PassdictError, Result};

const BUNDLED_WORDS: &str = include_str!("../../assets/passdict.txt");

/// Filtered word list the sampler draws from. Duplicate lines in the source
/// are kept; uniqueness is enforced only when words are selected.
#[derive(Clone, Debug)]
pub struct Dictionary {
    words: Vec<String>,
}

impl Dictionary {
    pub fn from_lines<I, S>(lines: I, max_word_length: Option<usize>) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words = Vec::new();
        let (mut comments, mut blanks, mut too_long) = (0usize, 0usize, 0usize);

        for line in lines {
            let Some(word) = clean_line(line.as_ref()) else {
                comments += 1;
                continue;
            };
            if word.is_empty() {
                blanks += 1;
                continue;
            }
            if max_word_length.is_some_and(|max| word.chars().count() > max) {
                too_long += 1;
                continue;
            }
            words.push(word.to_string());
        }

        debug!(
            "loaded {} words (skipped {comments} comments, {blanks} blank lines, {too_long} too long)",
            words.len()
        );

        if words.is_empty() {
            return Err(PassdictError::EmptyDictionary);
        }
        Ok(Self { words })
    }

    pub fn from_reader<R: BufRead>(reader: R, max_word_length: Option<usize>) -> Result<Self> {
        let lines = reader
            .lines()
            .collect::<std::io::Result<Vec<String>>>()
            .map_err(|source| PassdictError::Io {
                path: "<reader>".into(),
                source,
            })?;
        Self::from_lines(lines, max_word_length)
    }

    pub fn load(path: &Path, max_word_length: Option<usize>) -> Result<Self> {
        let io_err = |source: std::io::Error| PassdictError::Io {
            path: path.to_path_buf(),
            source,
        };
        let file = File::open(path).map_err(io_err)?;
        let lines = BufReader::new(file)
            .lines()
            .collect::<std::io::Result<Vec<String>>>()
            .map_err(io_err)?;
        Self::from_lines(lines, max_word_length)
    }

    /// The word list compiled into the binary.
    pub fn bundled(max_word_length: Option<usize>) -> Result<Self> {
        Self::from_lines(BUNDLED_WORDS.lines(), max_word_length)
    }

    /// Extra scramble on top of the uniform draw in the sampler.
    pub fn shuffle<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.words.shuffle(rng);
    }

    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn distinct_len(&self) -> usize {
        let mut sorted: Vec<&str> = self.words.iter().map(String::as_str).collect();
        sorted.sort_unstable();
        sorted.dedup();
        sorted.len()
    }
}

/// Returns `None` for comment lines, otherwise the line with leading
/// whitespace and the line terminator removed.
fn clean_line(line: &str) -> Option<&str> {
    let trimmed = line.trim_start();
    if trimmed.starts_with('#') {
        return None;
    }
    let trimmed = trimmed.strip_suffix('\n').unwrap_or(trimmed);
    Some(trimmed.strip_suffix('\r').unwrap_or(trimmed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn skips_comments_and_blank_lines() {
        let dict = Dictionary::from_lines(["# comment", "  apple", ""], Some(8)).unwrap();
        assert_eq!(dict.words(), ["apple"]);
    }

    #[test]
    fn indented_comment_is_still_a_comment() {
        let dict = Dictionary::from_lines(["   # not a word", "pear"], None).unwrap();
        assert_eq!(dict.words(), ["pear"]);
    }

    #[test]
    fn keeps_internal_and_trailing_whitespace() {
        let dict = Dictionary::from_lines(["\tice cream", "tea \r\n"], None).unwrap();
        assert_eq!(dict.words(), ["ice cream", "tea "]);
    }

    #[test]
    fn filters_by_character_count() {
        let dict = Dictionary::from_lines(["cat", "horse", "café", "elephant"], Some(4)).unwrap();
        assert_eq!(dict.words(), ["cat", "café"]);
    }

    #[test]
    fn no_limit_keeps_long_words() {
        let dict = Dictionary::from_lines(["encyclopedia"], None).unwrap();
        assert_eq!(dict.len(), 1);
    }

    #[test]
    fn duplicates_are_kept_but_counted_once_as_distinct() {
        let dict = Dictionary::from_lines(["ant", "bee", "ant"], None).unwrap();
        assert_eq!(dict.len(), 3);
        assert_eq!(dict.distinct_len(), 2);
    }

    #[test]
    fn empty_after_filtering_is_an_error() {
        let err = Dictionary::from_lines(["# only comments", "", "enormous"], Some(3)).unwrap_err();
        assert!(matches!(err, PassdictError::EmptyDictionary));
    }

    #[test]
    fn shuffle_preserves_membership() {
        let mut dict = Dictionary::from_lines(["ant", "bee", "cat", "dog", "emu"], None).unwrap();
        let mut before = dict.words().to_vec();
        dict.shuffle(&mut StdRng::seed_from_u64(7));
        let mut after = dict.words().to_vec();
        before.sort();
        after.sort();
        assert_eq!(before, after);
    }

    #[test]
    fn bundled_list_loads_and_respects_limit() {
        let dict = Dictionary::bundled(Some(5)).unwrap();
        assert!(dict.len() > 100);
        assert!(dict.words().iter().all(|w| w.chars().count() <= 5));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = Dictionary::load(Path::new("/nonexistent/passdict.txt"), None).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/passdict.txt"));
    }
}
