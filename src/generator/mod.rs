pub mod dictionary;
pub mod entropy;
pub mod sampler;

use rand::Rng;

use crate::error::{PassdictError, Result};
use dictionary::Dictionary;
use entropy::EntropyReport;
use sampler::{ConstrainedSampler, Selection};

pub const DEFAULT_WORD_COUNT: usize = 3;
pub const DEFAULT_MAX_WORD_LENGTH: usize = 8;
pub const DEFAULT_MIN_TOTAL_LENGTH: usize = 11;
/// Per-word maximum may not be set below this.
pub const MIN_WORD_LENGTH_FLOOR: usize = 3;

/// What the user asked for. Validated on construction, immutable after.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SelectionConstraints {
    word_count: usize,
    max_word_length: Option<usize>,
    min_total_length: usize,
}

impl SelectionConstraints {
    pub fn new(
        word_count: usize,
        max_word_length: Option<usize>,
        min_total_length: usize,
    ) -> Result<Self> {
        if word_count < 1 {
            return Err(PassdictError::InvalidConstraint(
                "word count must be at least 1".to_string(),
            ));
        }
        if let Some(max) = max_word_length {
            if max < MIN_WORD_LENGTH_FLOOR {
                return Err(PassdictError::InvalidConstraint(format!(
                    "maximum letters per word must be at least {MIN_WORD_LENGTH_FLOOR}, got {max}"
                )));
            }
        }
        Ok(Self {
            word_count,
            max_word_length,
            min_total_length,
        })
    }

    pub fn word_count(&self) -> usize {
        self.word_count
    }

    pub fn max_word_length(&self) -> Option<usize> {
        self.max_word_length
    }

    pub fn min_total_length(&self) -> usize {
        self.min_total_length
    }
}

impl Default for SelectionConstraints {
    fn default() -> Self {
        Self {
            word_count: DEFAULT_WORD_COUNT,
            max_word_length: Some(DEFAULT_MAX_WORD_LENGTH),
            min_total_length: DEFAULT_MIN_TOTAL_LENGTH,
        }
    }
}

/// A finished passphrase with its statistics.
#[derive(Clone, Debug)]
pub struct Passphrase {
    pub selection: Selection,
    pub report: EntropyReport,
}

impl Passphrase {
    pub fn words(&self) -> &[String] {
        &self.selection.words
    }
}

pub struct PassphraseGenerator {
    dictionary: Dictionary,
    constraints: SelectionConstraints,
    max_attempts: usize,
}

impl PassphraseGenerator {
    pub fn new(dictionary: Dictionary, constraints: SelectionConstraints, max_attempts: usize) -> Self {
        Self {
            dictionary,
            constraints,
            max_attempts,
        }
    }

    /// Scramble the pool, then sample and score a selection.
    pub fn generate<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Passphrase> {
        self.dictionary.shuffle(rng);
        let mut sampler = ConstrainedSampler::with_max_attempts(&self.dictionary, self.max_attempts);
        let selection = sampler.sample(&self.constraints, rng)?;
        let report = EntropyReport::compute(&selection.words, self.dictionary.len());
        Ok(Passphrase { selection, report })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::OsRng;

    #[test]
    fn defaults_match_documented_values() {
        let c = SelectionConstraints::default();
        assert_eq!(c.word_count(), 3);
        assert_eq!(c.max_word_length(), Some(8));
        assert_eq!(c.min_total_length(), 11);
    }

    #[test]
    fn rejects_zero_words() {
        let err = SelectionConstraints::new(0, Some(8), 11).unwrap_err();
        assert!(err.to_string().contains("word count"));
    }

    #[test]
    fn rejects_tiny_word_length() {
        let err = SelectionConstraints::new(3, Some(2), 11).unwrap_err();
        assert!(matches!(err, PassdictError::InvalidConstraint(_)));
        assert!(SelectionConstraints::new(3, Some(3), 0).is_ok());
        assert!(SelectionConstraints::new(3, None, 0).is_ok());
    }

    #[test]
    fn generates_scored_passphrase() {
        let constraints = SelectionConstraints::new(2, Some(8), 6).unwrap();
        let dict =
            Dictionary::from_lines(["ant", "bee", "cat", "dog", "emu"], constraints.max_word_length())
                .unwrap();
        let mut generator = PassphraseGenerator::new(dict, constraints, 1000);
        let passphrase = generator.generate(&mut OsRng).unwrap();

        assert_eq!(passphrase.words().len(), 2);
        assert_eq!(passphrase.report.pool_size, 5);
        assert_eq!(passphrase.report.total_letters, 6);
        assert_eq!(passphrase.report.total_with_spaces, 7);
        assert!((passphrase.report.dictionary_bits - 20f64.log2()).abs() < 1e-9);
    }
}
