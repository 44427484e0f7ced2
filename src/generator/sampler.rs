use std::collections::HashSet;

use log::debug;
use rand::Rng;

use crate::error::{PassdictError, Result};
use crate::generator::SelectionConstraints;
use crate::generator::dictionary::Dictionary;

/// Rejected draws tolerated before giving up on a set of constraints.
pub const DEFAULT_MAX_ATTEMPTS: usize = 1000;

/// Distinct words picked from a dictionary, in draw order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Selection {
    pub words: Vec<String>,
    pub attempts: usize,
}

impl Selection {
    pub fn total_letters(&self) -> usize {
        total_letters(&self.words)
    }

    pub fn joined(&self) -> String {
        self.words.join(" ")
    }
}

/// Rejection sampler: draw `word_count` distinct words, keep the draw once
/// their combined length reaches `min_total_length`.
pub struct ConstrainedSampler<'a> {
    dictionary: &'a Dictionary,
    max_attempts: usize,
    indices: Vec<usize>,
}

impl<'a> ConstrainedSampler<'a> {
    pub fn new(dictionary: &'a Dictionary) -> Self {
        Self::with_max_attempts(dictionary, DEFAULT_MAX_ATTEMPTS)
    }

    pub fn with_max_attempts(dictionary: &'a Dictionary, max_attempts: usize) -> Self {
        Self {
            dictionary,
            max_attempts,
            indices: (0..dictionary.len()).collect(),
        }
    }

    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    pub fn sample<R: Rng + ?Sized>(
        &mut self,
        constraints: &SelectionConstraints,
        rng: &mut R,
    ) -> Result<Selection> {
        let requested = constraints.word_count();
        let available = self.dictionary.distinct_len();
        if requested > available {
            return Err(PassdictError::InsufficientPool {
                requested,
                available,
            });
        }

        let mut attempt = 0;
        loop {
            if attempt > self.max_attempts {
                debug!(
                    "no selection of {requested} words reached {} letters in {attempt} attempts",
                    constraints.min_total_length()
                );
                return Err(PassdictError::SamplingExhausted { attempts: attempt });
            }
            attempt += 1;

            let words = draw_distinct(&mut self.indices, self.dictionary.words(), requested, rng);
            if total_letters(&words) >= constraints.min_total_length() {
                debug!("accepted selection after {attempt} attempts");
                return Ok(Selection {
                    words,
                    attempts: attempt,
                });
            }
        }
    }
}

/// Partial Fisher-Yates over `indices`, skipping words already picked.
/// Terminates as long as `words` holds at least `count` distinct values.
fn draw_distinct<R: Rng + ?Sized>(
    indices: &mut [usize],
    words: &[String],
    count: usize,
    rng: &mut R,
) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::with_capacity(count);
    let mut picked = Vec::with_capacity(count);
    let n = indices.len();

    for i in 0..n {
        if picked.len() == count {
            break;
        }
        let j = rng.gen_range(i..n);
        indices.swap(i, j);
        let word = words[indices[i]].as_str();
        if seen.insert(word) {
            picked.push(word.to_string());
        }
    }
    picked
}

fn total_letters(words: &[String]) -> usize {
    words.iter().map(|w| w.chars().count()).sum()
}
