/// Lowercase letters only.
pub const LETTER_ALPHABET: u32 = 26;
/// Lowercase letters plus space.
pub const LETTER_SPACE_ALPHABET: u32 = 27;
/// a-z, A-Z, 0-9, punctuation and space.
pub const PRINTABLE_ALPHABET: u32 = 95;

/// Statistics for a finished selection. Derived once and never mutated.
#[derive(Clone, Debug, PartialEq)]
pub struct EntropyReport {
    pub pool_size: usize,
    pub word_count: usize,
    pub total_letters: usize,
    pub total_with_spaces: usize,
    pub dictionary_bits: f64,
    pub letter_bits: f64,
    pub letter_with_spaces_bits: f64,
    pub equivalent_password_length: u64,
}

impl EntropyReport {
    pub fn compute<S: AsRef<str>>(words: &[S], pool_size: usize) -> Self {
        let word_count = words.len();
        let total_letters: usize = words.iter().map(|w| w.as_ref().chars().count()).sum();
        let total_with_spaces = total_letters + word_count.saturating_sub(1);

        let dictionary_bits = dictionary_entropy_bits(pool_size, word_count);

        Self {
            pool_size,
            word_count,
            total_letters,
            total_with_spaces,
            dictionary_bits,
            letter_bits: f64::from(LETTER_ALPHABET).log2() * total_letters as f64,
            letter_with_spaces_bits: f64::from(LETTER_SPACE_ALPHABET).log2()
                * total_with_spaces as f64,
            equivalent_password_length: equivalent_password_length(dictionary_bits),
        }
    }
}

/// Bits of choosing `word_count` distinct items out of `pool_size`:
/// log2(N) + log2(N-1) + ... + log2(N-(n-1)).
pub fn dictionary_entropy_bits(pool_size: usize, word_count: usize) -> f64 {
    (0..word_count.min(pool_size))
        .map(|i| ((pool_size - i) as f64).log2())
        .sum()
}

/// Length of a uniformly random password over the 95-symbol printable set
/// carrying at least `bits` of entropy.
pub fn equivalent_password_length(bits: f64) -> u64 {
    (bits / f64::from(PRINTABLE_ALPHABET).log2()).ceil() as u64
}
