use std::io::{self, Write};

use crate::generator::entropy::{LETTER_ALPHABET, LETTER_SPACE_ALPHABET, PRINTABLE_ALPHABET};
use crate::generator::{Passphrase, SelectionConstraints};

pub fn write_header<W: Write>(out: &mut W, constraints: &SelectionConstraints) -> io::Result<()> {
    let length = match constraints.max_word_length() {
        Some(max) => format!("maximum length of {max} letters per word"),
        None => "no maximum length per word".to_string(),
    };
    writeln!(out)?;
    writeln!(out, "Picking {} words with {length}", constraints.word_count())?;
    writeln!(
        out,
        "and total length of at least {} letters.",
        constraints.min_total_length()
    )?;
    writeln!(out)
}

/// Words (vertical, then on one line) followed by the entropy figures.
pub fn write_passphrase<W: Write>(
    out: &mut W,
    passphrase: &Passphrase,
    lowercase: bool,
) -> io::Result<()> {
    let display = |text: &str| {
        if lowercase {
            text.to_lowercase()
        } else {
            text.to_string()
        }
    };

    for word in passphrase.words() {
        writeln!(out, "{}", display(word))?;
    }
    writeln!(out)?;
    writeln!(out, "{}", display(&passphrase.selection.joined()))?;
    writeln!(out)?;

    let r = &passphrase.report;
    writeln!(out, "Number of words in dictionary = {}", r.pool_size)?;
    writeln!(
        out,
        "Total length of selected words = {} letters ({} with separating spaces)",
        r.total_letters, r.total_with_spaces
    )?;
    writeln!(
        out,
        "Entropy (in {}-word set)                = {:.0} bits",
        r.pool_size, r.dictionary_bits
    )?;
    writeln!(
        out,
        "Entropy (in {LETTER_ALPHABET}-character set; w/o spaces) = {:.0} bits",
        r.letter_bits
    )?;
    writeln!(
        out,
        "Entropy (in {LETTER_SPACE_ALPHABET}-character set; w/ spaces)  = {:.0} bits",
        r.letter_with_spaces_bits
    )?;
    writeln!(
        out,
        "Equivalent password length using {PRINTABLE_ALPHABET}-character set = {} characters",
        r.equivalent_password_length
    )?;
    writeln!(
        out,
        "  ({PRINTABLE_ALPHABET}-character set includes a-z, A-Z, 0-9, all punctuation marks and space)"
    )?;
    writeln!(out)
}
