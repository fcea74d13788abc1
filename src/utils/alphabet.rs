//! Letter ↔ index mapping over the 26-letter Latin alphabet.
//!
//! Every cipher in the crate works on alphabet indices in `0..26`. Case is
//! tracked separately from the index so it can be restored on output, and
//! anything that is not an ASCII letter passes through the substitution
//! ciphers untouched.

use crate::error::CipherError;

/// Number of letters in the alphabet.
pub const ALPHABET_LEN: u8 = 26;

/// Letter case, carried alongside an alphabet index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Case {
    /// `A`..=`Z`
    Upper,
    /// `a`..=`z`
    Lower,
}

/// Maps an ASCII letter to its alphabet index and case.
///
/// # Returns
/// `Some((index, case))` for `A`–`Z` / `a`–`z`, `None` for anything else.
pub fn letter_index(c: char) -> Option<(u8, Case)> {
    if c.is_ascii_uppercase() {
        Some((c as u8 - b'A', Case::Upper))
    } else if c.is_ascii_lowercase() {
        Some((c as u8 - b'a', Case::Lower))
    } else {
        None
    }
}

/// Maps an alphabet index back to a letter of the given case.
///
/// Indices outside `0..26` are reduced modulo 26.
pub fn index_to_letter(index: u8, case: Case) -> char {
    let base = match case {
        Case::Upper => b'A',
        Case::Lower => b'a',
    };
    (base + index % ALPHABET_LEN) as char
}

/// Reduces any integer to an alphabet index.
pub fn reduce(value: i64) -> u8 {
    value.rem_euclid(ALPHABET_LEN as i64) as u8
}

/// Applies `f` to every letter of `text`, preserving case and passing
/// non-letters through unchanged.
///
/// `f` receives the letter's alphabet index and returns the mapped index.
/// It is only called for letters, so stateful key streams advance exactly
/// once per letter.
pub fn map_letters<F>(text: &str, mut f: F) -> String
where
    F: FnMut(u8) -> u8,
{
    text.chars()
        .map(|c| match letter_index(c) {
            Some((index, case)) => index_to_letter(f(index), case),
            None => c,
        })
        .collect()
}

/// Keeps only ASCII letters, uppercased.
pub fn letters_upper(text: &str) -> String {
    text.chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Keeps only ASCII letters and digits, uppercased.
pub fn alphanumerics_upper(text: &str) -> String {
    text.chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_uppercase())
        .collect()
}

/// Sanitises a keyword to its letters and returns their alphabet indices.
///
/// # Errors
/// Returns [`CipherError::KeyWithoutLetters`] if no letter survives.
pub fn keyword_indices(key: &str) -> Result<Vec<u8>, CipherError> {
    let indices: Vec<u8> = key
        .chars()
        .filter_map(letter_index)
        .map(|(index, _)| index)
        .collect();
    if indices.is_empty() {
        return Err(CipherError::KeyWithoutLetters);
    }
    Ok(indices)
}
