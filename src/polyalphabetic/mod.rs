//! Polyalphabetic substitution ciphers.
//!
//! Each letter is shifted by a value drawn from a key stream. The stream
//! index advances once per letter processed; non-letters are copied through
//! and do not consume key material.

pub mod autokey;
pub mod beaufort;
pub mod gronsfeld;
pub mod vigenere;

pub use autokey::{autokey_decrypt, autokey_encrypt, Autokey};
pub use beaufort::{beaufort_cipher, beaufort_decrypt, beaufort_encrypt, Beaufort};
pub use gronsfeld::{gronsfeld_decrypt, gronsfeld_encrypt, Gronsfeld};
pub use vigenere::{vigenere_decrypt, vigenere_encrypt, Vigenere};

use crate::utils::alphabet::map_letters;

/// Maps every letter of `text` through `f(letter, key)`, cycling over `key`.
///
/// `key` must be non-empty; constructors guarantee this.
pub(crate) fn with_repeating_key<F>(text: &str, key: &[u8], f: F) -> String
where
    F: Fn(u8, u8) -> u8,
{
    let mut key_index = 0usize;
    map_letters(text, |x| {
        let k = key[key_index % key.len()];
        key_index += 1;
        f(x, k)
    })
}
