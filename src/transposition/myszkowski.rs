//! Myszkowski transposition.
//!
//! Columnar transposition where repeated keyword letters share a rank. The
//! plaintext is used as-is (spaces and punctuation included), laid row-major
//! into `keyword.len()` columns, and read rank by rank. Columns with the same
//! rank are read left to right, each column top to bottom in full.

use super::columns::{decrypt_columns, encrypt_columns, tied_ranks};
use crate::cipher::Cipher;
use crate::error::CipherError;
use crate::utils::alphabet::keyword_indices;

/// Myszkowski transposition cipher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Myszkowski {
    ranks: Vec<usize>,
}

impl Myszkowski {
    /// Creates a Myszkowski cipher from `keyword`. Non-letters are ignored
    /// and case does not matter.
    ///
    /// # Errors
    /// Returns [`CipherError::KeyWithoutLetters`] if `keyword` has no letters.
    ///
    /// # Examples
    ///
    /// ```
    /// use classicrypt::{Cipher, Myszkowski};
    ///
    /// let cipher = Myszkowski::new("tomato").unwrap();
    /// assert_eq!(cipher.ranks(), &[3, 2, 1, 0, 3, 2]);
    /// ```
    pub fn new(keyword: &str) -> Result<Self, CipherError> {
        let key = keyword_indices(keyword)?;
        Ok(Myszkowski {
            ranks: tied_ranks(&key),
        })
    }

    /// Column ranks; repeated letters share a rank.
    pub fn ranks(&self) -> &[usize] {
        &self.ranks
    }
}

impl Cipher for Myszkowski {
    fn encrypt(&self, plaintext: &str) -> Result<String, CipherError> {
        let chars: Vec<char> = plaintext.chars().collect();
        Ok(encrypt_columns(&chars, &self.ranks).into_iter().collect())
    }

    fn decrypt(&self, ciphertext: &str) -> Result<String, CipherError> {
        let chars: Vec<char> = ciphertext.chars().collect();
        Ok(decrypt_columns(&chars, &self.ranks).into_iter().collect())
    }
}

/// Encrypts `plaintext` with a Myszkowski keyword.
pub fn myszkowski_encrypt(plaintext: &str, keyword: &str) -> Result<String, CipherError> {
    Myszkowski::new(keyword)?.encrypt(plaintext)
}

/// Decrypts `ciphertext` with a Myszkowski keyword.
pub fn myszkowski_decrypt(ciphertext: &str, keyword: &str) -> Result<String, CipherError> {
    Myszkowski::new(keyword)?.decrypt(ciphertext)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tomato_vector() {
        let pt = "WEAREDISCOVEREDFLEEATONCE";
        let ct = myszkowski_encrypt(pt, "TOMATO").unwrap();
        assert_eq!(ct, "ROFOACDTESEADEECWIREEEVLN");
        assert_eq!(myszkowski_decrypt(&ct, "TOMATO").unwrap(), pt);
    }

    #[test]
    fn test_keeps_spaces_and_punctuation() {
        let pt = "we are discovered, flee at once!";
        let ct = myszkowski_encrypt(pt, "tomato").unwrap();
        assert_eq!(ct.len(), pt.len());
        assert_eq!(myszkowski_decrypt(&ct, "TOMATO").unwrap(), pt);
    }

    #[test]
    fn test_distinct_letters_match_plain_columnar() {
        // KEY has no repeats, so ranks are [1, 0, 2]
        assert_eq!(
            myszkowski_encrypt("WEAREDISCOVERED", "KEY").unwrap(),
            "EESVEWRIORADCED"
        );
    }

    #[test]
    fn test_all_same_letter_reads_row_major_columns() {
        // One rank group: columns 0,1,2 read in full left to right
        assert_eq!(myszkowski_encrypt("ABCDEFG", "AAA").unwrap(), "ADGBECF");
        assert_eq!(myszkowski_decrypt("ADGBECF", "AAA").unwrap(), "ABCDEFG");
    }

    #[test]
    fn test_roundtrip_every_length() {
        let source = "The quick brown fox jumps over the lazy dog; 0123456789.";
        for keyword in ["TOMATO", "BALLOON", "MISSISSIPPI", "Z", "AB", "BANANA"] {
            for len in 0..source.len() {
                let text = &source[..len];
                let ct = myszkowski_encrypt(text, keyword).unwrap();
                assert_eq!(myszkowski_decrypt(&ct, keyword).unwrap(), text, "{} {}", keyword, len);
            }
        }
    }

    #[test]
    fn test_empty_keyword_rejected() {
        assert_eq!(
            myszkowski_encrypt("abc", "42"),
            Err(CipherError::KeyWithoutLetters)
        );
    }
}
