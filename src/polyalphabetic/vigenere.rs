//! Vigenère cipher: letters shifted by a repeating keyword.

use super::with_repeating_key;
use crate::cipher::Cipher;
use crate::error::CipherError;
use crate::utils::alphabet::keyword_indices;

/// Vigenère cipher keyed by a keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vigenere {
    key: Vec<u8>,
}

impl Vigenere {
    /// Creates a Vigenère cipher. Non-letters in `keyword` are ignored.
    ///
    /// # Errors
    /// Returns [`CipherError::KeyWithoutLetters`] if `keyword` has no letters.
    pub fn new(keyword: &str) -> Result<Self, CipherError> {
        Ok(Vigenere {
            key: keyword_indices(keyword)?,
        })
    }
}

impl Cipher for Vigenere {
    fn encrypt(&self, plaintext: &str) -> Result<String, CipherError> {
        Ok(with_repeating_key(plaintext, &self.key, |x, k| (x + k) % 26))
    }

    fn decrypt(&self, ciphertext: &str) -> Result<String, CipherError> {
        Ok(with_repeating_key(ciphertext, &self.key, |y, k| {
            (y + 26 - k) % 26
        }))
    }
}

/// Encrypts `plaintext` with a Vigenère keyword.
pub fn vigenere_encrypt(plaintext: &str, keyword: &str) -> Result<String, CipherError> {
    Vigenere::new(keyword)?.encrypt(plaintext)
}

/// Decrypts `ciphertext` with a Vigenère keyword.
pub fn vigenere_decrypt(ciphertext: &str, keyword: &str) -> Result<String, CipherError> {
    Vigenere::new(keyword)?.decrypt(ciphertext)
}
