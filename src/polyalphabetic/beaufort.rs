//! Beaufort cipher: `C = (K − P) mod 26`.
//!
//! The mapping is its own inverse, so one operation serves for both
//! directions.

use super::with_repeating_key;
use crate::cipher::Cipher;
use crate::error::CipherError;
use crate::utils::alphabet::keyword_indices;

/// Beaufort cipher keyed by a keyword.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Beaufort {
    key: Vec<u8>,
}

impl Beaufort {
    /// Creates a Beaufort cipher. Non-letters in `keyword` are ignored.
    ///
    /// # Errors
    /// Returns [`CipherError::KeyWithoutLetters`] if `keyword` has no letters.
    pub fn new(keyword: &str) -> Result<Self, CipherError> {
        Ok(Beaufort {
            key: keyword_indices(keyword)?,
        })
    }

    /// Applies the Beaufort mapping. Encryption and decryption are identical.
    pub fn apply(&self, text: &str) -> String {
        with_repeating_key(text, &self.key, |x, k| (k + 26 - x) % 26)
    }
}

impl Cipher for Beaufort {
    fn encrypt(&self, plaintext: &str) -> Result<String, CipherError> {
        Ok(self.apply(plaintext))
    }

    fn decrypt(&self, ciphertext: &str) -> Result<String, CipherError> {
        Ok(self.apply(ciphertext))
    }
}

/// Applies the Beaufort cipher with `keyword`.
pub fn beaufort_cipher(text: &str, keyword: &str) -> Result<String, CipherError> {
    Ok(Beaufort::new(keyword)?.apply(text))
}

/// Encrypts with Beaufort; identical to [`beaufort_cipher`].
pub fn beaufort_encrypt(plaintext: &str, keyword: &str) -> Result<String, CipherError> {
    beaufort_cipher(plaintext, keyword)
}

/// Decrypts with Beaufort; identical to [`beaufort_cipher`].
pub fn beaufort_decrypt(ciphertext: &str, keyword: &str) -> Result<String, CipherError> {
    beaufort_cipher(ciphertext, keyword)
}
