//! Autokey cipher: a primer followed by the plaintext itself as key stream.
//!
//! After the primer is used up, each key letter is the plaintext letter that
//! came `primer.len()` letters earlier, so the key never repeats.

use crate::cipher::Cipher;
use crate::error::CipherError;
use crate::utils::alphabet::{keyword_indices, map_letters};

/// Autokey cipher keyed by a primer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Autokey {
    primer: Vec<u8>,
}

impl Autokey {
    /// Creates an Autokey cipher. Non-letters in `primer` are ignored.
    ///
    /// # Errors
    /// Returns [`CipherError::KeyWithoutLetters`] if `primer` has no letters.
    pub fn new(primer: &str) -> Result<Self, CipherError> {
        Ok(Autokey {
            primer: keyword_indices(primer)?,
        })
    }
}

impl Cipher for Autokey {
    fn encrypt(&self, plaintext: &str) -> Result<String, CipherError> {
        let mut stream = self.primer.clone();
        let mut key_index = 0usize;
        Ok(map_letters(plaintext, |x| {
            let k = stream[key_index];
            key_index += 1;
            stream.push(x);
            (x + k) % 26
        }))
    }

    fn decrypt(&self, ciphertext: &str) -> Result<String, CipherError> {
        let mut stream = self.primer.clone();
        let mut key_index = 0usize;
        Ok(map_letters(ciphertext, |y| {
            let k = stream[key_index];
            key_index += 1;
            let x = (y + 26 - k) % 26;
            stream.push(x);
            x
        }))
    }
}

/// Encrypts `plaintext` with an Autokey primer.
pub fn autokey_encrypt(plaintext: &str, primer: &str) -> Result<String, CipherError> {
    Autokey::new(primer)?.encrypt(plaintext)
}

/// Decrypts `ciphertext` with an Autokey primer.
pub fn autokey_decrypt(ciphertext: &str, primer: &str) -> Result<String, CipherError> {
    Autokey::new(primer)?.decrypt(ciphertext)
}
