//! Gronsfeld cipher: Vigenère with a numeric key, each digit a shift of 0–9.

use super::with_repeating_key;
use crate::cipher::Cipher;
use crate::error::CipherError;

/// Gronsfeld cipher keyed by a string of decimal digits.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Gronsfeld {
    digits: Vec<u8>,
}

impl Gronsfeld {
    /// Creates a Gronsfeld cipher. Characters other than ASCII digits are
    /// ignored.
    ///
    /// # Errors
    /// Returns [`CipherError::KeyWithoutDigits`] if `key` has no digits.
    pub fn new(key: &str) -> Result<Self, CipherError> {
        let digits: Vec<u8> = key
            .chars()
            .filter_map(|c| c.to_digit(10))
            .map(|d| d as u8)
            .collect();
        if digits.is_empty() {
            return Err(CipherError::KeyWithoutDigits);
        }
        Ok(Gronsfeld { digits })
    }

    /// Creates a Gronsfeld cipher from the decimal digits of `key`.
    pub fn from_number(key: u64) -> Self {
        let digits = key
            .to_string()
            .bytes()
            .map(|b| b - b'0')
            .collect();
        Gronsfeld { digits }
    }
}

impl Cipher for Gronsfeld {
    fn encrypt(&self, plaintext: &str) -> Result<String, CipherError> {
        Ok(with_repeating_key(plaintext, &self.digits, |x, d| (x + d) % 26))
    }

    fn decrypt(&self, ciphertext: &str) -> Result<String, CipherError> {
        Ok(with_repeating_key(ciphertext, &self.digits, |y, d| {
            (y + 26 - d) % 26
        }))
    }
}

/// Encrypts `plaintext` with a Gronsfeld digit key.
pub fn gronsfeld_encrypt(plaintext: &str, key: &str) -> Result<String, CipherError> {
    Gronsfeld::new(key)?.encrypt(plaintext)
}

/// Decrypts `ciphertext` with a Gronsfeld digit key.
pub fn gronsfeld_decrypt(ciphertext: &str, key: &str) -> Result<String, CipherError> {
    Gronsfeld::new(key)?.decrypt(ciphertext)
}
