//! Caesar cipher: every letter shifted by a fixed amount.

use crate::cipher::Cipher;
use crate::error::CipherError;
use crate::utils::alphabet::{map_letters, reduce};

/// Caesar shift cipher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Caesar {
    shift: u8,
}

impl Caesar {
    /// Creates a Caesar cipher. Any integer shift is accepted and normalised
    /// into `0..26`.
    ///
    /// # Examples
    ///
    /// ```
    /// use classicrypt::Caesar;
    ///
    /// let caesar = Caesar::new(-23);
    /// assert_eq!(caesar.shift(), 3);
    /// assert_eq!(caesar.apply("Hello"), "Khoor");
    /// ```
    pub fn new(shift: i64) -> Self {
        Caesar {
            shift: reduce(shift),
        }
    }

    /// The normalised shift.
    pub fn shift(&self) -> u8 {
        self.shift
    }

    /// Shifts every letter forward.
    pub fn apply(&self, text: &str) -> String {
        map_letters(text, |x| (x + self.shift) % 26)
    }

    /// Shifts every letter back.
    pub fn revert(&self, text: &str) -> String {
        map_letters(text, |x| (x + 26 - self.shift) % 26)
    }
}

impl Cipher for Caesar {
    fn encrypt(&self, plaintext: &str) -> Result<String, CipherError> {
        Ok(self.apply(plaintext))
    }

    fn decrypt(&self, ciphertext: &str) -> Result<String, CipherError> {
        Ok(self.revert(ciphertext))
    }
}

/// Encrypts `plaintext` with a Caesar shift.
pub fn caesar_encrypt(plaintext: &str, shift: i64) -> String {
    Caesar::new(shift).apply(plaintext)
}

/// Decrypts `ciphertext` with a Caesar shift.
pub fn caesar_decrypt(ciphertext: &str, shift: i64) -> String {
    Caesar::new(shift).revert(ciphertext)
}
