//! Atbash cipher: the alphabet mirrored (A↔Z, B↔Y, ...).

use crate::cipher::Cipher;
use crate::error::CipherError;
use crate::utils::alphabet::map_letters;

/// Atbash mirror cipher. Keyless and self-inverse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Atbash;

impl Atbash {
    /// Mirrors every letter. Applying it twice restores the input.
    pub fn apply(&self, text: &str) -> String {
        map_letters(text, |x| 25 - x)
    }
}

impl Cipher for Atbash {
    fn encrypt(&self, plaintext: &str) -> Result<String, CipherError> {
        Ok(self.apply(plaintext))
    }

    fn decrypt(&self, ciphertext: &str) -> Result<String, CipherError> {
        Ok(self.apply(ciphertext))
    }
}

/// Encrypts `plaintext` with Atbash.
pub fn atbash_encrypt(plaintext: &str) -> String {
    Atbash.apply(plaintext)
}

/// Decrypts `ciphertext` with Atbash (same operation as encryption).
pub fn atbash_decrypt(ciphertext: &str) -> String {
    Atbash.apply(ciphertext)
}
