//! Affine cipher: `E(x) = (a·x + b) mod 26`, `D(y) = a⁻¹·(y − b) mod 26`.
//!
//! The multiplier `a` must be coprime with 26 or the mapping is not a
//! bijection and cannot be inverted.

use crate::cipher::Cipher;
use crate::error::CipherError;
use crate::utils::alphabet::{map_letters, reduce};
use crate::utils::modular::{is_coprime, mod_inverse};

/// Affine substitution cipher with key `(a, b)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Affine {
    a: u8,
    b: u8,
    a_inverse: u8,
}

impl Affine {
    /// Creates an Affine cipher.
    ///
    /// # Errors
    /// Returns [`CipherError::NotCoprime`] if `gcd(a, 26) != 1`.
    ///
    /// # Examples
    ///
    /// ```
    /// use classicrypt::Affine;
    ///
    /// assert!(Affine::new(5, 8).is_ok());
    /// assert!(Affine::new(4, 8).is_err());
    /// ```
    pub fn new(a: i64, b: i64) -> Result<Self, CipherError> {
        if !is_coprime(a, 26) {
            return Err(CipherError::NotCoprime { a });
        }
        let a_inverse = mod_inverse(a, 26).ok_or(CipherError::NotCoprime { a })?;
        Ok(Affine {
            a: reduce(a),
            b: reduce(b),
            a_inverse: a_inverse as u8,
        })
    }

    fn forward(&self, x: u8) -> u8 {
        ((self.a as u16 * x as u16 + self.b as u16) % 26) as u8
    }

    fn backward(&self, y: u8) -> u8 {
        ((self.a_inverse as u16 * ((y + 26 - self.b) % 26) as u16) % 26) as u8
    }
}

impl Cipher for Affine {
    fn encrypt(&self, plaintext: &str) -> Result<String, CipherError> {
        Ok(map_letters(plaintext, |x| self.forward(x)))
    }

    fn decrypt(&self, ciphertext: &str) -> Result<String, CipherError> {
        Ok(map_letters(ciphertext, |y| self.backward(y)))
    }
}

/// Encrypts `plaintext` with the Affine key `(a, b)`.
pub fn affine_encrypt(plaintext: &str, a: i64, b: i64) -> Result<String, CipherError> {
    Affine::new(a, b)?.encrypt(plaintext)
}

/// Decrypts `ciphertext` with the Affine key `(a, b)`.
pub fn affine_decrypt(ciphertext: &str, a: i64, b: i64) -> Result<String, CipherError> {
    Affine::new(a, b)?.decrypt(ciphertext)
}
