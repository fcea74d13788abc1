//! Uniform encrypt/decrypt interface shared by every cipher.

use crate::error::CipherError;

/// A keyed, reversible text transform.
///
/// Keys are validated when the cipher value is constructed, so most
/// implementations never fail here. [`Hill`](crate::Hill) is the exception:
/// its key is only checked for invertibility on decrypt.
///
/// Implementations hold no mutable state and are safe to share across
/// threads.
pub trait Cipher {
    /// Encrypts `plaintext`.
    fn encrypt(&self, plaintext: &str) -> Result<String, CipherError>;

    /// Decrypts `ciphertext`.
    fn decrypt(&self, ciphertext: &str) -> Result<String, CipherError>;
}
