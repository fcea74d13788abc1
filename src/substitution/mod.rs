//! Monoalphabetic substitution ciphers.
//!
//! Each letter is replaced through a fixed formula; case and every
//! non-letter are preserved in place.

pub mod affine;
pub mod atbash;
pub mod caesar;

pub use affine::{affine_decrypt, affine_encrypt, Affine};
pub use atbash::{atbash_decrypt, atbash_encrypt, Atbash};
pub use caesar::{caesar_decrypt, caesar_encrypt, Caesar};
