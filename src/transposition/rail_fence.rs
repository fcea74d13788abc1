//! Rail Fence cipher: zig-zag transposition across a number of rails.
//!
//! Characters are dealt onto rails 0, 1, ..., rails-1, rails-2, ..., 1, 0,
//! 1, ... and the ciphertext is the rails concatenated top to bottom. All
//! characters are transposed, including spaces and punctuation.

use crate::cipher::Cipher;
use crate::error::CipherError;

/// Rail Fence transposition cipher.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RailFence {
    rails: usize,
}

impl RailFence {
    /// Creates a Rail Fence cipher.
    ///
    /// # Errors
    /// Returns [`CipherError::TooFewRails`] if `rails < 2`.
    pub fn new(rails: usize) -> Result<Self, CipherError> {
        if rails < 2 {
            return Err(CipherError::TooFewRails { rails });
        }
        Ok(RailFence { rails })
    }

    /// Number of rails.
    pub fn rails(&self) -> usize {
        self.rails
    }

    /// Rails a text of `len` characters can reach. The zig-zag never turns
    /// back before the last character when there are at least `len` rails.
    fn active_rails(&self, len: usize) -> usize {
        self.rails.min(len.max(1))
    }

    /// Rail index of every position `0..len`, following the zig-zag.
    fn rail_pattern(&self, len: usize) -> Vec<usize> {
        let rails = self.active_rails(len);
        let mut pattern = Vec::with_capacity(len);
        let mut rail = 0usize;
        let mut descending = true;
        for _ in 0..len {
            pattern.push(rail);
            if rail == 0 {
                descending = true;
            } else if rail + 1 == rails {
                descending = false;
            }
            if descending {
                rail += 1;
            } else {
                rail -= 1;
            }
        }
        pattern
    }
}

impl Cipher for RailFence {
    fn encrypt(&self, plaintext: &str) -> Result<String, CipherError> {
        let chars: Vec<char> = plaintext.chars().collect();
        let pattern = self.rail_pattern(chars.len());
        let mut fence: Vec<String> = vec![String::new(); self.active_rails(chars.len())];
        for (&c, &rail) in chars.iter().zip(&pattern) {
            fence[rail].push(c);
        }
        Ok(fence.concat())
    }

    fn decrypt(&self, ciphertext: &str) -> Result<String, CipherError> {
        let chars: Vec<char> = ciphertext.chars().collect();
        let pattern = self.rail_pattern(chars.len());

        // Slots per rail, then each rail's slice of the ciphertext.
        let rails = self.active_rails(chars.len());
        let mut counts = vec![0usize; rails];
        for &rail in &pattern {
            counts[rail] += 1;
        }
        let mut cursors = Vec::with_capacity(rails);
        let mut start = 0usize;
        for count in counts {
            cursors.push(start);
            start += count;
        }

        let mut plaintext = String::with_capacity(ciphertext.len());
        for rail in pattern {
            plaintext.push(chars[cursors[rail]]);
            cursors[rail] += 1;
        }
        Ok(plaintext)
    }
}

/// Encrypts `plaintext` across `rails` rails.
pub fn rail_fence_encrypt(plaintext: &str, rails: usize) -> Result<String, CipherError> {
    RailFence::new(rails)?.encrypt(plaintext)
}

/// Decrypts `ciphertext` across `rails` rails.
pub fn rail_fence_decrypt(ciphertext: &str, rails: usize) -> Result<String, CipherError> {
    RailFence::new(rails)?.decrypt(ciphertext)
}
