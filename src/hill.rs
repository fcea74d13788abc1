//! Hill cipher: polygraphic substitution by matrix multiplication mod 26.
//!
//! Plaintext is reduced to uppercase letters, padded with `X` to a multiple
//! of the block size `n`, and every block of `n` letter indices is multiplied
//! by the `n × n` key matrix modulo 26.
//!
//! Encryption accepts any square matrix. Whether the matrix can be inverted
//! is only checked when decrypting: the determinant must be coprime with 26.
//! The inverse key is `det⁻¹ · adj(K) mod 26`, computed by cofactor expansion
//! so any block size works, not just 2×2.

use crate::cipher::Cipher;
use crate::error::CipherError;
use crate::utils::alphabet::{index_to_letter, letter_index, letters_upper, Case};
use crate::utils::modular::{
    adjugate_mod, determinant_mod, is_coprime, mod_inverse, mul_matrix_vector,
};

/// Alphabet modulus.
const MODULUS: i64 = 26;

/// Alphabet index of `X`, used to fill an incomplete final block.
const PAD_INDEX: i64 = 23;

/// Hill cipher with a square integer key matrix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hill {
    key: Vec<Vec<i64>>,
}

impl Hill {
    /// Creates a Hill cipher from a row-major key matrix.
    ///
    /// Entries may be any integers; they are reduced modulo 26 when used.
    /// The matrix is not checked for invertibility here.
    ///
    /// # Errors
    /// Returns [`CipherError::MatrixNotSquare`] if the matrix is empty or
    /// any row length differs from the number of rows.
    ///
    /// # Examples
    ///
    /// ```
    /// use classicrypt::{Cipher, Hill};
    ///
    /// let hill = Hill::new(vec![vec![2, 3], vec![1, 4]]).unwrap();
    /// let ct = hill.encrypt("ATTACKATDAWN").unwrap();
    /// assert_eq!(hill.decrypt(&ct).unwrap(), "ATTACKATDAWN");
    ///
    /// assert!(Hill::new(vec![vec![1, 2, 3], vec![4, 5, 6]]).is_err());
    /// ```
    pub fn new(key: Vec<Vec<i64>>) -> Result<Self, CipherError> {
        let n = key.len();
        if n == 0 || key.iter().any(|row| row.len() != n) {
            return Err(CipherError::MatrixNotSquare);
        }
        Ok(Hill { key })
    }

    /// Creates a Hill cipher from a fixed-size array.
    ///
    /// # Errors
    /// Returns [`CipherError::MatrixNotSquare`] for `N == 0`.
    pub fn from_array<const N: usize>(key: [[i64; N]; N]) -> Result<Self, CipherError> {
        Self::new(key.iter().map(|row| row.to_vec()).collect())
    }

    /// Block size (the matrix dimension).
    pub fn block_size(&self) -> usize {
        self.key.len()
    }

    /// The key matrix as given.
    pub fn key(&self) -> &[Vec<i64>] {
        &self.key
    }

    /// Computes the inverse key matrix modulo 26.
    ///
    /// # Errors
    /// Returns [`CipherError::MatrixNotInvertible`] if the determinant is
    /// not coprime with 26.
    pub fn inverse_key(&self) -> Result<Vec<Vec<i64>>, CipherError> {
        let determinant = determinant_mod(&self.key, MODULUS);
        if !is_coprime(determinant, MODULUS) {
            return Err(CipherError::MatrixNotInvertible { determinant });
        }
        let det_inverse = mod_inverse(determinant, MODULUS)
            .ok_or(CipherError::MatrixNotInvertible { determinant })?;
        let inverse = adjugate_mod(&self.key, MODULUS)
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|v| (v * det_inverse).rem_euclid(MODULUS))
                    .collect()
            })
            .collect();
        Ok(inverse)
    }

    /// Multiplies each `n`-letter block of `letters` by `matrix`.
    ///
    /// `letters` must be uppercase ASCII; a short final block is padded.
    fn transform_blocks(letters: &str, matrix: &[Vec<i64>]) -> String {
        let n = matrix.len();
        let mut indices: Vec<i64> = letters
            .chars()
            .filter_map(letter_index)
            .map(|(index, _)| index as i64)
            .collect();
        let remainder = indices.len() % n;
        if remainder > 0 {
            let pad = n - remainder;
            tracing::debug!(pad, block_size = n, "padding final Hill block");
            indices.extend(std::iter::repeat_n(PAD_INDEX, pad));
        }

        let mut output = String::with_capacity(indices.len());
        for block in indices.chunks(n) {
            for value in mul_matrix_vector(matrix, block, MODULUS) {
                output.push(index_to_letter(value as u8, Case::Upper));
            }
        }
        output
    }
}

impl Cipher for Hill {
    fn encrypt(&self, plaintext: &str) -> Result<String, CipherError> {
        Ok(Self::transform_blocks(&letters_upper(plaintext), &self.key))
    }

    fn decrypt(&self, ciphertext: &str) -> Result<String, CipherError> {
        let inverse = self.inverse_key()?;
        Ok(Self::transform_blocks(&letters_upper(ciphertext), &inverse))
    }
}

/// Encrypts `plaintext` with the Hill key matrix `key`.
pub fn hill_encrypt(plaintext: &str, key: &[Vec<i64>]) -> Result<String, CipherError> {
    Hill::new(key.to_vec())?.encrypt(plaintext)
}

/// Decrypts `ciphertext` with the Hill key matrix `key`.
pub fn hill_decrypt(ciphertext: &str, key: &[Vec<i64>]) -> Result<String, CipherError> {
    Hill::new(key.to_vec())?.decrypt(ciphertext)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    fn key_2x2() -> Vec<Vec<i64>> {
        vec![vec![2, 3], vec![1, 4]]
    }

    #[test]
    fn test_known_vector_2x2() {
        assert_eq!(
            hill_encrypt("ATTACKATDAWN", &key_2x2()).unwrap(),
            "FYMTIQFYGDFW"
        );
        assert_eq!(
            hill_decrypt("FYMTIQFYGDFW", &key_2x2()).unwrap(),
            "ATTACKATDAWN"
        );
    }

    #[test]
    fn test_extreme_entries_reduce_modulo_26() {
        // i64::MAX ≡ 7, so this is the key [[7, 3], [1, 4]] with determinant 25
        let key = vec![vec![i64::MAX, 3], vec![1, 4]];
        let reduced = vec![vec![7, 3], vec![1, 4]];
        let ct = hill_encrypt("ATTACKATDAWN", &key).unwrap();
        assert_eq!(ct, hill_encrypt("ATTACKATDAWN", &reduced).unwrap());
        assert_eq!(hill_decrypt(&ct, &key).unwrap(), "ATTACKATDAWN");

        let singular = vec![vec![i64::MAX, i64::MAX], vec![i64::MIN, i64::MIN]];
        assert_eq!(
            hill_decrypt("ABCD", &singular),
            Err(CipherError::MatrixNotInvertible { determinant: 0 })
        );
    }

    #[test]
    fn test_sanitises_and_uppercases() {
        assert_eq!(hill_encrypt("Hello, World", &key_2x2()).unwrap(), "AXDDQYBEFX");
        assert_eq!(hill_decrypt("AXDDQYBEFX", &key_2x2()).unwrap(), "HELLOWORLD");
    }

    #[test]
    fn test_odd_length_padded_with_x() {
        let ct = hill_encrypt("HELLO", &key_2x2()).unwrap();
        assert_eq!(ct.len(), 6);
        assert_eq!(hill_decrypt(&ct, &key_2x2()).unwrap(), "HELLOX");
    }

    #[test]
    fn test_inverse_key_2x2() {
        let hill = Hill::new(key_2x2()).unwrap();
        // det = 5, 5⁻¹ = 21; adj = [[4, -3], [-1, 2]]
        assert_eq!(
            hill.inverse_key().unwrap(),
            vec![vec![6, 15], vec![5, 16]]
        );
    }

    #[test]
    fn test_known_vector_3x3() {
        let key = vec![vec![6, 24, 1], vec![13, 16, 10], vec![20, 17, 15]];
        assert_eq!(hill_encrypt("ACT", &key).unwrap(), "POH");
        assert_eq!(hill_decrypt("POH", &key).unwrap(), "ACT");
    }

    #[test]
    fn test_non_invertible_encrypts_but_fails_decrypt() {
        // det = 4 - 6 = -2, shares factor 2 with 26
        let key = vec![vec![1, 2], vec![3, 4]];
        assert!(hill_encrypt("ATTACK", &key).is_ok());
        let err = hill_decrypt("ATTACK", &key).unwrap_err();
        assert_eq!(err, CipherError::MatrixNotInvertible { determinant: 24 });
        assert_eq!(err.kind(), ErrorKind::InvalidKey);
    }

    #[test]
    fn test_determinant_multiple_of_13_rejected() {
        let key = vec![vec![13, 0], vec![0, 1]];
        assert!(matches!(
            hill_decrypt("AB", &key),
            Err(CipherError::MatrixNotInvertible { determinant: 13 })
        ));
    }

    #[test]
    fn test_non_square_rejected() {
        assert_eq!(
            hill_encrypt("AB", &[vec![1, 2, 3], vec![4, 5, 6]]),
            Err(CipherError::MatrixNotSquare)
        );
        assert_eq!(hill_decrypt("AB", &[]), Err(CipherError::MatrixNotSquare));
        assert_eq!(
            Hill::new(vec![vec![1, 2], vec![3]]),
            Err(CipherError::MatrixNotSquare)
        );
    }

    #[test]
    fn test_from_array() {
        let hill = Hill::from_array([[2, 3], [1, 4]]).unwrap();
        assert_eq!(hill.block_size(), 2);
        assert_eq!(hill.key(), key_2x2().as_slice());
    }

    #[test]
    fn test_negative_and_large_entries_reduced() {
        let reduced = Hill::new(key_2x2()).unwrap();
        let shifted = Hill::new(vec![vec![28, -23], vec![27, 30]]).unwrap();
        assert_eq!(
            reduced.encrypt("MEETMEHERE").unwrap(),
            shifted.encrypt("MEETMEHERE").unwrap()
        );
        assert_eq!(
            shifted.decrypt(&shifted.encrypt("MEETMEHERE").unwrap()).unwrap(),
            "MEETMEHERE"
        );
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(hill_encrypt("", &key_2x2()).unwrap(), "");
        assert_eq!(hill_decrypt("123 !", &key_2x2()).unwrap(), "");
    }
}
