//! ADFGVX ("August") cipher: Polybius fractionation followed by keyed
//! columnar transposition.
//!
//! 1. Each alphanumeric plaintext symbol becomes the two axis labels of its
//!    cell in a [`PolybiusSquare`].
//! 2. The label stream is written row-major under the keyword and read out
//!    column by column in alphabetical keyword order (ties by position).
//!
//! Symbols missing from the square and label pairs that address no cell are
//! skipped. Each skip is reported to a [`DiagnosticSink`] and the transform
//! continues; they are never errors.

use crate::cipher::Cipher;
use crate::diagnostics::{Diagnostic, DiagnosticSink, TracingSink};
use crate::error::CipherError;
use crate::polybius::PolybiusSquare;
use crate::transposition::columns::{decrypt_columns, encrypt_columns, strict_ranks};
use crate::utils::alphabet::{alphanumerics_upper, keyword_indices};

/// ADFGVX cipher: a keyword plus a Polybius square.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Adfgvx {
    ranks: Vec<usize>,
    square: PolybiusSquare,
}

impl Adfgvx {
    /// Creates an ADFGVX cipher with the default square.
    ///
    /// # Errors
    /// Returns [`CipherError::KeyWithoutLetters`] if `keyword` has no letters.
    ///
    /// # Examples
    ///
    /// ```
    /// use classicrypt::{Adfgvx, Cipher};
    ///
    /// let cipher = Adfgvx::new("KEY").unwrap();
    /// let ct = cipher.encrypt("Hello").unwrap();
    /// assert_eq!(cipher.decrypt(&ct).unwrap(), "HELLO");
    /// ```
    pub fn new(keyword: &str) -> Result<Self, CipherError> {
        Self::with_square(keyword, PolybiusSquare::default())
    }

    /// Creates an ADFGVX cipher with a custom square. Encryption and
    /// decryption must use the same square.
    ///
    /// The square need not be 6×6: any width [`PolybiusSquare::new`] accepts
    /// works, so a 5×5 `ADFGX` square gives the older ADFGX cipher. The
    /// ciphertext alphabet is always the square's labels.
    ///
    /// # Errors
    /// Returns [`CipherError::KeyWithoutLetters`] if `keyword` has no letters.
    pub fn with_square(keyword: &str, square: PolybiusSquare) -> Result<Self, CipherError> {
        let key = keyword_indices(keyword)?;
        Ok(Adfgvx {
            ranks: strict_ranks(&key),
            square,
        })
    }

    /// Column ranks of the transposition key.
    pub fn ranks(&self) -> &[usize] {
        &self.ranks
    }

    /// The Polybius square in use.
    pub fn square(&self) -> &PolybiusSquare {
        &self.square
    }

    /// Replaces every symbol with its label pair.
    fn fractionate<S: DiagnosticSink>(&self, plaintext: &str, sink: &mut S) -> Vec<char> {
        let symbols = alphanumerics_upper(plaintext);
        let mut stream = Vec::with_capacity(symbols.len() * 2);
        for (position, symbol) in symbols.chars().enumerate() {
            match self.square.coordinates(symbol) {
                Some((row, col)) => {
                    stream.push(row);
                    stream.push(col);
                }
                None => sink.report(Diagnostic::SymbolNotInSquare { symbol, position }),
            }
        }
        stream
    }

    /// Turns adjacent label pairs back into symbols.
    fn defractionate<S: DiagnosticSink>(&self, stream: &[char], sink: &mut S) -> String {
        let mut plaintext = String::with_capacity(stream.len() / 2);
        let mut pairs = stream.chunks_exact(2);
        for pair in pairs.by_ref() {
            let (row, col) = (pair[0], pair[1]);
            match self.square.symbol_at(row, col) {
                Some(symbol) => plaintext.push(symbol),
                None => sink.report(Diagnostic::UnknownCoordinates { row, col }),
            }
        }
        if let [label] = pairs.remainder() {
            sink.report(Diagnostic::DanglingCoordinate { label: *label });
        }
        plaintext
    }

    /// Encrypts `plaintext`, reporting skipped symbols to `sink`.
    pub fn encrypt_with<S: DiagnosticSink>(&self, plaintext: &str, mut sink: S) -> String {
        let stream = self.fractionate(plaintext, &mut sink);
        encrypt_columns(&stream, &self.ranks).into_iter().collect()
    }

    /// Decrypts `ciphertext`, reporting skipped coordinate pairs to `sink`.
    pub fn decrypt_with<S: DiagnosticSink>(&self, ciphertext: &str, mut sink: S) -> String {
        let chars: Vec<char> = ciphertext.chars().collect();
        let stream = decrypt_columns(&chars, &self.ranks);
        self.defractionate(&stream, &mut sink)
    }
}

impl Cipher for Adfgvx {
    fn encrypt(&self, plaintext: &str) -> Result<String, CipherError> {
        Ok(self.encrypt_with(plaintext, TracingSink))
    }

    fn decrypt(&self, ciphertext: &str) -> Result<String, CipherError> {
        Ok(self.decrypt_with(ciphertext, TracingSink))
    }
}

/// Encrypts `plaintext` with ADFGVX and the default square.
pub fn august_encrypt(plaintext: &str, keyword: &str) -> Result<String, CipherError> {
    Adfgvx::new(keyword)?.encrypt(plaintext)
}

/// Decrypts `ciphertext` with ADFGVX and the default square.
pub fn august_decrypt(ciphertext: &str, keyword: &str) -> Result<String, CipherError> {
    Adfgvx::new(keyword)?.decrypt(ciphertext)
}

/// Encrypts `plaintext` with ADFGVX and a custom square.
pub fn august_encrypt_with_square(
    plaintext: &str,
    keyword: &str,
    square: &PolybiusSquare,
) -> Result<String, CipherError> {
    Adfgvx::with_square(keyword, square.clone())?.encrypt(plaintext)
}

/// Decrypts `ciphertext` with ADFGVX and a custom square.
pub fn august_decrypt_with_square(
    ciphertext: &str,
    keyword: &str,
    square: &PolybiusSquare,
) -> Result<String, CipherError> {
    Adfgvx::with_square(keyword, square.clone())?.decrypt(ciphertext)
}
