//! Error types for the classicrypt library.
//!
//! Every fallible operation returns [`CipherError`]. Errors are grouped into
//! two coarse kinds (see [`ErrorKind`]): problems with the key material and
//! structurally malformed auxiliary input such as a custom Polybius square.
//! Plaintext and ciphertext are never rejected; ciphers sanitise or pass
//! through whatever they cannot transform.

use thiserror::Error;

/// Coarse classification of a [`CipherError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The key fails a structural or mathematical precondition.
    InvalidKey,
    /// Auxiliary input (a custom Polybius square) has the wrong shape.
    MalformedInput,
}

/// Errors produced by the classicrypt library.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CipherError {
    /// Keyword or primer has no letters left after sanitisation.
    #[error("key must contain at least one letter")]
    KeyWithoutLetters,

    /// Numeric key has no digits left after sanitisation.
    #[error("key must contain at least one digit")]
    KeyWithoutDigits,

    /// Affine multiplier shares a factor with the alphabet size.
    #[error("parameter must be coprime with 26 (got {a})")]
    NotCoprime {
        /// The rejected multiplier.
        a: i64,
    },

    /// Hill key matrix is empty or not square.
    #[error("matrix must be square")]
    MatrixNotSquare,

    /// Hill key matrix has a determinant sharing a factor with 26.
    #[error("matrix not invertible modulo 26 (determinant {determinant})")]
    MatrixNotInvertible {
        /// Determinant reduced modulo 26.
        determinant: i64,
    },

    /// N-gram size is zero.
    #[error("n-gram size must be positive")]
    InvalidNgramSize,

    /// Rail Fence needs at least two rails.
    #[error("number of rails must be at least 2 (got {rails})")]
    TooFewRails {
        /// The rejected rail count.
        rails: usize,
    },

    /// Route grid has a zero dimension or more cells than can be addressed.
    #[error("number of rows and columns must be positive and addressable (got {rows}x{cols})")]
    InvalidGridDimensions {
        /// Requested rows.
        rows: usize,
        /// Requested columns.
        cols: usize,
    },

    /// Route name is not one of the supported traversals.
    #[error("unsupported route type '{name}'; use 'spiral', 'snake', or 'diagonal'")]
    UnsupportedRoute {
        /// The rejected route name.
        name: String,
    },

    /// Spiral direction name is not recognised.
    #[error("unsupported spiral direction '{name}'; use 'clockwise' or 'counter-clockwise'")]
    UnsupportedDirection {
        /// The rejected direction name.
        name: String,
    },

    /// Custom Polybius square does not have the required shape.
    #[error("malformed Polybius square: {reason}")]
    MalformedSquare {
        /// What is wrong with the square.
        reason: String,
    },
}

impl CipherError {
    /// Returns the coarse kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CipherError::MalformedSquare { .. } => ErrorKind::MalformedInput,
            _ => ErrorKind::InvalidKey,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_key_without_letters() {
        let err = CipherError::KeyWithoutLetters;
        assert_eq!(format!("{}", err), "key must contain at least one letter");
    }

    #[test]
    fn test_display_not_coprime() {
        let err = CipherError::NotCoprime { a: 4 };
        assert_eq!(
            format!("{}", err),
            "parameter must be coprime with 26 (got 4)"
        );
    }

    #[test]
    fn test_display_matrix_not_invertible() {
        let err = CipherError::MatrixNotInvertible { determinant: 13 };
        assert!(format!("{}", err).starts_with("matrix not invertible modulo 26"));
    }

    #[test]
    fn test_display_unsupported_route_names_all_options() {
        let err = CipherError::UnsupportedRoute {
            name: "zigzag".to_string(),
        };
        let msg = format!("{}", err);
        assert!(msg.contains("zigzag"));
        assert!(msg.contains("'spiral'"));
        assert!(msg.contains("'snake'"));
        assert!(msg.contains("'diagonal'"));
    }

    #[test]
    fn test_kind_classification() {
        assert_eq!(CipherError::KeyWithoutLetters.kind(), ErrorKind::InvalidKey);
        assert_eq!(
            CipherError::TooFewRails { rails: 1 }.kind(),
            ErrorKind::InvalidKey
        );
        assert_eq!(
            CipherError::MalformedSquare {
                reason: "x".to_string()
            }
            .kind(),
            ErrorKind::MalformedInput
        );
    }

    #[test]
    fn test_error_equality() {
        assert_eq!(
            CipherError::KeyWithoutLetters,
            CipherError::KeyWithoutLetters
        );
        assert_ne!(CipherError::KeyWithoutLetters, CipherError::KeyWithoutDigits);
    }
}
