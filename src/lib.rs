//! Classical cipher toolkit.
//!
//! Pure, allocation-per-call implementations of historical ciphers for
//! teaching, puzzles and cryptanalysis practice. None of them are secure.
//!
//! # Architecture
//!
//! ```text
//! utils::{alphabet, modular}      (A–Z indexing, gcd / inverse / matrices mod m)
//!     ↓
//! substitution  polyalphabetic  hill       (letter-wise and block substitution)
//! transposition::columns                   (rank vectors, column lengths)
//!     ↓                    ↓
//! myszkowski          polybius → adfgvx    (fractionation + transposition)
//! rail_fence  route
//!
//! analysis::ngram                          (n-grams, IC, repeats; standalone)
//! ```
//!
//! Every cipher is a struct built by a validating constructor and used
//! through the [`Cipher`] trait. Invalid keys fail with a [`CipherError`];
//! symbols ADFGVX cannot encode are skipped and reported to a
//! [`DiagnosticSink`] instead.
//!
//! # Examples
//!
//! Substitution keeps case and punctuation:
//!
//! ```
//! use classicrypt::{Affine, Caesar, Cipher};
//!
//! let caesar = Caesar::new(3);
//! assert_eq!(caesar.encrypt("The quick brown fox").unwrap(), "Wkh txlfn eurzq ira");
//!
//! let affine = Affine::new(5, 8).unwrap();
//! assert_eq!(affine.encrypt("affine cipher").unwrap(), "ihhwvc swfrcp");
//! assert!(Affine::new(4, 1).is_err());
//! ```
//!
//! Matrix and transposition ciphers:
//!
//! ```
//! use classicrypt::{Cipher, Hill, Myszkowski, RouteCipher, RouteConfig};
//!
//! let hill = Hill::from_array([[2, 3], [1, 4]]).unwrap();
//! assert_eq!(hill.encrypt("ATTACKATDAWN").unwrap(), "FYMTIQFYGDFW");
//!
//! let mysz = Myszkowski::new("TOMATO").unwrap();
//! let ct = mysz.encrypt("WEAREDISCOVEREDFLEEATONCE").unwrap();
//! assert_eq!(mysz.decrypt(&ct).unwrap(), "WEAREDISCOVEREDFLEEATONCE");
//!
//! let route = RouteCipher::new(RouteConfig::new(3, 3)).unwrap();
//! assert_eq!(route.encrypt("123456789").unwrap(), "123698745");
//! ```
//!
//! Collecting ADFGVX diagnostics instead of logging them:
//!
//! ```
//! use classicrypt::{Adfgvx, Diagnostic, PolybiusSquare};
//!
//! let square = PolybiusSquare::from_rows("AB", &["HE", "LO"]).unwrap();
//! let cipher = Adfgvx::with_square("KEY", square).unwrap();
//!
//! let mut events: Vec<Diagnostic> = Vec::new();
//! let ct = cipher.encrypt_with("HELLO!", &mut events);
//! assert!(events.is_empty());
//! assert_eq!(cipher.decrypt_with(&ct, &mut events), "HELLO");
//! ```

#![deny(clippy::all)]

pub mod adfgvx;
pub mod analysis;
pub mod cipher;
pub mod diagnostics;
pub mod error;
pub mod hill;
pub mod polyalphabetic;
pub mod polybius;
pub mod substitution;
pub mod transposition;
pub mod utils;

pub use adfgvx::{
    august_decrypt, august_decrypt_with_square, august_encrypt, august_encrypt_with_square,
    Adfgvx,
};
pub use analysis::{
    calculate_ic, find_repeated_ngrams, generate_ngrams, ngram_frequency, sort_by_frequency,
    RepeatWindow,
};
pub use cipher::Cipher;
pub use diagnostics::{Diagnostic, DiagnosticSink, TracingSink};
pub use error::{CipherError, ErrorKind};
pub use hill::{hill_decrypt, hill_encrypt, Hill};
pub use polyalphabetic::{
    autokey_decrypt, autokey_encrypt, beaufort_cipher, beaufort_decrypt, beaufort_encrypt,
    gronsfeld_decrypt, gronsfeld_encrypt, vigenere_decrypt, vigenere_encrypt, Autokey, Beaufort,
    Gronsfeld, Vigenere,
};
pub use polybius::PolybiusSquare;
pub use substitution::{
    affine_decrypt, affine_encrypt, atbash_decrypt, atbash_encrypt, caesar_decrypt,
    caesar_encrypt, Affine, Atbash, Caesar,
};
pub use transposition::{
    myszkowski_decrypt, myszkowski_encrypt, rail_fence_decrypt, rail_fence_encrypt,
    route_decrypt, route_encrypt, route_positions, Myszkowski, RailFence, Route, RouteCipher,
    RouteConfig, SpiralDirection,
};
