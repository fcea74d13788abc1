//! Shared helpers used by the cipher modules.
//!
//! - [`alphabet`]: letter ↔ index mapping, case tracking, key sanitisation.
//! - [`modular`]: gcd, modular inverse, determinant and adjugate mod m.

pub mod alphabet;
pub mod modular;
