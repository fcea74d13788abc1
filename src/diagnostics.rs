//! Soft-failure reporting.
//!
//! Some transforms meet input they cannot map but should keep going: a
//! plaintext symbol missing from a Polybius square, or a coordinate pair that
//! names no cell. Those events are not errors. They are delivered to a
//! [`DiagnosticSink`] and the transform continues without them.
//!
//! Two sinks ship with the crate: [`TracingSink`] forwards every event to
//! `tracing` at `WARN` level, and `Vec<Diagnostic>` collects them so callers
//! (and tests) can inspect exactly what was skipped.

use std::fmt;

/// A symbol-level event that was skipped during a transform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A plaintext symbol has no cell in the Polybius square.
    SymbolNotInSquare {
        /// The skipped symbol.
        symbol: char,
        /// Offset of the symbol in the sanitised plaintext.
        position: usize,
    },
    /// A coordinate pair uses a character that is not an axis label.
    UnknownCoordinates {
        /// Row label read from the ciphertext.
        row: char,
        /// Column label read from the ciphertext.
        col: char,
    },
    /// The fractionated stream ended on half a coordinate pair.
    DanglingCoordinate {
        /// The unpaired label.
        label: char,
    },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::SymbolNotInSquare { symbol, position } => write!(
                f,
                "character '{}' at {} not found in Polybius square and was skipped",
                symbol, position
            ),
            Diagnostic::UnknownCoordinates { row, col } => {
                write!(f, "invalid Polybius coordinates: {}{}", row, col)
            }
            Diagnostic::DanglingCoordinate { label } => {
                write!(f, "incomplete coordinate pair '{}' was discarded", label)
            }
        }
    }
}

/// Receiver for [`Diagnostic`] events.
pub trait DiagnosticSink {
    /// Records one skipped event.
    fn report(&mut self, diagnostic: Diagnostic);
}

/// Sink that logs every event through `tracing::warn!`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        tracing::warn!(event = ?diagnostic, "{}", diagnostic);
    }
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    fn report(&mut self, diagnostic: Diagnostic) {
        (**self).report(diagnostic);
    }
}
