//! Error types for vernorm
//!
//! Normalization and classification are total and never fail. Errors only
//! surface at the edges: parsing a stability label, and the I/O done by
//! front ends built on this crate.

use thiserror::Error;

/// vernorm error types
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A label that is not one of the five stability levels
    #[error("Unknown stability: {0:?} (expected one of dev, alpha, beta, RC, stable)")]
    UnknownStability(String),

    /// Reading input or writing output failed
    #[error("I/O error: {0}")]
    Io(String),

    /// Output could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e.to_string())
    }
}

/// Result type alias for vernorm operations
pub type Result<T> = std::result::Result<T, Error>;
