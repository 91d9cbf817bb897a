//! Error types for verification and benchmark runs.
//!
//! The resolvers themselves are total and never fail; everything here comes
//! from the harness around them.

use thiserror::Error;

/// Result type alias for harness operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    /// A variant disagrees with the reference resolver of its mapping family
    #[error("variant '{variant}' resolved {input:?} to {actual}, expected {expected}")]
    Mismatch {
        variant: &'static str,
        input: String,
        expected: i32,
        actual: i32,
    },

    /// No reference variant registered for a mapping family
    #[error("no reference variant '{0}' registered")]
    MissingReference(&'static str),

    #[error("algorithm '{name}' not found (available: {available})")]
    UnknownAlgorithm { name: String, available: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
