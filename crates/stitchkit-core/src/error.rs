//! Error handling for stitchkit.
//!
//! Provides error types for the two fallible layers of the toolkit:
//! - Digitizing errors (configuration and pipeline-level failures)
//! - Encoding errors (binary format constraints)
//!
//! All error types use `thiserror` for ergonomic error handling. Degenerate
//! geometry is not an error: generators recover locally by returning an
//! empty stitch list and the composer moves on.

use thiserror::Error;

/// Digitizing pipeline error type.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum DigitizeError {
    /// An option has a value the pipeline refuses to run with.
    #[error("Option '{option}' out of range: {value} ({reason})")]
    ConfigOutOfRange {
        /// The offending option name.
        option: String,
        /// The rejected value.
        value: f64,
        /// Why the value is rejected.
        reason: String,
    },

    /// The pipeline produced zero visible stitches.
    #[error("Design produced no visible stitches")]
    EmptyDesign,
}

/// Binary encoder error type.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EncodeError {
    /// A stitch position cannot be represented in the format's coordinate
    /// fields.
    #[error("Position {position_mm:.1}mm on {axis} exceeds the ±{limit_mm:.1}mm machine range")]
    CoordinateOverflow {
        /// The axis that overflowed ('X' or 'Y').
        axis: char,
        /// The offending position in millimetres.
        position_mm: f64,
        /// The representable limit in millimetres.
        limit_mm: f64,
    },
}

/// Main error type for stitchkit.
///
/// A unified error type that can represent any failure from digitizing
/// through file output. This is the primary error type used in public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// Digitizing error
    #[error(transparent)]
    Digitize(#[from] DigitizeError),

    /// Encoding error
    #[error(transparent)]
    Encode(#[from] EncodeError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a configuration error
    pub fn is_config_error(&self) -> bool {
        matches!(self, Error::Digitize(DigitizeError::ConfigOutOfRange { .. }))
    }

    /// Check if this is an encoding error
    pub fn is_encode_error(&self) -> bool {
        matches!(self, Error::Encode(_))
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
