//! Error types for the stitch file writers.
//!
//! Encoding failures are coordinate-range violations surfaced as
//! [`EncodeError`] from stitchkit-core; this module adds the local result
//! alias the writers return.

pub use stitchkit_core::error::EncodeError;

/// Result type alias for encoder operations.
pub type FormatResult<T> = Result<T, EncodeError>;
