//! # stitchkit-core
//!
//! Core types for the stitchkit embroidery toolkit: stitch records, design
//! input layers, the digitizing option bundle, machine unit conversion, and
//! the error types shared across the workspace.
//!
//! The heavier layers build on this vocabulary:
//!
//! 1. **stitchkit-digitizer** - geometry kernel, stitch generators, composer
//! 2. **stitchkit-formats** - Tajima DST and Melco EXP binary writers
//! 3. **stitchkit** - integration facade and CLI

pub mod config;
pub mod error;
pub mod stitch;
pub mod types;
pub mod units;

pub use config::{DesignStyle, DigitizeConfig, StitchStyle};
pub use error::{DigitizeError, EncodeError, Error, Result};
pub use stitch::{Stitch, StitchKind, StitchStats};
pub use types::{DesignFile, Point, VectorLayer};
pub use units::{from_units, to_units, MAX_COORD_UNITS, UNITS_PER_MM};
