//! # stitchkit
//!
//! An embroidery digitizing toolkit that turns layered 2D vector art into
//! industrial machine stitch files.
//!
//! ## Architecture
//!
//! stitchkit is organized as a workspace with multiple crates:
//!
//! 1. **stitchkit-core** - stitch records, design layers, configuration,
//!    units, errors
//! 2. **stitchkit-digitizer** - geometry kernel, running/satin/tatami
//!    generators, underlay, ties, layer composer
//! 3. **stitchkit-formats** - Tajima DST and Melco EXP writers
//! 4. **stitchkit** - this crate: integration facade and CLI
//!
//! ## Usage
//!
//! ```rust,ignore
//! use stitchkit::{digitize, encode_dst, DigitizeConfig, VectorLayer};
//!
//! let stitches = digitize(&layers, &DigitizeConfig::default())?;
//! let bytes = encode_dst(&stitches, "MYDESIGN")?;
//! std::fs::write("design.dst", bytes)?;
//! ```

pub use stitchkit_core::{
    DesignFile, DesignStyle, DigitizeConfig, DigitizeError, EncodeError, Error, Point, Result,
    Stitch, StitchKind, StitchStats, StitchStyle, VectorLayer,
};
pub use stitchkit_digitizer::{
    digitize, generate_region_underlay, generate_running, generate_satin, generate_tatami,
    generate_underlay, offset_polygon, resample_path, sequence_polygons, simplify_path,
};
pub use stitchkit_formats::{encode_dst, encode_exp};

/// Initializes tracing with an environment-driven filter, defaulting to
/// INFO.
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    tracing_subscriber::registry()
        .with(fmt::layer().with_target(true).with_level(true))
        .with(env_filter)
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to initialize logging: {}", e))?;

    Ok(())
}
