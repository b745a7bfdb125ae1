//! # stitchkit-digitizer
//!
//! Turns layered 2D vector art into an ordered embroidery stitch sequence.
//!
//! ## Core Components
//!
//! ### Geometry kernel
//! - **Offsetting**: mitered polygon offset for pull compensation and insets
//! - **Simplification**: Ramer-Douglas-Peucker path reduction
//! - **Resampling**: uniform arc-length sampling at stitch density
//! - **Sequencing**: nearest-join polygon ordering to cut frame travel
//!
//! ### Stitch generators
//! - **Running**: a single row of stitches along a path
//! - **Satin**: mitered twin-rail column following a spine
//! - **Tatami**: brick-offset parallel-row fill
//!
//! ### Structure
//! - **Underlay**: stabilising stitches below the visible face
//! - **Ties**: thread locks at path starts and ends, small-stitch cleanup
//! - **Composer**: per-layer assembly with jumps, trims and color changes
//!
//! ## Architecture
//!
//! ```text
//! VectorLayer[] + DigitizeConfig
//!   └── composer (per layer, per sequenced polygon)
//!         ├── underlay  (structural pass)
//!         ├── generator (running | satin | tatami)
//!         └── ties      (tie-in, tie-off, trim)
//!   └── cleanup (small-stitch removal) + end marker
//! Stitch[]
//! ```
//!
//! The pipeline is single-threaded, allocation-bounded by the stitch count,
//! and deterministic: the same layers and options always produce the same
//! sequence.

pub mod composer;
pub mod geometry;
pub mod running;
pub mod satin;
pub mod sequence;
pub mod tatami;
pub mod ties;
pub mod underlay;

pub use composer::digitize;
pub use geometry::{
    dedupe_points, offset_polygon, point_in_polygon, resample_path, rotate_point, signed_area,
    simplify_path, SIMPLIFY_TOLERANCE_MM,
};
pub use running::generate_running;
pub use satin::generate_satin;
pub use sequence::{rotate_to_start, sequence_polygons};
pub use tatami::generate_tatami;
pub use ties::{remove_small_stitches, tie_in, tie_off};
pub use underlay::{generate_region_underlay, generate_underlay};
