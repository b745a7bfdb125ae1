//! Running stitch generation: a single row of stitches along a path.

use stitchkit_core::config::DigitizeConfig;
use stitchkit_core::stitch::{Stitch, StitchKind};
use stitchkit_core::types::Point;
use tracing::debug;

use crate::geometry::dedupe_points;

/// Fallback split length when the configured maximum is non-positive.
pub const DEFAULT_RUN_STITCH_MM: f64 = 2.5;

/// Adjacent input points closer than this are collapsed before stitching.
const DEDUPE_TOLERANCE_MM: f64 = 0.01;

/// Generates a running stitch along the given polyline.
///
/// Segments longer than the maximum stitch length are split into equal
/// sub-segments. Paths that collapse to fewer than two distinct points are
/// degenerate and yield no stitches.
pub fn generate_running(path: &[Point], config: &DigitizeConfig) -> Vec<Stitch> {
    let cleaned = dedupe_points(path, DEDUPE_TOLERANCE_MM);
    if cleaned.len() < 2 {
        debug!(points = path.len(), "running path degenerate, skipping");
        return Vec::new();
    }

    let max_len = if config.max_stitch_length_mm > 0.0 {
        config.max_stitch_length_mm
    } else {
        DEFAULT_RUN_STITCH_MM
    };

    let mut stitches = vec![Stitch::new(cleaned[0].x, cleaned[0].y, StitchKind::Stitch)];
    for window in cleaned.windows(2) {
        let a = window[0];
        let b = window[1];
        let d = a.distance_to(&b);
        if d <= max_len {
            stitches.push(Stitch::new(b.x, b.y, StitchKind::Stitch));
        } else {
            let splits = (d / max_len).ceil() as usize;
            for j in 1..=splits {
                let t = j as f64 / splits as f64;
                stitches.push(Stitch::new(
                    a.x + (b.x - a.x) * t,
                    a.y + (b.y - a.y) * t,
                    StitchKind::Stitch,
                ));
            }
        }
    }
    stitches
}
