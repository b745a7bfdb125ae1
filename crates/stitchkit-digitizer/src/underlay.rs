//! Structural underlay generation.
//!
//! Underlay stabilises the fabric and anchors the face stitches. Which kind
//! is laid depends on the main stitch type: narrow satin columns get a
//! center-line run along the spine, wide ones a sparse zig-zag pass inset
//! from the rails, and tatami fills an edge-walk run just inside every
//! contour of the region. Running stitches carry no underlay.

use stitchkit_core::config::{DigitizeConfig, StitchStyle};
use stitchkit_core::stitch::Stitch;
use stitchkit_core::types::Point;

use crate::geometry::{
    ensure_clockwise, offset_polygon, point_in_polygon, simplify_path, SIMPLIFY_TOLERANCE_MM,
};
use crate::running::generate_running;
use crate::satin::generate_satin;

/// Satin columns narrower than this get a center-line underlay instead of a
/// zig-zag pass.
const CENTER_LINE_WIDTH_MM: f64 = 2.0;

/// The zig-zag underlay rails sit this far inside the face rails.
const ZIGZAG_INSET_MM: f64 = 0.4;

/// Spine step of the zig-zag underlay.
const ZIGZAG_DENSITY_MM: f64 = 2.0;

/// Edge-walk underlay runs this far inside the fill contour.
const EDGE_WALK_INSET_MM: f64 = 0.6;

/// Generates the structural underlay for one path, or nothing when underlay
/// is disabled or the stitch type does not use one.
pub fn generate_underlay(path: &[Point], config: &DigitizeConfig) -> Vec<Stitch> {
    if !config.enable_underlay {
        return Vec::new();
    }

    let stitches = match config.stitch_type {
        StitchStyle::Running => Vec::new(),
        StitchStyle::Satin => {
            if config.satin_column_width_mm < CENTER_LINE_WIDTH_MM {
                generate_running(path, config)
            } else {
                let half_width =
                    config.satin_column_width_mm / 2.0 + config.pull_compensation_mm / 2.0;
                let underlay_config = DigitizeConfig {
                    satin_column_width_mm: 2.0 * (half_width - ZIGZAG_INSET_MM),
                    density_mm: ZIGZAG_DENSITY_MM,
                    pull_compensation_mm: 0.0,
                    ..config.clone()
                };
                generate_satin(path, &underlay_config)
            }
        }
        StitchStyle::Tatami => edge_walk(path, -EDGE_WALK_INSET_MM, config),
    };

    stitches.into_iter().map(Stitch::structural).collect()
}

/// Generates the structural underlay for a whole fill region: an edge walk
/// along every contour, joined by frame moves. Hole boundaries are walked
/// on the fabric side of their edge.
pub fn generate_region_underlay(polygons: &[Vec<Point>], config: &DigitizeConfig) -> Vec<Stitch> {
    if !config.enable_underlay {
        return Vec::new();
    }

    let mut stitches: Vec<Stitch> = Vec::new();
    for (index, contour) in polygons.iter().enumerate() {
        let inset = if is_hole(polygons, index) {
            EDGE_WALK_INSET_MM
        } else {
            -EDGE_WALK_INSET_MM
        };
        let pass: Vec<Stitch> = edge_walk(contour, inset, config)
            .into_iter()
            .map(Stitch::structural)
            .collect();
        let Some(first) = pass.first() else {
            continue;
        };
        if !stitches.is_empty() {
            stitches.push(Stitch::jump(first.x, first.y));
        }
        stitches.extend(pass);
    }
    stitches
}

fn edge_walk(contour: &[Point], inset: f64, config: &DigitizeConfig) -> Vec<Stitch> {
    let walk = offset_polygon(&ensure_clockwise(contour), inset);
    generate_running(&simplify_path(&walk, SIMPLIFY_TOLERANCE_MM), config)
}

/// A contour nested inside an odd number of the region's other contours
/// bounds a hole under the even-odd rule.
fn is_hole(polygons: &[Vec<Point>], index: usize) -> bool {
    let Some(probe) = polygons[index].first() else {
        return false;
    };
    let mut depth = 0;
    for (i, other) in polygons.iter().enumerate() {
        if i != index && point_in_polygon(probe.x, probe.y, other) {
            depth += 1;
        }
    }
    depth % 2 == 1
}
