//! Tatami fill generation: parallel rows of stitches with brick-offset
//! penetrations.
//!
//! The region is offset outward for pull compensation, rotated so the fill
//! rows become horizontal, and swept with an even-odd scanline. Long row
//! segments are broken into bricks whose start offsets vary per row, so the
//! penetrations of adjacent rows do not align into visible ladders. Rows
//! alternate direction to keep the needle path short.

use stitchkit_core::config::DigitizeConfig;
use stitchkit_core::stitch::{Stitch, StitchKind};
use stitchkit_core::types::Point;
use tracing::debug;

use crate::geometry::{ensure_clockwise, offset_polygon, ring_of, rotate_point, ORIGIN};

/// Fallback segment cap when the configured maximum is non-positive.
pub const DEFAULT_TATAMI_MAX_MM: f64 = 7.0;

/// Horizontal step between brick penetrations.
const BRICK_STITCH_MM: f64 = 4.0;

/// Row segments shorter than this are skipped entirely.
const MIN_SEGMENT_MM: f64 = 0.5;

/// Row-to-row gaps above this connect with a jump instead of a stitch.
/// Part of the fill's contract, independent of the global trim threshold.
const ROW_JUMP_MM: f64 = 2.0;

/// Row-to-row gaps below this are duplicate penetrations and are dropped.
const ROW_DUPLICATE_MM: f64 = 0.1;

/// Edges flatter than this are parallel to the scanline and never
/// intersected.
const FLAT_EDGE_MM: f64 = 0.001;

/// An edge of the rotated region, stored bottom-up.
struct Edge {
    lo: Point,
    hi: Point,
}

/// Generates a tatami fill over the given closed polygons, treated as one
/// even-odd region.
pub fn generate_tatami(polygons: &[Vec<Point>], config: &DigitizeConfig) -> Vec<Stitch> {
    let max_len = if config.max_stitch_length_mm > 0.0 {
        config.max_stitch_length_mm
    } else {
        DEFAULT_TATAMI_MAX_MM
    };
    let angle = config.tatami_angle_deg;

    let mut edges = Vec::new();
    let mut min_y = f64::INFINITY;
    let mut max_y = f64::NEG_INFINITY;

    for polygon in polygons {
        if ring_of(polygon).len() < 3 {
            debug!(points = polygon.len(), "fill contour degenerate, skipping");
            continue;
        }
        let compensated =
            offset_polygon(&ensure_clockwise(polygon), config.pull_compensation_mm);
        let rotated: Vec<Point> = compensated
            .iter()
            .map(|&p| rotate_point(p, ORIGIN, -angle))
            .collect();

        let ring = ring_of(&rotated);
        for i in 0..ring.len() {
            let a = ring[i];
            let b = ring[(i + 1) % ring.len()];
            min_y = min_y.min(a.y);
            max_y = max_y.max(a.y);
            if (b.y - a.y).abs() < FLAT_EDGE_MM {
                continue;
            }
            let (lo, hi) = if a.y < b.y { (a, b) } else { (b, a) };
            edges.push(Edge { lo, hi });
        }
    }

    if edges.is_empty() {
        return Vec::new();
    }

    let mut stitches = Vec::new();
    let mut last: Option<Point> = None;

    let mut y = min_y + config.density_mm;
    while y <= max_y {
        let mut crossings: Vec<f64> = edges
            .iter()
            .filter(|e| e.lo.y <= y && y < e.hi.y)
            .map(|e| e.lo.x + (y - e.lo.y) * (e.hi.x - e.lo.x) / (e.hi.y - e.lo.y))
            .collect();
        crossings.sort_by(|a, b| a.partial_cmp(b).expect("finite scanline crossing"));

        let mut segments: Vec<Vec<f64>> = Vec::new();
        for pair in crossings.chunks(2) {
            if pair.len() < 2 {
                break;
            }
            let (x_start, x_end) = (pair[0], pair[1]);
            if x_end - x_start < MIN_SEGMENT_MM {
                continue;
            }
            segments.push(brick_penetrations(x_start, x_end, y, max_len));
        }

        // Boustrophedon sweep: even rows run right-to-left.
        if (y / config.density_mm).round() as i64 % 2 == 0 {
            segments.reverse();
            for segment in &mut segments {
                segment.reverse();
            }
        }

        for segment in &segments {
            emit_segment(&mut stitches, &mut last, segment, y, angle);
        }

        y += config.density_mm;
    }

    stitches
}

/// Penetration positions along one row segment.
///
/// Short segments get exactly their two endpoints. Longer ones are bricked:
/// regular steps from a per-row start offset, so penetrations stagger
/// between neighbouring rows.
fn brick_penetrations(x_start: f64, x_end: f64, y: f64, max_len: f64) -> Vec<f64> {
    let length = x_end - x_start;
    if length <= max_len {
        return vec![x_start, x_end];
    }

    let lattice = ((y * 10.0).round() as i64).rem_euclid(3) as f64 / 3.0;
    let offset = (lattice + row_noise(y)) * BRICK_STITCH_MM;

    let mut pens = vec![x_start];
    let mut x = x_start + offset;
    while x < x_end - 1e-9 {
        if x > x_start + 1e-9 {
            pens.push(x);
        }
        x += BRICK_STITCH_MM;
    }
    pens.push(x_end);
    pens
}

/// Deterministic per-row shift in [0, 0.4). Not a statistical RNG; its only
/// job is breaking up row-aligned penetration ladders while staying a pure
/// function of the row height.
fn row_noise(y: f64) -> f64 {
    let v = (y * 123.45).sin() * 10000.0;
    (v - v.floor()) * 0.4
}

/// Emits one row segment, connecting it to the previous penetration with a
/// jump, a stitch, or nothing depending on the gap.
fn emit_segment(
    out: &mut Vec<Stitch>,
    last: &mut Option<Point>,
    segment: &[f64],
    y: f64,
    angle: f64,
) {
    for (idx, &x) in segment.iter().enumerate() {
        let p = rotate_point(Point::new(x, y), ORIGIN, angle);
        if idx == 0 {
            match last {
                None => out.push(Stitch::jump(p.x, p.y)),
                Some(prev) => {
                    let gap = prev.distance_to(&p);
                    if gap > ROW_JUMP_MM {
                        out.push(Stitch::jump(p.x, p.y));
                    } else if gap > ROW_DUPLICATE_MM {
                        out.push(Stitch::new(p.x, p.y, StitchKind::Stitch));
                    } else {
                        // Coincident with the previous penetration.
                        continue;
                    }
                }
            }
        } else {
            out.push(Stitch::new(p.x, p.y, StitchKind::Stitch));
        }
        *last = Some(p);
    }
}
