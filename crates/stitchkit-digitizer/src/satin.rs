//! Satin stitch generation: a mitered twin-rail column following a spine.
//!
//! The spine is resampled at the stitch density, rails are projected out to
//! half the column width along the corner bisector, and each crossing lays
//! thread from one rail to the other. Sharp bends shorten the inner rail to
//! avoid thread pile-up, and long crossings are split with a cycling lateral
//! shift so the split points do not line up into visible "railroad" tracks.

use stitchkit_core::config::DigitizeConfig;
use stitchkit_core::stitch::{Stitch, StitchKind};
use stitchkit_core::types::Point;
use tracing::debug;

use crate::geometry::resample_path;

/// Fallback crossing split length when the configured maximum is
/// non-positive.
pub const DEFAULT_SATIN_MAX_MM: f64 = 7.0;

/// Miter length never exceeds this multiple of the half-width.
const MITER_LIMIT: f64 = 3.0;

/// A rail edge this much shorter than its opposite counts as the inside of
/// a sharp bend...
const SHORT_EDGE_RATIO: f64 = 0.6;
/// ...but only when it is also shorter than this absolute length.
const SHORT_EDGE_MM: f64 = 0.4;
/// How far a shortened rail endpoint moves toward the opposite rail.
const SHORT_EDGE_PULL: f64 = 0.3;

/// Lateral shift pattern applied to split crossings, cycling per
/// penetration index.
const RAILROAD_SHIFTS: [f64; 3] = [0.0, 0.5, -0.5];
/// Cap on the anti-railroading shift in millimetres.
const RAILROAD_SHIFT_MAX_MM: f64 = 2.0;

/// Generates a satin column along the given spine.
///
/// Spines with fewer than two points are degenerate and yield no stitches.
pub fn generate_satin(spine: &[Point], config: &DigitizeConfig) -> Vec<Stitch> {
    if spine.len() < 2 {
        debug!(points = spine.len(), "satin spine degenerate, skipping");
        return Vec::new();
    }

    let samples = resample_path(spine, config.density_mm);
    let n = samples.len();
    if n < 2 {
        return Vec::new();
    }

    let half_width =
        config.satin_column_width_mm / 2.0 + config.pull_compensation_mm / 2.0;
    let max_len = if config.max_stitch_length_mm > 0.0 {
        config.max_stitch_length_mm
    } else {
        DEFAULT_SATIN_MAX_MM
    };

    let (mut left, mut right) = project_rails(&samples, half_width);
    shorten_sharp_bends(&mut left, &mut right);

    let mut stitches = Vec::with_capacity(2 * n);
    for i in 0..n {
        emit_crossing(&mut stitches, left[i], right[i], i, max_len);
    }
    stitches
}

/// Projects the left and right rail for each spine sample.
fn project_rails(samples: &[Point], half_width: f64) -> (Vec<Point>, Vec<Point>) {
    let n = samples.len();
    let mut left = Vec::with_capacity(n);
    let mut right = Vec::with_capacity(n);

    for i in 0..n {
        let curr = samples[i];
        // Mirror a virtual neighbour past each end so the end tangents hold.
        let prev = if i == 0 {
            mirror(samples[1], curr)
        } else {
            samples[i - 1]
        };
        let next = if i == n - 1 {
            mirror(samples[n - 2], curr)
        } else {
            samples[i + 1]
        };

        let (t1x, t1y) = unit(prev, curr);
        let (t2x, t2y) = unit(curr, next);
        let (n1x, n1y) = (-t1y, t1x);

        let sx = t1x + t2x;
        let sy = t1y + t2y;
        let sum_len = (sx * sx + sy * sy).sqrt();

        let (mx, my, miter_len) = if sum_len < 1e-3 {
            // Degenerate hairpin corner: fall back to the incoming normal.
            (n1x, n1y, half_width)
        } else {
            let bx = sx / sum_len;
            let by = sy / sum_len;
            // Perpendicular of the bisector tangent.
            let mx = -by;
            let my = bx;
            let denom = (mx * n1x + my * n1y).abs().max(0.1);
            let miter_len = (half_width / denom).min(MITER_LIMIT * half_width);
            (mx, my, miter_len)
        };

        left.push(Point::new(curr.x + mx * miter_len, curr.y + my * miter_len));
        right.push(Point::new(curr.x - mx * miter_len, curr.y - my * miter_len));
    }
    (left, right)
}

/// Pulls the inner rail of sharp bends toward the outer rail on odd
/// penetrations, so consecutive penetrations do not stack on the inside of
/// a tight curve.
fn shorten_sharp_bends(left: &mut [Point], right: &mut [Point]) {
    for i in (1..left.len()).step_by(2) {
        let d_left = left[i].distance_to(&left[i - 1]);
        let d_right = right[i].distance_to(&right[i - 1]);

        if d_left < SHORT_EDGE_RATIO * d_right && d_left < SHORT_EDGE_MM {
            left[i] = Point::new(
                left[i].x + (right[i].x - left[i].x) * SHORT_EDGE_PULL,
                left[i].y + (right[i].y - left[i].y) * SHORT_EDGE_PULL,
            );
        } else if d_right < SHORT_EDGE_RATIO * d_left && d_right < SHORT_EDGE_MM {
            right[i] = Point::new(
                right[i].x + (left[i].x - right[i].x) * SHORT_EDGE_PULL,
                right[i].y + (left[i].y - right[i].y) * SHORT_EDGE_PULL,
            );
        }
    }
}

/// Emits one rail-to-rail crossing, splitting it when it exceeds the
/// maximum stitch length.
fn emit_crossing(out: &mut Vec<Stitch>, left: Point, right: Point, index: usize, max_len: f64) {
    out.push(Stitch::new(left.x, left.y, StitchKind::Stitch));

    let crossing = left.distance_to(&right);
    if crossing > max_len {
        let splits = (crossing / max_len).ceil() as usize;
        let shift_mm =
            RAILROAD_SHIFTS[index % 3] * (max_len - crossing / splits as f64 - 0.1).min(RAILROAD_SHIFT_MAX_MM);
        let shift_t = shift_mm / crossing;
        for j in 1..splits {
            let t = j as f64 / splits as f64 + shift_t;
            out.push(Stitch::new(
                left.x + (right.x - left.x) * t,
                left.y + (right.y - left.y) * t,
                StitchKind::Stitch,
            ));
        }
    }

    out.push(Stitch::new(right.x, right.y, StitchKind::Stitch));
}

fn mirror(p: Point, about: Point) -> Point {
    Point::new(2.0 * about.x - p.x, 2.0 * about.y - p.y)
}

fn unit(from: Point, to: Point) -> (f64, f64) {
    let dx = to.x - from.x;
    let dy = to.y - from.y;
    let len = (dx * dx + dy * dy).sqrt();
    if len < 1e-12 {
        return (0.0, 0.0);
    }
    (dx / len, dy / len)
}
