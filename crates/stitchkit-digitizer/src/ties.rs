//! Thread locking and stitch cleanup.
//!
//! Tie-in and tie-off lay a short lateral backtrack that locks the thread
//! at the start and end of every path; the tie-off is followed by a trim so
//! the frame can move away cleanly. Small-stitch removal collapses
//! penetrations too close together to embroider, while preserving the
//! zero-length backtrack stitches that carry the lock.

use stitchkit_core::stitch::{Stitch, StitchKind};

/// Lateral backtrack distance of the tie stitches.
const TIE_BACKTRACK_MM: f64 = 0.5;

/// Stitches closer than this to their predecessor are coincident, not
/// small, and are kept.
const COINCIDENT_MM: f64 = 0.01;

/// Prepends the tie-in backtrack: a stitch half a millimetre beside the
/// path start, then one back on it. Skipped when the path starts with a
/// non-penetrating record.
pub fn tie_in(stitches: &mut Vec<Stitch>) {
    let Some(first) = stitches.first() else {
        return;
    };
    if matches!(first.kind, StitchKind::Jump | StitchKind::End) {
        return;
    }
    let (x, y) = (first.x, first.y);
    stitches.splice(
        0..0,
        [
            Stitch::new(x + TIE_BACKTRACK_MM, y, StitchKind::Stitch).structural(),
            Stitch::new(x, y, StitchKind::Stitch).structural(),
        ],
    );
}

/// Appends the tie-off backtrack and the trailing trim. Skipped when the
/// path ends with a non-penetrating record.
pub fn tie_off(stitches: &mut Vec<Stitch>) {
    let Some(last) = stitches.last() else {
        return;
    };
    if matches!(last.kind, StitchKind::Jump | StitchKind::End) {
        return;
    }
    let (x, y) = (last.x, last.y);
    stitches.push(Stitch::new(x - TIE_BACKTRACK_MM, y, StitchKind::Stitch).structural());
    stitches.push(Stitch::new(x, y, StitchKind::Stitch).structural());
    stitches.push(Stitch::trim(x, y));
}

/// Drops penetrations closer than the minimum stitch length to the previous
/// kept record, unless they are coincident with it. Non-penetrating records
/// and the first record always survive.
pub fn remove_small_stitches(stitches: Vec<Stitch>, min_length_mm: f64) -> Vec<Stitch> {
    let mut kept: Vec<Stitch> = Vec::with_capacity(stitches.len());
    for stitch in stitches {
        if let Some(prev) = kept.last() {
            if stitch.kind == StitchKind::Stitch {
                let d = prev.distance_to(&stitch);
                if d > COINCIDENT_MM && d < min_length_mm {
                    continue;
                }
            }
        }
        kept.push(stitch);
    }
    kept
}
