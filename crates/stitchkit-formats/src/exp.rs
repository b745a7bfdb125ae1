//! Melco EXP stitch file writer.
//!
//! EXP is a headerless stream of relative records in 0.1mm units. Plain
//! stitches are two signed bytes; control operations are announced by a
//! 0x80 prefix byte. Steps beyond +/-120 units are split across repeated
//! records of clamped magnitude.

use stitchkit_core::stitch::{Stitch, StitchKind};
use stitchkit_core::units::to_units;
use tracing::debug;

use crate::error::FormatResult;

/// Largest per-record step in 0.1mm units.
pub const MAX_STEP_UNITS: i32 = 120;

/// Control prefix byte.
const CONTROL: u8 = 0x80;
/// Control code for a frame move without penetration.
const CODE_JUMP: u8 = 0x04;
/// Control code for a machine stop (color change, end of design).
const CODE_STOP: u8 = 0x01;

/// Number of zero-length jumps that signal a thread cut.
const TRIM_JUMP_COUNT: usize = 3;

/// Encodes a stitch sequence into an EXP byte stream.
pub fn encode_exp(stitches: &[Stitch]) -> FormatResult<Vec<u8>> {
    let mut out = Vec::with_capacity(2 * stitches.len());
    let mut x = 0i32;
    let mut y = 0i32;

    for stitch in stitches {
        let tx = to_units(stitch.x);
        let ty = to_units(stitch.y);
        let mut dx = tx - x;
        let mut dy = ty - y;

        match stitch.kind {
            StitchKind::Stitch => {
                while dx.abs() > MAX_STEP_UNITS || dy.abs() > MAX_STEP_UNITS {
                    let sx = dx.clamp(-MAX_STEP_UNITS, MAX_STEP_UNITS);
                    let sy = dy.clamp(-MAX_STEP_UNITS, MAX_STEP_UNITS);
                    push_stitch(&mut out, sx, sy);
                    dx -= sx;
                    dy -= sy;
                }
                push_stitch(&mut out, dx, dy);
                x = tx;
                y = ty;
            }
            StitchKind::Jump => {
                while dx.abs() > MAX_STEP_UNITS || dy.abs() > MAX_STEP_UNITS {
                    let sx = dx.clamp(-MAX_STEP_UNITS, MAX_STEP_UNITS);
                    let sy = dy.clamp(-MAX_STEP_UNITS, MAX_STEP_UNITS);
                    push_jump(&mut out, sx, sy);
                    dx -= sx;
                    dy -= sy;
                }
                push_jump(&mut out, dx, dy);
                x = tx;
                y = ty;
            }
            StitchKind::Trim => {
                // A cut is three zero-length jumps; the position does not
                // move.
                for _ in 0..TRIM_JUMP_COUNT {
                    push_jump(&mut out, 0, 0);
                }
            }
            StitchKind::ColorChange | StitchKind::End => {
                out.extend_from_slice(&[CONTROL, CODE_STOP, 0x00, 0x00]);
            }
        }
    }

    debug!(bytes = out.len(), "exp stream encoded");
    Ok(out)
}

fn push_stitch(out: &mut Vec<u8>, dx: i32, dy: i32) {
    out.push(dx as i8 as u8);
    out.push(dy as i8 as u8);
}

fn push_jump(out: &mut Vec<u8>, dx: i32, dy: i32) {
    out.extend_from_slice(&[CONTROL, CODE_JUMP, dx as i8 as u8, dy as i8 as u8]);
}
