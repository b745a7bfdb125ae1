//! Tajima DST stitch file writer.
//!
//! A DST file is a 512-byte space-padded ASCII header followed by 3-byte
//! body records. Each record carries a signed (dx, dy) step of at most 121
//! units (12.1 mm) encoded in Tajima's interleaved weighted-bit table, plus
//! jump/stop control flags in the last byte. Steps too large for one record
//! are split across repeated jump records. Positions are relative; the
//! header's bounding box and counters use absolute positions.

use stitchkit_core::stitch::{Stitch, StitchKind};
use stitchkit_core::units::{from_units, to_units, MAX_COORD_UNITS};
use tracing::debug;

use crate::error::{EncodeError, FormatResult};

/// Largest per-record step in 0.1mm units.
pub const MAX_STEP_UNITS: i32 = 121;

/// Header size in bytes.
pub const HEADER_LEN: usize = 512;

/// Design label when the caller does not provide one.
pub const DEFAULT_LABEL: &str = "STITCHKIT";

/// Ternary step weights, largest first, shared by both axes.
const WEIGHTS: [i32; 5] = [81, 27, 9, 3, 1];

/// Bit positions as (byte, bit) pairs for the positive and negative weight
/// of each [`WEIGHTS`] entry, for the Y axis.
const Y_BITS: [((usize, u8), (usize, u8)); 5] = [
    ((2, 2), (2, 3)), // +/-81
    ((1, 5), (1, 4)), // +/-27
    ((0, 2), (0, 3)), // +/-9
    ((1, 7), (1, 6)), // +/-3
    ((0, 0), (0, 1)), // +/-1
];

/// Same layout mirrored into the X half-bytes.
const X_BITS: [((usize, u8), (usize, u8)); 5] = [
    ((2, 4), (2, 5)), // +/-81
    ((1, 1), (1, 0)), // +/-27
    ((0, 5), (0, 4)), // +/-9
    ((1, 3), (1, 2)), // +/-3
    ((0, 7), (0, 6)), // +/-1
];

/// Jump flag on the final record byte.
const FLAG_JUMP: u8 = 0x80;
/// Stop flag on the final record byte. Stops and the terminator also set
/// the jump bit.
const FLAG_STOP: u8 = 0x40;

#[derive(Clone, Copy, PartialEq)]
enum RecordKind {
    Normal,
    Jump,
    Stop,
}

/// Encodes a stitch sequence into a complete DST file.
pub fn encode_dst(stitches: &[Stitch], label: &str) -> FormatResult<Vec<u8>> {
    let targets = quantize(stitches)?;

    let mut body = Vec::with_capacity(3 * targets.len() + 3);
    let mut x = 0i32;
    let mut y = 0i32;
    let mut color_changes = 0usize;

    for &(tx, ty, kind) in &targets {
        if kind == StitchKind::End {
            break;
        }
        let mut dx = tx - x;
        let mut dy = ty - y;

        // Oversize steps become repeated jumps until the residual fits.
        while dx.abs() > MAX_STEP_UNITS || dy.abs() > MAX_STEP_UNITS {
            let sx = dx.clamp(-MAX_STEP_UNITS, MAX_STEP_UNITS);
            let sy = dy.clamp(-MAX_STEP_UNITS, MAX_STEP_UNITS);
            body.extend_from_slice(&encode_record(sx, sy, RecordKind::Jump));
            dx -= sx;
            dy -= sy;
        }

        let record_kind = match kind {
            StitchKind::Stitch => RecordKind::Normal,
            // DST has no trim opcode of its own; a cut is signalled the way
            // machines expect it, as a jump.
            StitchKind::Jump | StitchKind::Trim => RecordKind::Jump,
            StitchKind::ColorChange => {
                color_changes += 1;
                RecordKind::Stop
            }
            StitchKind::End => unreachable!("end handled above"),
        };
        body.extend_from_slice(&encode_record(dx, dy, record_kind));
        x = tx;
        y = ty;
    }

    // Stream terminator: zero delta with both control bits set.
    body.extend_from_slice(&[0x00, 0x00, FLAG_JUMP | FLAG_STOP]);

    let record_count = body.len() / 3;
    debug!(records = record_count, color_changes, "dst body encoded");

    let header = encode_header(label, record_count, color_changes, &targets);
    let mut file = Vec::with_capacity(HEADER_LEN + body.len());
    file.extend_from_slice(&header);
    file.extend_from_slice(&body);
    Ok(file)
}

/// Quantizes stitch positions to machine units, rejecting positions the
/// header's five-digit fields cannot carry.
fn quantize(stitches: &[Stitch]) -> FormatResult<Vec<(i32, i32, StitchKind)>> {
    let limit_mm = from_units(MAX_COORD_UNITS);
    stitches
        .iter()
        .map(|s| {
            let x = to_units(s.x);
            let y = to_units(s.y);
            if x.abs() > MAX_COORD_UNITS {
                return Err(EncodeError::CoordinateOverflow {
                    axis: 'X',
                    position_mm: s.x,
                    limit_mm,
                });
            }
            if y.abs() > MAX_COORD_UNITS {
                return Err(EncodeError::CoordinateOverflow {
                    axis: 'Y',
                    position_mm: s.y,
                    limit_mm,
                });
            }
            Ok((x, y, s.kind))
        })
        .collect()
}

/// Packs one signed step pair and control flags into a 3-byte record.
fn encode_record(dx: i32, dy: i32, kind: RecordKind) -> [u8; 3] {
    let mut bytes = [0u8; 3];
    decompose(dx, &X_BITS, &mut bytes);
    decompose(dy, &Y_BITS, &mut bytes);
    match kind {
        RecordKind::Normal => {}
        RecordKind::Jump => bytes[2] |= FLAG_JUMP,
        RecordKind::Stop => bytes[2] |= FLAG_JUMP | FLAG_STOP,
    }
    bytes
}

/// Greedy balanced-ternary decomposition, largest weight first. Exact for
/// every step in [-121, 121].
fn decompose(mut value: i32, bits: &[((usize, u8), (usize, u8)); 5], bytes: &mut [u8; 3]) {
    debug_assert!(value.abs() <= MAX_STEP_UNITS);
    for (i, &weight) in WEIGHTS.iter().enumerate() {
        let ((pos_byte, pos_bit), (neg_byte, neg_bit)) = bits[i];
        if value >= (weight + 1) / 2 {
            bytes[pos_byte] |= 1 << pos_bit;
            value -= weight;
        } else if value <= -(weight + 1) / 2 {
            bytes[neg_byte] |= 1 << neg_bit;
            value += weight;
        }
    }
    debug_assert_eq!(value, 0);
}

/// Builds the fixed-layout 512-byte header.
fn encode_header(
    label: &str,
    record_count: usize,
    color_changes: usize,
    targets: &[(i32, i32, StitchKind)],
) -> [u8; HEADER_LEN] {
    let mut max_x = 0i32;
    let mut min_x = 0i32;
    let mut max_y = 0i32;
    let mut min_y = 0i32;
    for &(x, y, _) in targets {
        max_x = max_x.max(x);
        min_x = min_x.min(x);
        max_y = max_y.max(y);
        min_y = min_y.min(y);
    }

    let mut header = [0x20u8; HEADER_LEN];
    let mut put = |offset: usize, text: String| {
        header[offset..offset + text.len()].copy_from_slice(text.as_bytes());
    };

    let mut label: String = label.chars().take(16).collect();
    if label.is_empty() {
        label = DEFAULT_LABEL.to_string();
    }
    put(0, format!("LA:{:<16}", label));
    put(23, format!("ST:{:07}", record_count));
    put(39, format!("CO:{:03}", color_changes));
    put(54, format!("+X:{:05}", max_x));
    put(69, format!("-X:{:05}", -min_x));
    put(84, format!("+Y:{:05}", max_y));
    put(99, format!("-Y:{:05}", -min_y));
    put(114, "AX:+00000".to_string());
    put(129, "AY:+00000".to_string());
    put(144, "MX:+00000".to_string());
    put(159, "MY:+00000".to_string());
    put(174, "PD:******".to_string());
    header
}
