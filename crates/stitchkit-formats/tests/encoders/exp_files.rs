//! EXP writer round-trips and byte-level checks.

use stitchkit_core::stitch::{Stitch, StitchKind};
use stitchkit_formats::encode_exp;

use crate::decode::{absolute_stitch_positions, decode_exp, Motion};

fn face(x: f64, y: f64) -> Stitch {
    Stitch::new(x, y, StitchKind::Stitch)
}

#[test]
fn oversize_jump_seed() {
    // 15mm east from the origin: 150 units, split 120 + 30.
    let bytes = encode_exp(&[Stitch::jump(15.0, 0.0)]).unwrap();
    assert_eq!(bytes, vec![0x80, 0x04, 0x78, 0x00, 0x80, 0x04, 0x1E, 0x00]);
}

#[test]
fn decoding_reproduces_quantized_positions() {
    let stitches = vec![
        face(0.0, 0.0),
        face(2.5, 2.5),
        face(-13.0, 0.45),
        Stitch::trim(-13.0, 0.45),
        Stitch::jump(30.0, -30.0),
        face(30.4, -30.0),
        Stitch::end(30.4, -30.0),
    ];
    let bytes = encode_exp(&stitches).unwrap();
    let motions = decode_exp(&bytes);

    let expected: Vec<(i32, i32)> = stitches
        .iter()
        .filter(|s| s.kind == StitchKind::Stitch)
        .map(|s| ((s.x * 10.0).round() as i32, (s.y * 10.0).round() as i32))
        .collect();
    assert_eq!(absolute_stitch_positions(&motions), expected);
}

#[test]
fn stream_has_no_header_or_padding() {
    let bytes = encode_exp(&[face(1.0, 0.0), Stitch::end(1.0, 0.0)]).unwrap();
    // One stitch record and one stop, nothing else.
    assert_eq!(bytes.len(), 2 + 4);
    assert_eq!(&bytes[2..], &[0x80, 0x01, 0x00, 0x00]);
}

#[test]
fn trim_then_jump_sequence() {
    let stitches = vec![
        face(0.0, 0.0),
        Stitch::trim(0.0, 0.0),
        Stitch::jump(5.0, 0.0),
        face(5.5, 0.0),
        Stitch::end(5.5, 0.0),
    ];
    let bytes = encode_exp(&stitches).unwrap();
    let motions = decode_exp(&bytes);

    let jumps = motions
        .iter()
        .filter(|m| matches!(m, Motion::Jump(_, _)))
        .count();
    // Three zero-length trim jumps plus the real frame move.
    assert_eq!(jumps, 4);
    assert_eq!(absolute_stitch_positions(&motions), vec![(0, 0), (55, 0)]);
}

#[test]
fn color_change_mid_stream() {
    let stitches = vec![
        face(0.0, 0.0),
        Stitch::color_change(0.0, 0.0),
        face(-1.2, 3.4),
        Stitch::end(-1.2, 3.4),
    ];
    let bytes = encode_exp(&stitches).unwrap();
    let motions = decode_exp(&bytes);
    assert_eq!(
        motions,
        vec![
            Motion::Stitch(0, 0),
            Motion::Stop,
            Motion::Stitch(-12, 34),
            Motion::Stop,
        ]
    );
}
