//! DST writer round-trips and header checks.

use stitchkit_core::stitch::{Stitch, StitchKind};
use stitchkit_formats::dst::HEADER_LEN;
use stitchkit_formats::encode_dst;

use crate::decode::{absolute_stitch_positions, decode_dst_body, Motion};

fn face(x: f64, y: f64) -> Stitch {
    Stitch::new(x, y, StitchKind::Stitch)
}

#[test]
fn bounds_header_seed() {
    let stitches = vec![face(0.0, 0.0), face(5.0, -3.2), Stitch::end(5.0, -3.2)];
    let file = encode_dst(&stitches, "SEED").unwrap();

    let text = |offset: usize, len: usize| std::str::from_utf8(&file[offset..offset + len]).unwrap();
    assert_eq!(text(23, 10), "ST:0000003");
    assert_eq!(text(54, 8), "+X:00050");
    assert_eq!(text(69, 8), "-X:00000");
    assert_eq!(text(84, 8), "+Y:00000");
    assert_eq!(text(99, 8), "-Y:00032");
}

#[test]
fn file_length_is_header_plus_records() {
    let stitches = vec![
        face(0.0, 0.0),
        face(1.0, 1.0),
        face(2.0, 0.0),
        Stitch::end(2.0, 0.0),
    ];
    let file = encode_dst(&stitches, "LEN").unwrap();
    assert_eq!(file.len(), HEADER_LEN + 4 * 3);
}

#[test]
fn stitch_count_matches_body_records() {
    // An oversize move inflates the body with split jumps; the header must
    // count the records actually written, terminator included.
    let stitches = vec![
        face(0.0, 0.0),
        Stitch::jump(40.0, 0.0),
        face(41.0, 0.0),
        Stitch::end(41.0, 0.0),
    ];
    let file = encode_dst(&stitches, "COUNT").unwrap();
    let body_records = (file.len() - HEADER_LEN) / 3;
    let st: usize = std::str::from_utf8(&file[26..33]).unwrap().parse().unwrap();
    assert_eq!(st, body_records);
}

#[test]
fn decoding_reproduces_quantized_positions() {
    let stitches = vec![
        face(0.0, 0.0),
        face(1.25, -0.85),
        face(-14.3, 7.07),
        face(20.0, 20.0),
        Stitch::trim(20.0, 20.0),
        Stitch::jump(-8.0, -8.0),
        face(-8.0, -8.2),
        Stitch::end(-8.0, -8.2),
    ];
    let file = encode_dst(&stitches, "RT").unwrap();
    let motions = decode_dst_body(&file[HEADER_LEN..]);

    let expected: Vec<(i32, i32)> = stitches
        .iter()
        .filter(|s| s.kind == StitchKind::Stitch)
        .map(|s| ((s.x * 10.0).round() as i32, (s.y * 10.0).round() as i32))
        .collect();
    assert_eq!(absolute_stitch_positions(&motions), expected);
    assert_eq!(*motions.last().unwrap(), Motion::EndOfStream);
}

#[test]
fn split_steps_land_exactly() {
    // 123.4mm east needs eleven increments; the residual must be exact.
    let stitches = vec![face(0.0, 0.0), face(123.4, 0.0), Stitch::end(123.4, 0.0)];
    let file = encode_dst(&stitches, "SPLIT").unwrap();
    let motions = decode_dst_body(&file[HEADER_LEN..]);
    let positions = absolute_stitch_positions(&motions);
    assert_eq!(positions.last(), Some(&(1234, 0)));
    // Intermediate records are jumps, only the final one penetrates.
    let penetrations = motions
        .iter()
        .filter(|m| matches!(m, Motion::Stitch(_, _)))
        .count();
    assert_eq!(penetrations, 2);
}

#[test]
fn color_change_count_in_header() {
    let stitches = vec![
        face(0.0, 0.0),
        Stitch::color_change(0.0, 0.0),
        face(1.0, 0.0),
        Stitch::color_change(1.0, 0.0),
        face(2.0, 0.0),
        Stitch::end(2.0, 0.0),
    ];
    let file = encode_dst(&stitches, "CO").unwrap();
    assert_eq!(std::str::from_utf8(&file[39..45]).unwrap(), "CO:002");
    let stops = decode_dst_body(&file[HEADER_LEN..])
        .iter()
        .filter(|m| **m == Motion::Stop)
        .count();
    assert_eq!(stops, 2);
}

#[test]
fn empty_stream_is_just_header_and_terminator() {
    let file = encode_dst(&[], "EMPTY").unwrap();
    assert_eq!(file.len(), HEADER_LEN + 3);
    assert_eq!(&file[HEADER_LEN..], &[0x00, 0x00, 0xC0]);
}
