//! Reference decoders used to round-trip the writers' output.

/// A decoded machine motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    Stitch(i32, i32),
    Jump(i32, i32),
    Stop,
    EndOfStream,
}

/// Decodes a DST body (without the 512-byte header) into motions.
pub fn decode_dst_body(body: &[u8]) -> Vec<Motion> {
    const WEIGHTS: [i32; 5] = [81, 27, 9, 3, 1];
    // (positive (byte,bit), negative (byte,bit)) per weight.
    const Y_BITS: [((usize, u8), (usize, u8)); 5] = [
        ((2, 2), (2, 3)),
        ((1, 5), (1, 4)),
        ((0, 2), (0, 3)),
        ((1, 7), (1, 6)),
        ((0, 0), (0, 1)),
    ];
    const X_BITS: [((usize, u8), (usize, u8)); 5] = [
        ((2, 4), (2, 5)),
        ((1, 1), (1, 0)),
        ((0, 5), (0, 4)),
        ((1, 3), (1, 2)),
        ((0, 7), (0, 6)),
    ];

    let record_count = body.len() / 3;
    let mut motions = Vec::new();
    for (index, record) in body.chunks(3).enumerate() {
        if record.len() < 3 {
            break;
        }
        let mut dx = 0;
        let mut dy = 0;
        for (i, &weight) in WEIGHTS.iter().enumerate() {
            let ((pb, pbit), (nb, nbit)) = X_BITS[i];
            if record[pb] & (1 << pbit) != 0 {
                dx += weight;
            }
            if record[nb] & (1 << nbit) != 0 {
                dx -= weight;
            }
            let ((pb, pbit), (nb, nbit)) = Y_BITS[i];
            if record[pb] & (1 << pbit) != 0 {
                dy += weight;
            }
            if record[nb] & (1 << nbit) != 0 {
                dy -= weight;
            }
        }
        let jump = record[2] & 0x80 != 0;
        let stop = record[2] & 0x40 != 0;
        // The terminator is bit-identical to a zero-delta stop; only its
        // position at the end of the stream identifies it.
        motions.push(match (jump, stop) {
            (true, true) if index == record_count - 1 => Motion::EndOfStream,
            (true, true) => Motion::Stop,
            (true, false) => Motion::Jump(dx, dy),
            (false, _) => Motion::Stitch(dx, dy),
        });
    }
    motions
}

/// Decodes an EXP stream into motions.
pub fn decode_exp(bytes: &[u8]) -> Vec<Motion> {
    let mut motions = Vec::new();
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == 0x80 {
            let code = bytes[i + 1];
            let dx = bytes[i + 2] as i8 as i32;
            let dy = bytes[i + 3] as i8 as i32;
            motions.push(match code {
                0x04 => Motion::Jump(dx, dy),
                _ => Motion::Stop,
            });
            i += 4;
        } else {
            let dx = bytes[i] as i8 as i32;
            let dy = bytes[i + 1] as i8 as i32;
            motions.push(Motion::Stitch(dx, dy));
            i += 2;
        }
    }
    motions
}

/// Accumulates motions into absolute positions of penetrating stitches.
pub fn absolute_stitch_positions(motions: &[Motion]) -> Vec<(i32, i32)> {
    let mut positions = Vec::new();
    let mut x = 0;
    let mut y = 0;
    for motion in motions {
        match motion {
            Motion::Stitch(dx, dy) => {
                x += dx;
                y += dy;
                positions.push((x, y));
            }
            Motion::Jump(dx, dy) => {
                x += dx;
                y += dy;
            }
            Motion::Stop | Motion::EndOfStream => {}
        }
    }
    positions
}
