//! Concrete end-to-end scenarios with hand-computed expectations.

use stitchkit_core::config::{DigitizeConfig, StitchStyle};
use stitchkit_core::stitch::StitchKind;
use stitchkit_core::types::{Point, VectorLayer};
use stitchkit_digitizer::{digitize, generate_running, generate_satin, generate_tatami};

#[test]
fn running_split_seed() {
    // A 10mm segment at a 2.5mm cap splits into four equal stitches.
    let config = DigitizeConfig {
        max_stitch_length_mm: 2.5,
        ..DigitizeConfig::default()
    };
    let path = vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0)];
    let stitches = generate_running(&path, &config);
    let positions: Vec<(f64, f64)> = stitches.iter().map(|s| (s.x, s.y)).collect();
    assert_eq!(
        positions,
        vec![(0.0, 0.0), (2.5, 0.0), (5.0, 0.0), (7.5, 0.0), (10.0, 0.0)]
    );
}

#[test]
fn running_split_seed_through_pipeline() {
    // The same path through the composer gains tie-in, tie-off and trim.
    let config = DigitizeConfig {
        stitch_type: StitchStyle::Running,
        max_stitch_length_mm: 2.5,
        enable_underlay: false,
        ..DigitizeConfig::default()
    };
    let layers = vec![VectorLayer::new(
        "000000",
        vec![vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0)]],
    )];
    let design = digitize(&layers, &config).unwrap();

    let face: Vec<(f64, f64)> = design
        .iter()
        .filter(|s| s.kind == StitchKind::Stitch && !s.is_structure)
        .map(|s| (s.x, s.y))
        .collect();
    assert_eq!(
        face,
        vec![(0.0, 0.0), (2.5, 0.0), (5.0, 0.0), (7.5, 0.0), (10.0, 0.0)]
    );

    // Tie-in backtrack leads, tie-off backtrack and trim trail.
    assert_eq!((design[0].x, design[0].y), (0.5, 0.0));
    assert!(design[0].is_structure);
    let trim_idx = design
        .iter()
        .position(|s| s.kind == StitchKind::Trim)
        .unwrap();
    assert_eq!((design[trim_idx].x, design[trim_idx].y), (10.0, 0.0));
}

#[test]
fn satin_straight_column_seed() {
    // 2mm column over a 10mm spine at 0.4mm density: 26 rail pairs at y = +/-1.
    let config = DigitizeConfig {
        satin_column_width_mm: 2.0,
        density_mm: 0.4,
        pull_compensation_mm: 0.0,
        max_stitch_length_mm: 7.0,
        ..DigitizeConfig::default()
    };
    let spine = vec![Point::new(0.0, 0.0), Point::new(10.0, 0.0)];
    let stitches = generate_satin(&spine, &config);

    assert_eq!(stitches.len(), 52);
    for (i, pair) in stitches.chunks(2).enumerate() {
        let x = 0.4 * i as f64;
        assert!((pair[0].x - x).abs() < 1e-9, "left rail x at pair {}", i);
        assert!((pair[0].y - 1.0).abs() < 1e-9, "left rail y at pair {}", i);
        assert!((pair[1].x - x).abs() < 1e-9, "right rail x at pair {}", i);
        assert!((pair[1].y + 1.0).abs() < 1e-9, "right rail y at pair {}", i);
    }
}

#[test]
fn tatami_square_seed() {
    // 10mm square, no rotation: rows at y = -4.6 .. 4.6, bricked because
    // the 10mm span exceeds the 7mm cap, direction alternating.
    let config = DigitizeConfig {
        stitch_type: StitchStyle::Tatami,
        tatami_angle_deg: 0.0,
        density_mm: 0.4,
        max_stitch_length_mm: 7.0,
        pull_compensation_mm: 0.0,
        ..DigitizeConfig::default()
    };
    let square = vec![
        Point::new(-5.0, -5.0),
        Point::new(5.0, -5.0),
        Point::new(5.0, 5.0),
        Point::new(-5.0, 5.0),
        Point::new(-5.0, -5.0),
    ];
    let stitches = generate_tatami(&[square], &config);

    let mut rows: Vec<i64> = stitches
        .iter()
        .map(|s| (s.y * 10.0).round() as i64)
        .collect();
    rows.dedup();
    assert_eq!(rows.len(), 24);
    assert_eq!(rows[0], -46);
    assert_eq!(*rows.last().unwrap(), 46);

    for &row in &rows {
        let mut xs: Vec<f64> = stitches
            .iter()
            .filter(|s| (s.y * 10.0).round() as i64 == row)
            .map(|s| s.x)
            .collect();
        xs.sort_by(|a, b| a.partial_cmp(b).unwrap());
        // Every row spans the full segment and is bricked in between.
        assert!((xs[0] + 5.0).abs() < 1e-9);
        assert!((xs[xs.len() - 1] - 5.0).abs() < 1e-9);
        assert!(xs.len() >= 4);
        // Brick gaps never exceed the 4mm step plus the largest start
        // offset fraction (2/3 lattice + 0.4 noise of one step).
        let max_gap = (2.0 / 3.0 + 0.4) * 4.0;
        for window in xs.windows(2) {
            assert!(window[1] - window[0] <= max_gap + 1e-9);
        }
    }
}

#[test]
fn small_stitch_removal_seed() {
    // A 0.05mm penetration between two sewable ones is dropped.
    let config = DigitizeConfig {
        stitch_type: StitchStyle::Running,
        min_stitch_length_mm: 0.3,
        enable_underlay: false,
        ..DigitizeConfig::default()
    };
    let layers = vec![VectorLayer::new(
        "000000",
        vec![vec![
            Point::new(0.0, 0.0),
            Point::new(0.05, 0.0),
            Point::new(1.0, 0.0),
        ]],
    )];
    let design = digitize(&layers, &config).unwrap();
    let face: Vec<f64> = design
        .iter()
        .filter(|s| s.kind == StitchKind::Stitch && !s.is_structure)
        .map(|s| s.x)
        .collect();
    assert_eq!(face, vec![0.0, 1.0]);
}
