//! Stitch records: the output vocabulary of the digitizer.
//!
//! A digitized design is an ordered `Vec<Stitch>` terminated by exactly one
//! `End` record. Machine-control records (jumps, trims, color changes) share
//! the same record type as needle penetrations and are distinguished by
//! [`StitchKind`].

use serde::{Deserialize, Serialize};

/// What the machine does at a stitch record's position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StitchKind {
    /// The needle penetrates and thread is laid from the previous penetration.
    Stitch,
    /// The frame moves without a penetration.
    Jump,
    /// The machine pauses for an operator thread swap.
    ColorChange,
    /// The thread is cut. Position is informational.
    Trim,
    /// Terminal marker. Position repeats the last preceding record.
    End,
}

/// A single record in the machine stitch sequence.
///
/// `is_structure` marks everything that is not a visible face stitch:
/// underlay, tie-ins, tie-offs, jumps, trims, color changes and the end
/// marker. It exists for preview styling and plays no role in binary
/// encoding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Stitch {
    /// X position in millimetres.
    pub x: f64,
    /// Y position in millimetres.
    pub y: f64,
    pub kind: StitchKind,
    /// Index of the layer this record belongs to.
    pub color_index: usize,
    /// Thread color of the owning layer, six hex digits.
    pub color_hex: String,
    pub is_structure: bool,
}

impl Stitch {
    /// Creates a face stitch at the given position. Color fields are stamped
    /// later by the layer composer.
    pub fn new(x: f64, y: f64, kind: StitchKind) -> Self {
        Self {
            x,
            y,
            kind,
            color_index: 0,
            color_hex: String::new(),
            is_structure: !matches!(kind, StitchKind::Stitch),
        }
    }

    /// Creates a frame move to the given position.
    pub fn jump(x: f64, y: f64) -> Self {
        Self::new(x, y, StitchKind::Jump)
    }

    /// Creates a thread cut at the current position.
    pub fn trim(x: f64, y: f64) -> Self {
        Self::new(x, y, StitchKind::Trim)
    }

    /// Creates an operator color-swap pause at the current position.
    pub fn color_change(x: f64, y: f64) -> Self {
        Self::new(x, y, StitchKind::ColorChange)
    }

    /// Creates the terminal end-of-design marker.
    pub fn end(x: f64, y: f64) -> Self {
        Self::new(x, y, StitchKind::End)
    }

    /// Marks this record as structural (underlay, tie stitches).
    pub fn structural(mut self) -> Self {
        self.is_structure = true;
        self
    }

    /// Distance to another record's position.
    pub fn distance_to(&self, other: &Stitch) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }
}

/// Summary counters over a stitch sequence, used for logging and the CLI
/// `info` report.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StitchStats {
    pub total: usize,
    /// Face stitches only (non-structural penetrations).
    pub face_stitches: usize,
    /// All penetrations, structural ones included.
    pub penetrations: usize,
    pub jumps: usize,
    pub trims: usize,
    pub color_changes: usize,
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl StitchStats {
    /// Tallies a stitch sequence.
    pub fn from_stitches(stitches: &[Stitch]) -> Self {
        let mut stats = StitchStats::default();
        stats.total = stitches.len();
        for s in stitches {
            match s.kind {
                StitchKind::Stitch => {
                    stats.penetrations += 1;
                    if !s.is_structure {
                        stats.face_stitches += 1;
                    }
                }
                StitchKind::Jump => stats.jumps += 1,
                StitchKind::Trim => stats.trims += 1,
                StitchKind::ColorChange => stats.color_changes += 1,
                StitchKind::End => {}
            }
        }
        if let Some(first) = stitches.first() {
            stats.min_x = first.x;
            stats.max_x = first.x;
            stats.min_y = first.y;
            stats.max_y = first.y;
            for s in stitches {
                stats.min_x = stats.min_x.min(s.x);
                stats.max_x = stats.max_x.max(s.x);
                stats.min_y = stats.min_y.min(s.y);
                stats.max_y = stats.max_y.max(s.y);
            }
        }
        stats
    }

    /// Design width in millimetres.
    pub fn width(&self) -> f64 {
        self.max_x - self.min_x
    }

    /// Design height in millimetres.
    pub fn height(&self) -> f64 {
        self.max_y - self.min_y
    }
}
