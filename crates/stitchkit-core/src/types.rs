//! Shared geometric and design input types.

use serde::{Deserialize, Serialize};

use crate::config::DigitizeConfig;

/// Represents a 2D position in millimetres, origin at the design centre,
/// +x right, +y up.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Creates a new point with the given X and Y coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Calculates the distance to another point.
    pub fn distance_to(&self, other: &Point) -> f64 {
        ((self.x - other.x).powi(2) + (self.y - other.y).powi(2)).sqrt()
    }

    /// Squared distance to another point. Avoids the square root when only
    /// relative ordering matters.
    pub fn distance_squared_to(&self, other: &Point) -> f64 {
        (self.x - other.x).powi(2) + (self.y - other.y).powi(2)
    }
}

/// One colored layer of a design: a thread color and the closed polygons
/// stitched in that color, all in the same millimetre coordinate space.
///
/// Polygons are closed contours; the last point repeats the first. The color
/// is a six-hex-digit RGB string and is carried through opaquely.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VectorLayer {
    /// Thread color as a six-hex-digit RGB string (e.g. "1a2b3c").
    pub color_hex: String,
    /// Closed contours in millimetres.
    pub polygons: Vec<Vec<Point>>,
}

impl VectorLayer {
    /// Creates a layer from a color string and its contours.
    pub fn new(color_hex: impl Into<String>, polygons: Vec<Vec<Point>>) -> Self {
        Self {
            color_hex: color_hex.into(),
            polygons,
        }
    }
}

/// A complete design document as read from disk: the layer stack plus the
/// digitizing options to apply to it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DesignFile {
    pub layers: Vec<VectorLayer>,
    #[serde(default)]
    pub config: DigitizeConfig,
}
