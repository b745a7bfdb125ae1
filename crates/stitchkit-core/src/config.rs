//! Digitizing configuration.
//!
//! The option bundle handed to the pipeline by upstream callers. Values are
//! validated once at pipeline entry; individual generators additionally fall
//! back to safe defaults for non-positive lengths so they stay usable on
//! their own.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DigitizeError;

/// Overall design treatment requested by the caller. Selects upstream
/// defaults; the stitch generators do not branch on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DesignStyle {
    Vintage,
    PatchLine,
    PatchFill,
}

impl Default for DesignStyle {
    fn default() -> Self {
        Self::Vintage
    }
}

impl fmt::Display for DesignStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vintage => write!(f, "vintage"),
            Self::PatchLine => write!(f, "patch_line"),
            Self::PatchFill => write!(f, "patch_fill"),
        }
    }
}

impl FromStr for DesignStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "vintage" => Ok(Self::Vintage),
            "patch_line" | "patch-line" => Ok(Self::PatchLine),
            "patch_fill" | "patch-fill" => Ok(Self::PatchFill),
            _ => Err(format!("Unknown design style: {}", s)),
        }
    }
}

/// Which stitch generator to run over a layer's polygons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StitchStyle {
    /// A single row of stitches along the path.
    Running,
    /// Back-and-forth column between two rails following a spine.
    Satin,
    /// Parallel-row fill with brick-offset rows.
    Tatami,
}

impl Default for StitchStyle {
    fn default() -> Self {
        Self::Running
    }
}

impl fmt::Display for StitchStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Running => write!(f, "running"),
            Self::Satin => write!(f, "satin"),
            Self::Tatami => write!(f, "tatami"),
        }
    }
}

impl FromStr for StitchStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "running" | "run" => Ok(Self::Running),
            "satin" => Ok(Self::Satin),
            "tatami" | "fill" => Ok(Self::Tatami),
            _ => Err(format!("Unknown stitch style: {}", s)),
        }
    }
}

/// Options consumed by the digitizing pipeline. All lengths in millimetres,
/// angles in degrees.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DigitizeConfig {
    pub design_style: DesignStyle,
    /// Physical target width. Consumed upstream when scaling the vector
    /// layers; the generators receive final millimetre coordinates.
    pub width_mm: f64,
    pub stitch_type: StitchStyle,
    /// Row spacing for tatami; step along the spine for satin.
    pub density_mm: f64,
    /// Rail separation for satin columns.
    pub satin_column_width_mm: f64,
    /// Outward polygon offset for fills; half-width boost for satin.
    pub pull_compensation_mm: f64,
    pub enable_underlay: bool,
    /// Row direction for tatami fills.
    pub tatami_angle_deg: f64,
    /// Split threshold for running and satin crossings; horizontal brick
    /// step cap for tatami.
    pub max_stitch_length_mm: f64,
    /// Consecutive stitches closer than this are collapsed.
    pub min_stitch_length_mm: f64,
    /// Inter-path gap above which a trim precedes the connecting jump.
    pub trim_jump_distance_mm: f64,
    /// Upstream palette target. Not used by the generators.
    pub color_count: u32,
}

impl Default for DigitizeConfig {
    fn default() -> Self {
        Self {
            design_style: DesignStyle::default(),
            width_mm: 100.0,
            stitch_type: StitchStyle::default(),
            density_mm: 0.4,
            satin_column_width_mm: 3.0,
            pull_compensation_mm: 0.2,
            enable_underlay: true,
            tatami_angle_deg: 45.0,
            max_stitch_length_mm: 7.0,
            min_stitch_length_mm: 0.2,
            trim_jump_distance_mm: 2.0,
            color_count: 4,
        }
    }
}

impl DigitizeConfig {
    /// Checks the options the pipeline refuses to run with.
    pub fn validate(&self) -> Result<(), DigitizeError> {
        if self.density_mm <= 0.0 {
            return Err(DigitizeError::ConfigOutOfRange {
                option: "density_mm".to_string(),
                value: self.density_mm,
                reason: "must be positive".to_string(),
            });
        }
        if self.stitch_type == StitchStyle::Satin && self.satin_column_width_mm <= 0.0 {
            return Err(DigitizeError::ConfigOutOfRange {
                option: "satin_column_width_mm".to_string(),
                value: self.satin_column_width_mm,
                reason: "must be positive when satin is selected".to_string(),
            });
        }
        if self.max_stitch_length_mm <= 0.0 {
            return Err(DigitizeError::ConfigOutOfRange {
                option: "max_stitch_length_mm".to_string(),
                value: self.max_stitch_length_mm,
                reason: "must be positive".to_string(),
            });
        }
        Ok(())
    }
}
