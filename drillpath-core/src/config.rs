//! Configuration constants and host settings for program generation.

use serde::{Deserialize, Serialize};

/// Floating-point comparison epsilon.
pub const EPS: f64 = 0.0001;

/// Number of decimal places used for every numeric field in the output.
pub const DECIMALS: usize = 3;

/// Maximum depth removed by one helical pass, in inches.
pub const MAX_DEPTH_PER_PASS_INCH: f64 = 0.25;

/// Ratio of hole diameter that bounds the depth of one helical pass.
pub const PASS_DEPTH_DIAMETER_RATIO: f64 = 0.5;

/// Conversion factor: inch to mm.
pub const CONV_INCH_MM: f64 = 25.4;

/// Largest number of holes a single pattern may expand to.
pub const MAX_PATTERN_HOLES: usize = 100_000;

/// Default retract height above the work surface.
pub const DEFAULT_SAFE_Z: f64 = 0.5;

/// Default cutting feed rate (units per second).
pub const DEFAULT_FEED_RATE: f64 = 1.0;

/// Default plunge rate (units per second).
pub const DEFAULT_PLUNGE_RATE: f64 = 0.5;

/// Default spindle spin-up delay in seconds.
pub const DEFAULT_SPINDLE_STARTUP_TIME: f64 = 3.0;

/// Named value holding the retract height in the generated program.
pub const SAFE_Z_NAME: &str = "safe_z";

/// Named value holding the cutting feed rate.
pub const FEED_RATE_NAME: &str = "feed_rate";

/// Named value holding the plunge rate.
pub const PLUNGE_RATE_NAME: &str = "plunge_rate";

/// Named value holding the configured hole depth.
pub const DEPTH_NAME: &str = "depth";

/// Unit of measurement for work coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    #[default]
    Inches,
    Millimeters,
}

impl Unit {
    /// Largest depth a single helical pass may remove in this unit.
    pub fn max_depth_per_pass(&self) -> f64 {
        match self {
            Unit::Inches => MAX_DEPTH_PER_PASS_INCH,
            Unit::Millimeters => MAX_DEPTH_PER_PASS_INCH * CONV_INCH_MM,
        }
    }

    /// Get the G-code for this unit system.
    pub fn gcode(&self) -> &'static str {
        match self {
            Unit::Inches => "G20",
            Unit::Millimeters => "G21",
        }
    }
}

impl std::fmt::Display for Unit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Unit::Inches => write!(f, "inch"),
            Unit::Millimeters => write!(f, "mm"),
        }
    }
}

/// Instruction set of the target controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// ShopBot OpenSBP part files.
    #[default]
    OpenSbp,
    /// RS-274 G-code with named parameters.
    Gcode,
}

impl Dialect {
    /// Conventional file extension for programs in this dialect.
    pub fn extension(&self) -> &'static str {
        match self {
            Dialect::OpenSbp => "sbp",
            Dialect::Gcode => "nc",
        }
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dialect::OpenSbp => write!(f, "OpenSBP"),
            Dialect::Gcode => write!(f, "G-code"),
        }
    }
}

/// Process-wide defaults supplied by the host.
///
/// The engine only reads these; a [`DrillConfig`](crate::model::DrillConfig)
/// field overrides the matching setting when present.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Retract height where rapid moves are collision-free.
    pub safe_z: f64,
    /// Cutting feed rate (units per second).
    pub feed_rate: f64,
    /// Plunge rate (units per second).
    pub plunge_rate: f64,
    /// Delay after starting the spindle, in seconds.
    pub spindle_startup_time: f64,
    /// Default material thickness, used only for validation warnings.
    pub material_thickness: Option<f64>,
    /// Return to the work origin at the end of the program.
    pub return_home: bool,
    /// Work coordinate unit.
    pub unit: Unit,
    /// Output instruction set.
    pub dialect: Dialect,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            safe_z: DEFAULT_SAFE_Z,
            feed_rate: DEFAULT_FEED_RATE,
            plunge_rate: DEFAULT_PLUNGE_RATE,
            spindle_startup_time: DEFAULT_SPINDLE_STARTUP_TIME,
            material_thickness: None,
            return_home: true,
            unit: Unit::default(),
            dialect: Dialect::default(),
        }
    }
}

impl Settings {
    /// Create settings for the given unit and dialect with default rates.
    pub fn new(unit: Unit, dialect: Dialect) -> Self {
        Self {
            unit,
            dialect,
            ..Default::default()
        }
    }
}

/// Utility functions for floating-point comparisons.
pub mod float_cmp {
    use super::EPS;

    /// Check if two floats are approximately equal.
    #[inline]
    pub fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < EPS
    }

    /// Check if a float is approximately zero.
    #[inline]
    pub fn approx_zero(a: f64) -> bool {
        a.abs() < EPS
    }

    /// Check if a value is strictly positive (NaN is not).
    #[inline]
    pub fn is_positive(a: f64) -> bool {
        a > 0.0
    }
}

/// Utility functions for angle operations.
pub mod angle {
    /// Normalize angle to 0-360 range (exclusive of 360).
    #[inline]
    pub fn normalize_degrees(angle: f64) -> f64 {
        let mut a = angle % 360.0;
        if a < 0.0 {
            a += 360.0;
        }
        if a >= 360.0 || a == 0.0 {
            a = 0.0;
        }
        a
    }
}
