//! Drilling mode and the configuration shared by every hole in a run.

use crate::config::{Settings, Unit};
use serde::{Deserialize, Serialize};

/// Cutting strategy applied to each hole.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DrillType {
    /// Straight plunge through the material.
    #[default]
    Through,
    /// Straight plunge to a depth short of the material thickness.
    Blind,
    /// Helical pocket at the hole diameter.
    Pocket,
    /// Pilot plunge plus a wider, shallower pocket.
    Counterbore,
    /// Any unrecognized mode; machined as a simple plunge.
    #[serde(other)]
    Plunge,
}

impl DrillType {
    /// Human-readable name for headers and logs.
    pub fn label(&self) -> &'static str {
        match self {
            DrillType::Through => "Through hole",
            DrillType::Blind => "Blind hole",
            DrillType::Pocket => "Pocket",
            DrillType::Counterbore => "Counterbore",
            DrillType::Plunge => "Plunge",
        }
    }
}

/// Operation parameters shared across all holes in one generation run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrillConfig {
    /// Drilling mode.
    #[serde(rename = "type")]
    pub drill_type: DrillType,
    /// Hole (or pilot) diameter.
    pub diameter: Option<f64>,
    /// Hole (or pilot) depth.
    pub depth: Option<f64>,
    /// Counterbore diameter.
    pub cb_diameter: Option<f64>,
    /// Counterbore depth.
    pub cb_depth: Option<f64>,
    /// Retract height override.
    pub safe_z: Option<f64>,
    /// Cutting feed rate override.
    pub feed_rate: Option<f64>,
    /// Plunge rate override.
    pub plunge_rate: Option<f64>,
    /// Stock thickness override.
    pub material_thickness: Option<f64>,
    /// Material annotation for the program header.
    pub material: Option<String>,
    /// Bit annotation for the program header.
    pub bit: Option<String>,
    /// Free-form notes for the program header.
    pub notes: Option<String>,
}

impl DrillConfig {
    /// Create a configuration for a plain hole.
    pub fn new(drill_type: DrillType, diameter: f64, depth: f64) -> Self {
        Self {
            drill_type,
            diameter: Some(diameter),
            depth: Some(depth),
            ..Default::default()
        }
    }

    /// Create a counterbore configuration.
    pub fn counterbore(diameter: f64, depth: f64, cb_diameter: f64, cb_depth: f64) -> Self {
        Self {
            drill_type: DrillType::Counterbore,
            diameter: Some(diameter),
            depth: Some(depth),
            cb_diameter: Some(cb_diameter),
            cb_depth: Some(cb_depth),
            ..Default::default()
        }
    }

    /// Material thickness, falling back to the host default.
    pub fn material_thickness(&self, settings: &Settings) -> Option<f64> {
        self.material_thickness.or(settings.material_thickness)
    }

    /// Merge this configuration with host defaults into motion parameters.
    pub fn motion(&self, settings: &Settings) -> MotionParams {
        MotionParams {
            safe_z: self.safe_z.unwrap_or(settings.safe_z),
            feed_rate: self.feed_rate.unwrap_or(settings.feed_rate),
            plunge_rate: self.plunge_rate.unwrap_or(settings.plunge_rate),
            spindle_startup_time: settings.spindle_startup_time,
            return_home: settings.return_home,
            unit: settings.unit,
        }
    }
}

/// Motion parameters in effect for one generation run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MotionParams {
    pub safe_z: f64,
    pub feed_rate: f64,
    pub plunge_rate: f64,
    pub spindle_startup_time: f64,
    pub return_home: bool,
    pub unit: Unit,
}
