//! Hole definition: a single drilling location on the workpiece.

use serde::{Deserialize, Serialize};

/// A point to be machined.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Hole {
    /// X work coordinate.
    pub x: f64,
    /// Y work coordinate.
    pub y: f64,
    /// Hole diameter as placed by the user (filled from the drill config if absent).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub diameter: Option<f64>,
    /// Hole depth as placed by the user (filled from the drill config if absent).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub depth: Option<f64>,
    /// 1-based display position. Not used for ordering.
    #[serde(default)]
    pub sequence_number: usize,
}

impl Hole {
    /// Create a hole at a position with no size information.
    pub fn at(x: f64, y: f64) -> Self {
        Self {
            x,
            y,
            ..Default::default()
        }
    }

    /// Create a fully specified hole.
    pub fn new(x: f64, y: f64, diameter: f64, depth: f64) -> Self {
        Self {
            x,
            y,
            diameter: Some(diameter),
            depth: Some(depth),
            sequence_number: 0,
        }
    }

    /// Straight-line XY distance to a point.
    pub fn distance_to(&self, x: f64, y: f64) -> f64 {
        let dx = self.x - x;
        let dy = self.y - y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Whether two holes share a position within epsilon.
    pub fn same_position(&self, other: &Hole) -> bool {
        use crate::config::float_cmp::approx_eq;

        approx_eq(self.x, other.x) && approx_eq(self.y, other.y)
    }

    /// Fill missing diameter/depth with defaults.
    pub fn with_defaults(mut self, diameter: Option<f64>, depth: Option<f64>) -> Self {
        if self.diameter.is_none() {
            self.diameter = diameter;
        }
        if self.depth.is_none() {
            self.depth = depth;
        }
        self
    }
}
