//! Serializable pattern descriptions used in job files.

use super::{circular_pattern, rectangular_array};
use crate::config::float_cmp::is_positive;
use crate::config::MAX_PATTERN_HOLES;
use crate::model::Hole;
use serde::{Deserialize, Serialize};

/// A parametric hole layout.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum PatternSpec {
    /// Row-major grid.
    Rectangular {
        rows: usize,
        cols: usize,
        spacing_x: f64,
        spacing_y: f64,
        #[serde(default)]
        origin_x: f64,
        #[serde(default)]
        origin_y: f64,
    },
    /// Holes evenly spaced on a circle.
    Circular {
        count: usize,
        radius: f64,
        #[serde(default)]
        center_x: f64,
        #[serde(default)]
        center_y: f64,
        /// Angle of the first hole in degrees.
        #[serde(default)]
        start_angle: f64,
    },
}

impl PatternSpec {
    /// Check the parameters; an empty list means the pattern can be expanded.
    pub fn validate(&self) -> Vec<String> {
        let mut problems = Vec::new();

        match self {
            PatternSpec::Rectangular {
                rows,
                cols,
                spacing_x,
                spacing_y,
                ..
            } => {
                if *rows < 1 {
                    problems.push("Array rows must be at least 1".to_string());
                }
                if *cols < 1 {
                    problems.push("Array columns must be at least 1".to_string());
                }
                if self.hole_count() > MAX_PATTERN_HOLES {
                    problems.push(format!(
                        "Array expands to too many holes ({} x {}, limit {})",
                        rows, cols, MAX_PATTERN_HOLES
                    ));
                }
                if !is_positive(*spacing_x) {
                    problems.push(format!("Array X spacing must be positive (got {})", spacing_x));
                }
                if !is_positive(*spacing_y) {
                    problems.push(format!("Array Y spacing must be positive (got {})", spacing_y));
                }
            }
            PatternSpec::Circular { count, radius, .. } => {
                if *count > MAX_PATTERN_HOLES {
                    problems.push(format!(
                        "Circular pattern has too many holes (got {}, limit {})",
                        count, MAX_PATTERN_HOLES
                    ));
                }
                if *count < 2 {
                    problems.push(format!("Circular pattern needs at least 2 holes (got {})", count));
                }
                if !is_positive(*radius) {
                    problems.push(format!("Circular pattern radius must be positive (got {})", radius));
                }
            }
        }

        problems
    }

    /// Expand into hole positions.
    pub fn expand(&self) -> Vec<Hole> {
        match *self {
            PatternSpec::Rectangular {
                rows,
                cols,
                spacing_x,
                spacing_y,
                origin_x,
                origin_y,
            } => rectangular_array(rows, cols, spacing_x, spacing_y, origin_x, origin_y),
            PatternSpec::Circular {
                count,
                radius,
                center_x,
                center_y,
                start_angle,
            } => circular_pattern(count, radius, center_x, center_y, start_angle),
        }
    }

    /// Number of holes the pattern expands to, saturating at `usize::MAX`.
    pub fn hole_count(&self) -> usize {
        match self {
            PatternSpec::Rectangular { rows, cols, .. } => rows.saturating_mul(*cols),
            PatternSpec::Circular { count, .. } => *count,
        }
    }
}
