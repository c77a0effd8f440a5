//! Per-hole cutting strategies.
//!
//! Each drilling mode has its own synthesizer. They assume the configuration
//! has already passed [`validate_config`](crate::validation::validate_config)
//! and never fail: invalid values give meaningless but finite output.

use super::writer::{format_coord, ProgramWriter};
use crate::config::float_cmp::{approx_zero, is_positive};
use crate::config::{Unit, PASS_DEPTH_DIAMETER_RATIO};
use crate::model::{DrillConfig, DrillType};

/// Slack on the depth/cap ratio so float noise does not add a pass.
const PASS_RATIO_TOLERANCE: f64 = 1e-9;

/// Emits the motion sequence for one hole.
pub trait Synthesize {
    /// Write the instructions that machine a hole centered at `(x, y)`.
    fn emit(&self, writer: &mut ProgramWriter, x: f64, y: f64);

    /// Short human-readable description for the program header.
    fn describe(&self) -> String;
}

/// Straight plunge: position, plunge, retract.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plunge {
    /// Target depth below the surface (sign ignored).
    pub depth: f64,
}

impl Synthesize for Plunge {
    fn emit(&self, writer: &mut ProgramWriter, x: f64, y: f64) {
        writer.rapid_xy(x, y);
        writer.plunge(-self.depth.abs());
        writer.rapid_safe_z();
    }

    fn describe(&self) -> String {
        format!("plunge to {}", format_coord(self.depth.abs()))
    }
}

/// Helical pocket at the hole diameter, cut in equal depth passes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pocket {
    pub diameter: f64,
    pub depth: f64,
    /// Unit-dependent ceiling on the depth of one pass.
    pub max_depth_per_pass: f64,
}

impl Pocket {
    /// Create a pocket using the pass ceiling of `unit`.
    pub fn new(diameter: f64, depth: f64, unit: Unit) -> Self {
        Self {
            diameter,
            depth,
            max_depth_per_pass: unit.max_depth_per_pass(),
        }
    }

    /// Circle radius traced by each pass.
    pub fn radius(&self) -> f64 {
        self.diameter.abs() / 2.0
    }

    /// Depth cap for one pass: half the diameter, at most the unit ceiling.
    ///
    /// A zero-diameter pocket uses the ceiling.
    pub fn depth_per_pass_cap(&self) -> f64 {
        let cap = (PASS_DEPTH_DIAMETER_RATIO * self.diameter.abs()).min(self.max_depth_per_pass);
        if is_positive(cap) {
            cap
        } else {
            self.max_depth_per_pass
        }
    }

    /// Number of equal passes needed to reach the full depth.
    pub fn num_passes(&self) -> usize {
        let total = self.depth.abs();
        let ratio = total / self.depth_per_pass_cap();
        if !ratio.is_finite() || !is_positive(total) {
            return 0;
        }
        ((ratio - PASS_RATIO_TOLERANCE).ceil() as usize).max(1)
    }

    /// Depth removed by each pass; all passes are equal.
    pub fn depth_per_pass(&self) -> f64 {
        match self.num_passes() {
            0 => 0.0,
            n => self.depth.abs() / n as f64,
        }
    }

    /// Target Z of every pass, shallowest first.
    pub fn pass_depths(&self) -> Vec<f64> {
        let step = self.depth_per_pass();
        (1..=self.num_passes()).map(|pass| -(step * pass as f64)).collect()
    }
}

impl Synthesize for Pocket {
    fn emit(&self, writer: &mut ProgramWriter, x: f64, y: f64) {
        let radius = self.radius();

        writer.rapid_xy(x, y);
        for z in self.pass_depths() {
            if approx_zero(radius) {
                writer.plunge(z);
            } else {
                writer.move_xy(x + radius, y);
                writer.helical_circle(x, y, radius, z);
                writer.move_xy(x, y);
            }
        }
        writer.rapid_safe_z();
    }

    fn describe(&self) -> String {
        format!(
            "helical pocket {} dia x {} deep in {} passes of {}",
            format_coord(self.diameter),
            format_coord(self.depth.abs()),
            self.num_passes(),
            format_coord(self.depth_per_pass())
        )
    }
}

/// Pilot plunge followed by an optional counterbore pocket.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Counterbore {
    pub pilot: Plunge,
    /// `None` when the counterbore dimensions are missing.
    pub pocket: Option<Pocket>,
}

impl Synthesize for Counterbore {
    fn emit(&self, writer: &mut ProgramWriter, x: f64, y: f64) {
        self.pilot.emit(writer, x, y);
        if let Some(pocket) = &self.pocket {
            pocket.emit(writer, x, y);
        }
    }

    fn describe(&self) -> String {
        match &self.pocket {
            Some(pocket) => format!("pilot {}, then {}", self.pilot.describe(), pocket.describe()),
            None => format!("pilot {} only", self.pilot.describe()),
        }
    }
}

/// Cutting strategy selected by the drilling mode.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operation {
    Plunge(Plunge),
    Pocket(Pocket),
    Counterbore(Counterbore),
}

impl Operation {
    /// Pick the synthesizer for a configuration.
    ///
    /// Through, blind and unrecognized modes plunge. Missing sizes count as zero.
    pub fn from_config(config: &DrillConfig, unit: Unit) -> Self {
        let diameter = config.diameter.unwrap_or(0.0);
        let depth = config.depth.unwrap_or(0.0);

        match config.drill_type {
            DrillType::Through | DrillType::Blind | DrillType::Plunge => {
                Operation::Plunge(Plunge { depth })
            }
            DrillType::Pocket => Operation::Pocket(Pocket::new(diameter, depth, unit)),
            DrillType::Counterbore => {
                let pocket = match (config.cb_diameter, config.cb_depth) {
                    (Some(cb_diameter), Some(cb_depth)) => {
                        Some(Pocket::new(cb_diameter, cb_depth, unit))
                    }
                    _ => {
                        tracing::warn!(
                            "Counterbore dimensions missing, drilling pilot holes only"
                        );
                        None
                    }
                };
                Operation::Counterbore(Counterbore {
                    pilot: Plunge { depth },
                    pocket,
                })
            }
        }
    }

    fn synthesizer(&self) -> &dyn Synthesize {
        match self {
            Operation::Plunge(op) => op,
            Operation::Pocket(op) => op,
            Operation::Counterbore(op) => op,
        }
    }
}

impl Synthesize for Operation {
    fn emit(&self, writer: &mut ProgramWriter, x: f64, y: f64) {
        self.synthesizer().emit(writer, x, y);
    }

    fn describe(&self) -> String {
        self.synthesizer().describe()
    }
}
