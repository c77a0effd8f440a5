//! Line-oriented program writer for the supported controller dialects.

use crate::config::{Dialect, Unit, DECIMALS, FEED_RATE_NAME, PLUNGE_RATE_NAME, SAFE_Z_NAME};

/// OpenSBP `CG` option selecting a spiral plunge.
const CG_SPIRAL_PLUNGE: u8 = 4;

/// Program writer.
///
/// Every line is a comment, a named-value declaration or an instruction.
/// Numeric fields always go through [`format_coord`].
pub struct ProgramWriter {
    /// Target instruction set.
    dialect: Dialect,
    /// Output buffer.
    buffer: String,
}

impl ProgramWriter {
    /// Create a new writer for a dialect.
    pub fn new(dialect: Dialect) -> Self {
        Self {
            dialect,
            buffer: String::new(),
        }
    }

    /// Get the generated program.
    pub fn output(&self) -> &str {
        &self.buffer
    }

    /// Take the generated program.
    pub fn take_output(self) -> String {
        self.buffer
    }

    /// Write a line as-is.
    pub fn write_raw(&mut self, content: &str) {
        self.buffer.push_str(content);
        self.buffer.push('\n');
    }

    /// Write an empty line.
    pub fn write_blank(&mut self) {
        self.buffer.push('\n');
    }

    /// Write a comment line.
    pub fn write_comment(&mut self, comment: &str) {
        let line = match self.dialect {
            Dialect::OpenSbp => format!("' {}", comment),
            // Parentheses would close the comment early
            Dialect::Gcode => format!("({})", comment.replace('(', "[").replace(')', "]")),
        };
        self.write_raw(&line);
    }

    /// Symbolic reference to a named value.
    pub fn reference(&self, name: &str) -> String {
        match self.dialect {
            Dialect::OpenSbp => format!("&{}", name),
            Dialect::Gcode => format!("#<{}>", name),
        }
    }

    // === Named values ===

    /// Declare a named value.
    pub fn declare(&mut self, name: &str, value: f64) {
        let line = format!("{} = {}", self.reference(name), format_coord(value));
        self.write_raw(&line);
    }

    /// Declare a named rate given in units per second.
    ///
    /// G-code feeds are per minute, so the declared value is scaled there.
    pub fn declare_rate(&mut self, name: &str, per_second: f64) {
        let value = match self.dialect {
            Dialect::OpenSbp => per_second,
            Dialect::Gcode => per_second * 60.0,
        };
        self.declare(name, value);
    }

    // === Setup ===

    /// Select absolute positioning (and the unit system where the dialect has one).
    pub fn absolute_mode(&mut self, unit: Unit) {
        match self.dialect {
            Dialect::OpenSbp => self.write_raw("SA"),
            Dialect::Gcode => self.write_raw(&format!("{} G90", unit.gcode())),
        }
    }

    /// Apply the declared feed and plunge rates.
    pub fn set_speeds(&mut self) {
        let line = match self.dialect {
            Dialect::OpenSbp => format!(
                "MS, {}, {}",
                self.reference(FEED_RATE_NAME),
                self.reference(PLUNGE_RATE_NAME)
            ),
            Dialect::Gcode => format!("F{}", self.reference(FEED_RATE_NAME)),
        };
        self.write_raw(&line);
    }

    // === Spindle ===

    /// Start the spindle and wait for it to reach speed.
    pub fn spindle_on(&mut self, startup_delay: f64) {
        match self.dialect {
            Dialect::OpenSbp => {
                self.write_raw("SO, 1, 1");
                self.write_raw(&format!("PAUSE {}", format_coord(startup_delay)));
            }
            Dialect::Gcode => {
                self.write_raw("M3");
                self.write_raw(&format!("G4 P{}", format_coord(startup_delay)));
            }
        }
    }

    /// Stop the spindle.
    pub fn spindle_off(&mut self) {
        match self.dialect {
            Dialect::OpenSbp => self.write_raw("SO, 1, 0"),
            Dialect::Gcode => self.write_raw("M5"),
        }
    }

    // === Movement commands ===

    /// Rapid move in XY at the current height.
    pub fn rapid_xy(&mut self, x: f64, y: f64) {
        let line = match self.dialect {
            Dialect::OpenSbp => format!("J2, {}, {}", format_coord(x), format_coord(y)),
            Dialect::Gcode => format!("G0 X{} Y{}", format_coord(x), format_coord(y)),
        };
        self.write_raw(&line);
    }

    /// Rapid retract to the declared safe height.
    pub fn rapid_safe_z(&mut self) {
        let line = match self.dialect {
            Dialect::OpenSbp => format!("JZ, {}", self.reference(SAFE_Z_NAME)),
            Dialect::Gcode => format!("G0 Z{}", self.reference(SAFE_Z_NAME)),
        };
        self.write_raw(&line);
    }

    /// Straight plunge to `z` at the plunge rate.
    pub fn plunge(&mut self, z: f64) {
        let line = match self.dialect {
            Dialect::OpenSbp => format!("MZ, {}", format_coord(z)),
            Dialect::Gcode => format!(
                "G1 Z{} F{}",
                format_coord(z),
                self.reference(PLUNGE_RATE_NAME)
            ),
        };
        self.write_raw(&line);
    }

    /// Cutting move in XY at the feed rate.
    pub fn move_xy(&mut self, x: f64, y: f64) {
        let line = match self.dialect {
            Dialect::OpenSbp => format!("M2, {}, {}", format_coord(x), format_coord(y)),
            Dialect::Gcode => format!(
                "G1 X{} Y{} F{}",
                format_coord(x),
                format_coord(y),
                self.reference(FEED_RATE_NAME)
            ),
        };
        self.write_raw(&line);
    }

    /// One clockwise full circle around `(cx, cy)` descending to `z`.
    ///
    /// The tool must already sit at `(cx + radius, cy)`. In OpenSBP this is a
    /// clockwise `CG` with the tool on the line and one repetition. The
    /// options field selects a spiral plunge so Z descends along the circle;
    /// the plunge depth is measured from Z zero.
    pub fn helical_circle(&mut self, cx: f64, cy: f64, radius: f64, z: f64) {
        let start_x = format_coord(cx + radius);
        let start_y = format_coord(cy);
        let i = format_coord(-radius);
        let j = format_coord(0.0);
        let z = format_coord(z);

        let line = match self.dialect {
            Dialect::OpenSbp => format!(
                "CG, , {}, {}, {}, {}, T, 1, {}, 1, , , {}, 0, 1",
                start_x, start_y, i, j, z, CG_SPIRAL_PLUNGE
            ),
            Dialect::Gcode => format!(
                "G2 X{} Y{} Z{} I{} J{} F{}",
                start_x,
                start_y,
                z,
                i,
                j,
                self.reference(FEED_RATE_NAME)
            ),
        };
        self.write_raw(&line);
    }

    /// Rapid back to the work origin.
    pub fn return_home(&mut self) {
        match self.dialect {
            Dialect::OpenSbp => self.write_raw("JH"),
            Dialect::Gcode => self.rapid_xy(0.0, 0.0),
        }
    }

    /// Program end marker.
    pub fn end_program(&mut self) {
        match self.dialect {
            Dialect::OpenSbp => self.write_raw("END"),
            Dialect::Gcode => self.write_raw("M30"),
        }
    }
}

/// Format a numeric field with exactly three decimal places.
///
/// Values that round to zero are printed without a sign.
pub fn format_coord(value: f64) -> String {
    let formatted = format!("{:.prec$}", value, prec = DECIMALS);

    if formatted.starts_with('-') && formatted[1..].chars().all(|c| c == '0' || c == '.') {
        formatted[1..].to_string()
    } else {
        formatted
    }
}
