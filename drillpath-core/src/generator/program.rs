//! Program assembly: header, initialization, ordered hole blocks, footer.

use chrono::{Local, NaiveDateTime};

use super::operation::{Operation, Synthesize};
use super::writer::{format_coord, ProgramWriter};
use crate::config::{Settings, DEPTH_NAME, FEED_RATE_NAME, PLUNGE_RATE_NAME, SAFE_Z_NAME};
use crate::error::{ProgramError, Result};
use crate::model::{DrillConfig, DrillType, Hole, MotionParams};
use crate::transform::{optimize_order, travel_distance};

/// Application name written to the header.
const APP_NAME: &str = "drillpath";

/// Prefix of the header line holding the generation time.
pub const GENERATED_PREFIX: &str = "Generated: ";

/// Generate a complete program for the holes, stamped with the current time.
///
/// Fails with [`ProgramError::NoHoles`] when `holes` is empty. The
/// configuration is not re-validated here.
pub fn generate_program(holes: &[Hole], config: &DrillConfig, settings: &Settings) -> Result<String> {
    generate_program_at(holes, config, settings, Local::now().naive_local())
}

/// Generate a complete program with an explicit generation time.
pub fn generate_program_at(
    holes: &[Hole],
    config: &DrillConfig,
    settings: &Settings,
    generated_at: NaiveDateTime,
) -> Result<String> {
    if holes.is_empty() {
        return Err(ProgramError::NoHoles);
    }

    let motion = config.motion(settings);
    let operation = Operation::from_config(config, motion.unit);
    let ordered = optimize_order(holes);

    let mut writer = ProgramWriter::new(settings.dialect);

    write_header_block(&mut writer, config, &motion, &operation, &ordered, generated_at);
    write_init_block(&mut writer, config, &motion);
    write_hole_blocks(&mut writer, &operation, &ordered);
    write_footer_block(&mut writer, &motion);

    tracing::debug!(
        "Generated {} program for {} holes ({})",
        settings.dialect,
        ordered.len(),
        operation.describe()
    );

    Ok(writer.take_output())
}

/// Header description of the drilling operation.
pub fn describe_operation(config: &DrillConfig) -> String {
    let size = |diameter: Option<f64>, depth: Option<f64>| {
        format!(
            "{} dia x {} deep",
            format_coord(diameter.unwrap_or(0.0)),
            format_coord(depth.unwrap_or(0.0).abs())
        )
    };

    let base = format!(
        "{}, {}",
        config.drill_type.label(),
        size(config.diameter, config.depth)
    );

    match (config.drill_type, config.cb_diameter, config.cb_depth) {
        (DrillType::Counterbore, Some(_), Some(_)) => {
            format!("{}, counterbore {}", base, size(config.cb_diameter, config.cb_depth))
        }
        _ => base,
    }
}

/// Write the header comments.
fn write_header_block(
    writer: &mut ProgramWriter,
    config: &DrillConfig,
    motion: &MotionParams,
    operation: &Operation,
    ordered: &[Hole],
    generated_at: NaiveDateTime,
) {
    writer.write_comment(&format!("{} v{}", APP_NAME, env!("CARGO_PKG_VERSION")));
    writer.write_comment(&format!("Operation: {}", describe_operation(config)));
    writer.write_comment(&format!("Strategy: {}", operation.describe()));
    writer.write_comment(&format!("Holes: {}", ordered.len()));

    if let Some(material) = &config.material {
        writer.write_comment(&format!("Material: {}", material));
    }
    if let Some(thickness) = config.material_thickness {
        writer.write_comment(&format!("Material thickness: {}", format_coord(thickness)));
    }
    if let Some(bit) = &config.bit {
        writer.write_comment(&format!("Bit: {}", bit));
    }
    if let Some(notes) = &config.notes {
        for line in notes.lines().filter(|l| !l.trim().is_empty()) {
            writer.write_comment(&format!("Notes: {}", line.trim()));
        }
    }

    writer.write_comment(&format!("Units: {}", motion.unit));
    writer.write_comment(&format!(
        "Rapid travel: {}",
        format_coord(travel_distance(ordered))
    ));
    writer.write_comment(&format!(
        "{}{}",
        GENERATED_PREFIX,
        generated_at.format("%Y-%m-%d %H:%M:%S")
    ));
    writer.write_blank();
}

/// Declare named values, set rates, start the spindle and move to safe Z.
///
/// The depth value is informational for the operator: every strategy emits
/// literal pass depths, since a pocket or counterbore cuts to other depths.
fn write_init_block(writer: &mut ProgramWriter, config: &DrillConfig, motion: &MotionParams) {
    writer.declare(SAFE_Z_NAME, motion.safe_z);
    writer.declare_rate(FEED_RATE_NAME, motion.feed_rate);
    writer.declare_rate(PLUNGE_RATE_NAME, motion.plunge_rate);
    writer.declare(DEPTH_NAME, config.depth.unwrap_or(0.0).abs());
    writer.write_blank();

    writer.absolute_mode(motion.unit);
    writer.set_speeds();
    writer.spindle_on(motion.spindle_startup_time);
    writer.rapid_safe_z();
}

/// Write one banner plus operation block per hole, in visiting order.
fn write_hole_blocks(writer: &mut ProgramWriter, operation: &Operation, ordered: &[Hole]) {
    for (idx, hole) in ordered.iter().enumerate() {
        writer.write_blank();
        writer.write_comment(&format!(
            "Hole {}: X={} Y={}",
            idx + 1,
            format_coord(hole.x),
            format_coord(hole.y)
        ));
        operation.emit(writer, hole.x, hole.y);
    }
}

/// Retract, stop the spindle, optionally go home, end the program.
fn write_footer_block(writer: &mut ProgramWriter, motion: &MotionParams) {
    writer.write_blank();
    writer.write_comment("Finish");
    writer.rapid_safe_z();
    writer.spindle_off();
    if motion.return_home {
        writer.return_home();
    }
    writer.end_program();
}
