//! drillpath-core - Core library for CNC drilling toolpath generation.
//!
//! This library turns a set of hole positions and one drilling configuration
//! into a complete machine program (OpenSBP or RS-274 G-code) for a CNC
//! router: parametric hole patterns, a nearest-neighbor visiting order,
//! plunge/helical/counterbore strategies and configuration validation.
//!
//! # Example
//!
//! ```no_run
//! use drillpath_core::{load_job, convert_job};
//! use std::path::Path;
//!
//! let job = load_job(Path::new("panel.json")).unwrap();
//! let program = convert_job(&job).unwrap();
//! println!("{}", program);
//! ```

pub mod config;
pub mod error;
pub mod generator;
pub mod model;
pub mod parser;
pub mod pattern;
pub mod transform;
pub mod validation;

// Re-exports for convenience
pub use config::{Dialect, Settings, Unit};
pub use error::{ErrorCode, ProgramError, Result};
pub use generator::{generate_program, Operation};
pub use model::{DrillConfig, DrillType, Hole, Job, MotionParams};
pub use parser::{load_job, parse_job};
pub use pattern::{circular_pattern, rectangular_array, PatternSpec};
pub use transform::optimize_order;
pub use validation::{quick_validate, validate_config, validate_job, ValidationResult};

/// Convert a job into a machine program.
///
/// This is the main high-level function that performs the full pipeline:
/// 1. Reject invalid patterns, configurations and empty jobs
/// 2. Report non-blocking warnings through the log
/// 3. Resolve explicit and pattern holes
/// 4. Generate the program
pub fn convert_job(job: &Job) -> Result<String> {
    // Blocking problems
    quick_validate(job)?;

    // Warnings never stop generation
    let validation = validate_job(job);
    for warning in &validation.warnings {
        tracing::warn!("{}", warning);
    }

    let holes = job.resolve_holes();
    generate_program(&holes, &job.config, &job.settings)
}
