//! Data model types for drill program generation.

mod drill;
mod hole;
mod job;

pub use drill::{DrillConfig, DrillType, MotionParams};
pub use hole::Hole;
pub use job::Job;
