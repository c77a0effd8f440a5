//! Job validation module.

mod validate;

pub use validate::{quick_validate, validate_config, validate_job, ValidationResult};
