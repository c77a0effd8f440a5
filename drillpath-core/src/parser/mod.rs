//! Job file loader module.

mod job;

pub use job::{load_job, parse_job};
