//! JSON job file loader.

use crate::error::{ProgramError, Result};
use crate::model::Job;
use std::path::Path;

/// Load a job from a JSON file.
///
/// Any part of the job may be omitted; missing settings take their defaults.
pub fn load_job(path: &Path) -> Result<Job> {
    use std::fs;

    if !path.exists() {
        return Err(ProgramError::FileNotFound {
            path: path.to_path_buf(),
        });
    }

    let content = fs::read_to_string(path)?;

    if content.trim().is_empty() {
        return Err(ProgramError::EmptyFile {
            path: path.to_path_buf(),
        });
    }

    let job = parse_job(&content)?;
    tracing::debug!(
        "Loaded {}: {} holes, {} patterns",
        path.display(),
        job.holes.len(),
        job.patterns.len()
    );

    Ok(job)
}

/// Parse a job from JSON text.
pub fn parse_job(content: &str) -> Result<Job> {
    Ok(serde_json::from_str(content)?)
}
