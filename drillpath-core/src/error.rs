//! Error types for drill program generation.

use std::path::PathBuf;
use thiserror::Error;

/// Error codes for job processing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// File not found (-1)
    FileNotFound = -1,
    /// Empty file (-2)
    EmptyFile = -2,
    /// General parse error (-3)
    ParseError = -3,
    /// No holes to machine (E100)
    NoHoles = 100,
    /// Drilling configuration rejected (E101)
    InvalidConfig = 101,
    /// Pattern parameters rejected (E102)
    InvalidPattern = 102,
}

/// Main error type for program generation.
#[derive(Debug, Error)]
pub enum ProgramError {
    #[error("File not found: {path}")]
    FileNotFound { path: PathBuf },

    #[error("Empty file: {path}")]
    EmptyFile { path: PathBuf },

    #[error("Invalid job file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("No holes to drill")]
    NoHoles,

    #[error("Invalid drill configuration: {}", .problems.join("; "))]
    InvalidConfig { problems: Vec<String> },

    #[error("Invalid pattern: {}", .problems.join("; "))]
    InvalidPattern { problems: Vec<String> },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl ProgramError {
    /// Get the error code for this error.
    pub fn code(&self) -> ErrorCode {
        match self {
            ProgramError::FileNotFound { .. } => ErrorCode::FileNotFound,
            ProgramError::EmptyFile { .. } => ErrorCode::EmptyFile,
            ProgramError::Json(_) => ErrorCode::ParseError,
            ProgramError::NoHoles => ErrorCode::NoHoles,
            ProgramError::InvalidConfig { .. } => ErrorCode::InvalidConfig,
            ProgramError::InvalidPattern { .. } => ErrorCode::InvalidPattern,
            ProgramError::Io(_) => ErrorCode::FileNotFound,
        }
    }

    /// Get the numeric error code value.
    pub fn code_value(&self) -> i32 {
        self.code() as i32
    }
}

/// Result type alias for generation operations.
pub type Result<T> = std::result::Result<T, ProgramError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_codes() {
        assert_eq!(ProgramError::NoHoles.code(), ErrorCode::NoHoles);
        assert_eq!(ProgramError::NoHoles.code_value(), 100);
        let err = ProgramError::InvalidConfig {
            problems: vec!["a".to_string(), "b".to_string()],
        };
        assert_eq!(err.code_value(), 101);
    }

    #[test]
    fn test_invalid_config_message_lists_problems() {
        let err = ProgramError::InvalidConfig {
            problems: vec![
                "Diameter must be greater than 0".to_string(),
                "Depth is required".to_string(),
            ],
        };
        assert_eq!(
            err.to_string(),
            "Invalid drill configuration: Diameter must be greater than 0; Depth is required"
        );
    }
}
