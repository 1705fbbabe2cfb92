//! Error types and exit codes for rsrch.

use std::path::PathBuf;
use thiserror::Error;

/// Process exit codes for CLI failures.
pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const GENERAL_ERROR: i32 = 1;
    pub const DOCUMENT_NOT_FOUND: i32 = 2;
    pub const DESTINATION_EXISTS: i32 = 3;
    pub const PATH_OUTSIDE_ROOTS: i32 = 4;
}

/// Main error type for rsrch operations.
#[derive(Error, Debug)]
pub enum ResearchError {
    #[error("Research document not found at {0}")]
    DocumentNotFound(PathBuf),

    #[error("{0} already exists")]
    DestinationExists(PathBuf),

    #[error("Path must be in a research directory (.research/ or ~/.research/): {0}")]
    PathOutsideRoots(PathBuf),

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl ResearchError {
    /// Returns the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            ResearchError::DocumentNotFound(_) => exit_code::DOCUMENT_NOT_FOUND,
            ResearchError::DestinationExists(_) => exit_code::DESTINATION_EXISTS,
            ResearchError::PathOutsideRoots(_) => exit_code::PATH_OUTSIDE_ROOTS,
            _ => exit_code::GENERAL_ERROR,
        }
    }
}

/// Result type alias for rsrch operations.
pub type Result<T> = std::result::Result<T, ResearchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exit_codes() {
        let err = ResearchError::DocumentNotFound(PathBuf::from("x.md"));
        assert_eq!(err.exit_code(), exit_code::DOCUMENT_NOT_FOUND);

        let err = ResearchError::DestinationExists(PathBuf::from("x.md"));
        assert_eq!(err.exit_code(), exit_code::DESTINATION_EXISTS);

        let err = ResearchError::PathOutsideRoots(PathBuf::from("/tmp/x.md"));
        assert_eq!(err.exit_code(), exit_code::PATH_OUTSIDE_ROOTS);

        let err = ResearchError::ConfigError("bad".to_string());
        assert_eq!(err.exit_code(), exit_code::GENERAL_ERROR);
    }
}
