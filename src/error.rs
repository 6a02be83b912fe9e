//! Error types for reqsync operations.
//!
//! This module defines [`ReqsyncError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `ReqsyncError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `ReqsyncError::Other`) for unexpected errors
//! - Recoverable stages (inventory read, manifest parse) degrade to safe
//!   defaults at the orchestration layer instead of aborting

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for reqsync operations.
#[derive(Debug, Error)]
pub enum ReqsyncError {
    /// Failed to read the requirements manifest.
    #[error("Failed to read manifest at {path}: {source}")]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The pip subprocess could not be started at all.
    #[error("Failed to launch '{command}': {source}")]
    PipSpawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    /// The pip subprocess ran but reported failure.
    #[error("Command failed with exit code {code:?}: {command}")]
    PipFailed { command: String, code: Option<i32> },

    /// `pip list --format=json` produced output we could not decode.
    #[error("Could not decode installed-package listing: {message}")]
    InventoryDecode { message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for reqsync operations.
pub type Result<T> = std::result::Result<T, ReqsyncError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_read_displays_path() {
        let err = ReqsyncError::ManifestRead {
            path: PathBuf::from("/app/requirements.txt"),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "missing"),
        };
        assert!(err.to_string().contains("/app/requirements.txt"));
    }

    #[test]
    fn pip_spawn_displays_command() {
        let err = ReqsyncError::PipSpawn {
            command: "python3 -m pip list".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        let msg = err.to_string();
        assert!(msg.contains("python3 -m pip list"));
        assert!(msg.contains("no such file"));
    }

    #[test]
    fn pip_failed_displays_command_and_code() {
        let err = ReqsyncError::PipFailed {
            command: "python3 -m pip install -r requirements.txt".into(),
            code: Some(1),
        };
        let msg = err.to_string();
        assert!(msg.contains("pip install"));
        assert!(msg.contains("1"));
    }

    #[test]
    fn inventory_decode_displays_message() {
        let err = ReqsyncError::InventoryDecode {
            message: "expected value at line 1".into(),
        };
        assert!(err.to_string().contains("expected value"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: ReqsyncError = io_err.into();
        assert!(matches!(err, ReqsyncError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(ReqsyncError::InventoryDecode {
                message: "test".into(),
            })
        }
        assert!(returns_error().is_err());
    }
}
