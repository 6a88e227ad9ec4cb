//! Error types for Basecamp operations.
//!
//! This module defines [`BasecampError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `BasecampError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `BasecampError::Other`) for unexpected errors
//! - Any failed external command aborts the whole run; there is no per-item
//!   or per-category recovery

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for Basecamp operations.
#[derive(Debug, Error)]
pub enum BasecampError {
    /// Shell command failed (the one real error class of a bootstrap run).
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// Host platform cannot be provisioned.
    #[error("Unsupported platform: {message}")]
    UnsupportedPlatform { message: String },

    /// Remote installer script could not be retrieved.
    #[error("Failed to fetch installer script from {url}: {message}")]
    Fetch { url: String, message: String },

    /// Failed to parse the settings file.
    #[error("Failed to parse settings at {path}: {message}")]
    SettingsParse { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for Basecamp operations.
pub type Result<T> = std::result::Result<T, BasecampError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn command_failed_displays_command_and_code() {
        let err = BasecampError::CommandFailed {
            command: "brew install wget".into(),
            code: Some(1),
        };
        let msg = err.to_string();
        assert!(msg.contains("brew install wget"));
        assert!(msg.contains("1"));
    }

    #[test]
    fn command_failed_displays_none_code() {
        let err = BasecampError::CommandFailed {
            command: "brew tap homebrew/cask-fonts".into(),
            code: None,
        };
        assert!(err.to_string().contains("None"));
    }

    #[test]
    fn unsupported_platform_displays_message() {
        let err = BasecampError::UnsupportedPlatform {
            message: "basecamp provisions macOS hosts only".into(),
        };
        assert!(err.to_string().contains("macOS"));
    }

    #[test]
    fn fetch_displays_url_and_message() {
        let err = BasecampError::Fetch {
            url: "https://example.com/install.sh".into(),
            message: "HTTP 503".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("https://example.com/install.sh"));
        assert!(msg.contains("503"));
    }

    #[test]
    fn settings_parse_displays_path_and_message() {
        let err = BasecampError::SettingsParse {
            path: PathBuf::from("/home/user/.config/basecamp/config.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("config.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: BasecampError = io_err.into();
        assert!(matches!(err, BasecampError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(BasecampError::UnsupportedPlatform {
                message: "test".into(),
            })
        }
        assert!(returns_error().is_err());
    }
}
