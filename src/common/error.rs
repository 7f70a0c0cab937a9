use std::path::PathBuf;
use thiserror::Error;

use crate::infrastructure::scm::ScmError;

#[derive(Error, Debug)]
pub enum PkgdevError {
    #[error("Usage error: {message}")]
    UsageError { message: String },

    #[error("Invalid target specification '{spec}': {message}")]
    InvalidTargetSpec { spec: String, message: String },

    #[error("Invalid {label}: {}", names.join(", "))]
    InvalidTargets { label: String, names: Vec<String> },

    #[error("Version control operation failed: {message}")]
    ScmError {
        message: String,
        #[source]
        source: Option<ScmError>,
    },

    #[error("File system operation failed: {message}")]
    FileSystemError {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<std::io::Error>,
    },

    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        path: Option<PathBuf>,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    #[error("Command execution failed: {message}")]
    CommandError {
        message: String,
        command: String,
        exit_code: Option<i32>,
        #[source]
        source: Option<std::io::Error>,
    },

    #[error("Internal error: {message}")]
    InternalError { message: String },
}

impl PkgdevError {
    pub fn usage_error(message: impl Into<String>) -> Self {
        Self::UsageError {
            message: message.into(),
        }
    }

    pub fn invalid_target_spec(spec: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidTargetSpec {
            spec: spec.into(),
            message: message.into(),
        }
    }

    pub fn invalid_targets(label: impl Into<String>, names: Vec<String>) -> Self {
        Self::InvalidTargets {
            label: label.into(),
            names,
        }
    }

    pub fn filesystem_error_with_source(
        message: impl Into<String>,
        path: Option<PathBuf>,
        source: std::io::Error,
    ) -> Self {
        Self::FileSystemError {
            message: message.into(),
            path,
            source: Some(source),
        }
    }

    pub fn config_error_with_source(
        message: impl Into<String>,
        path: Option<PathBuf>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::ConfigError {
            message: message.into(),
            path,
            source: Some(Box::new(source)),
        }
    }

    pub fn command_error(
        message: impl Into<String>,
        command: impl Into<String>,
        exit_code: Option<i32>,
    ) -> Self {
        Self::CommandError {
            message: message.into(),
            command: command.into(),
            exit_code,
            source: None,
        }
    }

    pub fn command_error_with_source(
        message: impl Into<String>,
        command: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        Self::CommandError {
            message: message.into(),
            command: command.into(),
            exit_code: None,
            source: Some(source),
        }
    }

    pub fn internal_error(message: impl Into<String>) -> Self {
        Self::InternalError {
            message: message.into(),
        }
    }

    /// Offending names of an invalid-target error, if this is one
    pub fn invalid_target_names(&self) -> Option<(&str, &[String])> {
        match self {
            Self::InvalidTargets { label, names } => Some((label.as_str(), names.as_slice())),
            _ => None,
        }
    }

    /// Whether the CLI should print its help text before reporting this error
    pub fn wants_usage(&self) -> bool {
        matches!(
            self,
            Self::UsageError { .. } | Self::InvalidTargets { .. } | Self::InvalidTargetSpec { .. }
        )
    }
}

impl From<ScmError> for PkgdevError {
    fn from(error: ScmError) -> Self {
        Self::ScmError {
            message: error.to_string(),
            source: Some(error),
        }
    }
}

impl From<std::io::Error> for PkgdevError {
    fn from(error: std::io::Error) -> Self {
        Self::filesystem_error_with_source("File system operation failed", None, error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage_error_creation() {
        let error = PkgdevError::usage_error("no arguments given");
        assert!(matches!(error, PkgdevError::UsageError { .. }));
        assert_eq!(error.to_string(), "Usage error: no arguments given");
        assert!(error.wants_usage());
    }

    #[test]
    fn test_invalid_targets_lists_every_name() {
        let error =
            PkgdevError::invalid_targets("target", vec!["foo".to_string(), "bar".to_string()]);
        assert_eq!(error.to_string(), "Invalid target: foo, bar");

        let (label, names) = error.invalid_target_names().unwrap();
        assert_eq!(label, "target");
        assert_eq!(names, ["foo".to_string(), "bar".to_string()]);
    }

    #[test]
    fn test_command_error_keeps_exit_code() {
        let error = PkgdevError::command_error("git pull failed", "git pull", Some(128));
        if let PkgdevError::CommandError { exit_code, .. } = error {
            assert_eq!(exit_code, Some(128));
        } else {
            panic!("Expected CommandError");
        }
    }

    #[test]
    fn test_filesystem_error_with_path() {
        let path = PathBuf::from("/test/path");
        let io_error = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let error =
            PkgdevError::filesystem_error_with_source("test message", Some(path.clone()), io_error);
        if let PkgdevError::FileSystemError { path: Some(p), .. } = error {
            assert_eq!(p, path);
        } else {
            panic!("Expected FileSystemError with path");
        }
        assert!(!PkgdevError::internal_error("x").wants_usage());
    }

    #[test]
    fn test_error_conversion_from_io_error() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let error: PkgdevError = io_error.into();
        assert!(matches!(error, PkgdevError::FileSystemError { .. }));
    }
}
