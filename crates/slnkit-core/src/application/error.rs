//! Application layer errors.
//!
//! These errors represent failures in orchestration, not business logic.
//! Business logic errors are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// The external command could not be started at all (missing
    /// executable, bad working directory).
    #[error("Failed to launch '{command}': {reason}")]
    CommandLaunch { command: String, reason: String },

    /// The external command ran but exited with a non-zero status.
    #[error("Command '{command}' exited with status {code}")]
    CommandFailed { command: String, code: i32 },

    /// Project directory already exists (blocks `add`).
    #[error("Project already exists at {}", path.display())]
    ProjectExists { path: PathBuf },

    /// Project directory is missing (blocks `remove`).
    #[error("Cannot find project at {}", path.display())]
    ProjectNotFound { path: PathBuf },

    /// The `.sln` file is missing from the solution root.
    #[error("Cannot find Visual Studio solution file {}", path.display())]
    SolutionNotFound { path: PathBuf },

    /// The configured log directory is missing or not a directory.
    #[error("Log path '{}' does not exist or is not a directory", path.display())]
    LogDirInvalid { path: PathBuf },

    /// Writing to the log sink failed.
    #[error("Failed to write log output: {reason}")]
    SinkWrite { reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::CommandLaunch { command, reason } => vec![
                format!("Could not start: {}", command),
                format!("Reason: {}", reason),
                "Ensure the .NET SDK is installed and 'dotnet' is on your PATH".into(),
            ],
            Self::CommandFailed { command, code } => vec![
                format!("'{}' failed with exit status {}", command, code),
                "The tool's output above (and the log file) has details".into(),
            ],
            Self::ProjectExists { path } => vec![
                format!("A project already exists at {}", path.display()),
                "Choose a different project name".into(),
                "Or remove the existing project first: slnkit remove <name>".into(),
            ],
            Self::ProjectNotFound { path } => vec![
                format!("No project directory at {}", path.display()),
                "Check the project name and --root".into(),
            ],
            Self::SolutionNotFound { path } => vec![
                format!("No solution file at {}", path.display()),
                "Check --sln and --root".into(),
                "Create one with: dotnet new sln --name <name>".into(),
            ],
            Self::LogDirInvalid { path } => vec![
                format!("Log directory {} is unusable", path.display()),
                "Create it first, or point --log-dir at an existing directory".into(),
            ],
            Self::SinkWrite { .. } => vec![
                "Check permissions and free space on the log directory".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::CommandLaunch { .. } | Self::CommandFailed { .. } | Self::SinkWrite { .. } => {
                ErrorCategory::Internal
            }
            Self::ProjectExists { .. } => ErrorCategory::Validation,
            Self::ProjectNotFound { .. } | Self::SolutionNotFound { .. } => ErrorCategory::NotFound,
            Self::LogDirInvalid { .. } => ErrorCategory::Configuration,
        }
    }
}
