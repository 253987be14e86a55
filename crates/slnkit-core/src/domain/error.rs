use thiserror::Error;

/// Root domain error type.
///
/// All errors are:
/// - Cloneable (cheap to pass across layers)
/// - Categorizable (for CLI display)
/// - Actionable (provides suggestions)
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("Invalid project name '{name}': {reason}")]
    InvalidProjectName { name: String, reason: String },

    #[error("Invalid solution name '{name}': {reason}")]
    InvalidSolutionName { name: String, reason: String },

    /// A command spec was built without a program to run.
    #[error("Command has no program to execute")]
    EmptyCommand,
}

impl DomainError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidProjectName { name, reason } => vec![
                format!("Project name '{}' is invalid: {}", name, reason),
                "Use alphanumeric characters, hyphens, underscores and dots".into(),
                "Examples: MyApp, My.Service, worker_pool".into(),
            ],
            Self::InvalidSolutionName { name, reason } => vec![
                format!("Solution name '{}' is invalid: {}", name, reason),
                "Pass the solution name without the '.sln' extension".into(),
            ],
            Self::EmptyCommand => vec![
                "An empty command was constructed".into(),
                "This is likely a bug in the caller".into(),
            ],
        }
    }

    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidProjectName { .. } | Self::InvalidSolutionName { .. } => {
                ErrorCategory::Validation
            }
            Self::EmptyCommand => ErrorCategory::Internal,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    Internal,
}
