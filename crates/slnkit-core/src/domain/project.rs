//! Value objects describing the solution a use case operates on.

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::domain::DomainError;

// ── Project name ──────────────────────────────────────────────────────────────

/// A validated C# project name.
///
/// Validation mirrors what `dotnet new --name` accepts in practice and what
/// keeps the generated directory sane: non-empty, no path separators, no
/// leading dot, printable characters only.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProjectName(String);

impl ProjectName {
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        let reason = if name.is_empty() {
            Some("name cannot be empty")
        } else if name.starts_with('.') {
            Some("name cannot start with '.'")
        } else if name.contains('/') || name.contains('\\') {
            Some("name cannot contain path separators")
        } else if name.chars().any(char::is_whitespace) {
            Some("name cannot contain whitespace")
        } else {
            None
        };

        match reason {
            Some(reason) => Err(DomainError::InvalidProjectName {
                name,
                reason: reason.into(),
            }),
            None => Ok(Self(name)),
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ProjectName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

// ── Project template ──────────────────────────────────────────────────────────

/// The `dotnet new` template used when creating a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectTemplate {
    /// Console application (the classic default).
    Console,
    /// Class library.
    ClassLib,
    /// xUnit test project.
    XUnit,
    /// ASP.NET Core empty web application.
    Web,
}

impl ProjectTemplate {
    /// The template short-name as `dotnet new` expects it.
    pub fn dotnet_name(self) -> &'static str {
        match self {
            Self::Console => "console",
            Self::ClassLib => "classlib",
            Self::XUnit => "xunit",
            Self::Web => "web",
        }
    }
}

impl Default for ProjectTemplate {
    fn default() -> Self {
        Self::Console
    }
}

impl fmt::Display for ProjectTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dotnet_name())
    }
}

// ── Solution context ──────────────────────────────────────────────────────────

/// Everything the use cases need to know about the target solution: where it
/// lives, what the `.sln` file is called, and which project is being managed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolutionContext {
    root: PathBuf,
    solution: String,
    project: ProjectName,
}

impl SolutionContext {
    pub fn new(
        root: impl Into<PathBuf>,
        solution: impl Into<String>,
        project: ProjectName,
    ) -> Result<Self, DomainError> {
        let solution = solution.into();
        if solution.is_empty() {
            return Err(DomainError::InvalidSolutionName {
                name: solution,
                reason: "solution name cannot be empty".into(),
            });
        }
        // Tolerate a trailing `.sln`; the file name is derived either way.
        let solution = solution.trim_end_matches(".sln").to_string();
        if solution.is_empty() || solution.contains('/') || solution.contains('\\') {
            return Err(DomainError::InvalidSolutionName {
                name: solution,
                reason: "solution name must be a bare name, not a path".into(),
            });
        }

        Ok(Self {
            root: root.into(),
            solution,
            project,
        })
    }

    /// Directory the commands run from.
    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn solution(&self) -> &str {
        &self.solution
    }

    pub fn project(&self) -> &ProjectName {
        &self.project
    }

    /// `<solution>.sln`, relative to the root.
    pub fn solution_file_name(&self) -> String {
        format!("{}.sln", self.solution)
    }

    /// Absolute-or-relative path to the `.sln` file.
    pub fn solution_file(&self) -> PathBuf {
        self.root.join(self.solution_file_name())
    }

    /// Path where the project directory lives (or would live).
    pub fn project_dir(&self) -> PathBuf {
        self.root.join(self.project.as_str())
    }
}
