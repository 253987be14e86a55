//! External command description.
//!
//! [`CommandSpec`] is the unit handed to the `CommandRunner` port. The
//! runner treats it as opaque: it never inspects or rewrites the arguments.
//! Arguments are kept as discrete argv elements rather than a shell string,
//! so nothing is ever re-parsed by a shell.

use std::fmt;
use std::path::PathBuf;

use crate::domain::DomainError;

/// One external invocation: program, argv, and an optional working directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandSpec {
    program: String,
    args: Vec<String>,
    cwd: Option<PathBuf>,
}

impl CommandSpec {
    /// Start building a command for `program`.
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
            cwd: None,
        }
    }

    /// Append a single argument.
    pub fn arg(mut self, arg: impl Into<String>) -> Self {
        self.args.push(arg.into());
        self
    }

    /// Append several arguments.
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.args.extend(args.into_iter().map(Into::into));
        self
    }

    /// Run the command from `dir` instead of the caller's working directory.
    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    /// Reject specs with an empty program name.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.program.trim().is_empty() {
            return Err(DomainError::EmptyCommand);
        }
        Ok(())
    }

    pub fn program(&self) -> &str {
        &self.program
    }

    pub fn argv(&self) -> &[String] {
        &self.args
    }

    pub fn cwd(&self) -> Option<&PathBuf> {
        self.cwd.as_ref()
    }
}

impl fmt::Display for CommandSpec {
    /// Render for logs and dry-run output. Arguments containing whitespace
    /// are quoted so the printed line is copy-pasteable.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            if arg.chars().any(char::is_whitespace) {
                write!(f, " \"{arg}\"")?;
            } else {
                write!(f, " {arg}")?;
            }
        }
        Ok(())
    }
}
