//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `slnkit-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::CommandSpec;
use crate::error::SlnkitResult;

/// Port for the destination of subprocess output and use-case progress.
///
/// Implemented by:
/// - `slnkit_adapters::sink::FileSink` (production: timestamped file + console)
/// - `slnkit_adapters::sink::ConsoleSink` (production: console only)
/// - `slnkit_adapters::sink::MemorySink` (testing)
///
/// ## Design Notes
///
/// A sink instance is passed explicitly into every operation that logs.
/// There is deliberately no process-global sink; the caller owns its
/// lifetime and two concurrent invocations cannot share hidden state.
///
/// Sink methods are infallible by contract: an implementation that cannot
/// persist a line must degrade (e.g. emit a `tracing` event) rather than
/// abort the subprocess drain mid-stream.
#[cfg_attr(test, mockall::automock)]
pub trait LogSink: Send + Sync {
    /// Record one informational line.
    fn info(&self, message: &str);

    /// Record one error line.
    fn error(&self, message: &str);
}

/// Port for synchronous external-process execution.
///
/// Implemented by:
/// - `slnkit_adapters::process::SystemRunner` (production)
/// - `slnkit_adapters::process::ScriptedRunner` (testing)
///
/// ## Contract
///
/// - Spawns the process with stdout and stderr captured, not inherited.
/// - Streams stdout line by line into `sink.info`, each line trimmed of
///   surrounding whitespace, in arrival order.
/// - Blocks until the process exits; the stdout pipe is read to
///   end-of-stream before waiting, so a full pipe can never deadlock.
/// - Launch failure maps to `ApplicationError::CommandLaunch`; a non-zero
///   exit maps to `ApplicationError::CommandFailed` after forwarding the
///   captured stderr to `sink.error`.
#[cfg_attr(test, mockall::automock)]
pub trait CommandRunner: Send + Sync {
    /// Execute `spec` to completion, draining its output into `sink`.
    fn run(&self, spec: &CommandSpec, sink: &dyn LogSink) -> SlnkitResult<()>;
}

/// Port for path-existence predicates on the solution workspace.
///
/// Implemented by:
/// - `slnkit_adapters::workspace::LocalWorkspace` (production)
/// - `slnkit_adapters::workspace::MemoryWorkspace` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Workspace: Send + Sync {
    /// Check if path exists (file or directory).
    fn exists(&self, path: &Path) -> bool;

    /// Check if path exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Check if path exists and is a regular file.
    fn is_file(&self, path: &Path) -> bool;
}
