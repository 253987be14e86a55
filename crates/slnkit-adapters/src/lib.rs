//! Infrastructure adapters for slnkit.
//!
//! This crate implements the ports defined in `slnkit_core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod process;
pub mod sink;
pub mod workspace;

// Re-export commonly used adapters
pub use process::{ScriptedCall, ScriptedRunner, SystemRunner};
pub use sink::{ConsoleSink, FileSink, MemorySink};
pub use workspace::{LocalWorkspace, MemoryWorkspace};
