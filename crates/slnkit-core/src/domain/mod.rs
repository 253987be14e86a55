//! Core domain layer for slnkit.
//!
//! This module contains pure business logic with ZERO external dependencies.
//! All I/O (process spawning, filesystem probes, log files) is handled via
//! ports (traits) defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, process, or external calls
//! - **No external crates**: Only std library + thiserror/serde derives
//! - **Immutable values**: All domain objects are Clone + PartialEq

pub mod command;
pub mod error;
pub mod project;

// Re-exports for convenience
pub use command::CommandSpec;
pub use error::{DomainError, ErrorCategory};
pub use project::{ProjectName, ProjectTemplate, SolutionContext};
