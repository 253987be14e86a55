//! Slnkit Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the slnkit
//! solution management tool, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           slnkit-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │          (SolutionService)              │
//! │         Orchestrates Use Cases          │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │  (Driven: Runner, LogSink, Workspace)   │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    slnkit-adapters (Infrastructure)     │
//! │  (SystemRunner, FileSink, LocalWorkspace)│
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (CommandSpec, ProjectName, Solution)   │
//! │        No External Dependencies         │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use slnkit_core::{
//!     application::SolutionService,
//!     domain::{ProjectName, ProjectTemplate, SolutionContext},
//! };
//!
//! // 1. Describe the solution the commands operate on
//! let ctx = SolutionContext::new("./work", "MySolution", ProjectName::new("MyProject")?)?;
//!
//! // 2. Use application service (with injected adapters)
//! let service = SolutionService::new(runner, workspace);
//! service.add_project(&ctx, ProjectTemplate::Console, &sink)?;
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        SolutionService,
        ports::{CommandRunner, LogSink, Workspace},
    };
    pub use crate::domain::{CommandSpec, ProjectName, ProjectTemplate, SolutionContext};
    pub use crate::error::{SlnkitError, SlnkitResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
