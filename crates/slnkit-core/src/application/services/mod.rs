//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish
//! high-level use cases like "add a project to the solution".

pub mod solution_service;

pub use solution_service::SolutionService;
