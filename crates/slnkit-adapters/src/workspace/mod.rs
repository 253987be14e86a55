//! `Workspace` implementations.

pub mod local;
pub mod memory;

pub use local::LocalWorkspace;
pub use memory::MemoryWorkspace;
