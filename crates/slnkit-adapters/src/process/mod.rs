//! `CommandRunner` implementations.

pub mod scripted;
pub mod system;

pub use scripted::{ScriptedCall, ScriptedRunner};
pub use system::SystemRunner;
