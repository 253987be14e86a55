//! Local filesystem workspace probes using std::fs.

use std::path::Path;

use slnkit_core::application::ports::Workspace;

/// Production workspace implementation over the real filesystem.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalWorkspace;

impl LocalWorkspace {
    /// Create a new local workspace adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Workspace for LocalWorkspace {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn is_dir(&self, path: &Path) -> bool {
        path.is_dir()
    }

    fn is_file(&self, path: &Path) -> bool {
        path.is_file()
    }
}
