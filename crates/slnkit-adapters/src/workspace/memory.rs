//! In-memory workspace for tests.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use slnkit_core::application::ports::Workspace;

/// Workspace backed by two path sets instead of a filesystem.
#[derive(Debug, Clone, Default)]
pub struct MemoryWorkspace {
    dirs: HashSet<PathBuf>,
    files: HashSet<PathBuf>,
}

impl MemoryWorkspace {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.dirs.insert(path.into());
        self
    }

    pub fn with_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.files.insert(path.into());
        self
    }
}

impl Workspace for MemoryWorkspace {
    fn exists(&self, path: &Path) -> bool {
        self.is_dir(path) || self.is_file(path)
    }

    fn is_dir(&self, path: &Path) -> bool {
        self.dirs.contains(path)
    }

    fn is_file(&self, path: &Path) -> bool {
        self.files.contains(path)
    }
}
