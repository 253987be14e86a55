//! Capturing log sink for tests.

use std::sync::Mutex;

use slnkit_core::application::ports::LogSink;

/// Sink that stores every line in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    infos: Mutex<Vec<String>>,
    errors: Mutex<Vec<String>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All `info` lines, in arrival order.
    pub fn infos(&self) -> Vec<String> {
        self.infos.lock().unwrap().clone()
    }

    /// All `error` lines, in arrival order.
    pub fn errors(&self) -> Vec<String> {
        self.errors.lock().unwrap().clone()
    }
}

impl LogSink for MemorySink {
    fn info(&self, message: &str) {
        self.infos.lock().unwrap().push(message.to_string());
    }

    fn error(&self, message: &str) {
        self.errors.lock().unwrap().push(message.to_string());
    }
}
