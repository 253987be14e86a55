//! Console-only log sink.

use slnkit_core::application::ports::LogSink;

/// Sink that forwards everything to `tracing` and persists nothing.
///
/// Used when no log directory is configured; the subscriber set up by the
/// CLI decides how the lines are rendered.
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleSink;

impl ConsoleSink {
    pub fn new() -> Self {
        Self
    }
}

impl LogSink for ConsoleSink {
    fn info(&self, message: &str) {
        tracing::info!("{message}");
    }

    fn error(&self, message: &str) {
        tracing::error!("{message}");
    }
}
