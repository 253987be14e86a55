//! File-backed log sink.
//!
//! Every invocation of the tool writes a fresh log file into the configured
//! directory, named after the local start time:
//! `2026_08_23__14_05_31_log.txt`. Each line is
//! `[<timestamp>][<level>] <message>`.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use chrono::Local;
use tracing::warn;

use slnkit_core::{
    application::{ApplicationError, ports::LogSink},
    error::SlnkitResult,
};

const FILE_NAME_FORMAT: &str = "%Y_%m_%d__%H_%M_%S";
const LINE_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Sink that appends to a timestamped log file and mirrors every line to
/// the console via `tracing`, so the operator sees subprocess output live.
#[derive(Debug)]
pub struct FileSink {
    file: Mutex<File>,
    path: PathBuf,
}

impl FileSink {
    /// Open a new log file under `log_dir`.
    ///
    /// `log_dir` must already exist and be a directory; this is a
    /// configuration error, not something the sink creates on the fly.
    pub fn create(log_dir: impl AsRef<Path>) -> SlnkitResult<Self> {
        let log_dir = log_dir.as_ref();
        if !log_dir.is_dir() {
            return Err(ApplicationError::LogDirInvalid {
                path: log_dir.to_path_buf(),
            }
            .into());
        }

        let name = format!("{}_log.txt", Local::now().format(FILE_NAME_FORMAT));
        let path = log_dir.join(name);
        // Truncates on the (unlikely) second run within the same second.
        let file = File::create(&path).map_err(|e| ApplicationError::SinkWrite {
            reason: format!("creating {}: {e}", path.display()),
        })?;

        Ok(Self {
            file: Mutex::new(file),
            path,
        })
    }

    /// Where this sink is writing.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_line(&self, level: &str, message: &str) {
        let timestamp = Local::now().format(LINE_TIMESTAMP_FORMAT);
        let mut file = self.file.lock().unwrap();
        // Sink writes are infallible by contract; a failed write must not
        // abort the subprocess drain.
        if let Err(e) = writeln!(file, "[{timestamp}][{level}] {message}") {
            warn!(path = %self.path.display(), error = %e, "log file write failed");
        }
    }
}

impl LogSink for FileSink {
    fn info(&self, message: &str) {
        self.write_line("INFO", message);
        tracing::info!("{message}");
    }

    fn error(&self, message: &str) {
        self.write_line("ERROR", message);
        tracing::error!("{message}");
    }
}
