//! Production command runner over `std::process`.

use std::io::{BufRead, BufReader, Read};
use std::process::{Command, Stdio};

use tracing::{debug, info};

use slnkit_core::{
    application::{ApplicationError, ports::{CommandRunner, LogSink}},
    domain::CommandSpec,
    error::{SlnkitError, SlnkitResult},
};

/// Synchronous external-process runner.
///
/// Executes one command to completion on the calling thread. Standard
/// output is streamed into the sink line by line as it arrives; standard
/// error is captured and only forwarded (to `sink.error`) when the process
/// exits non-zero.
///
/// Both pipes are read to end-of-stream before `wait`: stdout on the
/// calling thread, stderr on a helper thread. Neither pipe can fill up and
/// stall the child while the runner blocks on the other one.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl SystemRunner {
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for SystemRunner {
    fn run(&self, spec: &CommandSpec, sink: &dyn LogSink) -> SlnkitResult<()> {
        let mut command = Command::new(spec.program());
        command
            .args(spec.argv())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped());
        if let Some(dir) = spec.cwd() {
            command.current_dir(dir);
        }

        info!(command = %spec, "starting process");

        let mut child = command.spawn().map_err(|e| ApplicationError::CommandLaunch {
            command: spec.to_string(),
            reason: e.to_string(),
        })?;

        // Both pipes were requested above, so take() always succeeds.
        let stdout = child.stdout.take().ok_or_else(|| SlnkitError::Internal {
            message: "child stdout was not captured".into(),
        })?;
        let mut stderr = child.stderr.take().ok_or_else(|| SlnkitError::Internal {
            message: "child stderr was not captured".into(),
        })?;

        // stderr is collected on its own thread while stdout streams below.
        // A child that floods stderr before closing stdout would otherwise
        // fill the stderr pipe and stall against the stdout read.
        let stderr_reader = std::thread::spawn(move || {
            let mut buf = String::new();
            let _ = stderr.read_to_string(&mut buf);
            buf
        });

        // Stream stdout line by line. A read error ends the drain early;
        // the child is still waited on below.
        for line in BufReader::new(stdout).lines() {
            let Ok(line) = line else { break };
            sink.info(line.trim());
        }

        let stderr_buf = stderr_reader.join().unwrap_or_default();

        let status = child.wait().map_err(|e| ApplicationError::CommandLaunch {
            command: spec.to_string(),
            reason: format!("waiting for process: {e}"),
        })?;

        let code = status.code().unwrap_or(-1);
        debug!(command = %spec, exit_code = code, "process exited");

        if status.success() {
            return Ok(());
        }

        for line in stderr_buf.lines() {
            let line = line.trim();
            if !line.is_empty() {
                sink.error(line);
            }
        }
        Err(ApplicationError::CommandFailed {
            command: spec.to_string(),
            code,
        }
        .into())
    }
}
