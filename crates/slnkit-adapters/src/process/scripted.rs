//! In-memory command runner for tests.

use std::collections::VecDeque;
use std::sync::Mutex;

use slnkit_core::{
    application::ports::{CommandRunner, LogSink},
    domain::CommandSpec,
    error::{SlnkitError, SlnkitResult},
};

/// One scripted invocation: the stdout lines to emit and the outcome.
#[derive(Debug, Clone)]
pub struct ScriptedCall {
    pub stdout: Vec<String>,
    pub result: Result<(), SlnkitError>,
}

impl ScriptedCall {
    pub fn ok<I, S>(stdout: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            stdout: stdout.into_iter().map(Into::into).collect(),
            result: Ok(()),
        }
    }

    pub fn fail(error: SlnkitError) -> Self {
        Self {
            stdout: Vec::new(),
            result: Err(error),
        }
    }
}

/// Test runner that replays scripted calls instead of spawning processes.
///
/// Calls are consumed in FIFO order; running past the script emits nothing
/// and succeeds. Every executed command is recorded for assertions.
#[derive(Debug, Default)]
pub struct ScriptedRunner {
    script: Mutex<VecDeque<ScriptedCall>>,
    executed: Mutex<Vec<String>>,
}

impl ScriptedRunner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue the next scripted call.
    pub fn push(&self, call: ScriptedCall) {
        self.script.lock().unwrap().push_back(call);
    }

    /// Rendered command lines, in execution order.
    pub fn executed(&self) -> Vec<String> {
        self.executed.lock().unwrap().clone()
    }
}

impl CommandRunner for ScriptedRunner {
    fn run(&self, spec: &CommandSpec, sink: &dyn LogSink) -> SlnkitResult<()> {
        self.executed.lock().unwrap().push(spec.to_string());

        let Some(call) = self.script.lock().unwrap().pop_front() else {
            return Ok(());
        };
        for line in &call.stdout {
            sink.info(line);
        }
        call.result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::MemorySink;

    #[test]
    fn replays_calls_in_order_and_records_commands() {
        let runner = ScriptedRunner::new();
        runner.push(ScriptedCall::ok(["first"]));
        runner.push(ScriptedCall::ok(["second"]));

        let sink = MemorySink::new();
        runner
            .run(&CommandSpec::new("dotnet").arg("new"), &sink)
            .unwrap();
        runner
            .run(&CommandSpec::new("dotnet").arg("sln"), &sink)
            .unwrap();

        assert_eq!(sink.infos(), ["first", "second"]);
        assert_eq!(runner.executed(), ["dotnet new", "dotnet sln"]);
    }

    #[test]
    fn scripted_failure_is_returned() {
        use slnkit_core::application::ApplicationError;

        let runner = ScriptedRunner::new();
        runner.push(ScriptedCall::fail(
            ApplicationError::CommandFailed {
                command: "dotnet new".into(),
                code: 1,
            }
            .into(),
        ));

        let err = runner
            .run(&CommandSpec::new("dotnet").arg("new"), &MemorySink::new())
            .unwrap_err();
        assert!(matches!(err, SlnkitError::Application(_)));
    }
}
