//! Solution Service - main application orchestrator.
//!
//! This service coordinates the two solution-management workflows:
//! 1. Validate the workspace (project dir, `.sln` file)
//! 2. Build the `dotnet` command plan
//! 3. Execute each command through the runner port, streaming output
//!    into the caller's log sink
//!
//! It implements the driving port (incoming) and uses driven ports (outgoing).

use tracing::{info, instrument};

use crate::{
    application::{
        ApplicationError,
        ports::{CommandRunner, LogSink, Workspace},
    },
    domain::{CommandSpec, ProjectTemplate, SolutionContext},
    error::SlnkitResult,
};

/// Default program name for the .NET toolchain.
const DEFAULT_PROGRAM: &str = "dotnet";

/// Main solution-management service.
///
/// Orchestrates workspace validation and external command execution.
pub struct SolutionService {
    runner: Box<dyn CommandRunner>,
    workspace: Box<dyn Workspace>,
    program: String,
}

impl SolutionService {
    /// Create a new solution service with the given adapters.
    pub fn new(runner: Box<dyn CommandRunner>, workspace: Box<dyn Workspace>) -> Self {
        Self {
            runner,
            workspace,
            program: DEFAULT_PROGRAM.into(),
        }
    }

    /// Override the toolchain program (e.g. an absolute path to `dotnet`).
    pub fn with_program(mut self, program: impl Into<String>) -> Self {
        self.program = program.into();
        self
    }

    /// Add a new C# project to the solution.
    ///
    /// Scaffolds the project with `dotnet new` and registers it in the
    /// `.sln` file with `dotnet sln add`. Fails before running anything if
    /// the project directory already exists or the solution file is missing.
    #[instrument(skip_all, fields(project = %ctx.project(), solution = %ctx.solution()))]
    pub fn add_project(
        &self,
        ctx: &SolutionContext,
        template: ProjectTemplate,
        sink: &dyn LogSink,
    ) -> SlnkitResult<()> {
        let project_dir = ctx.project_dir();
        if self.workspace.exists(&project_dir) {
            return Err(ApplicationError::ProjectExists { path: project_dir }.into());
        }
        self.require_solution_file(ctx)?;

        info!(template = %template, "Adding project");
        for command in self.plan_add(ctx, template) {
            self.run_logged(&command, sink)?;
        }
        info!("Project added");
        Ok(())
    }

    /// Remove a C# project from the solution file.
    ///
    /// Only unregisters the project from the `.sln`; the project directory
    /// is left on disk (matching `dotnet sln remove` semantics).
    #[instrument(skip_all, fields(project = %ctx.project(), solution = %ctx.solution()))]
    pub fn remove_project(&self, ctx: &SolutionContext, sink: &dyn LogSink) -> SlnkitResult<()> {
        let project_dir = ctx.project_dir();
        if !self.workspace.exists(&project_dir) {
            return Err(ApplicationError::ProjectNotFound { path: project_dir }.into());
        }
        self.require_solution_file(ctx)?;

        info!("Removing project");
        for command in self.plan_remove(ctx) {
            self.run_logged(&command, sink)?;
        }
        info!("Project removed");
        Ok(())
    }

    /// The commands `add_project` would run, in order. Used by `--dry-run`.
    pub fn plan_add(&self, ctx: &SolutionContext, template: ProjectTemplate) -> Vec<CommandSpec> {
        vec![
            CommandSpec::new(&self.program)
                .args(["new", template.dotnet_name(), "--language"])
                .arg("C#")
                .args(["--name", ctx.project().as_str()])
                .current_dir(ctx.root()),
            CommandSpec::new(&self.program)
                .arg("sln")
                .arg(ctx.solution_file_name())
                .arg("add")
                .arg(ctx.project().as_str())
                .current_dir(ctx.root()),
        ]
    }

    /// The commands `remove_project` would run. Used by `--dry-run`.
    pub fn plan_remove(&self, ctx: &SolutionContext) -> Vec<CommandSpec> {
        vec![
            CommandSpec::new(&self.program)
                .arg("sln")
                .arg(ctx.solution_file_name())
                .arg("remove")
                .arg(ctx.project().as_str())
                .current_dir(ctx.root()),
        ]
    }

    // ── helpers ───────────────────────────────────────────────────────────

    fn require_solution_file(&self, ctx: &SolutionContext) -> SlnkitResult<()> {
        let solution_file = ctx.solution_file();
        if !self.workspace.is_file(&solution_file) {
            return Err(ApplicationError::SolutionNotFound {
                path: solution_file,
            }
            .into());
        }
        Ok(())
    }

    fn run_logged(&self, command: &CommandSpec, sink: &dyn LogSink) -> SlnkitResult<()> {
        command.validate()?;
        sink.info(&format!("$ {command}"));
        self.runner.run(command, sink)
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use std::path::{Path, PathBuf};
    use std::sync::Mutex;

    use super::*;
    use crate::application::ports::output::{MockCommandRunner, MockWorkspace};
    use crate::domain::ProjectName;
    use crate::error::SlnkitError;

    /// Sink that records every line it receives.
    #[derive(Default)]
    struct RecordingSink {
        infos: Mutex<Vec<String>>,
        errors: Mutex<Vec<String>>,
    }

    impl LogSink for RecordingSink {
        fn info(&self, message: &str) {
            self.infos.lock().unwrap().push(message.to_string());
        }

        fn error(&self, message: &str) {
            self.errors.lock().unwrap().push(message.to_string());
        }
    }

    fn ctx() -> SolutionContext {
        SolutionContext::new("/work", "Acme", ProjectName::new("AcmeApp").unwrap()).unwrap()
    }

    /// Workspace where the solution file exists but the project does not.
    fn empty_workspace() -> MockWorkspace {
        let mut ws = MockWorkspace::new();
        ws.expect_exists()
            .returning(|p: &Path| p == Path::new("/work/Acme.sln"));
        ws.expect_is_file()
            .returning(|p: &Path| p == Path::new("/work/Acme.sln"));
        ws.expect_is_dir().returning(|_| false);
        ws
    }

    /// Workspace where both the solution file and the project dir exist.
    fn populated_workspace() -> MockWorkspace {
        let mut ws = MockWorkspace::new();
        ws.expect_exists().returning(|_| true);
        ws.expect_is_file()
            .returning(|p: &Path| p == Path::new("/work/Acme.sln"));
        ws.expect_is_dir()
            .returning(|p: &Path| p == Path::new("/work/AcmeApp"));
        ws
    }

    #[test]
    fn add_runs_new_then_sln_add() {
        let executed: std::sync::Arc<Mutex<Vec<String>>> = Default::default();
        let seen = executed.clone();

        let mut runner = MockCommandRunner::new();
        runner.expect_run().times(2).returning(move |spec, _| {
            seen.lock().unwrap().push(spec.to_string());
            Ok(())
        });

        let service = SolutionService::new(Box::new(runner), Box::new(empty_workspace()));
        let sink = RecordingSink::default();
        service
            .add_project(&ctx(), ProjectTemplate::Console, &sink)
            .unwrap();

        let executed = executed.lock().unwrap();
        assert_eq!(
            *executed,
            vec![
                "dotnet new console --language C# --name AcmeApp".to_string(),
                "dotnet sln Acme.sln add AcmeApp".to_string(),
            ]
        );
        // Each command is echoed to the sink before running.
        assert_eq!(sink.infos.lock().unwrap().len(), 2);
    }

    #[test]
    fn add_fails_when_project_exists() {
        let mut runner = MockCommandRunner::new();
        runner.expect_run().never();

        let service = SolutionService::new(Box::new(runner), Box::new(populated_workspace()));
        let err = service
            .add_project(&ctx(), ProjectTemplate::Console, &RecordingSink::default())
            .unwrap_err();

        assert!(matches!(
            err,
            SlnkitError::Application(ApplicationError::ProjectExists { path })
                if path == PathBuf::from("/work/AcmeApp")
        ));
    }

    #[test]
    fn add_fails_when_solution_missing() {
        let mut ws = MockWorkspace::new();
        ws.expect_exists().returning(|_| false);
        ws.expect_is_file().returning(|_| false);
        ws.expect_is_dir().returning(|_| false);

        let mut runner = MockCommandRunner::new();
        runner.expect_run().never();

        let service = SolutionService::new(Box::new(runner), Box::new(ws));
        let err = service
            .add_project(&ctx(), ProjectTemplate::Console, &RecordingSink::default())
            .unwrap_err();

        assert!(matches!(
            err,
            SlnkitError::Application(ApplicationError::SolutionNotFound { .. })
        ));
    }

    #[test]
    fn remove_runs_sln_remove_only() {
        let executed: std::sync::Arc<Mutex<Vec<String>>> = Default::default();
        let seen = executed.clone();

        let mut runner = MockCommandRunner::new();
        runner.expect_run().times(1).returning(move |spec, _| {
            seen.lock().unwrap().push(spec.to_string());
            Ok(())
        });

        let service = SolutionService::new(Box::new(runner), Box::new(populated_workspace()));
        service
            .remove_project(&ctx(), &RecordingSink::default())
            .unwrap();

        assert_eq!(
            *executed.lock().unwrap(),
            vec!["dotnet sln Acme.sln remove AcmeApp".to_string()]
        );
    }

    #[test]
    fn remove_fails_when_project_missing() {
        let mut runner = MockCommandRunner::new();
        runner.expect_run().never();

        let service = SolutionService::new(Box::new(runner), Box::new(empty_workspace()));
        let err = service
            .remove_project(&ctx(), &RecordingSink::default())
            .unwrap_err();

        assert!(matches!(
            err,
            SlnkitError::Application(ApplicationError::ProjectNotFound { .. })
        ));
    }

    #[test]
    fn runner_failure_stops_the_plan() {
        let mut runner = MockCommandRunner::new();
        // First command fails; the second must never run.
        runner.expect_run().times(1).returning(|spec, _| {
            Err(ApplicationError::CommandFailed {
                command: spec.to_string(),
                code: 1,
            }
            .into())
        });

        let service = SolutionService::new(Box::new(runner), Box::new(empty_workspace()));
        let err = service
            .add_project(&ctx(), ProjectTemplate::Console, &RecordingSink::default())
            .unwrap_err();

        assert!(matches!(
            err,
            SlnkitError::Application(ApplicationError::CommandFailed { code: 1, .. })
        ));
    }

    #[test]
    fn custom_program_flows_into_the_plan() {
        let runner = MockCommandRunner::new();
        let service = SolutionService::new(Box::new(runner), Box::new(empty_workspace()))
            .with_program("/usr/local/bin/dotnet");

        let plan = service.plan_remove(&ctx());
        assert_eq!(plan.len(), 1);
        assert_eq!(plan[0].program(), "/usr/local/bin/dotnet");
    }
}
