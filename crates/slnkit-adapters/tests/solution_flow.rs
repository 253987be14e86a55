//! End-to-end use-case tests wiring `SolutionService` to the in-memory
//! adapters.

use slnkit_adapters::{MemorySink, MemoryWorkspace, ScriptedCall, ScriptedRunner, SystemRunner};
use slnkit_core::{
    application::{ApplicationError, SolutionService},
    domain::{ProjectName, ProjectTemplate, SolutionContext},
    error::SlnkitError,
};

fn ctx(root: &str) -> SolutionContext {
    SolutionContext::new(root, "Acme", ProjectName::new("AcmeApp").unwrap()).unwrap()
}

#[test]
fn add_project_full_flow() {
    let runner = ScriptedRunner::new();
    runner.push(ScriptedCall::ok([
        "The template \"Console App\" was created successfully.",
    ]));
    runner.push(ScriptedCall::ok(["Project `AcmeApp` added to the solution."]));

    let workspace = MemoryWorkspace::new()
        .with_dir("/work")
        .with_file("/work/Acme.sln");
    let sink = MemorySink::new();

    // ScriptedRunner is not Clone, so assertions go through a shared handle.
    let runner = std::sync::Arc::new(runner);
    let service = SolutionService::new(Box::new(ArcRunner(runner.clone())), Box::new(workspace));

    service
        .add_project(&ctx("/work"), ProjectTemplate::Console, &sink)
        .unwrap();

    assert_eq!(
        runner.executed(),
        [
            "dotnet new console --language C# --name AcmeApp",
            "dotnet sln Acme.sln add AcmeApp",
        ]
    );

    let infos = sink.infos();
    // Two command echoes interleaved with the scripted subprocess output.
    assert_eq!(infos.len(), 4);
    assert!(infos[0].starts_with("$ dotnet new"));
    assert!(infos[1].contains("created successfully"));
    assert!(infos[2].starts_with("$ dotnet sln"));
    assert!(infos[3].contains("added to the solution"));
}

#[test]
fn remove_project_full_flow() {
    let runner = std::sync::Arc::new(ScriptedRunner::new());
    runner.push(ScriptedCall::ok([
        "Project `AcmeApp` removed from the solution.",
    ]));

    let workspace = MemoryWorkspace::new()
        .with_dir("/work")
        .with_dir("/work/AcmeApp")
        .with_file("/work/Acme.sln");
    let sink = MemorySink::new();

    let service = SolutionService::new(Box::new(ArcRunner(runner.clone())), Box::new(workspace));
    service.remove_project(&ctx("/work"), &sink).unwrap();

    assert_eq!(runner.executed(), ["dotnet sln Acme.sln remove AcmeApp"]);
}

#[test]
fn failed_first_command_aborts_the_add() {
    let runner = std::sync::Arc::new(ScriptedRunner::new());
    runner.push(ScriptedCall::fail(
        ApplicationError::CommandFailed {
            command: "dotnet new".into(),
            code: 1,
        }
        .into(),
    ));

    let workspace = MemoryWorkspace::new()
        .with_dir("/work")
        .with_file("/work/Acme.sln");

    let service = SolutionService::new(Box::new(ArcRunner(runner.clone())), Box::new(workspace));
    let err = service
        .add_project(&ctx("/work"), ProjectTemplate::Console, &MemorySink::new())
        .unwrap_err();

    assert!(matches!(
        err,
        SlnkitError::Application(ApplicationError::CommandFailed { .. })
    ));
    // The `sln add` never ran.
    assert_eq!(runner.executed().len(), 1);
}

#[cfg(unix)]
#[test]
fn real_runner_through_the_service() {
    // Uses `echo` as a stand-in toolchain so the whole pipeline (service →
    // SystemRunner → sink) runs a real process.
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("Acme.sln"), "").unwrap();
    std::fs::create_dir(dir.path().join("AcmeApp")).unwrap();

    let ctx = SolutionContext::new(
        dir.path(),
        "Acme",
        ProjectName::new("AcmeApp").unwrap(),
    )
    .unwrap();

    let sink = MemorySink::new();
    let service = SolutionService::new(
        Box::new(SystemRunner::new()),
        Box::new(slnkit_adapters::LocalWorkspace::new()),
    )
    .with_program("echo");

    service.remove_project(&ctx, &sink).unwrap();

    let infos = sink.infos();
    assert_eq!(infos.len(), 2);
    assert!(infos[0].starts_with("$ echo sln"));
    assert_eq!(infos[1], "sln Acme.sln remove AcmeApp");
}

// ── helpers ───────────────────────────────────────────────────────────────────

/// Adapter so a shared `ScriptedRunner` can be handed to the service, which
/// takes ownership of its runner.
struct ArcRunner(std::sync::Arc<ScriptedRunner>);

impl slnkit_core::application::ports::CommandRunner for ArcRunner {
    fn run(
        &self,
        spec: &slnkit_core::domain::CommandSpec,
        sink: &dyn slnkit_core::application::ports::LogSink,
    ) -> slnkit_core::error::SlnkitResult<()> {
        self.0.run(spec, sink)
    }
}
