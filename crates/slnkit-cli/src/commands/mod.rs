//! Command handlers and the shared CLI → core plumbing.

pub mod add;
pub mod completions;
pub mod config;
pub mod remove;

use std::path::PathBuf;

use slnkit_adapters::{ConsoleSink, FileSink, LocalWorkspace, SystemRunner};
use slnkit_core::{
    application::{SolutionService, ports::LogSink},
    domain::{ProjectName, ProjectTemplate, SolutionContext},
};

use crate::{
    cli::{SolutionArgs, TemplateKind},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Resolve flags + config fallbacks into a validated `SolutionContext`.
fn build_context(
    project: &str,
    args: &SolutionArgs,
    config: &AppConfig,
) -> CliResult<SolutionContext> {
    let project = ProjectName::new(project).map_err(|e| CliError::Core(e.into()))?;

    let root: PathBuf = args
        .root
        .clone()
        .or_else(|| config.defaults.root.clone())
        .unwrap_or_else(|| PathBuf::from("."));

    let solution = args
        .solution
        .clone()
        .or_else(|| config.defaults.solution.clone())
        .ok_or_else(|| CliError::InvalidInput {
            message: "no solution name given; pass --sln or set defaults.solution in the config"
                .into(),
        })?;

    SolutionContext::new(root, solution, project).map_err(|e| CliError::Core(e.into()))
}

/// Build the log sink: a timestamped file when a log directory is
/// configured, console-only otherwise.
fn build_sink(
    args: &SolutionArgs,
    config: &AppConfig,
    output: &OutputManager,
) -> CliResult<Box<dyn LogSink>> {
    let log_dir = args
        .log_dir
        .clone()
        .or_else(|| config.defaults.log_dir.clone());

    match log_dir {
        Some(dir) => {
            let sink = FileSink::create(&dir).map_err(CliError::Core)?;
            output.info(&format!("Logging to {}", sink.path().display()))?;
            Ok(Box::new(sink))
        }
        None => Ok(Box::new(ConsoleSink::new())),
    }
}

/// Wire the production adapters into a `SolutionService`.
fn build_service(config: &AppConfig) -> SolutionService {
    SolutionService::new(Box::new(SystemRunner::new()), Box::new(LocalWorkspace::new()))
        .with_program(&config.toolchain.program)
}

/// Pick the dotnet template: flag, then config default, then `console`.
fn resolve_template(flag: Option<TemplateKind>, config: &AppConfig) -> CliResult<ProjectTemplate> {
    if let Some(kind) = flag {
        return Ok(match kind {
            TemplateKind::Console => ProjectTemplate::Console,
            TemplateKind::Classlib => ProjectTemplate::ClassLib,
            TemplateKind::Xunit => ProjectTemplate::XUnit,
            TemplateKind::Web => ProjectTemplate::Web,
        });
    }

    match config.defaults.template.as_deref() {
        None => Ok(ProjectTemplate::default()),
        Some("console") => Ok(ProjectTemplate::Console),
        Some("classlib") => Ok(ProjectTemplate::ClassLib),
        Some("xunit") => Ok(ProjectTemplate::XUnit),
        Some("web") => Ok(ProjectTemplate::Web),
        Some(other) => Err(CliError::ConfigError {
            message: format!(
                "unknown defaults.template '{other}' (expected console, classlib, xunit or web)"
            ),
            source: None,
        }),
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn solution_args() -> SolutionArgs {
        SolutionArgs {
            root: None,
            solution: Some("Acme".into()),
            log_dir: None,
            dry_run: false,
        }
    }

    #[test]
    fn context_defaults_root_to_cwd() {
        let ctx = build_context("App", &solution_args(), &AppConfig::default()).unwrap();
        assert_eq!(ctx.root(), std::path::Path::new("."));
        assert_eq!(ctx.solution(), "Acme");
    }

    #[test]
    fn context_requires_a_solution_name() {
        let mut args = solution_args();
        args.solution = None;
        let err = build_context("App", &args, &AppConfig::default()).unwrap_err();
        assert!(matches!(err, CliError::InvalidInput { .. }));
    }

    #[test]
    fn context_falls_back_to_config_solution() {
        let mut args = solution_args();
        args.solution = None;
        let mut config = AppConfig::default();
        config.defaults.solution = Some("FromConfig".into());

        let ctx = build_context("App", &args, &config).unwrap();
        assert_eq!(ctx.solution(), "FromConfig");
    }

    #[test]
    fn invalid_project_name_is_a_core_error() {
        let err = build_context(".hidden", &solution_args(), &AppConfig::default()).unwrap_err();
        assert!(matches!(err, CliError::Core(_)));
        assert_eq!(err.exit_code(), 2);
    }

    #[test]
    fn template_flag_beats_config() {
        let mut config = AppConfig::default();
        config.defaults.template = Some("web".into());
        assert_eq!(
            resolve_template(Some(TemplateKind::Xunit), &config).unwrap(),
            ProjectTemplate::XUnit
        );
        assert_eq!(
            resolve_template(None, &config).unwrap(),
            ProjectTemplate::Web
        );
    }

    #[test]
    fn unknown_config_template_is_rejected() {
        let mut config = AppConfig::default();
        config.defaults.template = Some("winforms".into());
        let err = resolve_template(None, &config).unwrap_err();
        assert!(matches!(err, CliError::ConfigError { .. }));
    }
}
