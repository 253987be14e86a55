//! Implementation of the `slnkit add` command.
//!
//! Responsibility: translate CLI arguments into a `SolutionContext`, call the
//! core solution service, and display results. No business logic lives here.

use tracing::{info, instrument};

use crate::{
    cli::{AddArgs, global::GlobalArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Execute the `slnkit add` command.
///
/// Dispatch sequence:
/// 1. Resolve flags + config into a validated `SolutionContext`
/// 2. Resolve the dotnet template
/// 3. Open the log sink (validates the log directory)
/// 4. Early-exit if `--dry-run`
/// 5. Execute via `SolutionService`
#[instrument(skip_all, fields(project = %args.project))]
pub fn execute(
    args: AddArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let ctx = super::build_context(&args.project, &args.solution, &config)?;
    let template = super::resolve_template(args.template, &config)?;
    let sink = super::build_sink(&args.solution, &config, &output)?;
    let service = super::build_service(&config);

    if args.solution.dry_run {
        output.info(&format!(
            "Dry run: would run in {}",
            ctx.root().display()
        ))?;
        for command in service.plan_add(&ctx, template) {
            output.print(&format!("  {command}"))?;
        }
        return Ok(());
    }

    output.header(&format!(
        "Adding '{}' to {}...",
        ctx.project(),
        ctx.solution_file_name()
    ))?;
    info!(template = %template, "Add started");

    service.add_project(&ctx, template, sink.as_ref())?;

    info!("Add completed");
    output.success(&format!(
        "Project '{}' added to {}",
        ctx.project(),
        ctx.solution_file_name()
    ))?;

    if !global.quiet {
        output.print("")?;
        output.print("Next steps:")?;
        output.print(&format!("  cd {}", ctx.project_dir().display()))?;
        output.print("  dotnet build")?;
    }

    Ok(())
}
