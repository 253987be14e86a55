//! Implementation of the `slnkit remove` command.
//!
//! Removing a project edits the `.sln` file, so the command confirms first
//! unless `--yes` is passed. `--quiet` silences output but never stands in
//! for the confirmation.

use tracing::{info, instrument};

use crate::{
    cli::{RemoveArgs, global::GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Execute the `slnkit remove` command.
#[instrument(skip_all, fields(project = %args.project))]
pub fn execute(
    args: RemoveArgs,
    _global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let ctx = super::build_context(&args.project, &args.solution, &config)?;
    let sink = super::build_sink(&args.solution, &config, &output)?;
    let service = super::build_service(&config);

    if args.solution.dry_run {
        output.info(&format!(
            "Dry run: would run in {}",
            ctx.root().display()
        ))?;
        for command in service.plan_remove(&ctx) {
            output.print(&format!("  {command}"))?;
        }
        return Ok(());
    }

    if !args.yes {
        let prompt = format!(
            "Remove '{}' from {}?",
            ctx.project(),
            ctx.solution_file_name()
        );
        if !confirm(&prompt)? {
            return Err(CliError::Cancelled);
        }
    }

    output.header(&format!(
        "Removing '{}' from {}...",
        ctx.project(),
        ctx.solution_file_name()
    ))?;
    info!("Remove started");

    service.remove_project(&ctx, sink.as_ref())?;

    info!("Remove completed");
    output.success(&format!(
        "Project '{}' removed from {}",
        ctx.project(),
        ctx.solution_file_name()
    ))?;
    output.warning(&format!(
        "The project directory {} is left on disk",
        ctx.project_dir().display()
    ))?;

    Ok(())
}

/// Ask the user to confirm. Falls back to requiring `--yes` when no
/// interactive terminal is available (CI, piped stdin, minimal builds).
fn confirm(prompt: &str) -> CliResult<bool> {
    #[cfg(feature = "interactive")]
    {
        use std::io::IsTerminal as _;
        if std::io::stdin().is_terminal() {
            return dialoguer::Confirm::new()
                .with_prompt(prompt)
                .default(false)
                .interact()
                .map_err(|e| CliError::InvalidInput {
                    message: format!("confirmation prompt failed: {e}"),
                });
        }
    }

    let _ = prompt;
    Err(CliError::InvalidInput {
        message: "confirmation required; re-run with --yes".into(),
    })
}
