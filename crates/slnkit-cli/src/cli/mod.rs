//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::GlobalArgs;

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "slnkit",
    bin_name = "slnkit",
    version  = env!("CARGO_PKG_VERSION"),
    about    = "Manage C# projects in a Visual Studio solution",
    long_about = "slnkit drives the dotnet CLI to scaffold C# projects and \
                  register them in a .sln file, capturing the toolchain \
                  output into timestamped log files.",
    after_help = "EXAMPLES:\n\
        \x20 slnkit add    AcmeApp --root ./acme --sln Acme --log-dir ./logs\n\
        \x20 slnkit add    AcmeLib --sln Acme --template classlib\n\
        \x20 slnkit remove AcmeApp --sln Acme --yes\n\
        \x20 slnkit completions bash > /usr/share/bash-completion/completions/slnkit",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Scaffold a new C# project and add it to the solution.
    #[command(
        visible_alias = "a",
        about = "Create a C# project and add it to the solution",
        after_help = "EXAMPLES:\n\
            \x20 slnkit add AcmeApp --sln Acme\n\
            \x20 slnkit add AcmeLib --sln Acme --template classlib --log-dir ./logs\n\
            \x20 slnkit add AcmeApp --sln Acme --dry-run"
    )]
    Add(AddArgs),

    /// Remove a C# project from the solution file.
    #[command(
        visible_alias = "rm",
        about = "Remove a project from the solution",
        after_help = "EXAMPLES:\n\
            \x20 slnkit remove AcmeApp --sln Acme\n\
            \x20 slnkit remove AcmeApp --sln Acme --yes"
    )]
    Remove(RemoveArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 slnkit completions bash > ~/.local/share/bash-completion/completions/slnkit\n\
            \x20 slnkit completions zsh  > ~/.zfunc/_slnkit"
    )]
    Completions(CompletionsArgs),

    /// Inspect the slnkit configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 slnkit config get defaults.solution\n\
            \x20 slnkit config list"
    )]
    Config(ConfigCommands),
}

// ── shared solution flags ─────────────────────────────────────────────────────

/// Flags shared by `add` and `remove`: where the solution lives and where
/// the toolchain output is logged.
#[derive(Debug, Args)]
pub struct SolutionArgs {
    /// Directory containing the `.sln` file.
    #[arg(
        short = 'r',
        long = "root",
        value_name = "DIR",
        help = "Solution root directory (default: current directory)"
    )]
    pub root: Option<PathBuf>,

    /// Solution name, without the `.sln` extension.
    #[arg(
        short = 's',
        long = "sln",
        value_name = "NAME",
        help = "Solution name (without .sln)"
    )]
    pub solution: Option<String>,

    /// Directory to write the timestamped log file into.
    #[arg(
        long = "log-dir",
        value_name = "DIR",
        help = "Directory for the run's log file (must exist)"
    )]
    pub log_dir: Option<PathBuf>,

    /// Print the commands without running them.
    #[arg(long = "dry-run", help = "Show the commands without running them")]
    pub dry_run: bool,
}

// ── add ───────────────────────────────────────────────────────────────────────

/// Arguments for `slnkit add`.
#[derive(Debug, Args)]
pub struct AddArgs {
    /// Name of the project to create.
    #[arg(value_name = "PROJECT", help = "Project name")]
    pub project: String,

    /// `dotnet new` template for the project.
    #[arg(
        short = 't',
        long = "template",
        value_name = "TEMPLATE",
        value_enum,
        help = "dotnet template to scaffold from (default: console)"
    )]
    pub template: Option<TemplateKind>,

    #[command(flatten)]
    pub solution: SolutionArgs,
}

// ── remove ────────────────────────────────────────────────────────────────────

/// Arguments for `slnkit remove`.
#[derive(Debug, Args)]
pub struct RemoveArgs {
    /// Name of the project to remove.
    #[arg(value_name = "PROJECT", help = "Project name")]
    pub project: String,

    /// Skip the confirmation prompt.
    #[arg(short = 'y', long = "yes", help = "Skip confirmation")]
    pub yes: bool,

    #[command(flatten)]
    pub solution: SolutionArgs,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `slnkit completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config subcommands ────────────────────────────────────────────────────────

/// Subcommands for `slnkit config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print the value of a configuration key.
    Get {
        /// Dotted key path, e.g. `defaults.solution`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path to the active configuration file.
    Path,
}

// ── value enums ───────────────────────────────────────────────────────────────

/// `dotnet new` templates slnkit knows how to scaffold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum TemplateKind {
    Console,
    /// Also accepted as `lib`.
    #[value(alias = "lib")]
    Classlib,
    Xunit,
    Web,
}

impl std::fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Console => write!(f, "console"),
            Self::Classlib => write!(f, "classlib"),
            Self::Xunit => write!(f, "xunit"),
            Self::Web => write!(f, "web"),
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
