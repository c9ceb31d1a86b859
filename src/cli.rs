use anyhow::Result;
use clap::{Args, Parser, Subcommand};

use crate::commands;

#[derive(Parser, Debug)]
#[command(name = "bn", version, about = "Compose standardized git branch names")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compose a branch name from a task ID and a description
    New(NewArgs),
    /// Print the normalized form of a description
    Normalize(NormalizeArgs),
    /// Show or change the color theme
    Theme(ThemeArgs),
}

#[derive(Args, Debug)]
pub(crate) struct NewArgs {
    /// Branch type (one of the configured types, e.g. feature, bugfix, hotfix)
    #[arg(long = "type", short = 't')]
    pub(crate) branch_type: Option<String>,
    /// Task ID or tracker URL containing it (e.g. PROJ-123); ignored for hotfix
    #[arg(long, short = 'i')]
    pub(crate) task: Option<String>,
    /// Short description of the change
    #[arg(long, short = 'd')]
    pub(crate) description: Option<String>,
    /// Copy the result to the clipboard
    #[arg(long, short = 'c')]
    pub(crate) copy: bool,
}

#[derive(Args, Debug)]
pub(crate) struct NormalizeArgs {
    /// Free text to normalize
    pub(crate) text: String,
}

#[derive(Args, Debug)]
pub(crate) struct ThemeArgs {
    #[command(subcommand)]
    pub(crate) command: Option<ThemeCommands>,
}

#[derive(Subcommand, Debug)]
pub(crate) enum ThemeCommands {
    /// Print the current theme (default)
    Show,
    /// Switch between light and dark
    Toggle,
    /// Set the theme explicitly
    Set {
        /// light or dark
        theme: String,
    },
}

pub(crate) fn run() -> Result<()> {
    let cli = Cli::parse();
    match cli.command {
        Commands::New(args) => commands::new::cmd_new(args),
        Commands::Normalize(args) => commands::normalize::cmd_normalize(args),
        Commands::Theme(args) => commands::theme::cmd_theme(args),
    }
}
