use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "pnpm-license-checker")]
#[command(about = "Fail the build when a pnpm dependency carries a license outside the allow-list")]
#[command(version)]
#[command(args_conflicts_with_subcommands = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Arguments for the default `check` command
    #[command(flatten)]
    pub check: CheckArgs,

    /// Directory to start the configuration search from (default: current directory)
    #[arg(long, global = true)]
    pub dir: Option<PathBuf>,

    /// Use this configuration file instead of searching for .pnpm-license-checker.json
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check dependency licenses against the allow-list (default)
    Check(CheckArgs),
    /// Write a starter .pnpm-license-checker.json
    Init {
        /// Overwrite an existing configuration file
        #[arg(long)]
        force: bool,
    },
    /// Add every package that currently violates the policy to allowedPackages
    Fix {
        #[command(flatten)]
        report: ReportArgs,

        /// Show changes without applying them
        #[arg(long)]
        dry_run: bool,
    },
    /// Show or validate configuration
    Config {
        /// Show the effective configuration
        #[arg(long)]
        show: bool,

        /// Validate the configuration file
        #[arg(long)]
        validate: bool,
    },
}

#[derive(Args)]
pub struct CheckArgs {
    #[command(flatten)]
    pub report: ReportArgs,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Exit with code 0 even on violations
    #[arg(long)]
    pub exit_zero: bool,
}

#[derive(Args)]
pub struct ReportArgs {
    /// Read a saved `pnpm licenses list --json` report instead of running pnpm ("-" for stdin)
    #[arg(long)]
    pub report: Option<PathBuf>,

    /// pnpm executable to run
    #[arg(long, env = "PNPM_LICENSE_CHECKER_PNPM")]
    pub pnpm: Option<String>,
}

#[derive(Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}
