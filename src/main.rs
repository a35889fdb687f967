use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;

use cli::{Cli, Commands};
use commands::GlobalOptions;

fn main() -> ExitCode {
    let cli = Cli::parse();

    if cli.no_color {
        colored::control::set_override(false);
    }
    init_logging(cli.verbose, cli.quiet, cli.no_color);

    match run(cli) {
        Ok(code) => code,
        Err(error) => {
            eprintln!("{}", format!("Error: {:#}", error).red());
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> Result<ExitCode> {
    let start_dir = match cli.dir {
        Some(dir) => dir,
        None => std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")),
    };

    let global = GlobalOptions {
        start_dir,
        config: cli.config,
        verbose: cli.verbose,
        quiet: cli.quiet,
    };

    match cli.command.unwrap_or(Commands::Check(cli.check)) {
        Commands::Check(args) => commands::handle_check(&global, args),
        Commands::Init { force } => {
            commands::handle_init(&global, force)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Fix { report, dry_run } => {
            commands::handle_fix(&global, report, dry_run)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Config { show, validate } => commands::handle_config(&global, show, validate),
    }
}

fn init_logging(verbose: bool, quiet: bool, no_color: bool) {
    let level = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "info"
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let ansi = !no_color && std::env::var_os("NO_COLOR").map_or(true, |value| value.is_empty());

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(ansi)
        .without_time()
        .with_writer(std::io::stderr)
        .init();
}
