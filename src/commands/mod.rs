use std::path::PathBuf;
use anyhow::{Context, Result};
use tracing::debug;
use pnpm_license_checker::config::{self, ResolvedConfig};
use pnpm_license_checker::license::{LicenseReport, PnpmCommand, ReportFile, ReportSource};
use crate::cli::ReportArgs;

pub mod check;
pub mod init;
pub mod fix;
pub mod config_cmd;

pub use check::handle_check;
pub use init::handle_init;
pub use fix::handle_fix;
pub use config_cmd::handle_config;

/// Options shared by every subcommand.
pub struct GlobalOptions {
    pub start_dir: PathBuf,
    pub config: Option<PathBuf>,
    pub verbose: bool,
    pub quiet: bool,
}

impl GlobalOptions {
    pub fn resolve_config(&self) -> ResolvedConfig {
        match &self.config {
            Some(path) => config::load_config_file(path),
            None => config::resolve(&self.start_dir),
        }
    }
}

pub fn load_report(global: &GlobalOptions, args: &ReportArgs) -> Result<LicenseReport> {
    let source: Box<dyn ReportSource> = match &args.report {
        Some(path) => Box::new(ReportFile { path: path.clone() }),
        None => Box::new(PnpmCommand::new(
            args.pnpm.as_deref().unwrap_or("pnpm"),
            &global.start_dir,
        )),
    };

    let report = source
        .load()
        .with_context(|| format!("Could not obtain license report from {}", source.describe()))?;
    debug!("Licenses data: {:?}", report);

    Ok(report)
}
