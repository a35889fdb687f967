use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::Command;
use tracing::debug;
use super::LicenseReport;
use crate::error::{ReportError, ReportResult};

/// Anything that can produce a license report for evaluation.
pub trait ReportSource {
    fn load(&self) -> ReportResult<LicenseReport>;

    /// Human-readable origin, used in diagnostics
    fn describe(&self) -> String;
}

/// Parse the JSON emitted by `pnpm licenses list --json`.
pub fn parse_report(content: &str) -> ReportResult<LicenseReport> {
    serde_json::from_str(content).map_err(|source| ReportError::Parse { source })
}

/// Read a saved report from disk, or from stdin when `path` is `-`.
pub fn read_report_file(path: &Path) -> ReportResult<LicenseReport> {
    let read_error = |source: std::io::Error| ReportError::Read {
        path: path.to_path_buf(),
        source,
    };

    let content = if path == Path::new("-") {
        let mut buffer = String::new();
        std::io::stdin().read_to_string(&mut buffer).map_err(read_error)?;
        buffer
    } else {
        std::fs::read_to_string(path).map_err(read_error)?
    };

    parse_report(&content)
}

/// A report saved to a file ahead of time.
#[derive(Debug, Clone)]
pub struct ReportFile {
    pub path: PathBuf,
}

impl ReportSource for ReportFile {
    fn load(&self) -> ReportResult<LicenseReport> {
        read_report_file(&self.path)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Runs the package manager's license listing in a project directory.
#[derive(Debug, Clone)]
pub struct PnpmCommand {
    pub program: String,
    pub working_dir: PathBuf,
}

impl PnpmCommand {
    pub const ARGS: [&'static str; 3] = ["licenses", "list", "--json"];

    pub fn new(program: impl Into<String>, working_dir: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
            working_dir: working_dir.into(),
        }
    }

    fn command_line(&self) -> String {
        format!("{} {}", self.program, Self::ARGS.join(" "))
    }
}

impl ReportSource for PnpmCommand {
    fn load(&self) -> ReportResult<LicenseReport> {
        let command = self.command_line();
        debug!("Running `{}` in {}", command, self.working_dir.display());

        let output = Command::new(&self.program)
            .args(Self::ARGS)
            .current_dir(&self.working_dir)
            .output()
            .map_err(|source| ReportError::Spawn {
                command: command.clone(),
                source,
            })?;

        let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
        if !output.status.success() {
            return Err(ReportError::CommandFailed {
                command,
                status: output.status,
                stderr,
            });
        }
        // Anything on stderr means the JSON on stdout cannot be trusted
        if !stderr.is_empty() {
            return Err(ReportError::Stderr { command, stderr });
        }

        parse_report(&String::from_utf8_lossy(&output.stdout))
    }

    fn describe(&self) -> String {
        self.command_line()
    }
}
