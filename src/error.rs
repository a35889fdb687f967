use std::path::PathBuf;

/// Problems found while reading `.pnpm-license-checker.json`.
///
/// None of these abort a run. The resolver records them as warnings and
/// falls back to defaults for whatever could not be read.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {} as JSON", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid format in {}: expected a JSON object at the top level", .path.display())]
    NotAnObject { path: PathBuf },

    #[error("Invalid format in {}: {field} should be an array of strings", .path.display())]
    InvalidField { path: PathBuf, field: &'static str },
}

/// The license report could not be produced or parsed, so nothing was evaluated.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    #[error("Failed to run `{command}`")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("`{command}` exited with {status}: {stderr}")]
    CommandFailed {
        command: String,
        status: std::process::ExitStatus,
        stderr: String,
    },

    #[error("`{command}` wrote to stderr: {stderr}")]
    Stderr { command: String, stderr: String },

    #[error("Failed to read license report: {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse license report as JSON")]
    Parse {
        #[source]
        source: serde_json::Error,
    },
}

pub type ReportResult<T> = std::result::Result<T, ReportError>;
