use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fs;
use std::path::{Component, Path, PathBuf};
use tracing::{info, warn};
use crate::error::ConfigError;

/// Name of the configuration file looked up from the start directory upwards.
pub const CONFIG_FILE_NAME: &str = ".pnpm-license-checker.json";

/// Licenses accepted when the configuration does not provide `allowedLicenses`.
pub const DEFAULT_ALLOWED_LICENSES: &[&str] = &[
    "Apache-2.0",
    "All Rights Reserved",
    "Artistic-2.0",
    "BlueOak-1.0.0",
    "0BSD",
    "BSD",
    "BSD-2-Clause",
    "BSD-3-Clause",
    "CC0-1.0",
    "CC-BY-4.0",
    "CC BY-SA 4.0",
    "ISC",
    "LGPL-3.0-or-later",
    "MIT",
    "MIT-0",
    "MPL-2.0",
    "Public Domain",
    "Python-2.0",
    "Unicode-DFS-2016",
    "Unlicense",
    "UNLICENSED",
];

pub fn default_allowed_licenses() -> Vec<String> {
    DEFAULT_ALLOWED_LICENSES.iter().map(|license| license.to_string()).collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EffectiveConfig {
    /// Packages exempt from license checks, matched by exact name
    pub allowed_packages: Vec<String>,

    /// Individual license identifiers that are accepted
    pub allowed_licenses: Vec<String>,
}

impl Default for EffectiveConfig {
    fn default() -> Self {
        Self {
            allowed_packages: Vec::new(),
            allowed_licenses: default_allowed_licenses(),
        }
    }
}

/// Where the effective configuration came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "path", rename_all = "lowercase")]
pub enum ConfigSource {
    /// No configuration file exists in the start directory or any ancestor
    Defaults,
    /// A configuration file was found and parsed
    File(PathBuf),
    /// A configuration file was found but could not be read or parsed
    Invalid(PathBuf),
}

impl ConfigSource {
    pub fn path(&self) -> Option<&Path> {
        match self {
            ConfigSource::Defaults => None,
            ConfigSource::File(path) | ConfigSource::Invalid(path) => Some(path),
        }
    }
}

#[derive(Debug)]
pub struct ResolvedConfig {
    pub config: EffectiveConfig,
    pub source: ConfigSource,
    /// Recoverable problems; each one was replaced by a default
    pub warnings: Vec<ConfigError>,
}

impl ResolvedConfig {
    fn defaults() -> Self {
        Self {
            config: EffectiveConfig::default(),
            source: ConfigSource::Defaults,
            warnings: Vec::new(),
        }
    }

    fn invalid(path: &Path, error: ConfigError) -> Self {
        Self {
            config: EffectiveConfig::default(),
            source: ConfigSource::Invalid(path.to_path_buf()),
            warnings: vec![error],
        }
    }

    /// True when the file (if any) was read cleanly with no field falling back to a default.
    pub fn is_valid(&self) -> bool {
        !matches!(self.source, ConfigSource::Invalid(_)) && self.warnings.is_empty()
    }
}

/// Walk from `start_dir` up to the filesystem root looking for the configuration file.
pub fn find_config_file(start_dir: &Path) -> Option<PathBuf> {
    let mut current_dir = normalize_start_dir(start_dir);

    loop {
        let config_path = current_dir.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            return Some(config_path);
        }

        match current_dir.parent() {
            Some(parent) if parent != current_dir => current_dir = parent.to_path_buf(),
            // Reached the root directory
            _ => return None,
        }
    }
}

/// Absolute start directory with `..` resolved, so the walk only visits real ancestors.
fn normalize_start_dir(start_dir: &Path) -> PathBuf {
    let absolute = if start_dir.is_absolute() {
        start_dir.to_path_buf()
    } else {
        std::env::current_dir()
            .map(|cwd| cwd.join(start_dir))
            .unwrap_or_else(|_| start_dir.to_path_buf())
    };

    fs::canonicalize(&absolute).unwrap_or_else(|_| normalize_lexically(&absolute))
}

fn normalize_lexically(path: &Path) -> PathBuf {
    let mut normalized = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                normalized.pop();
            }
            other => normalized.push(other),
        }
    }
    normalized
}

/// Discover and load the configuration that applies to `start_dir`.
///
/// Never fails: a missing file yields the defaults, and an unreadable or
/// malformed one yields the defaults plus a warning.
pub fn resolve(start_dir: &Path) -> ResolvedConfig {
    match find_config_file(start_dir) {
        Some(config_path) => load_config_file(&config_path),
        None => {
            info!(
                "No {} file found. Using the default allowedLicenses and an empty allowedPackages list.",
                CONFIG_FILE_NAME
            );
            ResolvedConfig::defaults()
        }
    }
}

/// Load a configuration file from an explicit path, skipping discovery.
pub fn load_config_file(path: &Path) -> ResolvedConfig {
    let resolved = match read_config_value(path) {
        Ok(value) => validate_config_value(path, &value),
        Err(error) => ResolvedConfig::invalid(path, error),
    };

    if resolved.source == ConfigSource::File(path.to_path_buf()) {
        info!("Loaded configuration from {}", path.display());
    }
    log_warnings(&resolved.warnings);

    resolved
}

fn read_config_value(path: &Path) -> Result<Value, ConfigError> {
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    serde_json::from_str(&content).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Check the shape of an already-parsed configuration document field by field.
pub fn validate_config_value(path: &Path, value: &Value) -> ResolvedConfig {
    let Some(object) = value.as_object() else {
        return ResolvedConfig::invalid(path, ConfigError::NotAnObject { path: path.to_path_buf() });
    };

    let mut warnings = Vec::new();

    let allowed_packages = match string_list(object, "allowedPackages") {
        Field::Valid(packages) => packages,
        Field::Missing => Vec::new(),
        Field::Invalid => {
            warnings.push(ConfigError::InvalidField {
                path: path.to_path_buf(),
                field: "allowedPackages",
            });
            Vec::new()
        }
    };

    // A present list replaces the defaults entirely
    let allowed_licenses = match string_list(object, "allowedLicenses") {
        Field::Valid(licenses) => licenses,
        Field::Missing => default_allowed_licenses(),
        Field::Invalid => {
            warnings.push(ConfigError::InvalidField {
                path: path.to_path_buf(),
                field: "allowedLicenses",
            });
            default_allowed_licenses()
        }
    };

    ResolvedConfig {
        config: EffectiveConfig {
            allowed_packages,
            allowed_licenses,
        },
        source: ConfigSource::File(path.to_path_buf()),
        warnings,
    }
}

enum Field {
    Missing,
    Valid(Vec<String>),
    Invalid,
}

fn string_list(object: &Map<String, Value>, key: &str) -> Field {
    match object.get(key) {
        None => Field::Missing,
        Some(Value::Array(items)) => items
            .iter()
            .map(|item| item.as_str().map(str::to_owned))
            .collect::<Option<Vec<_>>>()
            .map_or(Field::Invalid, Field::Valid),
        Some(_) => Field::Invalid,
    }
}

fn log_warnings(warnings: &[ConfigError]) {
    for warning in warnings {
        match std::error::Error::source(warning) {
            Some(source) => warn!("{}: {}. Falling back to defaults.", warning, source),
            None => warn!("{}. Falling back to defaults.", warning),
        }
    }
}
