use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use indexmap::IndexMap;

pub mod report;

// Re-export from report
pub use report::{parse_report, read_report_file, PnpmCommand, ReportFile, ReportSource};

/// A package entry in `pnpm licenses list --json` output.
///
/// Only `name` is used for compliance decisions; the remaining fields are
/// carried for display, and a null or oddly shaped value there is dropped
/// rather than rejecting the whole report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Package {
    pub name: String,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Vec::is_empty")]
    pub versions: Vec<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,
}

fn lenient<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(T::deserialize(value).unwrap_or_default())
}

impl Package {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            versions: Vec::new(),
            license: None,
        }
    }
}

/// License key (e.g. `"(MIT OR Apache-2.0)"`) to the packages declaring it,
/// in the order the package manager reported them.
pub type LicenseReport = IndexMap<String, Vec<Package>>;

/// Split a license key into its individual license identifiers.
///
/// Parentheses are stripped wherever they appear and the rest is split on
/// `OR` (uppercase only). Segments are trimmed and returned left to right,
/// duplicates included. Malformed keys are not rejected: `"MIT OR"` yields
/// `["MIT", ""]`, and the empty identifier never matches an allow-list.
pub fn parse_license_key(license_key: &str) -> Vec<String> {
    license_key
        .replace(['(', ')'], "")
        .split("OR")
        .map(|license| license.trim().to_string())
        .collect()
}
