use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::config::{ConfigSource, EffectiveConfig};
use crate::license::{parse_license_key, LicenseReport};

/// A license key carrying at least one license outside the allow-list,
/// declared by at least one package that is not individually exempt.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Violation {
    pub license_key: String,
    pub affected_packages: Vec<String>,
    pub invalid_licenses: Vec<String>,
}

/// Classify a license report against the configuration.
///
/// Violations come out in the report's key order. Note that an `OR`
/// expression only passes when *every* alternative is allowed, so
/// `(MIT OR GPL-3.0)` is a violation reporting `GPL-3.0` even though MIT
/// alone would satisfy a conventional SPDX reading.
pub fn evaluate(config: &EffectiveConfig, report: &LicenseReport) -> Vec<Violation> {
    let mut violations = Vec::new();

    for (license_key, packages) in report {
        let individual_licenses = parse_license_key(license_key);

        let affected_packages: Vec<String> = packages
            .iter()
            .filter(|package| !config.is_package_allowed(&package.name))
            .map(|package| package.name.clone())
            .collect();

        // Every package under this key is exempt
        if affected_packages.is_empty() {
            continue;
        }

        let invalid_licenses: Vec<String> = individual_licenses
            .into_iter()
            .filter(|license| !config.is_license_allowed(license))
            .collect();

        if !invalid_licenses.is_empty() {
            violations.push(Violation {
                license_key: license_key.clone(),
                affected_packages,
                invalid_licenses,
            });
        }
    }

    violations
}

/// Outcome of one compliance run, as emitted by `--format json`.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ComplianceReport {
    pub checked_at: DateTime<Utc>,
    pub config_source: ConfigSource,
    pub total_license_keys: usize,
    pub total_packages: usize,
    pub violations: Vec<Violation>,
}

impl ComplianceReport {
    pub fn new(config_source: ConfigSource, report: &LicenseReport, violations: Vec<Violation>) -> Self {
        Self {
            checked_at: Utc::now(),
            config_source,
            total_license_keys: report.len(),
            total_packages: report.values().map(Vec::len).sum(),
            violations,
        }
    }

    pub fn is_compliant(&self) -> bool {
        self.violations.is_empty()
    }

    /// Every package name that would need an exemption to pass, in report order, without duplicates
    pub fn affected_packages(&self) -> Vec<String> {
        let mut names: Vec<String> = Vec::new();
        for violation in &self.violations {
            for name in &violation.affected_packages {
                if !names.contains(name) {
                    names.push(name.clone());
                }
            }
        }
        names
    }
}
