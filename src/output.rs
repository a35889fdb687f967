use colored::Colorize;
use crate::config::{ConfigSource, ResolvedConfig};
use crate::policy::{ComplianceReport, Violation};

pub fn format_text_output(report: &ComplianceReport, verbose: bool) -> String {
    let mut output = String::new();

    if verbose {
        output.push_str(&format!(
            "Checked {} license keys across {} packages ({})\n",
            report.total_license_keys,
            report.total_packages,
            describe_source(&report.config_source)
        ));
    }

    for violation in &report.violations {
        output.push_str(&format_violation(violation));
    }

    if report.is_compliant() {
        output.push_str(&format!("{}\n", "All packages have supported licenses.".green()));
    } else {
        output.push_str(&format!(
            "{}\n",
            format!(
                "One or more packages have unsupported licenses ({} license keys, {} packages).",
                report.violations.len(),
                report.affected_packages().len()
            )
            .red()
        ));
    }

    output
}

fn format_violation(violation: &Violation) -> String {
    format!(
        "{}\nAffected Packages: {}\n",
        format!(
            "Unsupported License(s) Detected: {}",
            violation.invalid_licenses.join(", ")
        )
        .red(),
        violation.affected_packages.join(", ")
    )
}

pub fn format_json_output(report: &ComplianceReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

pub fn describe_source(source: &ConfigSource) -> String {
    match source {
        ConfigSource::Defaults => "no configuration file, using defaults".to_string(),
        ConfigSource::File(path) => format!("configuration from {}", path.display()),
        ConfigSource::Invalid(path) => format!("invalid configuration at {}, using defaults", path.display()),
    }
}

/// Render the resolved configuration for `config --show`.
pub fn format_config_output(resolved: &ResolvedConfig) -> serde_json::Result<String> {
    let mut output = format!("# {}\n", describe_source(&resolved.source));
    for warning in &resolved.warnings {
        output.push_str(&format!("# {}\n", format!("warning: {}", warning).yellow()));
    }
    output.push_str(&serde_json::to_string_pretty(&resolved.config)?);
    Ok(output)
}
