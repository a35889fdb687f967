use anyhow::Result;
use pnpm_license_checker::config::{ConfigSource, CONFIG_FILE_NAME};
use pnpm_license_checker::init::add_allowed_packages;
use pnpm_license_checker::policy::{evaluate, ComplianceReport};
use crate::cli::ReportArgs;
use super::{load_report, GlobalOptions};

pub fn handle_fix(global: &GlobalOptions, report_args: ReportArgs, dry_run: bool) -> Result<()> {
    let resolved = global.resolve_config();

    let config_path = match &resolved.source {
        ConfigSource::Invalid(path) => {
            anyhow::bail!(
                "{} could not be loaded. Fix or remove it before running fix.",
                path.display()
            )
        }
        ConfigSource::File(path) => path.clone(),
        ConfigSource::Defaults => global.start_dir.join(CONFIG_FILE_NAME),
    };

    let licenses = load_report(global, &report_args)?;
    let violations = evaluate(&resolved.config, &licenses);
    let report = ComplianceReport::new(resolved.source, &licenses, violations);

    let packages = report.affected_packages();
    if packages.is_empty() {
        if !global.quiet {
            println!("No violations found, nothing to fix");
        }
        return Ok(());
    }

    if dry_run {
        println!("Would add {} packages to allowedPackages in {}:", packages.len(), config_path.display());
        for package in &packages {
            let mut licenses: Vec<&str> = Vec::new();
            for violation in report.violations.iter().filter(|v| v.affected_packages.contains(package)) {
                for license in &violation.invalid_licenses {
                    if !licenses.contains(&license.as_str()) {
                        licenses.push(license);
                    }
                }
            }
            println!("  - {} ({})", package, licenses.join(", "));
        }
        return Ok(());
    }

    let added = add_allowed_packages(&config_path, &packages)?;

    if !global.quiet {
        println!("Added {} packages to allowedPackages in {}:", added.len(), config_path.display());
        for package in &added {
            println!("  ✅ {}", package);
        }
    }

    Ok(())
}
