use anyhow::Result;
use std::process::ExitCode;
use pnpm_license_checker::output::{format_json_output, format_text_output};
use pnpm_license_checker::policy::{evaluate, ComplianceReport};
use crate::cli::{CheckArgs, OutputFormat};
use super::{load_report, GlobalOptions};

pub fn handle_check(global: &GlobalOptions, args: CheckArgs) -> Result<ExitCode> {
    let resolved = global.resolve_config();
    let licenses = load_report(global, &args.report)?;

    let violations = evaluate(&resolved.config, &licenses);
    let report = ComplianceReport::new(resolved.source, &licenses, violations);

    match args.format {
        OutputFormat::Json => println!("{}", format_json_output(&report)?),
        OutputFormat::Text => {
            let output = format_text_output(&report, global.verbose);
            if !report.is_compliant() {
                eprint!("{}", output);
            } else if !global.quiet {
                print!("{}", output);
            }
        }
    }

    if report.is_compliant() || args.exit_zero {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::from(1))
    }
}
