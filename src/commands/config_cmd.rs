use anyhow::Result;
use std::process::ExitCode;
use pnpm_license_checker::config::{ConfigSource, CONFIG_FILE_NAME};
use pnpm_license_checker::output::format_config_output;
use super::GlobalOptions;

pub fn handle_config(global: &GlobalOptions, show: bool, validate: bool) -> Result<ExitCode> {
    if !show && !validate {
        if !global.quiet {
            eprintln!("Use --show or --validate");
        }
        return Ok(ExitCode::from(2));
    }

    let resolved = global.resolve_config();

    if show {
        println!("{}", format_config_output(&resolved)?);
    }

    if validate {
        if !resolved.is_valid() {
            for warning in &resolved.warnings {
                eprintln!("❌ {}", warning);
            }
            eprintln!("❌ Configuration validation failed");
            return Ok(ExitCode::from(1));
        }

        if !global.quiet {
            match &resolved.source {
                ConfigSource::Defaults => {
                    println!("✅ No {} found, defaults apply", CONFIG_FILE_NAME)
                }
                _ => println!("✅ Configuration is valid"),
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
