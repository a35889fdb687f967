use anyhow::Result;
use pnpm_license_checker::init;
use super::GlobalOptions;

pub fn handle_init(global: &GlobalOptions, force: bool) -> Result<()> {
    let config_path = init::generate_config(&global.start_dir, force)?;

    if !global.quiet {
        println!("✅ Created {}", config_path.display());
    }

    Ok(())
}
