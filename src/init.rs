use anyhow::{Context, Result};
use serde_json::{json, Map, Value};
use std::fs;
use std::path::{Path, PathBuf};
use crate::config::{default_allowed_licenses, CONFIG_FILE_NAME};

/// Starter configuration: no exempt packages and the default license allow-list spelled out.
pub fn starter_config() -> Value {
    json!({
        "allowedPackages": [],
        "allowedLicenses": default_allowed_licenses(),
    })
}

/// Write a starter configuration file into `dir`.
pub fn generate_config(dir: &Path, force: bool) -> Result<PathBuf> {
    let config_path = dir.join(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        return Err(anyhow::anyhow!(
            "{} already exists. Use --force to overwrite it.",
            config_path.display()
        ));
    }

    write_config(&config_path, &starter_config())?;
    Ok(config_path)
}

/// Append package names to `allowedPackages`, creating the file if needed.
///
/// Other fields are kept as they are. Names already present are skipped;
/// the ones actually added are returned.
pub fn add_allowed_packages(config_path: &Path, packages: &[String]) -> Result<Vec<String>> {
    let mut document = if config_path.exists() {
        let content = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read {}", config_path.display()))?;
        serde_json::from_str::<Value>(&content)
            .with_context(|| format!("Failed to parse {}", config_path.display()))?
    } else {
        Value::Object(Map::new())
    };

    let object = document
        .as_object_mut()
        .ok_or_else(|| anyhow::anyhow!("{} is not a JSON object", config_path.display()))?;

    let allowed = object
        .entry("allowedPackages")
        .or_insert_with(|| Value::Array(Vec::new()))
        .as_array_mut()
        .ok_or_else(|| {
            anyhow::anyhow!(
                "Invalid format in {}: allowedPackages should be an array",
                config_path.display()
            )
        })?;

    let mut added = Vec::new();
    for package in packages {
        if allowed.iter().any(|existing| existing.as_str() == Some(package.as_str())) {
            continue;
        }
        allowed.push(Value::String(package.clone()));
        added.push(package.clone());
    }

    if !added.is_empty() {
        write_config(config_path, &document)?;
    }

    Ok(added)
}

fn write_config(path: &Path, document: &Value) -> Result<()> {
    let mut content = serde_json::to_string_pretty(document).context("Failed to serialize configuration")?;
    content.push('\n');

    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(())
}
