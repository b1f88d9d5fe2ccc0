use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::config::{self, Config};

pub fn list(config: &Config) -> Result<()> {
    // Config derives Serialize, so pretty-print it as TOML.
    let toml_str = toml::to_string_pretty(config).context("Failed to serialize config")?;
    println!("{}", toml_str);
    Ok(())
}

pub fn get(key: &str, config: &Config) -> Result<()> {
    // Convert to Value and walk the key path, supporting dot notation
    // like "shift.hour".
    let value = serde_json::to_value(config).context("Failed to serialize config")?;

    let mut current = &value;
    for part in key.split('.') {
        current = current
            .get(part)
            .context(format!("Key not found: {}", part))?;
    }

    match current {
        serde_json::Value::String(s) => println!("{}", s),
        v => println!("{}", v),
    }

    Ok(())
}

pub fn set(key: &str, value: &str) -> Result<()> {
    let path = config::config_path()?;
    let mut config = if path.exists() {
        config::load_from_path(&path)?
    } else {
        Config::default()
    };

    match key {
        "silences.file" => config.silences.file = Some(PathBuf::from(value)),
        "shift.day" => config.shift.day = crate::commands::until::parse_weekday(value)?,
        "shift.hour" => config.shift.hour = value.parse().context("Invalid hour")?,
        _ => anyhow::bail!("Unknown config key '{}'", key),
    }
    config.validate()?;

    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    config::save_to_path(&config, &path)?;
    println!("Set {} = {}", key, value);

    Ok(())
}
