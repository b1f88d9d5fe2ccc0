use anyhow::{Context, Result};
use config::{Config as ConfigBuilder, File, FileFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::path::PathBuf;

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub silences: SilencesConfig,
    #[serde(default)]
    pub shift: ShiftConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct SilencesConfig {
    /// Default silences JSON export read by `list` and `show`.
    pub file: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ShiftConfig {
    /// Default weekday for `until` (0 = Sunday .. 6 = Saturday).
    pub day: u32,
    /// Default hour for `until` (0..=23).
    pub hour: u32,
}

impl Default for ShiftConfig {
    fn default() -> Self {
        // Monday 08:00, the usual rotation handoff.
        Self { day: 1, hour: 8 }
    }
}

impl ShiftConfig {
    /// Validate shift configuration
    pub fn validate(&self) -> Result<()> {
        if self.day > 6 {
            anyhow::bail!("Invalid shift day {}, expected 0 (Sun) to 6 (Sat)", self.day);
        }
        if self.hour > 23 {
            anyhow::bail!("Invalid shift hour {}, expected 0 to 23", self.hour);
        }
        Ok(())
    }
}

impl Config {
    /// Validate all configuration
    pub fn validate(&self) -> Result<()> {
        self.shift.validate()?;
        Ok(())
    }
}

pub fn config_path() -> Result<PathBuf> {
    Ok(home::home_dir()
        .context("Could not find home directory")?
        .join(".hushctl")
        .join("config.toml"))
}

pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Config> {
    let loader = ConfigBuilder::builder()
        .add_source(File::from(path.as_ref()).format(FileFormat::Toml))
        .build()
        .context("Failed to build config loader")?;

    loader
        .try_deserialize()
        .context("Failed to parse config file")
}

pub fn load() -> Result<Config> {
    let config_path = config_path()?;

    let config = load_from_path(&config_path)?;

    // Validate configuration
    config.validate()?;

    Ok(config)
}

pub fn save_to_path<P: AsRef<Path>>(config: &Config, path: P) -> Result<()> {
    let toml_string = toml::to_string_pretty(config).context("Failed to serialize config")?;

    std::fs::write(path.as_ref(), toml_string).context("Failed to write config file")?;

    Ok(())
}
