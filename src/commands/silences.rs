use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};

use crate::OutputFormat;
use crate::config::Config;
use crate::human;
use crate::silence::display::{SilenceLabel, abbr};
use crate::silence::lifecycle::expires_in;
use crate::silence::models::Silence;

fn silences_path(config: &Config, file: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(file) = file {
        return Ok(file);
    }
    if let Some(file) = &config.silences.file {
        return Ok(file.clone());
    }
    anyhow::bail!(
        "No silences file given. Pass --file or set silences.file in ~/.hushctl/config.toml"
    )
}

/// Load a silences JSON export as written by the alert-manager backend.
pub fn load_silences(path: &Path) -> Result<Vec<Silence>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read silences file {}", path.display()))?;
    serde_json::from_str(&content).context("Failed to parse silences JSON")
}

/// List silences with their display names and expiry.
pub fn list(
    config: &Config,
    file: Option<PathBuf>,
    active_only: bool,
    format: OutputFormat,
    now: DateTime<Utc>,
) -> Result<()> {
    let path = silences_path(config, file)?;
    let silences = load_silences(&path)?;

    let shown: Vec<&Silence> = silences
        .iter()
        .filter(|s| !active_only || s.active)
        .collect();

    if let OutputFormat::Json = format {
        let rows: Vec<serde_json::Value> = shown
            .iter()
            .map(|s| {
                let label = SilenceLabel::from_param_set(&s.param_set);
                serde_json::json!({
                    "id": s.id,
                    "name": label.display,
                    "full_name": label.full,
                    "active": s.active,
                    "expires_in": expires_in(s, now),
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    if shown.is_empty() {
        println!("No silences found.");
        return Ok(());
    }

    println!(
        "{:<12} {:<33} {:<8} {:<12}",
        "ID", "Silence", "Active", "Expires"
    );
    println!("{}", "-".repeat(67));

    for s in &shown {
        let label = SilenceLabel::from_param_set(&s.param_set);
        println!(
            "{:<12} {:<33} {:<8} {:<12}",
            s.id,
            label.display,
            s.active,
            expires_in(s, now)
        );
    }

    Ok(())
}

/// Show one silence in full, including notes.
pub fn show(config: &Config, file: Option<PathBuf>, id: &str, now: DateTime<Utc>) -> Result<()> {
    let path = silences_path(config, file)?;
    let silences = load_silences(&path)?;

    let silence = silences
        .iter()
        .find(|s| s.id == id)
        .with_context(|| format!("No silence with id '{}'", id))?;

    let label = SilenceLabel::from_param_set(&silence.param_set);

    println!("Silence {}", silence.id);
    if let Some(alertname) = silence.param("alertname") {
        println!(
            "Alert:   {}{}",
            alertname,
            abbr(silence.param("abbr").unwrap_or(""))
        );
    }
    println!("Name:    {}", label.full);
    println!("User:    {}", silence.user);
    println!("Active:  {}", silence.active);
    println!(
        "Created: {}",
        human::diff_secs(silence.created.saturating_sub(now.timestamp()))
    );
    let expiry = expires_in(silence, now);
    if !expiry.is_empty() {
        println!("Expires: {}", expiry);
    }

    if !silence.notes.is_empty() {
        println!();
        println!("Notes:");
        for note in &silence.notes {
            println!(
                "  {} ({}, {})",
                note.text,
                note.author,
                human::diff_secs(note.ts.saturating_sub(now.timestamp()))
            );
        }
    }

    Ok(())
}
