use anyhow::{Context, Result};
use chrono::NaiveDateTime;

use crate::OutputFormat;
use crate::config::Config;
use crate::silence::lifecycle::duration_till_next_day;
use crate::silence::models::WeekdayTarget;

const DAY_NAMES: [&str; 7] = [
    "sunday",
    "monday",
    "tuesday",
    "wednesday",
    "thursday",
    "friday",
    "saturday",
];

/// Parses a weekday given as 0-6 (Sun-Sat) or as an English name. Names
/// may be shortened to a prefix of at least three letters ("wed").
pub fn parse_weekday(s: &str) -> Result<u32> {
    if let Ok(day) = s.parse::<u32>() {
        // Range-checked by WeekdayTarget::new.
        return Ok(day);
    }
    let lower = s.to_lowercase();
    if lower.len() >= 3 {
        if let Some(i) = DAY_NAMES.iter().position(|n| n.starts_with(&lower)) {
            return Ok(i as u32);
        }
    }
    anyhow::bail!("Unknown weekday '{}'", s)
}

/// Print the time until the next occurrence of a weekday at an hour.
/// Day and hour fall back to the configured shift when omitted.
pub fn until(
    config: &Config,
    day: Option<String>,
    hour: Option<u32>,
    format: OutputFormat,
    now: NaiveDateTime,
) -> Result<()> {
    let day = match day {
        Some(d) => parse_weekday(&d)?,
        None => config.shift.day,
    };
    let hour = hour.unwrap_or(config.shift.hour);
    let target = WeekdayTarget::new(day, hour).context("Invalid shift target")?;

    let remaining = duration_till_next_day(target, now);

    match format {
        OutputFormat::Text => println!("{}", remaining),
        OutputFormat::Json => println!(
            "{}",
            serde_json::json!({ "day": day, "hour": hour, "until": remaining })
        ),
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_weekday_numeric() {
        assert_eq!(parse_weekday("0").unwrap(), 0);
        assert_eq!(parse_weekday("6").unwrap(), 6);
    }

    #[test]
    fn test_parse_weekday_names() {
        assert_eq!(parse_weekday("sunday").unwrap(), 0);
        assert_eq!(parse_weekday("wed").unwrap(), 3);
        assert_eq!(parse_weekday("Sat").unwrap(), 6);
        assert_eq!(parse_weekday("thu").unwrap(), 4);
    }

    #[test]
    fn test_parse_weekday_rejects_short_or_unknown() {
        assert!(parse_weekday("tu").is_err());
        assert!(parse_weekday("notaday").is_err());
    }
}
