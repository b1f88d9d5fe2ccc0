use anyhow::{Context, Result};

use crate::OutputFormat;
use crate::silence::duration::{parse_duration, parse_duration_strict};

/// Parse a duration string and print the seconds it denotes.
pub fn parse(input: &str, strict: bool, format: OutputFormat) -> Result<()> {
    let seconds = if strict {
        parse_duration_strict(input).with_context(|| format!("Invalid duration '{}'", input))?
    } else {
        parse_duration(input)
    };

    match format {
        OutputFormat::Text => println!("{}", seconds),
        OutputFormat::Json => println!(
            "{}",
            serde_json::json!({ "input": input, "seconds": seconds })
        ),
    }

    Ok(())
}
