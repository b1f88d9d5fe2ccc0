use std::path::PathBuf;

use anyhow::Result;
use chrono::{Local, Utc};
use clap::{Args, Parser, Subcommand};
use hushctl::OutputFormat;
use hushctl::commands;
use hushctl::config;

#[derive(Parser)]
#[command(name = "hush")]
#[command(about = "Silence and shift inspection for alert-manager dashboards")]
#[command(version)]
struct Cli {
    #[arg(
        long,
        value_enum,
        global = true,
        default_value_t = OutputFormat::Text,
        help = "Output format"
    )]
    format: OutputFormat,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse a duration like "2h" into seconds
    Parse {
        #[arg(help = "Duration, e.g. 2h, 4d, 1.5w")]
        duration: String,
        #[arg(long, help = "Fail on malformed input instead of yielding 0")]
        strict: bool,
    },

    /// List silences from a JSON export
    List {
        #[arg(long, help = "Silences JSON file (overrides config)")]
        file: Option<PathBuf>,
        #[arg(long, help = "Only show active silences")]
        active_only: bool,
    },

    /// Show one silence in full
    Show {
        #[arg(help = "Silence ID")]
        id: String,
        #[arg(long, help = "Silences JSON file (overrides config)")]
        file: Option<PathBuf>,
    },

    /// Time until the next occurrence of a weekday at an hour
    Until {
        #[arg(help = "Weekday, 0-6 (Sun-Sat) or a name like wed")]
        day: Option<String>,
        #[arg(help = "Hour of day, 0-23")]
        hour: Option<u32>,
    },

    /// Inspect or edit configuration
    Config(ConfigArgs),
}

#[derive(Args)]
struct ConfigArgs {
    #[command(subcommand)]
    action: ConfigAction,
}

#[derive(Subcommand)]
enum ConfigAction {
    List,
    Set { key: String, value: String },
    Get { key: String },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // The config file is optional; every setting has a flag or argument.
    let config = config::load().unwrap_or_else(|_| config::Config::default());

    match &cli.command {
        Commands::Parse { duration, strict } => {
            commands::parse::parse(duration, *strict, cli.format)?;
        }
        Commands::List { file, active_only } => {
            commands::silences::list(&config, file.clone(), *active_only, cli.format, Utc::now())?;
        }
        Commands::Show { id, file } => {
            commands::silences::show(&config, file.clone(), id, Utc::now())?;
        }
        Commands::Until { day, hour } => {
            commands::until::until(
                &config,
                day.clone(),
                *hour,
                cli.format,
                Local::now().naive_local(),
            )?;
        }
        Commands::Config(args) => match &args.action {
            ConfigAction::List => commands::config::list(&config)?,
            ConfigAction::Set { key, value } => commands::config::set(key, value)?,
            ConfigAction::Get { key } => commands::config::get(key, &config)?,
        },
    }

    Ok(())
}
