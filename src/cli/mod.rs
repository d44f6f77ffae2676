//! CLI command definitions and handlers

mod condition;
mod date;
mod delete;
mod list;
mod record;

pub use condition::report as condition_report;
pub use date::parse_date_args;

use crate::config::UserConfig;
use crate::models::EventKind;
use crate::storage::FileStore;
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// periodic - forecast the next cycle start or end from your own history
#[derive(Parser, Debug)]
#[command(name = "periodic")]
#[command(
    version,
    about = "Track cycle start/end dates and forecast the next one as a day-by-day histogram",
    long_about = "periodic keeps a small log of cycle start and end dates and predicts \
when the next transition is likely, weighting recent cycles more than old ones.\n\n\
Run without a subcommand to show the current condition and forecast.",
    after_help = "\
Examples:
  periodic                         Show the current condition and forecast
  periodic start                   Record that a period started today
  periodic e 2024-01-06            Record that a period ended on 2024-01-06
  periodic delete 2024 1 6         Delete every entry on 2024-01-06
  periodic list                    List the recorded history

Every command has a one-letter alias (c, s, e, d, l).
Dates are optional; today's date is used when omitted."
)]
pub struct Cli {
    /// Event log file (default: per-user data directory)
    #[arg(long, global = true, env = "PERIODIC_DATA_FILE")]
    pub data_file: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace)
    #[arg(long, global = true, default_value = "warn", value_parser = ["error", "warn", "info", "debug", "trace"])]
    pub log_level: String,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the current cycle condition and forecast (default)
    #[command(visible_alias = "c")]
    Condition,

    /// Record that a period started
    #[command(visible_alias = "s")]
    Start {
        /// Date (e.g. 2024-01-05 or 2024 1 5); defaults to today
        #[arg(value_name = "DATE")]
        date: Vec<String>,
    },

    /// Record that a period ended
    #[command(visible_alias = "e")]
    End {
        /// Date (e.g. 2024-01-05 or 2024 1 5); defaults to today
        #[arg(value_name = "DATE")]
        date: Vec<String>,
    },

    /// Delete every entry on a date
    #[command(visible_alias = "d")]
    Delete {
        /// Date (e.g. 2024-01-05 or 2024 1 5); defaults to today
        #[arg(value_name = "DATE")]
        date: Vec<String>,
    },

    /// List the recorded history
    #[command(visible_alias = "l")]
    List,

    /// Manage configuration (init or show)
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
pub enum ConfigAction {
    /// Initialize config file with example settings
    Init,
    /// Show current config and paths
    Show,
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    let mut config = UserConfig::load()?;
    if let Some(path) = cli.data_file {
        config.storage.data_file = Some(path);
    }
    let store = FileStore::new(config.data_file());
    tracing::debug!("Using data file {}", store.path().display());

    match cli.command.unwrap_or(Commands::Condition) {
        Commands::Condition => condition::run(&store, &config.forecast),

        Commands::Start { date } => {
            let date = parse_date_args(&date, today())?;
            record::run(&store, EventKind::Start, date, &config.forecast)
        }

        Commands::End { date } => {
            let date = parse_date_args(&date, today())?;
            record::run(&store, EventKind::End, date, &config.forecast)
        }

        Commands::Delete { date } => {
            let date = parse_date_args(&date, today())?;
            delete::run(&store, date)
        }

        Commands::List => list::run(&store),

        Commands::Config { action } => run_config_action(action, &config),
    }
}

fn today() -> chrono::NaiveDate {
    chrono::Local::now().date_naive()
}

fn run_config_action(action: ConfigAction, config: &UserConfig) -> Result<()> {
    match action {
        ConfigAction::Init => {
            let path = UserConfig::init_user_config()?;
            println!("Config initialized at: {}", path.display());
            Ok(())
        }
        ConfigAction::Show => show_config(config),
    }
}

fn show_config(config: &UserConfig) -> Result<()> {
    use console::style;

    println!("{}", style("Config paths:").bold());
    if let Some(user_path) = UserConfig::user_config_path() {
        let status = if user_path.exists() {
            "[OK]"
        } else {
            "(not found)"
        };
        println!("  User config: {} {}", user_path.display(), status);
    }
    let data_file = config.data_file();
    let status = if data_file.exists() {
        "[OK]"
    } else {
        "(not found)"
    };
    println!("  Data file:   {} {}", data_file.display(), status);
    println!();

    let fc = &config.forecast;
    println!("{}", style("Forecast settings:").bold());
    println!("  decay            = {}", fc.decay);
    println!("  tail_probability = {}", fc.tail_probability);
    println!("  horizon_days     = {}", fc.horizon_days);
    println!("  bar_width        = {}", fc.bar_width);
    println!("  min_cycles       = {}", fc.min_cycles);
    println!("  double_gap_days  = {}", fc.gaps.double_gap_days);
    println!("  triple_gap_days  = {}", fc.gaps.triple_gap_days);
    Ok(())
}
