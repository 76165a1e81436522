//! CLI frontend for the Hibernation controller.

mod commands;
mod host;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "hibernate",
    about = "Hibernation: skip days at a time in a simulated farming game",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log filter (error, warn, info, debug, trace); overrides RUST_LOG
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

/// Targets of the "Hibernate Until" menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum UntilTarget {
    /// The next villager birthday
    Birthday,
    /// The next festival
    Festival,
    /// Day 1 of the next season
    Season,
    /// Until a scripted event is skipped, for at most a year
    Event,
}

#[derive(Subcommand)]
enum Commands {
    /// Run a hibernation on a simulated host and report each day
    Simulate {
        /// Number of nights to skip
        #[arg(short, long)]
        nights: Option<u32>,

        /// Duration preset such as "2 weeks" or "1 season"
        #[arg(short, long)]
        length: Option<String>,

        /// Hibernate until woken
        #[arg(long)]
        forever: bool,

        /// Hibernate until a calendar target
        #[arg(short, long, value_enum)]
        until: Option<UntilTarget>,

        /// Start date, e.g. "spring 1" or "fall 9 2"
        #[arg(long, default_value = "spring 1")]
        start: String,

        /// Calendar JSON file (default: built-in calendar)
        #[arg(long)]
        calendar: Option<PathBuf>,

        /// Hibernation config JSON file
        #[arg(long)]
        config: Option<PathBuf>,

        /// RNG seed for the simulated host
        #[arg(short, long, default_value = "42")]
        seed: u64,

        /// Chance (0 to 1) that a day opens with something the player must deal with
        #[arg(long, default_value = "0.0")]
        block_chance: f64,

        /// Simulated day on which a scripted event gets skipped (repeatable)
        #[arg(long)]
        event_on: Vec<u32>,

        /// Simulated day to wake up on
        #[arg(long)]
        wake_on: Option<u32>,

        /// Simulated day on which the player holds the wake key
        #[arg(long)]
        escape_on: Option<u32>,

        /// Hook points that fail to install (e.g. end-of-night)
        #[arg(long)]
        disable_hook: Vec<String>,

        /// Stop after this many days
        #[arg(long, default_value = "224")]
        max_days: u32,

        /// Show the controller event log
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show upcoming birthdays, festivals, and seasons from a date
    Lookahead {
        /// Start date, e.g. "spring 1" or "fall 9 2"
        #[arg(long, default_value = "spring 1")]
        start: String,

        /// Calendar JSON file (default: built-in calendar)
        #[arg(long)]
        calendar: Option<PathBuf>,
    },

    /// Show the sleep menu and both hibernation questions
    Menu {
        /// Date the menu is opened on
        #[arg(long, default_value = "spring 1")]
        start: String,

        /// Calendar JSON file (default: built-in calendar)
        #[arg(long)]
        calendar: Option<PathBuf>,

        /// Hibernation config JSON file
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

fn main() {
    let cli = Cli::parse();

    let mut logger =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if let Some(level) = &cli.log_level {
        logger.parse_filters(level);
    }
    logger.init();

    let result = match cli.command {
        Commands::Simulate {
            nights,
            length,
            forever,
            until,
            start,
            calendar,
            config,
            seed,
            block_chance,
            event_on,
            wake_on,
            escape_on,
            disable_hook,
            max_days,
            verbose,
        } => commands::simulate::Selection::from_args(nights, length.as_deref(), forever, until)
            .and_then(|selection| {
                commands::simulate::run(&commands::simulate::SimulateArgs {
                    selection,
                    start,
                    calendar,
                    config,
                    seed,
                    block_chance,
                    event_on,
                    wake_on,
                    escape_on,
                    disable_hook,
                    max_days,
                    verbose,
                })
            }),
        Commands::Lookahead { start, calendar } => {
            commands::lookahead::run(&start, calendar.as_deref())
        }
        Commands::Menu {
            start,
            calendar,
            config,
        } => commands::menu::run(&start, calendar.as_deref(), config.as_deref()),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
