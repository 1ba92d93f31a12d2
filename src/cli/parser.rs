use crate::export::ExportFormat;
use clap::{Parser, Subcommand};

/// Command-line interface definition for trelog
/// CLI application to log workouts (weight × reps) with SQLite or a local snapshot file
#[derive(Parser)]
#[command(
    name = "trelog",
    version = env!("CARGO_PKG_VERSION"),
    about = "A small training log CLI: record sets of weight x reps, browse history and a calendar",
    long_about = None
)]
pub struct Cli {
    /// Use this SQLite database (normalized backend)
    #[arg(global = true, long = "db", conflicts_with = "snapshot")]
    pub db: Option<String>,

    /// Use this JSON snapshot file (local single-user backend)
    #[arg(global = true, long = "snapshot")]
    pub snapshot: Option<String>,

    /// Act as this user (overrides `user` in the configuration)
    #[arg(global = true, long = "user")]
    pub user: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the database and configuration
    Init,

    /// Show the configuration file
    Config {
        #[arg(long = "print", help = "Print the effective configuration")]
        print_config: bool,
    },

    /// Print the internal log table
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Record a training session for one exercise
    Add {
        /// Exercise name (free text, e.g. "Bench Press")
        exercise: Option<String>,

        /// One set as WEIGHTxREPS (repeatable), e.g. --set 60x8 --set 65x6
        #[arg(long = "set", short = 's', value_name = "WxR")]
        sets: Vec<String>,

        /// Rest interval between sets, in seconds
        #[arg(long = "interval", short = 'i', value_name = "SECS")]
        interval: Option<u32>,

        /// Free-text note stored with the session
        #[arg(long = "memo", short = 'm')]
        memo: Option<String>,

        /// Start from a built-in template (bench, squat)
        #[arg(long = "template", short = 't')]
        template: Option<String>,
    },

    /// Show training history
    List {
        /// Only sessions of this day (YYYY-MM-DD, local time)
        #[arg(long = "day", short = 'd')]
        day: Option<String>,

        /// One line per training day with the exercises done
        #[arg(long = "calendar", conflicts_with = "json")]
        calendar: bool,

        /// Print the logs as JSON
        #[arg(long = "json")]
        json: bool,
    },

    /// Delete one training session (all of its sets)
    Del {
        /// Session id as printed by `list`
        id: String,

        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// Delete every training session of the current user
    Clear {
        #[arg(long = "yes", short = 'y', help = "Do not ask for confirmation")]
        yes: bool,
    },

    /// List known exercises (SQLite backend)
    Exercises,

    /// Export training history
    Export {
        #[arg(long, value_enum, default_value = "csv")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f', help = "Overwrite the output file if it exists")]
        force: bool,
    },
}
