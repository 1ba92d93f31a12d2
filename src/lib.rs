//! trelog library root.
//! Exposes the CLI parser, the high-level run() function, and the training-log
//! store with its two backends.

pub mod cli;
pub mod config;
pub mod core;
pub mod db;
pub mod errors;
pub mod export;
pub mod models;
pub mod session;
pub mod store;
pub mod ui;
pub mod utils;

use clap::Parser;
use cli::parser::{Cli, Commands};
use config::Config;
use errors::AppResult;
use utils::path::expand_tilde_str;

/// Central command dispatcher
pub fn dispatch(cli: &Cli, cfg: &Config) -> AppResult<()> {
    match &cli.command {
        Commands::Init => cli::commands::init::handle(cli),
        Commands::Config { .. } => cli::commands::config::handle(&cli.command, cfg),
        Commands::Add { .. } => cli::commands::add::handle(&cli.command, cfg),
        Commands::List { .. } => cli::commands::list::handle(&cli.command, cfg),
        Commands::Del { .. } => cli::commands::del::handle(&cli.command, cfg),
        Commands::Clear { .. } => cli::commands::clear::handle(&cli.command, cfg),
        Commands::Exercises => cli::commands::exercises::handle(cfg),
        Commands::Export { .. } => cli::commands::export::handle(&cli.command, cfg),
        Commands::Log { .. } => cli::commands::log::handle(&cli.command, cfg),
    }
}

/// Apply global command-line overrides on top of the loaded configuration.
pub fn apply_overrides(cli: &Cli, cfg: &mut Config) {
    if let Some(db) = &cli.db {
        cfg.database = Some(expand_tilde_str(db));
    }
    if let Some(file) = &cli.snapshot {
        cfg.database = None;
        cfg.snapshot_file = expand_tilde_str(file);
    }
    if let Some(user) = &cli.user {
        cfg.user = Some(user.clone());
    }
}

/// Entry point used by main.rs
pub fn run() -> AppResult<()> {
    let cli = Cli::parse();

    // in test mode the user's own configuration file is never read
    let mut cfg = if cli.test {
        Config::default()
    } else {
        Config::load()?
    };

    apply_overrides(&cli, &mut cfg);

    dispatch(&cli, &cfg)
}
