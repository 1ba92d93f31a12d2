pub mod add;
pub mod clear;
pub mod config;
pub mod del;
pub mod exercises;
pub mod export;
pub mod init;
pub mod list;
pub mod log;

use crate::config::Config;
use crate::errors::AppResult;
use crate::session::Session;
use crate::store::{self, LogStore};
use crate::ui::messages::warning;
use std::io::{self, Write};

/// Open the configured backend for the configured user.
pub(crate) fn open_store(cfg: &Config) -> AppResult<Box<dyn LogStore>> {
    store::open(&cfg.backend(), Session::new(cfg.user.clone()))
}

/// Ask a yes/no confirmation from the user
pub(crate) fn ask_confirmation(prompt: &str) -> bool {
    warning(prompt);
    print!("Confirm [y/N]: ");
    let _ = io::stdout().flush();

    let mut s = String::new();
    if io::stdin().read_line(&mut s).is_ok() {
        matches!(s.trim().to_lowercase().as_str(), "y" | "yes")
    } else {
        false
    }
}
