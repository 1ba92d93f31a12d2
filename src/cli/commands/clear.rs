use super::{ask_confirmation, open_store};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::clear::ClearLogic;
use crate::errors::AppResult;
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Clear { yes } = cmd {
        if !*yes && !ask_confirmation("Delete ALL your training sessions? This action is irreversible.")
        {
            info("Operation cancelled.");
            return Ok(());
        }

        let mut store = open_store(cfg)?;
        ClearLogic::apply(store.as_mut())?;
    }

    Ok(())
}
