use super::{ask_confirmation, open_store};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::del::DeleteLogic;
use crate::errors::AppResult;
use crate::models::LogId;
use crate::ui::messages::info;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { id, yes } = cmd {
        let id = LogId::new(id.trim());

        if !*yes
            && !ask_confirmation(&format!(
                "Delete training session {}? This action is irreversible.",
                id
            ))
        {
            info("Operation cancelled.");
            return Ok(());
        }

        let mut store = open_store(cfg)?;
        DeleteLogic::apply(store.as_mut(), &id);
    }

    Ok(())
}
