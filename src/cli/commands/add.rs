use super::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::add::AddLogic;
use crate::errors::AppResult;

/// Record a training session.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        exercise,
        sets,
        interval,
        memo,
        template,
    } = cmd
    {
        let entry = AddLogic::build_entry(
            exercise.as_deref(),
            sets,
            *interval,
            memo.as_deref(),
            template.as_deref(),
        )?;

        let mut store = open_store(cfg)?;
        AddLogic::apply(store.as_mut(), &entry, &cfg.weight_unit)?;
    }

    Ok(())
}
