use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::log::LogLogic;
use crate::db::initialize::init_db;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::store::Backend;
use crate::ui::messages::warning;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if matches!(cmd, Commands::Log { print: true }) {
        let Backend::Normalized { database } = cfg.backend() else {
            warning("The internal log lives in the SQLite database; use --db or `init` first.");
            return Ok(());
        };

        let pool = DbPool::new(&database)?;
        init_db(&pool.conn)?;
        LogLogic::print_log(&pool.conn)?;
    }

    Ok(())
}
