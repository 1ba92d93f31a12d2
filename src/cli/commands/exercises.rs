use crate::config::Config;
use crate::errors::AppResult;
use crate::session::Session;
use crate::store::{Backend, NormalizedStore};
use crate::ui::messages::{info, warning};
use crate::utils::table::{Column, Table};

/// List the exercise registry. Only the SQLite backend has one.
pub fn handle(cfg: &Config) -> AppResult<()> {
    let Backend::Normalized { database } = cfg.backend() else {
        warning("The snapshot backend keeps no exercise registry; use --db or `init` first.");
        return Ok(());
    };

    let store = NormalizedStore::open(&database, Session::new(cfg.user.clone()))?;
    let exercises = store.exercises()?;

    if exercises.is_empty() {
        info("No exercises recorded yet.");
        return Ok(());
    }

    let mut table = Table::new(vec![Column::new("NAME"), Column::new("ID")]);
    for ex in exercises {
        table.add_row(vec![ex.name, ex.id]);
    }
    print!("{}", table.render());

    Ok(())
}
