use super::open_store;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::history::HistoryLogic;
use crate::errors::{AppError, AppResult};
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List {
        day,
        calendar,
        json,
    } = cmd
    {
        let store = open_store(cfg)?;
        let mut logs = store.list();

        if let Some(d) = day {
            let d = date::parse_date(d).ok_or_else(|| AppError::InvalidDate(d.to_string()))?;
            logs = HistoryLogic::filter_day(logs, d);
        }

        if *json {
            println!("{}", serde_json::to_string_pretty(&logs)?);
            return Ok(());
        }

        if logs.is_empty() {
            println!("No training sessions yet.");
            return Ok(());
        }

        if *calendar {
            HistoryLogic::print_calendar(&logs);
        } else {
            HistoryLogic::print_history(&logs, &cfg.weight_unit);
        }
    }
    Ok(())
}
