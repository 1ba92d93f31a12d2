use crate::models::TrainingLog;
use crate::ui::messages::header;
use crate::utils::colors::{CYAN, GREY, RESET};
use crate::utils::date::{day_label, local_time};
use crate::utils::formatting::{fmt_interval, fmt_sets, fmt_weight};
use crate::utils::table::{Column, Table};
use chrono::NaiveDate;

/// Logs of one calendar day, in the order the store returned them.
pub struct DayGroup<'a> {
    pub day: NaiveDate,
    pub logs: Vec<&'a TrainingLog>,
}

pub struct HistoryLogic;

impl HistoryLogic {
    /// Group by local calendar day. Input is newest-first, so are the groups.
    pub fn group_by_day(logs: &[TrainingLog]) -> Vec<DayGroup<'_>> {
        let mut groups: Vec<DayGroup<'_>> = Vec::new();

        for log in logs {
            let day = log.local_day();
            match groups.iter_mut().find(|g| g.day == day) {
                Some(g) => g.logs.push(log),
                None => groups.push(DayGroup {
                    day,
                    logs: vec![log],
                }),
            }
        }

        groups
    }

    pub fn filter_day(logs: Vec<TrainingLog>, day: NaiveDate) -> Vec<TrainingLog> {
        logs.into_iter().filter(|l| l.local_day() == day).collect()
    }

    pub fn print_history(logs: &[TrainingLog], unit: &str) {
        for group in Self::group_by_day(logs) {
            println!();
            header(day_label(&group.day));

            let mut table = Table::new(vec![
                Column::new("TIME"),
                Column::new("EXERCISE"),
                Column::new("SETS"),
                Column::new("MAX"),
                Column::new("VOLUME"),
                Column::new("REST"),
                Column::new("ID"),
            ]);

            for log in &group.logs {
                table.add_row(vec![
                    local_time(&log.date),
                    log.exercise.clone(),
                    fmt_sets(log, unit),
                    format!("{}{}", fmt_weight(log.max_weight()), unit),
                    format!("{}{}", fmt_weight(log.total_volume()), unit),
                    log.interval_seconds.map(fmt_interval).unwrap_or_else(|| "-".into()),
                    log.id.to_string(),
                ]);
            }

            print!("{}", table.render());

            for log in &group.logs {
                if let Some(memo) = &log.memo {
                    println!("{GREY}  {}: {}{RESET}", log.exercise, memo);
                }
            }
        }
    }

    /// One line per training day: `2025-09-01 (Mon)  Bench Press, Squat`.
    pub fn print_calendar(logs: &[TrainingLog]) {
        for group in Self::group_by_day(logs) {
            let mut names: Vec<&str> = Vec::new();
            for log in &group.logs {
                if !names.contains(&log.exercise.as_str()) {
                    names.push(&log.exercise);
                }
            }
            println!(
                "{CYAN}{}{RESET}  {}  {GREY}({} session(s)){RESET}",
                day_label(&group.day),
                names.join(", "),
                group.logs.len()
            );
        }
    }
}
