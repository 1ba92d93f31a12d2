use crate::errors::{AppError, AppResult};
use crate::models::templates::Template;
use crate::models::{TrainingEntry, TrainingLog};
use crate::store::LogStore;
use crate::ui::messages::{info, success};
use crate::utils::formatting::{fmt_interval, fmt_sets, fmt_weight};
use crate::utils::sets::parse_sets;

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Turn command-line input into an entry.
    ///
    /// With `--template`, the template supplies the exercise, sets and interval;
    /// anything given explicitly wins over it.
    pub fn build_entry(
        exercise: Option<&str>,
        sets: &[String],
        interval: Option<u32>,
        memo: Option<&str>,
        template: Option<&str>,
    ) -> AppResult<TrainingEntry> {
        let base = match template {
            Some(code) => Some(
                Template::from_code(code)
                    .ok_or_else(|| AppError::UnknownTemplate(code.to_string()))?
                    .entry(),
            ),
            None => None,
        };

        let exercise = exercise
            .map(|e| e.trim().to_string())
            .or_else(|| base.as_ref().map(|b| b.exercise.clone()))
            .ok_or_else(|| AppError::InvalidEntry("missing exercise name".into()))?;

        let sets = if sets.is_empty() {
            base.as_ref().map(|b| b.sets.clone()).unwrap_or_default()
        } else {
            parse_sets(sets)?
        };

        let mut entry = TrainingEntry::new(exercise, sets);
        entry.interval_seconds = interval.or(base.and_then(|b| b.interval_seconds));
        entry.memo = memo
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .map(String::from);

        entry.validate()?;
        Ok(entry)
    }

    pub fn apply(store: &mut dyn LogStore, entry: &TrainingEntry, unit: &str) -> AppResult<TrainingLog> {
        let log = store.save(entry)?;

        success(format!(
            "Saved {}: {} set(s), max {}{}",
            log.exercise,
            log.sets.len(),
            fmt_weight(log.max_weight()),
            unit
        ));
        info(format!("Sets: {}", fmt_sets(&log, unit)));
        if let Some(secs) = log.interval_seconds {
            info(format!("Rest interval: {}", fmt_interval(secs)));
        }
        info(format!("Id: {}", log.id));

        Ok(log)
    }
}
