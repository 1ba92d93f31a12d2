use crate::errors::{AppError, AppResult};
use crate::export::model::flatten;
use crate::export::notify_export_success;
use crate::models::TrainingLog;
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// Export the logs as a pretty-printed JSON array (same shape as `list --json`).
pub(crate) fn export_json(logs: &[TrainingLog], path: &Path) -> AppResult<()> {
    let json_data = serde_json::to_string_pretty(logs)?;

    let mut file = File::create(path)?;
    file.write_all(json_data.as_bytes())?;

    notify_export_success("JSON", path);
    Ok(())
}

/// Export one CSV row per set (header derived from `SetExport`).
pub(crate) fn export_csv(logs: &[TrainingLog], path: &Path) -> AppResult<()> {
    let mut wtr = csv::Writer::from_path(path)
        .map_err(|e| AppError::Export(format!("CSV open error: {e}")))?;

    for row in flatten(logs) {
        wtr.serialize(&row)
            .map_err(|e| AppError::Export(format!("CSV write error: {e}")))?;
    }

    wtr.flush()?;

    notify_export_success("CSV", path);
    Ok(())
}
