use crate::errors::AppResult;
use crate::export::ExportFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::store::LogStore;
use crate::ui::messages::{info, warning};
use crate::utils::path::expand_tilde;
use std::fs;

pub struct ExportLogic;

impl ExportLogic {
    /// Export every log visible to the caller.
    pub fn export(
        store: &dyn LogStore,
        format: &ExportFormat,
        file: &str,
        force: bool,
    ) -> AppResult<()> {
        let path = expand_tilde(file);

        ensure_writable(&path, force)?;

        let logs = store.list();
        if logs.is_empty() {
            warning("No training logs to export.");
            return Ok(());
        }

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        info(format!(
            "Exporting {} session(s) to {}: {}",
            logs.len(),
            format.as_str().to_uppercase(),
            path.display()
        ));

        match format {
            ExportFormat::Csv => export_csv(&logs, &path)?,
            ExportFormat::Json => export_json(&logs, &path)?,
        }

        Ok(())
    }
}
