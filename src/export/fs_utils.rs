use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use std::io::{self, BufRead, Write};
use std::path::Path;

/// How an export target was cleared for writing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overwrite {
    /// Nothing there yet.
    NewFile,
    /// Replaced because of `--force`.
    Forced,
    /// Replaced after the user said yes.
    Confirmed,
}

/// Decide whether `path` may be written, reading the answer from `answers`
/// when the file exists and `force` is off.
pub fn check_target<R: BufRead>(path: &Path, force: bool, answers: &mut R) -> AppResult<Overwrite> {
    if !path.exists() {
        return Ok(Overwrite::NewFile);
    }
    if force {
        return Ok(Overwrite::Forced);
    }

    warning(format!("{} exists; overwrite it?", path.display()));
    print!("Overwrite? [y/N]: ");
    io::stdout().flush().ok();

    let mut line = String::new();
    answers.read_line(&mut line)?;

    match line.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" => {
            info(format!("Replacing {}", path.display()));
            Ok(Overwrite::Confirmed)
        }
        _ => Err(AppError::Export(format!(
            "{} left untouched (use --force)",
            path.display()
        ))),
    }
}

pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<Overwrite> {
    check_target(path, force, &mut io::stdin().lock())
}
