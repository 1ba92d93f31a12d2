use crate::db::log::{AuditRow, load_audit};
use crate::errors::AppResult;
use crate::ui::messages::info;
use ansi_term::Colour;
use rusqlite::Connection;
use unicode_width::UnicodeWidthStr;

/// Longest `operation (target)` cell before truncation.
const OP_WIDTH_MAX: usize = 60;

fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "del" => Colour::Red,
        "clear" => Colour::Purple,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

fn op_target(row: &AuditRow) -> String {
    let full = if row.target.is_empty() {
        row.operation.clone()
    } else {
        format!("{} ({})", row.operation, row.target)
    };

    if full.width() <= OP_WIDTH_MAX {
        return full;
    }
    let mut cut: String = full.chars().take(OP_WIDTH_MAX - 3).collect();
    cut.push_str("...");
    cut
}

fn short_date(raw: &str) -> String {
    chrono::DateTime::parse_from_rfc3339(raw)
        .map(|dt| dt.format("%F %T").to_string())
        .unwrap_or_else(|_| raw.to_string())
}

pub struct LogLogic;

impl LogLogic {
    pub fn print_log(conn: &Connection) -> AppResult<()> {
        let rows = load_audit(conn)?;

        if rows.is_empty() {
            info("The internal log is empty.");
            return Ok(());
        }

        let cells: Vec<(String, String)> = rows.iter().map(|r| (op_target(r), short_date(&r.date))).collect();
        let op_w = cells.iter().map(|(op, _)| op.width()).max().unwrap_or(10);
        let id_w = rows.iter().map(|r| r.id.to_string().len()).max().unwrap_or(1);

        for (row, (op, date)) in rows.iter().zip(cells) {
            let color = color_for_operation(&row.operation);
            // colour only the operation word, pad on the visible width
            let (word, rest) = op.split_once(' ').unwrap_or((op.as_str(), ""));
            let padding = " ".repeat(op_w.saturating_sub(op.width()));
            let sep = if rest.is_empty() { "" } else { " " };

            println!(
                "{:>id_w$}: {} | {}{}{}{} => {}",
                row.id,
                date,
                color.paint(word),
                sep,
                rest,
                padding,
                row.message,
                id_w = id_w
            );
        }

        Ok(())
    }
}
