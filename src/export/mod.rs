// src/export/mod.rs

mod fs_utils;
mod json_csv;
mod model;

pub use model::SlotExport;

use crate::core::ColumnStore;
use crate::errors::AppResult;
use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Shared completion message for exports.
pub(crate) fn notify_export_success(label: &str, path: &Path) {
    success(format!("{label} export completed: {}", path.display()));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Write a snapshot of the board. Nothing is ever read back from it.
///
/// With `ask`, an existing file triggers an overwrite prompt on stdin;
/// otherwise it is only replaced when `force` is set.
pub fn export_board(
    store: &ColumnStore,
    format: ExportFormat,
    path: &Path,
    force: bool,
    ask: bool,
) -> AppResult<usize> {
    fs_utils::ensure_writable(path, force, ask)?;

    let rows = SlotExport::from_store(store);
    match format {
        ExportFormat::Json => json_csv::export_json(&rows, path)?,
        ExportFormat::Csv => json_csv::export_csv(&rows, path)?,
    }
    Ok(rows.len())
}
