pub mod csv;
pub mod fs_utils;
pub mod json;

use crate::ui::messages::success;
use clap::ValueEnum;
use std::path::Path;

/// Helper for export completion messages.
pub(crate) fn notify_export_success(label: &str, count: usize, path: &Path) {
    success(format!(
        "{label} export completed: {count} visit(s) written to {}",
        path.display()
    ));
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }
}

/// Download name for an export made on `date`:
/// `<prefix>-<YYYY-MM-DD>.<ext>`.
pub fn default_file_name(prefix: &str, date: &str, format: ExportFormat) -> String {
    format!("{prefix}-{date}.{}", format.extension())
}
