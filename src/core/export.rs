use crate::core::store::Store;
use crate::db::persistence::Persistence;
use crate::errors::AppResult;
use crate::export::fs_utils::ensure_writable;
use crate::export::{ExportFormat, default_file_name, notify_export_success};
use crate::ui::messages::warning;
use crate::utils::date;
use crate::utils::path::expand_tilde;
use std::fs;
use std::path::PathBuf;

/// High-level export: writes every stored visit to a file.
pub struct ExportLogic;

impl ExportLogic {
    /// - `file`: output path; defaults to `<prefix>-<today>.<ext>` in the
    ///   current directory
    /// - `force`: overwrite an existing file without asking
    pub fn export<P: Persistence>(
        store: &Store<P>,
        format: ExportFormat,
        file: Option<&str>,
        prefix: &str,
        force: bool,
    ) -> AppResult<PathBuf> {
        let path = match file {
            Some(f) => expand_tilde(f),
            None => PathBuf::from(default_file_name(prefix, &date::today_iso(), format)),
        };

        ensure_writable(&path, force)?;

        if store.visits().is_empty() {
            warning("No visits stored: the file will only contain the header.");
        }

        let text = match format {
            ExportFormat::Csv => store.export_csv()?,
            ExportFormat::Json => store.export_json()?,
        };

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, text)?;

        let label = match format {
            ExportFormat::Csv => "CSV",
            ExportFormat::Json => "JSON",
        };
        notify_export_success(label, store.visits().len(), &path);
        Ok(path)
    }
}
