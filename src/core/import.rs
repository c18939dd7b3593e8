use crate::core::store::Store;
use crate::db::persistence::Persistence;
use crate::errors::AppResult;
use crate::export::csv;
use crate::export::fs_utils::confirm;
use crate::ui::messages::{info, success};
use crate::utils::path::expand_tilde;
use std::fs;

/// CSV import. The file is read and parsed completely before the store is
/// touched, and the stored visits are replaced, not merged.
pub struct ImportLogic;

impl ImportLogic {
    /// Returns the number of imported visits, or `None` when the user
    /// declined to replace the existing ones.
    pub fn apply<P: Persistence>(
        store: &mut Store<P>,
        file: &str,
        assume_yes: bool,
    ) -> AppResult<Option<usize>> {
        let path = expand_tilde(file);
        let text = fs::read_to_string(&path)?;
        let records = csv::decode(&text)?;

        let existing = store.visits().len();
        if existing > 0 && !assume_yes {
            let prompt = format!(
                "Importing '{}' REPLACES all {} stored visit(s) with {} row(s) from the file. \
                 Export first if you need a copy.",
                path.display(),
                existing,
                records.len()
            );
            if !confirm(&prompt)? {
                info("Import cancelled; stored visits unchanged.");
                return Ok(None);
            }
        }

        let count = records.len();
        store.replace_all(records);
        success(format!("CSV imported: {count} visit(s) from {}", path.display()));
        Ok(Some(count))
    }
}
