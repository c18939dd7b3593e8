pub mod add;
pub mod checkin;
pub mod complete;
pub mod config;
pub mod del;
pub mod engage;
pub mod export;
pub mod import;
pub mod init;
pub mod list;
pub mod log;
pub mod note;
pub mod team;
pub mod update;

use crate::config::Config;
use crate::core::store::{Store, StoreSettings};
use crate::db::sqlite::SqlitePersistence;
use crate::errors::AppResult;
use crate::ui::messages::warning;
use std::fs;
use std::path::Path;

/// Opens the configured database and loads the store from it.
pub(crate) fn open_store(cfg: &Config) -> AppResult<Store<SqlitePersistence>> {
    if let Some(parent) = Path::new(&cfg.database).parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }
    let persistence = SqlitePersistence::open(&cfg.database)?;
    let store = Store::open(persistence, StoreSettings::from_config(cfg));
    report_persistence(&store);
    Ok(store)
}

/// Prints the store's pending persistence warning, if any.
pub(crate) fn report_persistence(store: &Store<SqlitePersistence>) {
    if let Some(w) = store.persistence_warning() {
        warning(w);
    }
}
