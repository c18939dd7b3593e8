//! Durable key-value storage consumed by the Store.

use crate::db::log::LogEntry;
use crate::errors::{AppError, AppResult};
use chrono::Local;
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::HashMap;

/// Key holding the team roster.
pub const TEAM_KEY: &str = "wfv_team";
/// Key holding the visit collection.
pub const VISITS_KEY: &str = "wfv_visits";

pub trait Persistence {
    /// Stores `value` under `key`, replacing any previous value.
    fn save(&mut self, key: &str, value: &str) -> AppResult<()>;

    /// Previously stored value, or `None` when the key was never written.
    fn load(&self, key: &str) -> AppResult<Option<String>>;

    /// Appends a line to the operation log. Adapters without a log keep
    /// the default no-op.
    fn log(&mut self, _operation: &str, _target: &str, _message: &str) -> AppResult<()> {
        Ok(())
    }
}

/// Outcome of reading a typed value back from storage.
#[derive(Debug, Clone, PartialEq)]
pub enum Loaded<T> {
    Found(T),
    Missing,
    /// The key exists but could not be read or decoded.
    Corrupt(String),
}

impl<T> Loaded<T> {
    pub fn unwrap_or(self, fallback: T) -> T {
        match self {
            Loaded::Found(v) => v,
            _ => fallback,
        }
    }
}

pub fn load_json<T: DeserializeOwned, P: Persistence + ?Sized>(p: &P, key: &str) -> Loaded<T> {
    match p.load(key) {
        Ok(Some(raw)) => match serde_json::from_str(&raw) {
            Ok(v) => Loaded::Found(v),
            Err(e) => Loaded::Corrupt(format!("stored '{key}' is not valid: {e}")),
        },
        Ok(None) => Loaded::Missing,
        Err(e) => Loaded::Corrupt(format!("could not read '{key}': {e}")),
    }
}

/// Stored value under `key`, or `fallback` if absent or corrupt.
pub fn load_or<T: DeserializeOwned, P: Persistence + ?Sized>(p: &P, key: &str, fallback: T) -> T {
    load_json(p, key).unwrap_or(fallback)
}

pub fn save_json<T: Serialize + ?Sized, P: Persistence + ?Sized>(
    p: &mut P,
    key: &str,
    value: &T,
) -> AppResult<()> {
    let raw = serde_json::to_string(value)?;
    p.save(key, &raw)
}

/// Map-backed adapter for tests and dry runs. Writes can be made to fail
/// to exercise the store's degraded path.
#[derive(Debug, Default)]
pub struct MemoryPersistence {
    entries: HashMap<String, String>,
    log: Vec<LogEntry>,
    fail_writes: bool,
}

impl MemoryPersistence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_string(), value.to_string());
        self
    }

    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    pub fn raw(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn log_entries(&self) -> &[LogEntry] {
        &self.log
    }
}

impl Persistence for MemoryPersistence {
    fn save(&mut self, key: &str, value: &str) -> AppResult<()> {
        if self.fail_writes {
            return Err(AppError::Persistence(format!(
                "storage refused write of '{key}'"
            )));
        }
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn load(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn log(&mut self, operation: &str, target: &str, message: &str) -> AppResult<()> {
        self.log.push(LogEntry {
            id: self.log.len() as i64 + 1,
            date: Local::now().to_rfc3339(),
            operation: operation.to_string(),
            target: target.to_string(),
            message: message.to_string(),
        });
        Ok(())
    }
}
