//! Unified application error type.
//! Store, codec, persistence and CLI all return AppError so that only the
//! blocking failures (validation, unknown id, unreadable CSV header) need
//! special handling by callers.

use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    // ---------------------------
    // IO
    // ---------------------------
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    // ---------------------------
    // Storage
    // ---------------------------
    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Database migration error: {0}")]
    Migration(String),

    #[error("Persistence error: {0}")]
    Persistence(String),

    // ---------------------------
    // Serialization
    // ---------------------------
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Malformed CSV: {0}")]
    MalformedCsv(String),

    // ---------------------------
    // Record errors
    // ---------------------------
    #[error("Invalid value for '{field}': {reason}")]
    Validation { field: String, reason: String },

    #[error("No visit with id '{0}'")]
    NotFound(String),

    #[error("No team member with id '{0}'")]
    UnknownMember(String),

    #[error("Unknown field: {0}")]
    UnknownField(String),

    #[error("Invalid date format: {0}")]
    InvalidDate(String),

    // ---------------------------
    // Config errors
    // ---------------------------
    #[error("Configuration error: {0}")]
    Config(String),

    // ---------------------------
    // Export errors
    // ---------------------------
    #[error("Export error: {0}")]
    Export(String),

    // ---------------------------
    // Generic fallback
    // ---------------------------
    #[error("{0}")]
    Other(String),
}

impl AppError {
    pub fn validation(field: &str, reason: impl Into<String>) -> Self {
        AppError::Validation {
            field: field.to_string(),
            reason: reason.into(),
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
