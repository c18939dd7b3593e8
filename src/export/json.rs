use crate::errors::AppResult;
use crate::models::visit::VisitRecord;

/// Pretty-printed JSON array, same camelCase keys as the CSV header.
pub fn encode(records: &[VisitRecord]) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(records)?)
}
