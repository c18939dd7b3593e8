use crate::errors::{AppError, AppResult};
use crate::models::field::{Field, FieldKind};
use crate::models::visit::VisitRecord;
use crate::utils::date;

/// Checks the named fields of `record` against the record rules:
/// required text present, visit date in `YYYY-MM-DD` form, status among
/// the configured ones. Fields not named are not looked at, so an
/// imported record with an unknown status can still be edited elsewhere.
pub fn check_fields(
    record: &VisitRecord,
    fields: impl IntoIterator<Item = Field>,
    statuses: &[String],
) -> AppResult<()> {
    for field in fields {
        if Field::REQUIRED.contains(&field) && record.get(field).trim().is_empty() {
            return Err(AppError::validation(field.name(), "is required"));
        }

        match field.kind() {
            FieldKind::Date if field == Field::VisitDate => {
                if !date::is_iso_date(&record.visit_date) {
                    return Err(AppError::validation(
                        field.name(),
                        format!("'{}' is not a YYYY-MM-DD date", record.visit_date),
                    ));
                }
            }
            FieldKind::Status => {
                let status = record.status.as_str();
                if !statuses.iter().any(|s| s == status) {
                    return Err(AppError::validation(
                        field.name(),
                        format!("'{status}' is not one of: {}", statuses.join(", ")),
                    ));
                }
            }
            _ => {}
        }
    }
    Ok(())
}

/// Rules for a brand-new visit: every field is checked.
pub fn check_new(record: &VisitRecord, statuses: &[String]) -> AppResult<()> {
    check_fields(record, Field::ALL, statuses)
}
