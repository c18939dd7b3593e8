use super::field::{Field, FieldKind};
use super::visit::VisitRecord;
use crate::errors::{AppError, AppResult};

/// A partial update: named fields with their new textual values.
/// Fields not named are left untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisitPatch {
    changes: Vec<(Field, String)>,
}

impl VisitPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(mut self, field: Field, value: impl Into<String>) -> Self {
        self.push(field, value);
        self
    }

    /// Later values for the same field replace earlier ones.
    pub fn push(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match self.changes.iter_mut().find(|(f, _)| *f == field) {
            Some(slot) => slot.1 = value,
            None => self.changes.push((field, value)),
        }
    }

    /// Like `set`, skipping `None`.
    pub fn set_opt(self, field: Field, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(v) => self.set(field, v),
            None => self,
        }
    }

    /// Parses a `field=value` assignment as typed on the command line.
    pub fn parse_assignment(raw: &str) -> AppResult<(Field, String)> {
        let (name, value) = raw.split_once('=').ok_or_else(|| {
            AppError::validation(raw, "expected an assignment of the form field=value")
        })?;
        let field = Field::from_name(name).ok_or_else(|| AppError::UnknownField(name.to_string()))?;
        Ok((field, value.to_string()))
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.changes.iter().map(|(f, _)| *f)
    }

    pub fn is_empty(&self) -> bool {
        self.changes.is_empty()
    }

    /// Applies every change to `record`. The id is immutable and check-ins
    /// are append-only, so patches naming either are rejected before
    /// anything is written.
    pub fn apply_to(&self, record: &mut VisitRecord) -> AppResult<()> {
        for (field, _) in &self.changes {
            if *field == Field::Id {
                return Err(AppError::validation(field.name(), "ids are assigned once and never change"));
            }
            if field.kind() == FieldKind::CheckIns {
                return Err(AppError::validation(field.name(), "check-ins can only be appended"));
            }
        }
        for (field, value) in &self.changes {
            record.set(*field, value);
        }
        Ok(())
    }
}
