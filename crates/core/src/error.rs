//! Error taxonomy for the board core.
//!
//! Callers need to distinguish three failure classes: validation failures
//! (client-correctable, raised before any write), missing entities (the
//! target row no longer exists), and persistence failures (owned by
//! `sprintboard-db`, surfaced separately so they are never conflated with
//! the first two).

use crate::types::DbId;

/// A single offending field in a rejected input.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub reason: String,
}

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Input rejected before any write. Enumerates every offending field,
    /// not just the first one found.
    #[error("Validation failed: {}", format_fields(.0))]
    Validation(Vec<FieldError>),

    /// An update/delete/move targeted a row that does not exist.
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },
}

impl CoreError {
    /// Shorthand for a single-field validation failure.
    pub fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        Self::Validation(vec![FieldError {
            field,
            reason: reason.into(),
        }])
    }
}

fn format_fields(fields: &[FieldError]) -> String {
    fields
        .iter()
        .map(|f| format!("{}: {}", f.field, f.reason))
        .collect::<Vec<_>>()
        .join("; ")
}

/// Accumulates field errors across a multi-field validation pass so a
/// rejected input reports every problem at once.
#[derive(Debug, Default)]
pub struct Violations {
    fields: Vec<FieldError>,
}

impl Violations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a violation against a named field.
    pub fn push(&mut self, field: &'static str, reason: impl Into<String>) {
        self.fields.push(FieldError {
            field,
            reason: reason.into(),
        });
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// `Ok(())` if nothing was recorded, otherwise `CoreError::Validation`
    /// carrying every recorded field.
    pub fn finish(self) -> Result<(), CoreError> {
        if self.fields.is_empty() {
            Ok(())
        } else {
            Err(CoreError::Validation(self.fields))
        }
    }
}
