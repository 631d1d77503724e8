//! Board column sets.
//!
//! Each project carries its own ordered set of workflow columns, stored as a
//! comma-separated list on the project row (default
//! `TODO,IN_PROGRESS,REVIEW,DONE`). Raw column strings are validated against
//! the owning project's set at every boundary: task creation, field edits,
//! and board moves all resolve the incoming value to its canonical member or
//! fail.
//!
//! Transitions between columns are deliberately unordered: a free-form
//! kanban board allows `DONE` back to `TODO` with no guard, so membership is
//! the only rule a move must satisfy.

use crate::error::CoreError;

/// Comma-separated default set applied to projects that never customised
/// their columns.
pub const DEFAULT_COLUMN_SET: &str = "TODO,IN_PROGRESS,REVIEW,DONE";

/// An ordered, deduplicated set of canonical (uppercase) column names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSet {
    columns: Vec<String>,
}

impl ColumnSet {
    /// Parse a project's comma-separated column list.
    ///
    /// Entries are trimmed, uppercased, and deduplicated while preserving
    /// first-occurrence order. An effectively empty list is a validation
    /// failure: a board must have at least one column.
    pub fn parse(raw: &str) -> Result<Self, CoreError> {
        let mut columns: Vec<String> = Vec::new();
        for entry in raw.split(',') {
            let canonical = entry.trim().to_ascii_uppercase();
            if !canonical.is_empty() && !columns.contains(&canonical) {
                columns.push(canonical);
            }
        }
        if columns.is_empty() {
            return Err(CoreError::invalid(
                "column_set",
                "a board needs at least one column",
            ));
        }
        Ok(Self { columns })
    }

    /// The first column, where newly created tasks land by default.
    pub fn first(&self) -> &str {
        // parse() guarantees at least one entry.
        &self.columns[0]
    }

    /// Resolve a raw column value (case-insensitive) to its canonical
    /// member, or a validation failure if it is not in the set.
    pub fn resolve(&self, raw: &str) -> Result<&str, CoreError> {
        let canonical = raw.trim().to_ascii_uppercase();
        self.columns
            .iter()
            .find(|c| **c == canonical)
            .map(String::as_str)
            .ok_or_else(|| {
                CoreError::invalid(
                    "column_name",
                    format!("'{}' is not a column of this board", raw.trim()),
                )
            })
    }

    pub fn contains(&self, canonical: &str) -> bool {
        self.columns.iter().any(|c| c == canonical)
    }

    /// Columns in board order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl Default for ColumnSet {
    fn default() -> Self {
        // The default literal is a valid set.
        Self::parse(DEFAULT_COLUMN_SET).unwrap()
    }
}

impl std::fmt::Display for ColumnSet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.columns.join(","))
    }
}
