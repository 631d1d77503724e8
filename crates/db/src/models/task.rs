//! Task entity model and DTOs.

use serde::{Deserialize, Serialize};
use sprintboard_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A task row from the `tasks` table.
///
/// The table also carries a `status` column kept identical to
/// `column_name` on every write for external consumers; internally the two
/// are one field, exposed read-only via [`Task::status`].
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Task {
    pub id: DbId,
    pub project_id: DbId,
    /// `None` means the task sits in the backlog.
    pub sprint_id: Option<DbId>,
    pub title: String,
    pub description: Option<String>,
    /// `None` means unassigned.
    pub assigned_to: Option<DbId>,
    /// Board position; always a member of the owning project's column set.
    pub column_name: String,
    /// `CRITICAL`, `HIGH`, `MEDIUM`, or `LOW`.
    pub priority: String,
    pub estimated_hours: Option<f64>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl Task {
    /// Derived status, identical to the board column by construction.
    pub fn status(&self) -> &str {
        &self.column_name
    }

    /// External reference label, e.g. `TASK-42`. Searchable via the filter
    /// engine.
    pub fn reference(&self) -> String {
        format!("TASK-{}", self.id)
    }
}

/// DTO for inserting a new task. Fields are assumed already validated and
/// in canonical form (trimmed title, canonical column and priority).
#[derive(Debug, Clone, Deserialize)]
pub struct CreateTask {
    pub project_id: DbId,
    pub sprint_id: Option<DbId>,
    pub title: String,
    pub description: Option<String>,
    pub assigned_to: Option<DbId>,
    pub column_name: String,
    pub priority: String,
    pub estimated_hours: Option<f64>,
}

/// DTO for a full-field task update. Overwrites every editable field
/// (`None` clears the nullable ones); identity, owning project, sprint
/// membership, and creation timestamp are untouched. Sprint membership
/// changes only through the dedicated move operation.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateTask {
    pub title: String,
    pub description: Option<String>,
    pub assigned_to: Option<DbId>,
    pub column_name: String,
    pub priority: String,
    pub estimated_hours: Option<f64>,
}
