//! Project entity model.
//!
//! Project rows are owned by an external collaborator (project creation and
//! status changes happen elsewhere); the board core only ever reads them,
//! so there are no create/update DTOs here.

use serde::Serialize;
use sprintboard_core::types::{DbId, Timestamp};
use sqlx::FromRow;

/// A project row from the `projects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Project {
    pub id: DbId,
    pub title: String,
    pub description: Option<String>,
    pub repo_url: Option<String>,
    /// Comma-separated ordered column list, e.g. `TODO,IN_PROGRESS,REVIEW,DONE`.
    pub column_set: String,
    /// Lifecycle status (`ACTIVE` etc.); opaque to the board core.
    pub status: String,
    pub classroom_id: Option<DbId>,
    pub course_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
