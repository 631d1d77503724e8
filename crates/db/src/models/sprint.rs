//! Sprint entity model and DTOs.

use serde::{Deserialize, Serialize};
use sprintboard_core::types::{CalendarDate, DbId, Timestamp};
use sqlx::FromRow;

/// A sprint row from the `sprints` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Sprint {
    pub id: DbId,
    pub project_id: DbId,
    /// Monotonically increasing per project, assigned at creation.
    pub sprint_number: i32,
    pub title: String,
    pub start_date: CalendarDate,
    pub end_date: CalendarDate,
    pub goal: Option<String>,
    /// `PLANNED`, `ACTIVE`, or `COMPLETED`.
    pub status: String,
    pub created_at: Timestamp,
}

/// DTO for inserting a new sprint. Fields are assumed already validated
/// and in canonical form (trimmed title, canonical status).
#[derive(Debug, Clone, Deserialize)]
pub struct CreateSprint {
    pub project_id: DbId,
    pub sprint_number: i32,
    pub title: String,
    pub start_date: CalendarDate,
    pub end_date: CalendarDate,
    pub goal: Option<String>,
    pub status: String,
}

/// DTO for a full-field sprint update. Overwrites every editable field;
/// identity, owning project, number, and creation timestamp are untouched.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateSprint {
    pub title: String,
    pub start_date: CalendarDate,
    pub end_date: CalendarDate,
    pub goal: Option<String>,
    pub status: String,
}
