//! Repository for the `sprints` table.

use sprintboard_core::types::DbId;
use sqlx::PgPool;

use crate::models::sprint::{CreateSprint, Sprint, UpdateSprint};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, project_id, sprint_number, title, start_date, end_date, goal, status, created_at";

/// Provides CRUD operations for sprints.
pub struct SprintRepo;

impl SprintRepo {
    /// Insert a new sprint, returning the created row.
    ///
    /// A concurrent creation race on the same number surfaces as a
    /// `uq_sprints_project_number` unique violation.
    pub async fn create(pool: &PgPool, input: &CreateSprint) -> Result<Sprint, sqlx::Error> {
        let query = format!(
            "INSERT INTO sprints (project_id, sprint_number, title, start_date, end_date, goal, status)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Sprint>(&query)
            .bind(input.project_id)
            .bind(input.sprint_number)
            .bind(&input.title)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(&input.goal)
            .bind(&input.status)
            .fetch_one(pool)
            .await
    }

    /// Find a sprint by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Sprint>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM sprints WHERE id = $1");
        sqlx::query_as::<_, Sprint>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a project's sprints ordered by sprint number ascending.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<Sprint>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM sprints WHERE project_id = $1 ORDER BY sprint_number ASC"
        );
        sqlx::query_as::<_, Sprint>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Highest sprint number used by a project, or `None` if it has no
    /// sprints yet.
    pub async fn max_sprint_number(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Option<i32>, sqlx::Error> {
        let row: (Option<i32>,) =
            sqlx::query_as("SELECT MAX(sprint_number) FROM sprints WHERE project_id = $1")
                .bind(project_id)
                .fetch_one(pool)
                .await?;
        Ok(row.0)
    }

    /// Overwrite a sprint's editable fields.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSprint,
    ) -> Result<Option<Sprint>, sqlx::Error> {
        let query = format!(
            "UPDATE sprints SET
                title = $2,
                start_date = $3,
                end_date = $4,
                goal = $5,
                status = $6
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Sprint>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(&input.goal)
            .bind(&input.status)
            .fetch_optional(pool)
            .await
    }

    /// Delete a sprint by ID. Its tasks fall back to the backlog via
    /// `ON DELETE SET NULL`. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM sprints WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
