//! Repository for the `tasks` table.
//!
//! Every write that touches `column_name` mirrors the value into `status`
//! in the same statement, so the two columns can never diverge through
//! this repository.

use sprintboard_core::types::DbId;
use sqlx::PgPool;

use crate::models::task::{CreateTask, Task, UpdateTask};

/// Column list shared across queries. `status` is intentionally absent:
/// it mirrors `column_name` and is exposed through `Task::status()`.
const COLUMNS: &str = "id, project_id, sprint_id, title, description, assigned_to, \
                       column_name, priority, estimated_hours, created_at, updated_at";

/// Provides CRUD operations for tasks.
pub struct TaskRepo;

impl TaskRepo {
    /// Insert a new task, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateTask) -> Result<Task, sqlx::Error> {
        let query = format!(
            "INSERT INTO tasks
                (project_id, sprint_id, title, description, assigned_to,
                 column_name, priority, estimated_hours, status)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(input.project_id)
            .bind(input.sprint_id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.assigned_to)
            .bind(&input.column_name)
            .bind(&input.priority)
            .bind(input.estimated_hours)
            .fetch_one(pool)
            .await
    }

    /// Find a task by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Task>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM tasks WHERE id = $1");
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a project's tasks, optionally scoped to one sprint.
    ///
    /// `sprint_id = None` returns ALL tasks for the project regardless of
    /// sprint membership (the "show everything" query); use
    /// [`TaskRepo::list_backlog`] for unscheduled tasks only. Ordered
    /// oldest first, ID as tiebreak.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
        sprint_id: Option<DbId>,
    ) -> Result<Vec<Task>, sqlx::Error> {
        match sprint_id {
            Some(sprint_id) => {
                let query = format!(
                    "SELECT {COLUMNS} FROM tasks
                     WHERE project_id = $1 AND sprint_id = $2
                     ORDER BY created_at ASC, id ASC"
                );
                sqlx::query_as::<_, Task>(&query)
                    .bind(project_id)
                    .bind(sprint_id)
                    .fetch_all(pool)
                    .await
            }
            None => {
                let query = format!(
                    "SELECT {COLUMNS} FROM tasks
                     WHERE project_id = $1
                     ORDER BY created_at ASC, id ASC"
                );
                sqlx::query_as::<_, Task>(&query)
                    .bind(project_id)
                    .fetch_all(pool)
                    .await
            }
        }
    }

    /// List a project's unscheduled tasks (no sprint), newest first.
    pub async fn list_backlog(pool: &PgPool, project_id: DbId) -> Result<Vec<Task>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM tasks
             WHERE project_id = $1 AND sprint_id IS NULL
             ORDER BY created_at DESC, id DESC"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Overwrite a task's editable fields. Sprint membership is not an
    /// editable field; see [`TaskRepo::set_sprint`].
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateTask,
    ) -> Result<Option<Task>, sqlx::Error> {
        let query = format!(
            "UPDATE tasks SET
                title = $2,
                description = $3,
                assigned_to = $4,
                column_name = $5,
                priority = $6,
                estimated_hours = $7,
                status = $5,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.description)
            .bind(input.assigned_to)
            .bind(&input.column_name)
            .bind(&input.priority)
            .bind(input.estimated_hours)
            .fetch_optional(pool)
            .await
    }

    /// Move a task to another board column. Never touches `sprint_id`.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn set_column(
        pool: &PgPool,
        id: DbId,
        column_name: &str,
    ) -> Result<Option<Task>, sqlx::Error> {
        let query = format!(
            "UPDATE tasks SET column_name = $2, status = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .bind(column_name)
            .fetch_optional(pool)
            .await
    }

    /// Move a task into a sprint. Never touches `column_name`.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn set_sprint(
        pool: &PgPool,
        id: DbId,
        sprint_id: DbId,
    ) -> Result<Option<Task>, sqlx::Error> {
        let query = format!(
            "UPDATE tasks SET sprint_id = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Task>(&query)
            .bind(id)
            .bind(sprint_id)
            .fetch_optional(pool)
            .await
    }

    /// Permanently delete a task by ID. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM tasks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
