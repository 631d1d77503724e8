//! Read-only repository for the `projects` table.
//!
//! Project rows are owned by an external collaborator; the board core only
//! reads them to resolve column sets and check existence.

use sprintboard_core::types::DbId;
use sqlx::PgPool;

use crate::models::project::Project;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, title, description, repo_url, column_set, status, \
                       classroom_id, course_id, created_at, updated_at";

/// Provides read access to projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Find a project by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
