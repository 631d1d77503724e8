//! PostgreSQL-backed store: a thin adapter over the `sprintboard-db`
//! repositories.

use async_trait::async_trait;
use sprintboard_core::types::DbId;
use sprintboard_db::models::project::Project;
use sprintboard_db::models::sprint::{CreateSprint, Sprint, UpdateSprint};
use sprintboard_db::models::task::{CreateTask, Task, UpdateTask};
use sprintboard_db::repositories::{ProjectRepo, SprintRepo, TaskRepo};
use sprintboard_db::{DbPool, StoreError};

use super::BoardStore;

/// The production store, backed by a connection pool.
#[derive(Clone)]
pub struct PgStore {
    pool: DbPool,
}

impl PgStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BoardStore for PgStore {
    async fn find_project(&self, id: DbId) -> Result<Option<Project>, StoreError> {
        Ok(ProjectRepo::find_by_id(&self.pool, id).await?)
    }

    async fn insert_task(&self, input: &CreateTask) -> Result<Task, StoreError> {
        Ok(TaskRepo::create(&self.pool, input).await?)
    }

    async fn find_task(&self, id: DbId) -> Result<Option<Task>, StoreError> {
        Ok(TaskRepo::find_by_id(&self.pool, id).await?)
    }

    async fn list_tasks(
        &self,
        project_id: DbId,
        sprint_id: Option<DbId>,
    ) -> Result<Vec<Task>, StoreError> {
        Ok(TaskRepo::list_by_project(&self.pool, project_id, sprint_id).await?)
    }

    async fn list_backlog(&self, project_id: DbId) -> Result<Vec<Task>, StoreError> {
        Ok(TaskRepo::list_backlog(&self.pool, project_id).await?)
    }

    async fn update_task(&self, id: DbId, input: &UpdateTask) -> Result<Option<Task>, StoreError> {
        Ok(TaskRepo::update(&self.pool, id, input).await?)
    }

    async fn set_task_column(
        &self,
        id: DbId,
        column_name: &str,
    ) -> Result<Option<Task>, StoreError> {
        Ok(TaskRepo::set_column(&self.pool, id, column_name).await?)
    }

    async fn set_task_sprint(
        &self,
        id: DbId,
        sprint_id: DbId,
    ) -> Result<Option<Task>, StoreError> {
        Ok(TaskRepo::set_sprint(&self.pool, id, sprint_id).await?)
    }

    async fn delete_task(&self, id: DbId) -> Result<bool, StoreError> {
        Ok(TaskRepo::delete(&self.pool, id).await?)
    }

    async fn insert_sprint(&self, input: &CreateSprint) -> Result<Sprint, StoreError> {
        Ok(SprintRepo::create(&self.pool, input).await?)
    }

    async fn find_sprint(&self, id: DbId) -> Result<Option<Sprint>, StoreError> {
        Ok(SprintRepo::find_by_id(&self.pool, id).await?)
    }

    async fn list_sprints(&self, project_id: DbId) -> Result<Vec<Sprint>, StoreError> {
        Ok(SprintRepo::list_by_project(&self.pool, project_id).await?)
    }

    async fn max_sprint_number(&self, project_id: DbId) -> Result<Option<i32>, StoreError> {
        Ok(SprintRepo::max_sprint_number(&self.pool, project_id).await?)
    }

    async fn update_sprint(
        &self,
        id: DbId,
        input: &UpdateSprint,
    ) -> Result<Option<Sprint>, StoreError> {
        Ok(SprintRepo::update(&self.pool, id, input).await?)
    }

    async fn delete_sprint(&self, id: DbId) -> Result<bool, StoreError> {
        Ok(SprintRepo::delete(&self.pool, id).await?)
    }
}
