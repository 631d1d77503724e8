//! Backlog manager.
//!
//! A backlog task is simply a task with no sprint; there is no separate
//! storage. The manager exposes the backlog query and the promote
//! transition, which sets `sprint_id` and leaves the board column exactly
//! where it was (typically the first column).

use std::sync::Arc;

use sprintboard_core::types::DbId;
use sprintboard_db::models::task::Task;

use crate::error::EngineError;
use crate::store::BoardStore;
use crate::tasks::move_task_to_sprint;

/// Operations over a project's unscheduled tasks.
pub struct BacklogManager {
    store: Arc<dyn BoardStore>,
}

impl BacklogManager {
    pub fn new(store: Arc<dyn BoardStore>) -> Self {
        Self { store }
    }

    /// The project's backlog, newest first.
    pub async fn list(&self, project_id: DbId) -> Result<Vec<Task>, EngineError> {
        Ok(self.store.list_backlog(project_id).await?)
    }

    /// Promote a backlog task into a sprint. The same transition as the
    /// task store's move; the column is left untouched.
    pub async fn promote_to_sprint(
        &self,
        task_id: DbId,
        target_sprint_id: DbId,
    ) -> Result<Task, EngineError> {
        move_task_to_sprint(self.store.as_ref(), task_id, target_sprint_id).await
    }
}
