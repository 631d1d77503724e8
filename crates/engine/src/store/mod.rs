//! The storage contract the engine operates through.
//!
//! [`BoardStore`] covers exactly the persistence surface the board needs;
//! components receive an `Arc<dyn BoardStore>` at construction time, so
//! nothing in the workspace holds process-wide state. [`PgStore`] is the
//! production implementation; [`MemoryStore`] is the substitutable fake the
//! test suites run against.

use async_trait::async_trait;
use sprintboard_core::types::DbId;
use sprintboard_db::models::project::Project;
use sprintboard_db::models::sprint::{CreateSprint, Sprint, UpdateSprint};
use sprintboard_db::models::task::{CreateTask, Task, UpdateTask};
use sprintboard_db::StoreError;

mod memory;
mod pg;

pub use memory::MemoryStore;
pub use pg::PgStore;

/// Async CRUD surface over projects, sprints, and tasks.
///
/// Implementations assign identity and timestamps on insert, mirror a
/// task's `status` from its `column_name` on every write, and send a
/// deleted sprint's tasks back to the backlog. Inputs arrive already
/// validated and in canonical form; stores do not re-validate.
#[async_trait]
pub trait BoardStore: Send + Sync {
    // -- projects (read-only; rows are owned by an external collaborator) --

    async fn find_project(&self, id: DbId) -> Result<Option<Project>, StoreError>;

    // -- tasks --

    async fn insert_task(&self, input: &CreateTask) -> Result<Task, StoreError>;

    async fn find_task(&self, id: DbId) -> Result<Option<Task>, StoreError>;

    /// `sprint_id = None` means ALL of the project's tasks, not the
    /// backlog. Ordered oldest first, ID as tiebreak.
    async fn list_tasks(
        &self,
        project_id: DbId,
        sprint_id: Option<DbId>,
    ) -> Result<Vec<Task>, StoreError>;

    /// Unscheduled tasks only, newest first.
    async fn list_backlog(&self, project_id: DbId) -> Result<Vec<Task>, StoreError>;

    async fn update_task(&self, id: DbId, input: &UpdateTask) -> Result<Option<Task>, StoreError>;

    /// Updates `column_name` (and its `status` mirror); never `sprint_id`.
    async fn set_task_column(
        &self,
        id: DbId,
        column_name: &str,
    ) -> Result<Option<Task>, StoreError>;

    /// Updates `sprint_id`; never `column_name`.
    async fn set_task_sprint(&self, id: DbId, sprint_id: DbId)
        -> Result<Option<Task>, StoreError>;

    /// Hard delete. Returns `false` when no row was removed.
    async fn delete_task(&self, id: DbId) -> Result<bool, StoreError>;

    // -- sprints --

    async fn insert_sprint(&self, input: &CreateSprint) -> Result<Sprint, StoreError>;

    async fn find_sprint(&self, id: DbId) -> Result<Option<Sprint>, StoreError>;

    /// Ordered by sprint number ascending.
    async fn list_sprints(&self, project_id: DbId) -> Result<Vec<Sprint>, StoreError>;

    async fn max_sprint_number(&self, project_id: DbId) -> Result<Option<i32>, StoreError>;

    async fn update_sprint(
        &self,
        id: DbId,
        input: &UpdateSprint,
    ) -> Result<Option<Sprint>, StoreError>;

    /// Hard delete; the sprint's tasks fall back to the backlog. Returns
    /// `false` when no row was removed.
    async fn delete_sprint(&self, id: DbId) -> Result<bool, StoreError>;
}
