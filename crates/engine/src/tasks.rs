//! Task store: validated CRUD and movement operations over tasks.
//!
//! All validation happens here, before any persistence call: field rules
//! from `sprintboard-core`, column membership against the owning project's
//! set, and referential checks on the target sprint. The injected store
//! persists canonical values and nothing else.

use std::sync::Arc;

use serde::Deserialize;
use sprintboard_core::column::ColumnSet;
use sprintboard_core::error::{CoreError, Violations};
use sprintboard_core::priority::Priority;
use sprintboard_core::types::DbId;
use sprintboard_core::validation::{check_description, check_estimated_hours, check_title};
use sprintboard_db::models::task::{CreateTask, Task, UpdateTask};

use crate::error::EngineError;
use crate::store::BoardStore;

// ---------------------------------------------------------------------------
// Inputs
// ---------------------------------------------------------------------------

/// Input for creating a task.
#[derive(Debug, Clone, Deserialize)]
pub struct NewTask {
    pub project_id: DbId,
    /// `None` creates the task in the backlog.
    pub sprint_id: Option<DbId>,
    pub title: String,
    pub description: Option<String>,
    pub assigned_to: Option<DbId>,
    /// `None` defaults to the first column of the project's set.
    pub column: Option<String>,
    pub priority: Priority,
    pub estimated_hours: Option<f64>,
}

impl NewTask {
    /// A backlog task with only the required fields set.
    pub fn backlog(project_id: DbId, title: impl Into<String>, priority: Priority) -> Self {
        Self {
            project_id,
            sprint_id: None,
            title: title.into(),
            description: None,
            assigned_to: None,
            column: None,
            priority,
            estimated_hours: None,
        }
    }
}

/// Input for a full-field task edit. Every editable field is overwritten;
/// sprint membership is not editable here (see [`TaskStore::move_to_sprint`]).
#[derive(Debug, Clone, Deserialize)]
pub struct TaskEdit {
    pub title: String,
    pub description: Option<String>,
    pub assigned_to: Option<DbId>,
    pub column: String,
    pub priority: Priority,
    pub estimated_hours: Option<f64>,
}

// ---------------------------------------------------------------------------
// Component
// ---------------------------------------------------------------------------

/// CRUD and movement operations over tasks.
pub struct TaskStore {
    store: Arc<dyn BoardStore>,
}

impl TaskStore {
    pub fn new(store: Arc<dyn BoardStore>) -> Self {
        Self { store }
    }

    /// Create a task, in the backlog or directly inside a sprint/column.
    pub async fn create(&self, input: NewTask) -> Result<Task, EngineError> {
        let title = input.title.trim().to_string();

        let mut v = Violations::new();
        check_title(&mut v, &title);
        check_description(&mut v, input.description.as_deref());
        check_estimated_hours(&mut v, input.estimated_hours);
        v.finish().map_err(EngineError::Core)?;

        let columns = self.project_columns(input.project_id).await?;
        let column_name = match input.column.as_deref() {
            Some(raw) => columns.resolve(raw).map_err(EngineError::Core)?.to_string(),
            None => columns.first().to_string(),
        };

        if let Some(sprint_id) = input.sprint_id {
            check_sprint_membership(self.store.as_ref(), input.project_id, sprint_id).await?;
        }

        let task = self
            .store
            .insert_task(&CreateTask {
                project_id: input.project_id,
                sprint_id: input.sprint_id,
                title,
                description: input.description,
                assigned_to: input.assigned_to,
                column_name,
                priority: input.priority.as_str().to_string(),
                estimated_hours: input.estimated_hours,
            })
            .await?;
        tracing::debug!(task_id = task.id, project_id = task.project_id, "created task");
        Ok(task)
    }

    /// Single-task lookup.
    pub async fn find(&self, task_id: DbId) -> Result<Task, EngineError> {
        self.store
            .find_task(task_id)
            .await?
            .ok_or_else(|| EngineError::not_found("task", task_id))
    }

    /// Tasks for a project, optionally scoped to one sprint.
    ///
    /// `sprint_id = None` is the "show everything" query: every task of the
    /// project regardless of sprint membership. For unscheduled tasks only,
    /// use [`TaskStore::find_backlog`].
    pub async fn find_by_project_and_sprint(
        &self,
        project_id: DbId,
        sprint_id: Option<DbId>,
    ) -> Result<Vec<Task>, EngineError> {
        Ok(self.store.list_tasks(project_id, sprint_id).await?)
    }

    /// Unscheduled tasks for a project, newest first.
    pub async fn find_backlog(&self, project_id: DbId) -> Result<Vec<Task>, EngineError> {
        Ok(self.store.list_backlog(project_id).await?)
    }

    /// Full-field edit. Identity, owning project, sprint membership, and
    /// creation timestamp are untouched.
    pub async fn update(&self, task_id: DbId, input: TaskEdit) -> Result<Task, EngineError> {
        let existing = self.find(task_id).await?;
        let title = input.title.trim().to_string();

        let mut v = Violations::new();
        check_title(&mut v, &title);
        check_description(&mut v, input.description.as_deref());
        check_estimated_hours(&mut v, input.estimated_hours);
        v.finish().map_err(EngineError::Core)?;

        let columns = self.project_columns(existing.project_id).await?;
        let column_name = columns.resolve(&input.column).map_err(EngineError::Core)?;

        let updated = self
            .store
            .update_task(
                task_id,
                &UpdateTask {
                    title,
                    description: input.description,
                    assigned_to: input.assigned_to,
                    column_name: column_name.to_string(),
                    priority: input.priority.as_str().to_string(),
                    estimated_hours: input.estimated_hours,
                },
            )
            .await?
            .ok_or_else(|| EngineError::not_found("task", task_id))?;
        tracing::debug!(task_id, "updated task");
        Ok(updated)
    }

    /// Board move: put the task in another column of its project's set.
    ///
    /// Any column may move to any other column; membership in the set is
    /// the only rule. Never changes sprint membership.
    pub async fn update_column(
        &self,
        task_id: DbId,
        target_column: &str,
    ) -> Result<Task, EngineError> {
        let existing = self.find(task_id).await?;
        let columns = self.project_columns(existing.project_id).await?;
        let column_name = columns.resolve(target_column).map_err(EngineError::Core)?;

        let moved = self
            .store
            .set_task_column(task_id, column_name)
            .await?
            .ok_or_else(|| EngineError::not_found("task", task_id))?;
        tracing::debug!(task_id, column = %moved.column_name, "moved task");
        Ok(moved)
    }

    /// Reassign a task into a sprint. Never changes the board column.
    pub async fn move_to_sprint(
        &self,
        task_id: DbId,
        sprint_id: DbId,
    ) -> Result<Task, EngineError> {
        move_task_to_sprint(self.store.as_ref(), task_id, sprint_id).await
    }

    /// Irreversible hard delete.
    pub async fn delete(&self, task_id: DbId) -> Result<(), EngineError> {
        if !self.store.delete_task(task_id).await? {
            return Err(EngineError::not_found("task", task_id));
        }
        tracing::debug!(task_id, "deleted task");
        Ok(())
    }

    async fn project_columns(&self, project_id: DbId) -> Result<ColumnSet, EngineError> {
        let project = self
            .store
            .find_project(project_id)
            .await?
            .ok_or_else(|| EngineError::not_found("project", project_id))?;
        Ok(ColumnSet::parse(&project.column_set)?)
    }
}

// ---------------------------------------------------------------------------
// Shared movement logic
// ---------------------------------------------------------------------------

/// Move a task into a sprint. Shared by [`TaskStore::move_to_sprint`] and
/// the backlog manager's promote operation, which are the same transition.
pub(crate) async fn move_task_to_sprint(
    store: &dyn BoardStore,
    task_id: DbId,
    sprint_id: DbId,
) -> Result<Task, EngineError> {
    let task = store
        .find_task(task_id)
        .await?
        .ok_or_else(|| EngineError::not_found("task", task_id))?;
    check_sprint_membership(store, task.project_id, sprint_id).await?;

    let moved = store
        .set_task_sprint(task_id, sprint_id)
        .await?
        .ok_or_else(|| EngineError::not_found("task", task_id))?;
    tracing::debug!(task_id, sprint_id, "moved task into sprint");
    Ok(moved)
}

/// The target sprint must exist (`NotFound` otherwise) and belong to the
/// task's project (validation failure otherwise: the row exists, the
/// relationship is invalid).
async fn check_sprint_membership(
    store: &dyn BoardStore,
    project_id: DbId,
    sprint_id: DbId,
) -> Result<(), EngineError> {
    let sprint = store
        .find_sprint(sprint_id)
        .await?
        .ok_or_else(|| EngineError::not_found("sprint", sprint_id))?;
    if sprint.project_id != project_id {
        return Err(EngineError::Core(CoreError::invalid(
            "sprint_id",
            "sprint belongs to a different project",
        )));
    }
    Ok(())
}
