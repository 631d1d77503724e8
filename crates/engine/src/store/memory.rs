//! In-memory store for tests and embedding without a database.
//!
//! Mirrors the relational semantics the engine relies on: store-assigned
//! ids and timestamps, query ordering, the `status` mirror (implicit here,
//! since the model collapses the two fields), the sprint-number unique
//! constraint, and `ON DELETE SET NULL` when a sprint is removed.

use async_trait::async_trait;
use chrono::Utc;
use sprintboard_core::column::DEFAULT_COLUMN_SET;
use sprintboard_core::types::DbId;
use sprintboard_db::models::project::Project;
use sprintboard_db::models::sprint::{CreateSprint, Sprint, UpdateSprint};
use sprintboard_db::models::task::{CreateTask, Task, UpdateTask};
use sprintboard_db::StoreError;
use tokio::sync::Mutex;

use super::BoardStore;

#[derive(Debug, Default)]
struct Tables {
    projects: Vec<Project>,
    sprints: Vec<Sprint>,
    tasks: Vec<Task>,
    next_id: DbId,
}

impl Tables {
    fn assign_id(&mut self) -> DbId {
        self.next_id += 1;
        self.next_id
    }
}

/// Mutex-guarded in-memory table set.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<Tables>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a project row with the default column set. Project creation
    /// is owned by an excluded collaborator, so this exists only so tests
    /// and embedders can establish a project to hang a board on.
    pub async fn seed_project(&self, title: &str) -> Project {
        self.seed_project_with_columns(title, DEFAULT_COLUMN_SET).await
    }

    /// Insert a project row with a custom comma-separated column set.
    pub async fn seed_project_with_columns(&self, title: &str, column_set: &str) -> Project {
        let mut tables = self.inner.lock().await;
        let now = Utc::now();
        let project = Project {
            id: tables.assign_id(),
            title: title.to_string(),
            description: None,
            repo_url: None,
            column_set: column_set.to_string(),
            status: "ACTIVE".to_string(),
            classroom_id: None,
            course_id: None,
            created_at: now,
            updated_at: now,
        };
        tables.projects.push(project.clone());
        project
    }
}

#[async_trait]
impl BoardStore for MemoryStore {
    async fn find_project(&self, id: DbId) -> Result<Option<Project>, StoreError> {
        let tables = self.inner.lock().await;
        Ok(tables.projects.iter().find(|p| p.id == id).cloned())
    }

    async fn insert_task(&self, input: &CreateTask) -> Result<Task, StoreError> {
        let mut tables = self.inner.lock().await;
        let now = Utc::now();
        let task = Task {
            id: tables.assign_id(),
            project_id: input.project_id,
            sprint_id: input.sprint_id,
            title: input.title.clone(),
            description: input.description.clone(),
            assigned_to: input.assigned_to,
            column_name: input.column_name.clone(),
            priority: input.priority.clone(),
            estimated_hours: input.estimated_hours,
            created_at: now,
            updated_at: now,
        };
        tables.tasks.push(task.clone());
        Ok(task)
    }

    async fn find_task(&self, id: DbId) -> Result<Option<Task>, StoreError> {
        let tables = self.inner.lock().await;
        Ok(tables.tasks.iter().find(|t| t.id == id).cloned())
    }

    async fn list_tasks(
        &self,
        project_id: DbId,
        sprint_id: Option<DbId>,
    ) -> Result<Vec<Task>, StoreError> {
        let tables = self.inner.lock().await;
        let mut tasks: Vec<Task> = tables
            .tasks
            .iter()
            .filter(|t| t.project_id == project_id)
            .filter(|t| sprint_id.is_none() || t.sprint_id == sprint_id)
            .cloned()
            .collect();
        tasks.sort_by_key(|t| (t.created_at, t.id));
        Ok(tasks)
    }

    async fn list_backlog(&self, project_id: DbId) -> Result<Vec<Task>, StoreError> {
        let tables = self.inner.lock().await;
        let mut tasks: Vec<Task> = tables
            .tasks
            .iter()
            .filter(|t| t.project_id == project_id && t.sprint_id.is_none())
            .cloned()
            .collect();
        tasks.sort_by_key(|t| std::cmp::Reverse((t.created_at, t.id)));
        Ok(tasks)
    }

    async fn update_task(&self, id: DbId, input: &UpdateTask) -> Result<Option<Task>, StoreError> {
        let mut tables = self.inner.lock().await;
        let Some(task) = tables.tasks.iter_mut().find(|t| t.id == id) else {
            return Ok(None);
        };
        task.title = input.title.clone();
        task.description = input.description.clone();
        task.assigned_to = input.assigned_to;
        task.column_name = input.column_name.clone();
        task.priority = input.priority.clone();
        task.estimated_hours = input.estimated_hours;
        task.updated_at = Utc::now();
        Ok(Some(task.clone()))
    }

    async fn set_task_column(
        &self,
        id: DbId,
        column_name: &str,
    ) -> Result<Option<Task>, StoreError> {
        let mut tables = self.inner.lock().await;
        let Some(task) = tables.tasks.iter_mut().find(|t| t.id == id) else {
            return Ok(None);
        };
        task.column_name = column_name.to_string();
        task.updated_at = Utc::now();
        Ok(Some(task.clone()))
    }

    async fn set_task_sprint(
        &self,
        id: DbId,
        sprint_id: DbId,
    ) -> Result<Option<Task>, StoreError> {
        let mut tables = self.inner.lock().await;
        let Some(task) = tables.tasks.iter_mut().find(|t| t.id == id) else {
            return Ok(None);
        };
        task.sprint_id = Some(sprint_id);
        task.updated_at = Utc::now();
        Ok(Some(task.clone()))
    }

    async fn delete_task(&self, id: DbId) -> Result<bool, StoreError> {
        let mut tables = self.inner.lock().await;
        let before = tables.tasks.len();
        tables.tasks.retain(|t| t.id != id);
        Ok(tables.tasks.len() < before)
    }

    async fn insert_sprint(&self, input: &CreateSprint) -> Result<Sprint, StoreError> {
        let mut tables = self.inner.lock().await;
        let duplicate = tables
            .sprints
            .iter()
            .any(|s| s.project_id == input.project_id && s.sprint_number == input.sprint_number);
        if duplicate {
            return Err(StoreError::UniqueViolation {
                constraint: "uq_sprints_project_number".to_string(),
            });
        }
        let sprint = Sprint {
            id: tables.assign_id(),
            project_id: input.project_id,
            sprint_number: input.sprint_number,
            title: input.title.clone(),
            start_date: input.start_date,
            end_date: input.end_date,
            goal: input.goal.clone(),
            status: input.status.clone(),
            created_at: Utc::now(),
        };
        tables.sprints.push(sprint.clone());
        Ok(sprint)
    }

    async fn find_sprint(&self, id: DbId) -> Result<Option<Sprint>, StoreError> {
        let tables = self.inner.lock().await;
        Ok(tables.sprints.iter().find(|s| s.id == id).cloned())
    }

    async fn list_sprints(&self, project_id: DbId) -> Result<Vec<Sprint>, StoreError> {
        let tables = self.inner.lock().await;
        let mut sprints: Vec<Sprint> = tables
            .sprints
            .iter()
            .filter(|s| s.project_id == project_id)
            .cloned()
            .collect();
        sprints.sort_by_key(|s| s.sprint_number);
        Ok(sprints)
    }

    async fn max_sprint_number(&self, project_id: DbId) -> Result<Option<i32>, StoreError> {
        let tables = self.inner.lock().await;
        Ok(tables
            .sprints
            .iter()
            .filter(|s| s.project_id == project_id)
            .map(|s| s.sprint_number)
            .max())
    }

    async fn update_sprint(
        &self,
        id: DbId,
        input: &UpdateSprint,
    ) -> Result<Option<Sprint>, StoreError> {
        let mut tables = self.inner.lock().await;
        let Some(sprint) = tables.sprints.iter_mut().find(|s| s.id == id) else {
            return Ok(None);
        };
        sprint.title = input.title.clone();
        sprint.start_date = input.start_date;
        sprint.end_date = input.end_date;
        sprint.goal = input.goal.clone();
        sprint.status = input.status.clone();
        Ok(Some(sprint.clone()))
    }

    async fn delete_sprint(&self, id: DbId) -> Result<bool, StoreError> {
        let mut tables = self.inner.lock().await;
        let before = tables.sprints.len();
        tables.sprints.retain(|s| s.id != id);
        if tables.sprints.len() == before {
            return Ok(false);
        }
        // ON DELETE SET NULL: orphaned tasks fall back to the backlog.
        for task in tables.tasks.iter_mut() {
            if task.sprint_id == Some(id) {
                task.sprint_id = None;
            }
        }
        Ok(true)
    }
}
