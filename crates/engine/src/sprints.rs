//! Sprint planner: sprint CRUD, numbering, and active-sprint selection.

use std::sync::Arc;

use serde::Deserialize;
use sprintboard_core::error::Violations;
use sprintboard_core::sprint::{next_sprint_number, SprintStatus};
use sprintboard_core::types::{CalendarDate, DbId};
use sprintboard_core::validation::{check_date_range, check_goal, check_title};
use sprintboard_db::models::sprint::{CreateSprint, Sprint, UpdateSprint};

use crate::error::EngineError;
use crate::store::BoardStore;

// ---------------------------------------------------------------------------
// Inputs
// ---------------------------------------------------------------------------

/// Input for creating a sprint.
///
/// The number is caller-supplied, obtained via
/// [`SprintPlanner::next_sprint_number`] beforehand. Numbering and creation
/// are not atomic together; the loser of a concurrent race receives a
/// unique-constraint store failure rather than a duplicate number.
#[derive(Debug, Clone, Deserialize)]
pub struct NewSprint {
    pub project_id: DbId,
    pub sprint_number: i32,
    pub title: String,
    pub start_date: CalendarDate,
    pub end_date: CalendarDate,
    pub goal: Option<String>,
    /// Defaults to `Planned` if omitted.
    pub status: Option<SprintStatus>,
}

/// Input for a full-field sprint edit. Status transitions are unguarded:
/// any of planned/active/completed may change to any other.
#[derive(Debug, Clone, Deserialize)]
pub struct SprintEdit {
    pub title: String,
    pub start_date: CalendarDate,
    pub end_date: CalendarDate,
    pub goal: Option<String>,
    pub status: SprintStatus,
}

// ---------------------------------------------------------------------------
// Component
// ---------------------------------------------------------------------------

/// Sprint CRUD and numbering over an injected store.
pub struct SprintPlanner {
    store: Arc<dyn BoardStore>,
}

impl SprintPlanner {
    pub fn new(store: Arc<dyn BoardStore>) -> Self {
        Self { store }
    }

    /// A project's sprints, ordered by sprint number ascending.
    pub async fn find_by_project(&self, project_id: DbId) -> Result<Vec<Sprint>, EngineError> {
        Ok(self.store.list_sprints(project_id).await?)
    }

    /// `1 + max(existing sprint numbers)`, or `1` for a project with no
    /// sprints yet.
    pub async fn next_sprint_number(&self, project_id: DbId) -> Result<i32, EngineError> {
        let max = self.store.max_sprint_number(project_id).await?;
        Ok(next_sprint_number(max))
    }

    /// Create a sprint after validating its fields and that the owning
    /// project exists.
    pub async fn create(&self, input: NewSprint) -> Result<Sprint, EngineError> {
        let title = input.title.trim().to_string();

        let mut v = Violations::new();
        check_title(&mut v, &title);
        check_goal(&mut v, input.goal.as_deref());
        check_date_range(&mut v, input.start_date, input.end_date);
        v.finish().map_err(EngineError::Core)?;

        if self.store.find_project(input.project_id).await?.is_none() {
            return Err(EngineError::not_found("project", input.project_id));
        }

        let status = input.status.unwrap_or(SprintStatus::Planned);
        let sprint = self
            .store
            .insert_sprint(&CreateSprint {
                project_id: input.project_id,
                sprint_number: input.sprint_number,
                title,
                start_date: input.start_date,
                end_date: input.end_date,
                goal: input.goal,
                status: status.as_str().to_string(),
            })
            .await?;
        tracing::debug!(
            sprint_id = sprint.id,
            project_id = sprint.project_id,
            number = sprint.sprint_number,
            "created sprint"
        );
        Ok(sprint)
    }

    /// Full-field edit. Identity, owning project, number, and creation
    /// timestamp are untouched.
    pub async fn update(&self, sprint_id: DbId, input: SprintEdit) -> Result<Sprint, EngineError> {
        let title = input.title.trim().to_string();

        let mut v = Violations::new();
        check_title(&mut v, &title);
        check_goal(&mut v, input.goal.as_deref());
        check_date_range(&mut v, input.start_date, input.end_date);
        v.finish().map_err(EngineError::Core)?;

        let updated = self
            .store
            .update_sprint(
                sprint_id,
                &UpdateSprint {
                    title,
                    start_date: input.start_date,
                    end_date: input.end_date,
                    goal: input.goal,
                    status: input.status.as_str().to_string(),
                },
            )
            .await?
            .ok_or_else(|| EngineError::not_found("sprint", sprint_id))?;
        tracing::debug!(sprint_id, "updated sprint");
        Ok(updated)
    }

    /// Delete a sprint; its tasks fall back to the backlog.
    pub async fn delete(&self, sprint_id: DbId) -> Result<(), EngineError> {
        if !self.store.delete_sprint(sprint_id).await? {
            return Err(EngineError::not_found("sprint", sprint_id));
        }
        tracing::debug!(sprint_id, "deleted sprint");
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Active-sprint selection
// ---------------------------------------------------------------------------

/// Default-selection policy, applied by the caller and never stored: prefer
/// the sprint with status `ACTIVE`; else the first sprint by number; else
/// none. If several sprints claim `ACTIVE` (a convention, not an
/// invariant), the lowest-numbered one wins.
pub fn select_active(sprints: &[Sprint]) -> Option<&Sprint> {
    sprints
        .iter()
        .filter(|s| s.status == SprintStatus::Active.as_str())
        .min_by_key(|s| s.sprint_number)
        .or_else(|| sprints.iter().min_by_key(|s| s.sprint_number))
}
