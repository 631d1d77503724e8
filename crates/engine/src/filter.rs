//! Filter engine: pure predicates applied uniformly to board and backlog
//! views.
//!
//! Filters compose with logical AND and touch only immutable task fields,
//! so evaluation order never changes the result and applying the same
//! filter twice equals applying it once.

use serde::Deserialize;
use sprintboard_core::error::CoreError;
use sprintboard_core::priority::Priority;
use sprintboard_core::types::DbId;
use sprintboard_db::models::task::Task;

/// Criteria for narrowing a task list. The default value matches
/// everything.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskFilter {
    /// Case-insensitive substring over the title or the `TASK-<id>`
    /// reference. Blank or whitespace-only means no search filtering.
    pub search: Option<String>,
    /// Exact priority match; `None` means no priority filtering.
    pub priority: Option<Priority>,
    /// Task must be assigned to exactly this user; `None` means no
    /// assignee filtering.
    pub assignee: Option<DbId>,
}

impl TaskFilter {
    /// Map a presentation-layer priority label to a filter value. The
    /// `"All"` sentinel (any case) and blank input mean "no filtering";
    /// anything else must be a valid priority.
    pub fn priority_from_label(label: &str) -> Result<Option<Priority>, CoreError> {
        let trimmed = label.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("all") {
            return Ok(None);
        }
        Priority::parse(trimmed).map(Some)
    }

    /// Whether a single task satisfies every set criterion.
    pub fn matches(&self, task: &Task) -> bool {
        if let Some(search) = self.search.as_deref() {
            let needle = search.trim().to_lowercase();
            if !needle.is_empty() {
                let in_title = task.title.to_lowercase().contains(&needle);
                let in_reference = task.reference().to_lowercase().contains(&needle);
                if !in_title && !in_reference {
                    return false;
                }
            }
        }
        if let Some(priority) = self.priority {
            if task.priority != priority.as_str() {
                return false;
            }
        }
        if let Some(assignee) = self.assignee {
            if task.assigned_to != Some(assignee) {
                return false;
            }
        }
        true
    }

    /// The matching subset, in input order.
    pub fn apply(&self, tasks: &[Task]) -> Vec<Task> {
        tasks.iter().filter(|t| self.matches(t)).cloned().collect()
    }
}
