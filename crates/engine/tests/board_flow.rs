//! Integration tests for the task store, backlog manager, filter engine,
//! and board grouping, exercised over the in-memory store.

use std::sync::Arc;

use assert_matches::assert_matches;
use chrono::NaiveDate;
use sprintboard_core::column::ColumnSet;
use sprintboard_core::error::CoreError;
use sprintboard_core::priority::Priority;
use sprintboard_core::types::DbId;
use sprintboard_engine::{
    group_by_column, BacklogManager, BoardStore, EngineError, MemoryStore, NewSprint, NewTask,
    SprintPlanner, TaskEdit, TaskFilter, TaskStore,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

struct Board {
    store: Arc<MemoryStore>,
    tasks: TaskStore,
    sprints: SprintPlanner,
    backlog: BacklogManager,
}

impl Board {
    fn new() -> Self {
        let store = Arc::new(MemoryStore::new());
        let shared: Arc<dyn BoardStore> = store.clone();
        Self {
            store,
            tasks: TaskStore::new(shared.clone()),
            sprints: SprintPlanner::new(shared.clone()),
            backlog: BacklogManager::new(shared),
        }
    }

    async fn seed_project(&self) -> DbId {
        self.store.seed_project("Course project").await.id
    }

    async fn seed_sprint(&self, project_id: DbId) -> DbId {
        let number = self.sprints.next_sprint_number(project_id).await.unwrap();
        self.sprints
            .create(NewSprint {
                project_id,
                sprint_number: number,
                title: format!("Sprint {number}"),
                start_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
                end_date: NaiveDate::from_ymd_opt(2025, 1, 14).unwrap(),
                goal: None,
                status: None,
            })
            .await
            .unwrap()
            .id
    }
}

fn validation_fields(err: &EngineError) -> Vec<&'static str> {
    match err {
        EngineError::Core(CoreError::Validation(fields)) => {
            fields.iter().map(|f| f.field).collect()
        }
        other => panic!("expected validation error, got {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// Creation
// ---------------------------------------------------------------------------

#[tokio::test]
async fn created_task_round_trips_through_show_everything_query() {
    let board = Board::new();
    let project_id = board.seed_project().await;

    let input = NewTask {
        project_id,
        sprint_id: None,
        title: "Fix login bug".to_string(),
        description: Some("Session expires too early".to_string()),
        assigned_to: Some(7),
        column: None,
        priority: Priority::High,
        estimated_hours: Some(2.5),
    };
    let created = board.tasks.create(input).await.unwrap();

    let all = board
        .tasks
        .find_by_project_and_sprint(project_id, None)
        .await
        .unwrap();
    assert_eq!(all.len(), 1);
    let found = &all[0];
    assert_eq!(found.id, created.id);
    assert_eq!(found.title, "Fix login bug");
    assert_eq!(found.description.as_deref(), Some("Session expires too early"));
    assert_eq!(found.assigned_to, Some(7));
    assert_eq!(found.priority, "HIGH");
    assert_eq!(found.estimated_hours, Some(2.5));
    assert_eq!(found.sprint_id, None);
}

#[tokio::test]
async fn create_defaults_to_first_column_and_trims_title() {
    let board = Board::new();
    let project_id = board.seed_project().await;

    let task = board
        .tasks
        .create(NewTask::backlog(project_id, "  Fix login bug  ", Priority::Medium))
        .await
        .unwrap();
    assert_eq!(task.column_name, "TODO");
    assert_eq!(task.status(), "TODO");
    assert_eq!(task.title, "Fix login bug");
}

#[tokio::test]
async fn create_resolves_column_case_insensitively() {
    let board = Board::new();
    let project_id = board.seed_project().await;

    let mut input = NewTask::backlog(project_id, "Review the parser", Priority::Low);
    input.column = Some("review".to_string());
    let task = board.tasks.create(input).await.unwrap();
    assert_eq!(task.column_name, "REVIEW");
}

#[tokio::test]
async fn create_rejects_column_outside_project_set() {
    let board = Board::new();
    let project_id = board.seed_project().await;

    let mut input = NewTask::backlog(project_id, "Valid title", Priority::Low);
    input.column = Some("BLOCKED".to_string());
    let err = board.tasks.create(input).await.unwrap_err();
    assert_eq!(validation_fields(&err), ["column_name"]);
}

#[tokio::test]
async fn create_enumerates_every_offending_field() {
    let board = Board::new();
    let project_id = board.seed_project().await;

    let mut input = NewTask::backlog(project_id, "Go", Priority::Low);
    input.description = Some("x".repeat(501));
    input.estimated_hours = Some(0.0);
    let err = board.tasks.create(input).await.unwrap_err();
    assert_eq!(
        validation_fields(&err),
        ["title", "description", "estimated_hours"]
    );
}

#[tokio::test]
async fn two_char_title_rejected_three_char_accepted() {
    let board = Board::new();
    let project_id = board.seed_project().await;

    let err = board
        .tasks
        .create(NewTask::backlog(project_id, "Go", Priority::Low))
        .await
        .unwrap_err();
    assert_eq!(validation_fields(&err), ["title"]);

    let task = board
        .tasks
        .create(NewTask::backlog(project_id, "Fix", Priority::Low))
        .await
        .unwrap();
    assert_eq!(task.title, "Fix");
}

#[tokio::test]
async fn create_in_missing_project_is_not_found() {
    let board = Board::new();
    let err = board
        .tasks
        .create(NewTask::backlog(999, "Valid title", Priority::Low))
        .await
        .unwrap_err();
    assert_matches!(
        err,
        EngineError::Core(CoreError::NotFound { entity: "project", id: 999 })
    );
}

#[tokio::test]
async fn create_in_missing_sprint_is_not_found() {
    let board = Board::new();
    let project_id = board.seed_project().await;

    let mut input = NewTask::backlog(project_id, "Valid title", Priority::Low);
    input.sprint_id = Some(888);
    let err = board.tasks.create(input).await.unwrap_err();
    assert_matches!(
        err,
        EngineError::Core(CoreError::NotFound { entity: "sprint", id: 888 })
    );
}

#[tokio::test]
async fn create_in_cross_project_sprint_is_a_validation_failure() {
    let board = Board::new();
    let project_a = board.seed_project().await;
    let project_b = board.store.seed_project("Other project").await.id;
    let foreign_sprint = board.seed_sprint(project_b).await;

    let mut input = NewTask::backlog(project_a, "Valid title", Priority::Low);
    input.sprint_id = Some(foreign_sprint);
    let err = board.tasks.create(input).await.unwrap_err();
    assert_eq!(validation_fields(&err), ["sprint_id"]);
}

// ---------------------------------------------------------------------------
// Queries
// ---------------------------------------------------------------------------

#[tokio::test]
async fn backlog_is_a_strict_subset_of_the_show_everything_query() {
    let board = Board::new();
    let project_id = board.seed_project().await;
    let sprint_id = board.seed_sprint(project_id).await;

    let unscheduled = board
        .tasks
        .create(NewTask::backlog(project_id, "Unscheduled work", Priority::Low))
        .await
        .unwrap();
    let mut scheduled = NewTask::backlog(project_id, "Scheduled work", Priority::Low);
    scheduled.sprint_id = Some(sprint_id);
    board.tasks.create(scheduled).await.unwrap();

    let all = board
        .tasks
        .find_by_project_and_sprint(project_id, None)
        .await
        .unwrap();
    let backlog = board.tasks.find_backlog(project_id).await.unwrap();

    // The None-sprint query shows everything; the backlog only the
    // unscheduled subset.
    assert_eq!(all.len(), 2);
    assert_eq!(backlog.len(), 1);
    assert_eq!(backlog[0].id, unscheduled.id);
    assert!(backlog.iter().all(|t| t.sprint_id.is_none()));
    let all_ids: Vec<_> = all.iter().map(|t| t.id).collect();
    assert!(backlog.iter().all(|t| all_ids.contains(&t.id)));
}

#[tokio::test]
async fn backlog_lists_newest_first() {
    let board = Board::new();
    let project_id = board.seed_project().await;

    let first = board
        .tasks
        .create(NewTask::backlog(project_id, "Older task", Priority::Low))
        .await
        .unwrap();
    let second = board
        .tasks
        .create(NewTask::backlog(project_id, "Newer task", Priority::Low))
        .await
        .unwrap();

    let backlog = board.tasks.find_backlog(project_id).await.unwrap();
    let ids: Vec<_> = backlog.iter().map(|t| t.id).collect();
    assert_eq!(ids, vec![second.id, first.id]);
}

// ---------------------------------------------------------------------------
// Movement
// ---------------------------------------------------------------------------

#[tokio::test]
async fn promote_scenario_moves_task_out_of_backlog_into_sprint() {
    let board = Board::new();
    let project_id = board.seed_project().await;
    let sprint_id = board.seed_sprint(project_id).await;

    let task = board
        .tasks
        .create(NewTask::backlog(project_id, "Fix login bug", Priority::High))
        .await
        .unwrap();
    assert!(board
        .tasks
        .find_backlog(project_id)
        .await
        .unwrap()
        .iter()
        .any(|t| t.id == task.id));

    board
        .backlog
        .promote_to_sprint(task.id, sprint_id)
        .await
        .unwrap();

    assert!(board.tasks.find_backlog(project_id).await.unwrap().is_empty());
    let in_sprint = board
        .tasks
        .find_by_project_and_sprint(project_id, Some(sprint_id))
        .await
        .unwrap();
    assert_eq!(in_sprint.len(), 1);
    assert_eq!(in_sprint[0].id, task.id);
}

#[tokio::test]
async fn move_to_sprint_never_changes_the_column() {
    let board = Board::new();
    let project_id = board.seed_project().await;
    let sprint_id = board.seed_sprint(project_id).await;

    let mut input = NewTask::backlog(project_id, "Half-done work", Priority::Medium);
    input.column = Some("IN_PROGRESS".to_string());
    let task = board.tasks.create(input).await.unwrap();

    let moved = board.tasks.move_to_sprint(task.id, sprint_id).await.unwrap();
    assert_eq!(moved.sprint_id, Some(sprint_id));
    assert_eq!(moved.column_name, "IN_PROGRESS");
}

#[tokio::test]
async fn update_column_never_changes_the_sprint() {
    let board = Board::new();
    let project_id = board.seed_project().await;
    let sprint_id = board.seed_sprint(project_id).await;

    let mut input = NewTask::backlog(project_id, "Scheduled work", Priority::Medium);
    input.sprint_id = Some(sprint_id);
    let task = board.tasks.create(input).await.unwrap();

    let moved = board.tasks.update_column(task.id, "DONE").await.unwrap();
    assert_eq!(moved.column_name, "DONE");
    assert_eq!(moved.status(), "DONE");
    assert_eq!(moved.sprint_id, Some(sprint_id));
}

#[tokio::test]
async fn done_may_move_back_to_todo() {
    let board = Board::new();
    let project_id = board.seed_project().await;

    let mut input = NewTask::backlog(project_id, "Reopened work", Priority::Medium);
    input.column = Some("DONE".to_string());
    let task = board.tasks.create(input).await.unwrap();

    // Transitions are unordered; no forward-only guard.
    let reopened = board.tasks.update_column(task.id, "TODO").await.unwrap();
    assert_eq!(reopened.column_name, "TODO");
}

#[tokio::test]
async fn update_column_rejects_non_member_column() {
    let board = Board::new();
    let project_id = board.seed_project().await;
    let task = board
        .tasks
        .create(NewTask::backlog(project_id, "Valid title", Priority::Low))
        .await
        .unwrap();

    let err = board.tasks.update_column(task.id, "BLOCKED").await.unwrap_err();
    assert_eq!(validation_fields(&err), ["column_name"]);
}

#[tokio::test]
async fn move_to_missing_sprint_is_not_found() {
    let board = Board::new();
    let project_id = board.seed_project().await;
    let task = board
        .tasks
        .create(NewTask::backlog(project_id, "Valid title", Priority::Low))
        .await
        .unwrap();

    let err = board.tasks.move_to_sprint(task.id, 777).await.unwrap_err();
    assert_matches!(
        err,
        EngineError::Core(CoreError::NotFound { entity: "sprint", id: 777 })
    );
}

// ---------------------------------------------------------------------------
// Edits and deletion
// ---------------------------------------------------------------------------

#[tokio::test]
async fn update_overwrites_editable_fields_only() {
    let board = Board::new();
    let project_id = board.seed_project().await;
    let sprint_id = board.seed_sprint(project_id).await;

    let mut input = NewTask::backlog(project_id, "Fix login bug", Priority::High);
    input.sprint_id = Some(sprint_id);
    let task = board.tasks.create(input).await.unwrap();

    let updated = board
        .tasks
        .update(
            task.id,
            TaskEdit {
                title: "Fix login redirect".to_string(),
                description: Some("Redirect loop".to_string()),
                assigned_to: Some(9),
                column: "review".to_string(),
                priority: Priority::Critical,
                estimated_hours: Some(6.0),
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.title, "Fix login redirect");
    assert_eq!(updated.column_name, "REVIEW");
    assert_eq!(updated.priority, "CRITICAL");
    // Identity, project, sprint membership, creation time survive.
    assert_eq!(updated.id, task.id);
    assert_eq!(updated.project_id, project_id);
    assert_eq!(updated.sprint_id, Some(sprint_id));
    assert_eq!(updated.created_at, task.created_at);
}

#[tokio::test]
async fn update_revalidates_fields() {
    let board = Board::new();
    let project_id = board.seed_project().await;
    let task = board
        .tasks
        .create(NewTask::backlog(project_id, "Valid title", Priority::Low))
        .await
        .unwrap();

    let err = board
        .tasks
        .update(
            task.id,
            TaskEdit {
                title: "Go".to_string(),
                description: None,
                assigned_to: None,
                column: "TODO".to_string(),
                priority: Priority::Low,
                estimated_hours: Some(-1.0),
            },
        )
        .await
        .unwrap_err();
    assert_eq!(validation_fields(&err), ["title", "estimated_hours"]);
}

#[tokio::test]
async fn delete_is_hard_and_operations_on_gone_tasks_are_not_found() {
    let board = Board::new();
    let project_id = board.seed_project().await;
    let task = board
        .tasks
        .create(NewTask::backlog(project_id, "Short lived", Priority::Low))
        .await
        .unwrap();

    board.tasks.delete(task.id).await.unwrap();

    assert_matches!(
        board.tasks.find(task.id).await.unwrap_err(),
        EngineError::Core(CoreError::NotFound { entity: "task", .. })
    );
    assert_matches!(
        board.tasks.delete(task.id).await.unwrap_err(),
        EngineError::Core(CoreError::NotFound { entity: "task", .. })
    );
    assert_matches!(
        board.tasks.update_column(task.id, "DONE").await.unwrap_err(),
        EngineError::Core(CoreError::NotFound { entity: "task", .. })
    );
}

// ---------------------------------------------------------------------------
// Render pass: filter then group
// ---------------------------------------------------------------------------

#[tokio::test]
async fn filtered_tasks_group_into_stable_columns() {
    let board = Board::new();
    let project_id = board.seed_project().await;

    let mut a = NewTask::backlog(project_id, "Fix login bug", Priority::High);
    a.column = Some("IN_PROGRESS".to_string());
    board.tasks.create(a).await.unwrap();

    let mut b = NewTask::backlog(project_id, "Login audit", Priority::Low);
    b.column = Some("DONE".to_string());
    board.tasks.create(b).await.unwrap();

    board
        .tasks
        .create(NewTask::backlog(project_id, "Unrelated chore", Priority::High))
        .await
        .unwrap();

    let all = board
        .tasks
        .find_by_project_and_sprint(project_id, None)
        .await
        .unwrap();
    let filter = TaskFilter {
        search: Some("login".to_string()),
        ..Default::default()
    };
    let filtered = filter.apply(&all);

    let project = board.store.find_project(project_id).await.unwrap().unwrap();
    let columns = ColumnSet::parse(&project.column_set).unwrap();
    let grouped = group_by_column(&columns, filtered);

    let names: Vec<_> = grouped.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["TODO", "IN_PROGRESS", "REVIEW", "DONE"]);
    // The chore was filtered out of the first column; REVIEW still renders.
    assert!(grouped[0].tasks.is_empty());
    assert_eq!(grouped[1].tasks.len(), 1);
    assert!(grouped[2].tasks.is_empty());
    assert_eq!(grouped[3].tasks.len(), 1);
}
