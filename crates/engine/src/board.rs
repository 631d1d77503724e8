//! Board grouping: partition a (usually filtered) task set into columns
//! for display.

use serde::Serialize;
use sprintboard_core::column::ColumnSet;
use sprintboard_db::models::task::Task;

/// One rendered board column. Columns with no tasks still appear, so the
/// board shape is stable regardless of content.
#[derive(Debug, Clone, Serialize)]
pub struct BoardColumn {
    pub name: String,
    pub tasks: Vec<Task>,
}

/// Partition tasks by board column, preserving the set's fixed order and
/// the incoming task order within each column.
///
/// A task whose stored column is not in the set (possible only through an
/// external writer) is surfaced in the first column rather than dropped.
pub fn group_by_column(columns: &ColumnSet, tasks: Vec<Task>) -> Vec<BoardColumn> {
    let mut board: Vec<BoardColumn> = columns
        .iter()
        .map(|name| BoardColumn {
            name: name.to_string(),
            tasks: Vec::new(),
        })
        .collect();

    for task in tasks {
        let slot = board
            .iter()
            .position(|c| c.name == task.column_name)
            .unwrap_or(0);
        board[slot].tasks.push(task);
    }
    board
}
