//! Picking the task to work on after one is completed.

use crate::libs::task::{Task, TaskId};

/// Index of the task to focus after `completed_id` was marked done.
///
/// Scans forward from the position right after the completed task and
/// wraps to the first incomplete task of the whole list when nothing is
/// left after it. A completed task that is no longer listed (for example
/// because completed tasks are hidden) starts the scan at index 0.
pub fn next_incomplete_after(tasks: &[Task], completed_id: TaskId) -> Option<usize> {
    let after = tasks
        .iter()
        .position(|t| t.id == completed_id)
        .and_then(|index| tasks.iter().skip(index + 1).position(|t| !t.completed).map(|offset| index + 1 + offset));

    after.or_else(|| tasks.iter().position(|t| !t.completed))
}

/// Convenience over [`next_incomplete_after`] returning the task itself.
pub fn next_incomplete_task(tasks: &[Task], completed_id: TaskId) -> Option<&Task> {
    next_incomplete_after(tasks, completed_id).map(|index| &tasks[index])
}
