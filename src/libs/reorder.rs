//! Reorder planning for a single day's task list.
//!
//! A move is expressed the way a drag-and-drop list reports it: the task
//! being moved and the task it was dropped onto. The drop target's position
//! in the *visible* list is the destination. Planning is pure; applying the
//! plan and persisting it is the board's job.
//!
//! ## Algorithm
//!
//! 1. Reject self-drops, unknown ids and cross-date moves.
//! 2. Filter the full list down to what is visible under the
//!    "show completed" toggle.
//! 3. Splice the moved task out of its old visible position and back in at
//!    the target's position (remove-then-insert, never a swap).
//! 4. Give every visible task `order_index = its new visible position`.
//! 5. Stable-sort the full list: visible tasks first in their new order,
//!    then hidden tasks by their original `order_index`.
//!
//! The resulting assignments are what gets persisted, one call per visible
//! task.

use crate::libs::task::{Task, TaskId};
use chrono::NaiveDate;
use std::cmp::Ordering;
use std::collections::HashMap;
use thiserror::Error;

/// A move event: `task_id` was dropped onto `over_id`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRequest {
    pub task_id: TaskId,
    pub over_id: TaskId,
}

impl MoveRequest {
    pub fn new(task_id: TaskId, over_id: TaskId) -> Self {
        Self { task_id, over_id }
    }
}

/// Why a move was refused. A refused move leaves every task untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReorderRejection {
    #[error("task {0} was dropped onto itself")]
    SameTask(TaskId),
    #[error("tasks on different dates cannot be reordered ({from} -> {to})")]
    CrossDate { from: NaiveDate, to: NaiveDate },
    #[error("task {0} is not in the current list")]
    UnknownTask(TaskId),
    #[error("task {0} is hidden while completed tasks are not shown")]
    Hidden(TaskId),
}

/// Outcome of planning a move.
#[derive(Debug, Clone, PartialEq)]
pub struct ReorderPlan {
    /// Visible position the moved task came from.
    pub from: usize,
    /// Visible position the moved task lands on.
    pub to: usize,
    /// The full task list with new order indexes, in display order.
    pub tasks: Vec<Task>,
    /// `(task, order_index)` for every visible task, in the new order.
    pub assignments: Vec<(TaskId, i32)>,
}

/// Whether a task is shown under the given toggle.
pub fn is_visible(task: &Task, show_completed: bool) -> bool {
    show_completed || !task.completed
}

/// Removes the element at `from` and reinserts it at `to`.
///
/// Elements between the two positions shift by one; nothing is swapped.
/// Out of range indexes leave the slice unchanged.
pub fn move_item<T>(items: &mut Vec<T>, from: usize, to: usize) {
    if from >= items.len() || to >= items.len() || from == to {
        return;
    }
    let item = items.remove(from);
    items.insert(to, item);
}

/// Plans the move described by `request` over the full task list of a day.
pub fn plan_reorder(tasks: &[Task], request: MoveRequest, show_completed: bool) -> Result<ReorderPlan, ReorderRejection> {
    let MoveRequest { task_id, over_id } = request;

    let dragged = tasks.iter().find(|t| t.id == task_id).ok_or(ReorderRejection::UnknownTask(task_id))?;
    let over = tasks.iter().find(|t| t.id == over_id).ok_or(ReorderRejection::UnknownTask(over_id))?;

    if dragged.date != over.date {
        return Err(ReorderRejection::CrossDate {
            from: dragged.date,
            to: over.date,
        });
    }
    if task_id == over_id {
        return Err(ReorderRejection::SameTask(task_id));
    }

    let mut visible: Vec<&Task> = tasks.iter().filter(|t| is_visible(t, show_completed)).collect();
    let from = visible.iter().position(|t| t.id == task_id).ok_or(ReorderRejection::Hidden(task_id))?;
    let to = visible.iter().position(|t| t.id == over_id).ok_or(ReorderRejection::Hidden(over_id))?;

    move_item(&mut visible, from, to);

    let positions: HashMap<TaskId, usize> = visible.iter().enumerate().map(|(index, task)| (task.id, index)).collect();
    let assignments: Vec<(TaskId, i32)> = visible.iter().enumerate().map(|(index, task)| (task.id, index as i32)).collect();

    let mut reordered: Vec<Task> = tasks
        .iter()
        .cloned()
        .map(|mut task| {
            if let Some(&index) = positions.get(&task.id) {
                task.order_index = index as i32;
            }
            task
        })
        .collect();

    // Hidden tasks compare on their untouched order_index.
    reordered.sort_by(|a, b| match (positions.get(&a.id), positions.get(&b.id)) {
        (Some(a_pos), Some(b_pos)) => a_pos.cmp(b_pos),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => a.order_index.cmp(&b.order_index),
    });

    Ok(ReorderPlan {
        from,
        to,
        tasks: reordered,
        assignments,
    })
}
