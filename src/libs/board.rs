//! In-memory task list for one day.
//!
//! The board always holds the *full* list of the selected date, completed
//! tasks included, ordered by `order_index`. The "show completed" toggle only
//! filters what [`TaskBoard::visible_tasks`] returns. Keeping hidden tasks
//! around lets a reorder keep their relative order intact.
//!
//! Every mutation goes through [`TaskUseCases`] and is followed by a fetch,
//! so the local list is always replaced wholesale by the server's view.
//! The only exception is [`TaskBoard::reorder`], which applies its result
//! before the server has confirmed it and falls back to a fetch when any
//! persistence call fails.

use crate::api::TaskRepository;
use crate::libs::calendar::{shift_day, Direction};
use crate::libs::focus::next_incomplete_task;
use crate::libs::messages::Message;
use crate::libs::reorder::{is_visible, plan_reorder, MoveRequest, ReorderPlan, ReorderRejection};
use crate::libs::task::{NewTask, Task, TaskId, TaskPatch};
use crate::libs::usecases::TaskUseCases;
use crate::{msg_bail_anyhow, msg_warning};
use anyhow::Result;
use chrono::NaiveDate;
use tokio::task::JoinSet;

/// Result of [`TaskBoard::reorder`].
#[derive(Debug, Clone, PartialEq)]
pub enum ReorderOutcome {
    /// The new order was applied locally and persisted.
    Applied(ReorderPlan),
    /// Nothing changed.
    Rejected(ReorderRejection),
}

/// Result of an update, with the task to focus next when the update
/// completed an open task.
#[derive(Debug, Clone, PartialEq)]
pub struct UpdateOutcome {
    pub task: Task,
    pub next_focus: Option<Task>,
}

pub struct TaskBoard<R> {
    usecases: TaskUseCases<R>,
    date: NaiveDate,
    show_completed: bool,
    tasks: Vec<Task>,
}

impl<R> TaskBoard<R>
where
    R: TaskRepository + Clone + Send + Sync + 'static,
{
    /// Creates an empty board. Call [`TaskBoard::load`] to fill it.
    pub fn new(usecases: TaskUseCases<R>, date: NaiveDate, show_completed: bool) -> Self {
        Self {
            usecases,
            date,
            show_completed,
            tasks: Vec::new(),
        }
    }

    pub fn date(&self) -> NaiveDate {
        self.date
    }

    pub fn show_completed(&self) -> bool {
        self.show_completed
    }

    /// Every task of the day, completed ones included.
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn visible_tasks(&self) -> Vec<&Task> {
        self.tasks.iter().filter(|t| is_visible(t, self.show_completed)).collect()
    }

    /// Number of completed tasks currently filtered out.
    pub fn hidden_count(&self) -> usize {
        self.tasks.len() - self.visible_tasks().len()
    }

    pub fn find(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Task at a visible position.
    pub fn task_at(&self, position: usize) -> Option<&Task> {
        self.visible_tasks().get(position).copied()
    }

    pub async fn load(&mut self) -> Result<&[Task]> {
        self.refresh().await?;
        Ok(&self.tasks)
    }

    /// Replaces the local list with the server's list for the current date.
    pub async fn refresh(&mut self) -> Result<()> {
        let mut tasks = self.usecases.get_tasks(self.date, true).await?;
        tasks.sort_by_key(|t| t.order_index);
        tracing::debug!(date = %self.date, count = tasks.len(), "task list refreshed");
        self.tasks = tasks;
        Ok(())
    }

    pub async fn navigate(&mut self, direction: Direction) -> Result<()> {
        self.date = shift_day(self.date, direction)?;
        self.refresh().await
    }

    /// Creates a task at the end of the current day.
    ///
    /// Input is validated before anything is sent. The list is reloaded first
    /// so the new `order_index` is the current length of the day.
    pub async fn create(&mut self, title: &str, memo: Option<String>, deadline: Option<&str>) -> Result<Task> {
        let new_task = NewTask::new(self.date, title)?.with_memo(memo).with_deadline(deadline)?;

        self.refresh().await?;
        let new_task = new_task.with_order_index(self.tasks.len() as i32);

        let task = self.usecases.create_task(&new_task).await?;
        self.refresh().await?;
        Ok(task)
    }

    /// Sends `patch` and reloads the list.
    ///
    /// When the patch turns an open task into a done one, the next open task
    /// of the reloaded visible list is returned as the focus target.
    pub async fn update(&mut self, id: TaskId, patch: &TaskPatch) -> Result<UpdateOutcome> {
        let before = match self.find(id) {
            Some(task) => task.clone(),
            None => self.usecases.get_task(id).await?,
        };
        let completes = patch.completes(&before);

        let task = self.usecases.update_task(id, patch).await?;
        self.refresh().await?;

        let next_focus = if completes {
            let visible: Vec<Task> = self.visible_tasks().into_iter().cloned().collect();
            next_incomplete_task(&visible, id).cloned()
        } else {
            None
        };

        Ok(UpdateOutcome { task, next_focus })
    }

    pub async fn complete(&mut self, id: TaskId) -> Result<UpdateOutcome> {
        self.update(id, &TaskPatch::default().completed(true)).await
    }

    pub async fn reopen(&mut self, id: TaskId) -> Result<Task> {
        Ok(self.update(id, &TaskPatch::default().completed(false)).await?.task)
    }

    pub async fn delete(&mut self, id: TaskId) -> Result<()> {
        self.usecases.delete_task(id).await?;
        self.refresh().await
    }

    /// Moves a task onto the position of another one.
    ///
    /// The planned order is applied to the local list first. Then one order
    /// update per visible task is spawned and all of them run concurrently.
    /// When any of them fails the local list is reloaded once after every
    /// call has finished and an error is returned.
    pub async fn reorder(&mut self, request: MoveRequest) -> Result<ReorderOutcome> {
        if let Some(rejection) = self.check_foreign_target(request).await {
            return Ok(ReorderOutcome::Rejected(rejection));
        }

        let plan = match plan_reorder(&self.tasks, request, self.show_completed) {
            Ok(plan) => plan,
            Err(rejection) => {
                tracing::debug!(%rejection, "move rejected");
                return Ok(ReorderOutcome::Rejected(rejection));
            }
        };

        self.tasks = plan.tasks.clone();

        let mut calls = JoinSet::new();
        for &(id, order_index) in &plan.assignments {
            let usecases = self.usecases.clone();
            calls.spawn(async move { usecases.update_task_order(id, order_index).await });
        }

        let mut failures = 0usize;
        while let Some(joined) = calls.join_next().await {
            match joined {
                Ok(Ok(_)) => {}
                Ok(Err(e)) => {
                    failures += 1;
                    tracing::warn!(error = %e, "order update failed");
                }
                Err(e) => {
                    failures += 1;
                    tracing::error!(error = %e, "order update did not finish");
                }
            }
        }

        if failures > 0 {
            tracing::warn!(failures, date = %self.date, "discarding local order");
            self.refresh().await?;
            msg_warning!(Message::MoveResynced);
            msg_bail_anyhow!(Message::TaskMoveFailed);
        }

        Ok(ReorderOutcome::Applied(plan))
    }

    /// A drop target missing from the local list may belong to another day.
    /// Looks it up so that case is reported as a cross-date move.
    async fn check_foreign_target(&self, request: MoveRequest) -> Option<ReorderRejection> {
        let dragged = self.find(request.task_id)?;
        if self.find(request.over_id).is_some() {
            return None;
        }

        match self.usecases.get_task(request.over_id).await {
            Ok(over) if over.date != dragged.date => Some(ReorderRejection::CrossDate {
                from: dragged.date,
                to: over.date,
            }),
            _ => None,
        }
    }
}
