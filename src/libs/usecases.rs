//! Application operations on top of the repositories.
//!
//! Each operation forwards to the repository, logs the underlying
//! failure and replaces it with a short user-facing message. Commands and
//! the board only ever see these messages.

use crate::api::{ApiError, StatisticsRepository, TaskRepository};
use crate::libs::calendar::SummaryPeriod;
use crate::libs::messages::Message;
use crate::libs::statistics::{GroupBy, Statistics, StatisticsSummary};
use crate::libs::task::{NewTask, SeedResponse, Task, TaskId, TaskPatch};
use crate::msg_error_anyhow;
use anyhow::Result;
use chrono::NaiveDate;

#[derive(Debug, Clone)]
pub struct TaskUseCases<R> {
    repository: R,
}

impl<R: TaskRepository> TaskUseCases<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub async fn get_tasks(&self, date: NaiveDate, show_completed: bool) -> Result<Vec<Task>> {
        self.repository.get_tasks(date, show_completed).await.map_err(|e| {
            tracing::error!(%date, error = %e, "failed to fetch tasks");
            msg_error_anyhow!(Message::TaskFetchFailed)
        })
    }

    pub async fn get_task(&self, id: TaskId) -> Result<Task> {
        self.repository.get_task(id).await.map_err(|e| {
            tracing::error!(%id, error = %e, "failed to load task");
            match e {
                ApiError::NotFound(id) => msg_error_anyhow!(Message::TaskNotFoundWithId(id.to_string())),
                _ => msg_error_anyhow!(Message::TaskLoadFailed),
            }
        })
    }

    pub async fn create_task(&self, task: &NewTask) -> Result<Task> {
        self.repository.create_task(task).await.map_err(|e| {
            tracing::error!(date = %task.date, error = %e, "failed to create task");
            msg_error_anyhow!(Message::TaskCreateFailed)
        })
    }

    pub async fn update_task(&self, id: TaskId, patch: &TaskPatch) -> Result<Task> {
        self.repository.update_task(id, patch).await.map_err(|e| {
            tracing::error!(%id, error = %e, "failed to update task");
            msg_error_anyhow!(Message::TaskUpdateFailed)
        })
    }

    pub async fn update_task_order(&self, id: TaskId, order_index: i32) -> Result<Task> {
        self.repository.update_task_order(id, order_index).await.map_err(|e| {
            tracing::error!(%id, order_index, error = %e, "failed to update task order");
            msg_error_anyhow!(Message::TaskMoveFailed)
        })
    }

    pub async fn delete_task(&self, id: TaskId) -> Result<()> {
        self.repository.delete_task(id).await.map_err(|e| {
            tracing::error!(%id, error = %e, "failed to delete task");
            msg_error_anyhow!(Message::TaskDeleteFailed)
        })
    }

    pub async fn seed_tasks(&self, date: NaiveDate) -> Result<SeedResponse> {
        self.repository.seed_tasks(date).await.map_err(|e| {
            tracing::error!(%date, error = %e, "failed to generate demo tasks");
            msg_error_anyhow!(Message::SeedFailed)
        })
    }
}

#[derive(Debug, Clone)]
pub struct StatisticsUseCases<R> {
    repository: R,
}

impl<R: StatisticsRepository> StatisticsUseCases<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    pub async fn get_statistics(&self, start: NaiveDate, end: NaiveDate, group_by: GroupBy) -> Result<Statistics> {
        self.repository.get_statistics(start, end, group_by).await.map_err(|e| {
            tracing::error!(%start, %end, error = %e, "failed to fetch statistics");
            msg_error_anyhow!(Message::StatisticsFetchFailed)
        })
    }

    pub async fn get_summary(&self, period: SummaryPeriod) -> Result<StatisticsSummary> {
        self.repository.get_summary(period).await.map_err(|e| {
            tracing::error!(period = period.as_str(), error = %e, "failed to fetch summary");
            msg_error_anyhow!(Message::SummaryFetchFailed)
        })
    }
}
