//! Backend access for the task server.
//!
//! The application talks to the REST backend only through the two traits in
//! this module. [`client::ApiClient`] implements them over HTTP; tests swap
//! in an in-memory implementation.
//!
//! ## Endpoints
//!
//! | Call | Method and path |
//! |------|-----------------|
//! | [`TaskRepository::get_tasks`] | `GET /api/v1/tasks?date&show_completed` |
//! | [`TaskRepository::get_task`] | `GET /api/v1/tasks/{id}` |
//! | [`TaskRepository::create_task`] | `POST /api/v1/tasks` |
//! | [`TaskRepository::update_task`] | `PUT /api/v1/tasks/{id}` |
//! | [`TaskRepository::update_task_order`] | `PUT /api/v1/tasks/{id}/order` |
//! | [`TaskRepository::delete_task`] | `DELETE /api/v1/tasks/{id}` |
//! | [`TaskRepository::seed_tasks`] | `POST /api/v1/tasks/dummy-data?date` |
//! | [`StatisticsRepository::get_statistics`] | `GET /api/v1/statistics?start_date&end_date&group_by` |
//! | [`StatisticsRepository::get_summary`] | `GET /api/v1/statistics/summary?period` |
//!
//! Every method returns a `Send` future so calls can be spawned onto the
//! runtime and run concurrently.

use crate::libs::calendar::SummaryPeriod;
use crate::libs::statistics::{GroupBy, Statistics, StatisticsSummary};
use crate::libs::task::{NewTask, SeedResponse, Task, TaskId, TaskPatch};
use chrono::NaiveDate;
use reqwest::StatusCode;
use std::future::Future;
use thiserror::Error;

pub mod client;

pub use client::ApiClient;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("task {0} not found")]
    NotFound(TaskId),
    #[error("server responded with {status}: {body}")]
    Status { status: StatusCode, body: String },
    #[error("unexpected response body: {0}")]
    Decode(#[from] serde_json::Error),
}

pub type ApiResult<T> = Result<T, ApiError>;

pub trait TaskRepository {
    fn get_tasks(&self, date: NaiveDate, show_completed: bool) -> impl Future<Output = ApiResult<Vec<Task>>> + Send;

    fn get_task(&self, id: TaskId) -> impl Future<Output = ApiResult<Task>> + Send;

    fn create_task(&self, task: &NewTask) -> impl Future<Output = ApiResult<Task>> + Send;

    fn update_task(&self, id: TaskId, patch: &TaskPatch) -> impl Future<Output = ApiResult<Task>> + Send;

    fn update_task_order(&self, id: TaskId, order_index: i32) -> impl Future<Output = ApiResult<Task>> + Send;

    fn delete_task(&self, id: TaskId) -> impl Future<Output = ApiResult<()>> + Send;

    /// Replaces the tasks of `date` with generated demo tasks.
    fn seed_tasks(&self, date: NaiveDate) -> impl Future<Output = ApiResult<SeedResponse>> + Send;
}

pub trait StatisticsRepository {
    fn get_statistics(&self, start: NaiveDate, end: NaiveDate, group_by: GroupBy) -> impl Future<Output = ApiResult<Statistics>> + Send;

    fn get_summary(&self, period: SummaryPeriod) -> impl Future<Output = ApiResult<StatisticsSummary>> + Send;
}
