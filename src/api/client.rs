use super::{ApiError, ApiResult, StatisticsRepository, TaskRepository};
use crate::libs::calendar::{format_date, SummaryPeriod};
use crate::libs::data_storage::{APP_METADATA_NAME, APP_METADATA_VERSION};
use crate::libs::statistics::{GroupBy, Statistics, StatisticsSummary};
use crate::libs::task::{NewTask, OrderUpdate, SeedResponse, Task, TaskId, TaskListResponse, TaskPatch};
use chrono::NaiveDate;
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;

const TASKS_URL: &str = "/api/v1/tasks";
const SEED_URL: &str = "/api/v1/tasks/dummy-data";
const STATISTICS_URL: &str = "/api/v1/statistics";
const SUMMARY_URL: &str = "/api/v1/statistics/summary";

/// HTTP implementation of the repositories.
///
/// Cloning is cheap; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> ApiResult<Self> {
        let client = Client::builder()
            .user_agent(format!("{}/{}", APP_METADATA_NAME, APP_METADATA_VERSION))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn task_url(&self, id: TaskId) -> String {
        format!("{}{}/{}", self.base_url, TASKS_URL, id)
    }

    /// Sends the request and checks the status. `id` turns a 404 into
    /// [`ApiError::NotFound`].
    async fn execute(&self, request: RequestBuilder, id: Option<TaskId>) -> ApiResult<String> {
        let res = request.send().await?;
        let status = res.status();
        let body = res.text().await?;

        tracing::debug!(%status, "api response");

        match (status, id) {
            (StatusCode::NOT_FOUND, Some(id)) => Err(ApiError::NotFound(id)),
            (status, _) if !status.is_success() => Err(ApiError::Status { status, body }),
            _ => Ok(body),
        }
    }

    async fn fetch<T: DeserializeOwned>(&self, request: RequestBuilder, id: Option<TaskId>) -> ApiResult<T> {
        let body = self.execute(request, id).await?;
        Ok(serde_json::from_str(&body)?)
    }
}

impl TaskRepository for ApiClient {
    async fn get_tasks(&self, date: NaiveDate, show_completed: bool) -> ApiResult<Vec<Task>> {
        tracing::debug!(%date, show_completed, "GET {}", TASKS_URL);
        let request = self
            .client
            .get(self.url(TASKS_URL))
            .query(&[("date", format_date(date)), ("show_completed", show_completed.to_string())]);
        let response: TaskListResponse = self.fetch(request, None).await?;
        Ok(response.tasks)
    }

    async fn get_task(&self, id: TaskId) -> ApiResult<Task> {
        tracing::debug!(%id, "GET {}/{{id}}", TASKS_URL);
        self.fetch(self.client.get(self.task_url(id)), Some(id)).await
    }

    async fn create_task(&self, task: &NewTask) -> ApiResult<Task> {
        tracing::debug!(date = %task.date, "POST {}", TASKS_URL);
        self.fetch(self.client.post(self.url(TASKS_URL)).json(task), None).await
    }

    async fn update_task(&self, id: TaskId, patch: &TaskPatch) -> ApiResult<Task> {
        tracing::debug!(%id, "PUT {}/{{id}}", TASKS_URL);
        self.fetch(self.client.put(self.task_url(id)).json(patch), Some(id)).await
    }

    async fn update_task_order(&self, id: TaskId, order_index: i32) -> ApiResult<Task> {
        tracing::debug!(%id, order_index, "PUT {}/{{id}}/order", TASKS_URL);
        let url = format!("{}/order", self.task_url(id));
        self.fetch(self.client.put(url).json(&OrderUpdate { order_index }), Some(id)).await
    }

    async fn delete_task(&self, id: TaskId) -> ApiResult<()> {
        tracing::debug!(%id, "DELETE {}/{{id}}", TASKS_URL);
        self.execute(self.client.delete(self.task_url(id)), Some(id)).await?;
        Ok(())
    }

    async fn seed_tasks(&self, date: NaiveDate) -> ApiResult<SeedResponse> {
        tracing::debug!(%date, "POST {}", SEED_URL);
        let request = self.client.post(self.url(SEED_URL)).query(&[("date", format_date(date))]);
        self.fetch(request, None).await
    }
}

impl StatisticsRepository for ApiClient {
    async fn get_statistics(&self, start: NaiveDate, end: NaiveDate, group_by: GroupBy) -> ApiResult<Statistics> {
        tracing::debug!(%start, %end, group_by = group_by.as_str(), "GET {}", STATISTICS_URL);
        let request = self.client.get(self.url(STATISTICS_URL)).query(&[
            ("start_date", format_date(start)),
            ("end_date", format_date(end)),
            ("group_by", group_by.as_str().to_string()),
        ]);
        self.fetch(request, None).await
    }

    async fn get_summary(&self, period: SummaryPeriod) -> ApiResult<StatisticsSummary> {
        tracing::debug!(period = period.as_str(), "GET {}", SUMMARY_URL);
        let request = self.client.get(self.url(SUMMARY_URL)).query(&[("period", period.as_str())]);
        self.fetch(request, None).await
    }
}
