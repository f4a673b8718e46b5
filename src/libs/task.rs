//! Task entity and the payloads used to create and patch it.
//!
//! A task belongs to exactly one calendar day. Its `order_index` only has
//! meaning relative to other tasks of the same day and is neither unique
//! nor contiguous.
//!
//! ## Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use daytask::libs::task::{NewTask, TaskPatch};
//!
//! let date = NaiveDate::from_ymd_opt(2024, 3, 1).unwrap();
//! let new_task = NewTask::new(date, "Write weekly notes")?.with_order_index(3);
//! let patch = TaskPatch::default().completed(true).clear_memo();
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::libs::messages::Message;
use crate::msg_bail_anyhow;
use anyhow::Result;
use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Longest title the backend accepts.
pub const MAX_TITLE_LEN: usize = 255;

/// Server-assigned task identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub i64);

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for TaskId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse::<i64>().map(TaskId)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub date: NaiveDate,
    pub title: String,
    #[serde(default)]
    pub memo: Option<String>,
    #[serde(default)]
    pub deadline: Option<String>,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub order_index: i32,
    #[serde(default)]
    pub created_at: String,
    #[serde(default)]
    pub updated_at: String,
}

impl Task {
    /// Applies a patch locally with the same merge rules the backend uses.
    pub fn apply(&mut self, patch: &TaskPatch) {
        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
        if let Some(memo) = &patch.memo {
            self.memo = memo.clone();
        }
        if let Some(deadline) = &patch.deadline {
            self.deadline = deadline.clone();
        }
        if let Some(completed) = patch.completed {
            self.completed = completed;
        }
        if let Some(order_index) = patch.order_index {
            self.order_index = order_index;
        }
    }
}

/// Body of `POST /api/v1/tasks`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewTask {
    pub date: NaiveDate,
    pub title: String,
    pub memo: Option<String>,
    pub deadline: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_index: Option<i32>,
}

impl NewTask {
    pub fn new(date: NaiveDate, title: &str) -> Result<Self> {
        Ok(Self {
            date,
            title: validate_title(title)?,
            memo: None,
            deadline: None,
            order_index: None,
        })
    }

    pub fn with_memo(mut self, memo: Option<String>) -> Self {
        self.memo = memo.filter(|m| !m.trim().is_empty());
        self
    }

    pub fn with_deadline(mut self, deadline: Option<&str>) -> Result<Self> {
        self.deadline = match deadline {
            Some(value) => Some(validate_deadline(value)?),
            None => None,
        };
        Ok(self)
    }

    pub fn with_order_index(mut self, order_index: i32) -> Self {
        self.order_index = Some(order_index);
        self
    }
}

/// Body of `PUT /api/v1/tasks/{id}`.
///
/// `None` leaves a field unchanged. For the nullable fields `Some(None)`
/// clears the value on the server.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TaskPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memo: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<Option<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_index: Option<i32>,
}

impl TaskPatch {
    pub fn title(mut self, title: &str) -> Result<Self> {
        self.title = Some(validate_title(title)?);
        Ok(self)
    }

    pub fn memo(mut self, memo: &str) -> Self {
        self.memo = Some(Some(memo.to_string()));
        self
    }

    pub fn clear_memo(mut self) -> Self {
        self.memo = Some(None);
        self
    }

    pub fn deadline(mut self, deadline: &str) -> Result<Self> {
        self.deadline = Some(Some(validate_deadline(deadline)?));
        Ok(self)
    }

    pub fn clear_deadline(mut self) -> Self {
        self.deadline = Some(None);
        self
    }

    pub fn completed(mut self, completed: bool) -> Self {
        self.completed = Some(completed);
        self
    }

    pub fn is_empty(&self) -> bool {
        self == &TaskPatch::default()
    }

    /// True when applying this patch turns an open task into a done one.
    pub fn completes(&self, task: &Task) -> bool {
        !task.completed && self.completed == Some(true)
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct OrderUpdate {
    pub order_index: i32,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TaskListResponse {
    pub tasks: Vec<Task>,
}

/// Response of the demo-data endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct SeedResponse {
    #[serde(default)]
    pub message: String,
    pub count: usize,
}

pub fn validate_title(title: &str) -> Result<String> {
    let title = title.trim();
    if title.is_empty() {
        msg_bail_anyhow!(Message::TaskTitleRequired);
    }
    if title.chars().count() > MAX_TITLE_LEN {
        msg_bail_anyhow!(Message::TaskTitleTooLong(MAX_TITLE_LEN));
    }
    Ok(title.to_string())
}

/// Accepts `HH:MM` or `HH:MM:SS` and returns the trimmed input.
pub fn validate_deadline(deadline: &str) -> Result<String> {
    let deadline = deadline.trim();
    let parsed = match deadline.split(':').count() {
        2 => NaiveTime::parse_from_str(deadline, "%H:%M"),
        3 => NaiveTime::parse_from_str(deadline, "%H:%M:%S"),
        _ => msg_bail_anyhow!(Message::InvalidDeadline(deadline.to_string())),
    };
    if parsed.is_err() {
        msg_bail_anyhow!(Message::InvalidDeadline(deadline.to_string()));
    }
    Ok(deadline.to_string())
}
