//! Completion statistics and the chart view-model built from them.
//!
//! The backend returns three parallel arrays of aggregate records (per day,
//! per week, per month). [`chart_data`] picks the array that matches the
//! selected [`ViewMode`] and normalizes it into [`ChartEntry`] values that
//! the table and bar views render directly.
//!
//! ## Completion rate
//!
//! A period with no tasks has a completion rate of `0.0`. The server value is
//! ignored in that case, so an empty day never renders as `NaN` or as a
//! stale non-zero rate.
//!
//! ## Usage
//!
//! ```rust
//! use daytask::libs::statistics::{chart_data, DailyStat, ViewMode};
//!
//! let daily = vec![DailyStat {
//!     date: "2024-03-07".to_string(),
//!     total_tasks: 4,
//!     completed_tasks: 3,
//!     completion_rate: 0.75,
//! }];
//! let entries = chart_data(&daily, &[], &[], ViewMode::Day);
//! assert_eq!(entries[0].label, "3/7");
//! assert_eq!(entries[0].incomplete, 1);
//! ```

use chrono::NaiveDate;
use clap::ValueEnum;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DailyStat {
    pub date: String,
    pub total_tasks: i64,
    pub completed_tasks: i64,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub completion_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeeklyStat {
    pub week_start: String,
    pub week_end: String,
    pub total_tasks: i64,
    pub completed_tasks: i64,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub completion_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyStat {
    pub month: String,
    pub total_tasks: i64,
    pub completed_tasks: i64,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub completion_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Period {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub total_tasks: i64,
    pub completed_tasks: i64,
    pub incomplete_tasks: i64,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub completion_rate: f64,
}

/// Response of `GET /api/v1/statistics`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Statistics {
    pub period: Period,
    pub summary: Summary,
    #[serde(default)]
    pub daily_stats: Vec<DailyStat>,
    #[serde(default)]
    pub weekly_stats: Vec<WeeklyStat>,
    #[serde(default)]
    pub monthly_stats: Vec<MonthlyStat>,
}

impl Statistics {
    pub fn chart(&self, mode: ViewMode) -> Vec<ChartEntry> {
        chart_data(&self.daily_stats, &self.weekly_stats, &self.monthly_stats, mode)
    }
}

/// Response of `GET /api/v1/statistics/summary`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatisticsSummary {
    pub period: String,
    pub total_tasks: i64,
    pub completed_tasks: i64,
    pub incomplete_tasks: i64,
    #[serde(default, deserialize_with = "null_as_zero")]
    pub completion_rate: f64,
    #[serde(default)]
    pub average_daily_tasks: Option<f64>,
    #[serde(default)]
    pub average_daily_completion_rate: Option<f64>,
}

/// Which record array a chart is built from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Day,
    Week,
    Month,
}

impl ViewMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Day => "day",
            ViewMode::Week => "week",
            ViewMode::Month => "month",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// `group_by` query parameter of the statistics endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupBy {
    Mode(ViewMode),
    All,
}

impl GroupBy {
    pub fn as_str(&self) -> &'static str {
        match self {
            GroupBy::Mode(mode) => mode.as_str(),
            GroupBy::All => "all",
        }
    }
}

impl From<ViewMode> for GroupBy {
    fn from(mode: ViewMode) -> Self {
        GroupBy::Mode(mode)
    }
}

/// One chart-ready row.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartEntry {
    pub label: String,
    pub total: i64,
    pub completed: i64,
    pub incomplete: i64,
    /// Unrounded; views round for display.
    pub completion_rate_percent: f64,
}

impl ChartEntry {
    fn new(label: String, total: i64, completed: i64, completion_rate: f64) -> Self {
        Self {
            label,
            total,
            completed,
            incomplete: total - completed,
            completion_rate_percent: effective_rate(total, completion_rate) * 100.0,
        }
    }
}

/// Normalizes the record array selected by `mode` into chart rows.
pub fn chart_data(daily: &[DailyStat], weekly: &[WeeklyStat], monthly: &[MonthlyStat], mode: ViewMode) -> Vec<ChartEntry> {
    match mode {
        ViewMode::Day => daily
            .iter()
            .map(|stat| ChartEntry::new(chart_label(&stat.date, mode), stat.total_tasks, stat.completed_tasks, stat.completion_rate))
            .collect(),
        ViewMode::Week => weekly
            .iter()
            .map(|stat| ChartEntry::new(chart_label(&stat.week_start, mode), stat.total_tasks, stat.completed_tasks, stat.completion_rate))
            .collect(),
        ViewMode::Month => monthly
            .iter()
            .map(|stat| ChartEntry::new(chart_label(&stat.month, mode), stat.total_tasks, stat.completed_tasks, stat.completion_rate))
            .collect(),
    }
}

/// `M/D` for day and week keys, the raw `YYYY-MM` key for months.
pub fn chart_label(key: &str, mode: ViewMode) -> String {
    match mode {
        ViewMode::Day | ViewMode::Week => match NaiveDate::parse_from_str(key, "%Y-%m-%d") {
            Ok(date) => date.format("%-m/%-d").to_string(),
            Err(_) => key.to_string(),
        },
        ViewMode::Month => key.to_string(),
    }
}

/// Completion rate with the empty-period rule applied.
pub fn effective_rate(total: i64, completion_rate: f64) -> f64 {
    if total <= 0 || !completion_rate.is_finite() {
        0.0
    } else {
        completion_rate
    }
}

fn null_as_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<f64>::deserialize(deserializer)?.unwrap_or(0.0))
}

/// Headline numbers shown above the chart.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryCards {
    pub total: i64,
    pub completed: i64,
    pub incomplete: i64,
    pub completion_rate_percent: f64,
}

impl From<&Summary> for SummaryCards {
    fn from(summary: &Summary) -> Self {
        Self {
            total: summary.total_tasks,
            completed: summary.completed_tasks,
            incomplete: summary.incomplete_tasks,
            completion_rate_percent: effective_rate(summary.total_tasks, summary.completion_rate) * 100.0,
        }
    }
}

impl From<&StatisticsSummary> for SummaryCards {
    fn from(summary: &StatisticsSummary) -> Self {
        Self {
            total: summary.total_tasks,
            completed: summary.completed_tasks,
            incomplete: summary.incomplete_tasks,
            completion_rate_percent: effective_rate(summary.total_tasks, summary.completion_rate) * 100.0,
        }
    }
}
