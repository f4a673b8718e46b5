//! Terminal tables for tasks and statistics.

use super::formatter::{completion_bar, format_deadline, format_memo, format_percent, format_status, BAR_WIDTH};
use super::statistics::{ChartEntry, StatisticsSummary, SummaryCards};
use super::task::Task;
use anyhow::Result;
use prettytable::{row, Table};

const MEMO_WIDTH: usize = 40;

pub struct View {}

impl View {
    /// Task list of one day. `#` is the visible position used by `move --to`.
    pub fn tasks(tasks: &[&Task]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["#", "ID", "", "TITLE", "DEADLINE", "MEMO"]);
        for (position, task) in tasks.iter().enumerate() {
            table.add_row(row![
                position,
                task.id,
                format_status(task.completed),
                task.title,
                format_deadline(task.deadline.as_deref()),
                format_memo(task.memo.as_deref(), MEMO_WIDTH)
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn task(task: &Task) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["ID", task.id]);
        table.add_row(row!["DATE", task.date]);
        table.add_row(row!["TITLE", task.title]);
        table.add_row(row!["STATUS", if task.completed { "completed" } else { "open" }]);
        table.add_row(row!["DEADLINE", format_deadline(task.deadline.as_deref())]);
        table.add_row(row!["MEMO", task.memo.as_deref().unwrap_or("-")]);
        table.add_row(row!["ORDER", task.order_index]);
        if !task.created_at.is_empty() {
            table.add_row(row!["CREATED", task.created_at]);
        }
        if !task.updated_at.is_empty() {
            table.add_row(row!["UPDATED", task.updated_at]);
        }
        table.printstd();

        Ok(())
    }

    pub fn summary_cards(cards: &SummaryCards) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["TOTAL", "COMPLETED", "INCOMPLETE", "RATE"]);
        table.add_row(row![cards.total, cards.completed, cards.incomplete, format_percent(cards.completion_rate_percent)]);
        table.printstd();

        Ok(())
    }

    pub fn chart(entries: &[ChartEntry]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["PERIOD", "TOTAL", "DONE", "OPEN", "RATE", ""]);
        for entry in entries {
            table.add_row(row![
                entry.label,
                entry.total,
                entry.completed,
                entry.incomplete,
                format_percent(entry.completion_rate_percent),
                completion_bar(entry.completion_rate_percent, BAR_WIDTH)
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn statistics_summary(summary: &StatisticsSummary) -> Result<()> {
        Self::summary_cards(&SummaryCards::from(summary))?;

        if summary.average_daily_tasks.is_some() || summary.average_daily_completion_rate.is_some() {
            let mut table = Table::new();
            table.add_row(row!["AVG TASKS / DAY", "AVG RATE / DAY"]);
            table.add_row(row![
                summary.average_daily_tasks.map(|v| format!("{:.1}", v)).unwrap_or_else(|| "-".to_string()),
                summary
                    .average_daily_completion_rate
                    .map(|v| format_percent(v * 100.0))
                    .unwrap_or_else(|| "-".to_string())
            ]);
            table.printstd();
        }

        Ok(())
    }
}
