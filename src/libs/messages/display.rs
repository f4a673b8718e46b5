//! Display implementation for daytask messages.
//!
//! All user-facing text lives in this one match so wording stays consistent
//! between commands.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(title) => format!("Task '{}' created", title),
            Message::TaskUpdated(title) => format!("Task '{}' updated", title),
            Message::TaskDeleted(title) => format!("Task '{}' deleted", title),
            Message::TaskCompleted(title) => format!("Task '{}' completed", title),
            Message::TaskReopened(title) => format!("Task '{}' reopened", title),
            Message::TaskAlreadyCompleted(title) => format!("Task '{}' is already completed", title),
            Message::TaskAlreadyOpen(title) => format!("Task '{}' is not completed", title),
            Message::TaskNotFoundWithId(id) => format!("Task with ID {} not found.", id),
            Message::TaskTitleRequired => "Task title must not be empty".to_string(),
            Message::TaskTitleTooLong(max) => format!("Task title must be at most {} characters", max),
            Message::InvalidDeadline(value) => format!("Invalid deadline '{}': expected HH:MM or HH:MM:SS", value),
            Message::TasksHeader(date) => format!("Tasks for {}", date),
            Message::NoTasksForDate(date) => format!("No tasks for {}. Add one with `daytask add <title>`.", date),
            Message::HiddenCompletedTasks(count) => format!("{} completed task(s) hidden", count),
            Message::TaskDetailsHeader(id) => format!("Task #{}", id),
            Message::NextIncomplete(title) => format!("Next up: {}", title),
            Message::AllTasksCompleted => "All tasks are completed for this day".to_string(),
            Message::ConfirmDeleteTask(title) => format!("Delete task '{}'?", title),
            Message::DeleteCancelled => "Deletion cancelled.".to_string(),
            Message::EditingTask(title) => format!("Editing task: {}", title),
            Message::NoChangesDetected => "No changes detected.".to_string(),
            Message::PromptTaskTitle => "Title".to_string(),
            Message::PromptTaskMemo => "Memo (empty to clear)".to_string(),
            Message::PromptTaskDeadline => "Deadline HH:MM (empty to clear)".to_string(),

            // === REORDER MESSAGES ===
            Message::TaskMoved(title, position) => format!("Task '{}' moved to position {}", title, position),
            Message::MoveRejected(reason) => format!("Move rejected: {}", reason),
            Message::MoveTargetRequired => "Specify a target with --to <position> or --onto <task id>".to_string(),
            Message::MovePositionOutOfRange(position, len) => {
                format!("Position {} is out of range, the list has {} visible task(s)", position, len)
            }
            Message::MoveResynced => "Local order discarded, the task list was reloaded from the server".to_string(),

            // === USE-CASE FAILURES ===
            Message::TaskFetchFailed => "Failed to load tasks".to_string(),
            Message::TaskLoadFailed => "Failed to load task".to_string(),
            Message::TaskCreateFailed => "Failed to create task".to_string(),
            Message::TaskUpdateFailed => "Failed to update task".to_string(),
            Message::TaskDeleteFailed => "Failed to delete task".to_string(),
            Message::TaskMoveFailed => "Failed to move task".to_string(),
            Message::StatisticsFetchFailed => "Failed to load statistics".to_string(),
            Message::SummaryFetchFailed => "Failed to load statistics summary".to_string(),
            Message::SeedFailed => "Failed to create demo tasks".to_string(),

            // === STATISTICS MESSAGES ===
            Message::StatisticsHeader(from, to, mode) => format!("Statistics {} .. {} ({})", from, to, mode),
            Message::SummaryHeader(period) => format!("Summary: {}", period),
            Message::NoStatistics => "No data for this period".to_string(),
            Message::InvalidDateRange(from, to) => format!("Start date {} is after end date {}", from, to),
            Message::SeedCreated(count, date) => format!("Created {} demo task(s) for {}", count, date),

            // === DATE MESSAGES ===
            Message::InvalidDate(value) => format!("Invalid date '{}': expected YYYY-MM-DD", value),
            Message::DateOutOfRange => "Date is out of the supported calendar range".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::ConfigModuleServer => "Server settings".to_string(),
            Message::ConfigModuleDisplay => "Display settings".to_string(),
            Message::PromptSelectModules => "Select modules to configure (space to select, enter to confirm)".to_string(),
            Message::PromptServerApiUrl => "Task server URL".to_string(),
            Message::PromptShowCompleted => "Show completed tasks by default".to_string(),
            Message::PromptStatsDays => "Default statistics range in days".to_string(),
            Message::PromptDefaultView => "Default statistics view".to_string(),
        };
        write!(f, "{}", text)
    }
}
