/// Every piece of user-facing text the application prints.
///
/// Variants carry already formatted values (titles, dates) so the
/// `Display` implementation stays free of domain types.
#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(String),
    TaskUpdated(String),
    TaskDeleted(String),
    TaskCompleted(String),
    TaskReopened(String),
    TaskAlreadyCompleted(String),
    TaskAlreadyOpen(String),
    TaskNotFoundWithId(String),
    TaskTitleRequired,
    TaskTitleTooLong(usize),
    InvalidDeadline(String),
    TasksHeader(String),
    NoTasksForDate(String),
    HiddenCompletedTasks(usize),
    TaskDetailsHeader(String),
    NextIncomplete(String),
    AllTasksCompleted,
    ConfirmDeleteTask(String),
    DeleteCancelled,
    EditingTask(String),
    NoChangesDetected,
    PromptTaskTitle,
    PromptTaskMemo,
    PromptTaskDeadline,

    // === REORDER MESSAGES ===
    TaskMoved(String, usize),
    MoveRejected(String),
    MoveTargetRequired,
    MovePositionOutOfRange(usize, usize),
    MoveResynced,

    // === USE-CASE FAILURES ===
    TaskFetchFailed,
    TaskLoadFailed,
    TaskCreateFailed,
    TaskUpdateFailed,
    TaskDeleteFailed,
    TaskMoveFailed,
    StatisticsFetchFailed,
    SummaryFetchFailed,
    SeedFailed,

    // === STATISTICS MESSAGES ===
    StatisticsHeader(String, String, String),
    SummaryHeader(String),
    NoStatistics,
    InvalidDateRange(String, String),
    SeedCreated(usize, String),

    // === DATE MESSAGES ===
    InvalidDate(String),
    DateOutOfRange,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigModuleServer,
    ConfigModuleDisplay,
    PromptSelectModules,
    PromptServerApiUrl,
    PromptShowCompleted,
    PromptStatsDays,
    PromptDefaultView,
}
