pub mod add;
pub mod delete;
pub mod done;
pub mod edit;
pub mod init;
pub mod list;
pub mod move_task;
pub mod reopen;
pub mod seed;
pub mod show;
pub mod stats;
pub mod summary;

use crate::api::ApiClient;
use crate::libs::board::TaskBoard;
use crate::libs::calendar::{parse_date, today};
use crate::libs::config::Config;
use crate::libs::usecases::{StatisticsUseCases, TaskUseCases};
use anyhow::Result;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Show the tasks of a day")]
    List(list::ListArgs),
    #[command(about = "Show one task")]
    Show(show::ShowArgs),
    #[command(about = "Create a task", arg_required_else_help = true)]
    Add(add::AddArgs),
    #[command(about = "Edit a task")]
    Edit(edit::EditArgs),
    #[command(about = "Mark a task as completed")]
    Done(done::DoneArgs),
    #[command(about = "Mark a task as not completed")]
    Reopen(reopen::ReopenArgs),
    #[command(about = "Delete a task")]
    Delete(delete::DeleteArgs),
    #[command(about = "Move a task to another position within its day")]
    Move(move_task::MoveArgs),
    #[command(about = "Completion statistics for a date range")]
    Stats(stats::StatsArgs),
    #[command(about = "Completion summary for a period")]
    Summary(summary::SummaryArgs),
    #[command(about = "Replace a day's tasks with demo data")]
    Seed(seed::SeedArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::List(args) => list::cmd(args).await,
            Commands::Show(args) => show::cmd(args).await,
            Commands::Add(args) => add::cmd(args).await,
            Commands::Edit(args) => edit::cmd(args).await,
            Commands::Done(args) => done::cmd(args).await,
            Commands::Reopen(args) => reopen::cmd(args).await,
            Commands::Delete(args) => delete::cmd(args).await,
            Commands::Move(args) => move_task::cmd(args).await,
            Commands::Stats(args) => stats::cmd(args).await,
            Commands::Summary(args) => summary::cmd(args).await,
            Commands::Seed(args) => seed::cmd(args).await,
        }
    }
}

/// The one HTTP client of a command run, built from the configured URL.
fn api_client(config: &Config) -> Result<ApiClient> {
    let url = config.api_url();
    tracing::debug!(%url, "using task server");
    Ok(ApiClient::new(&url)?)
}

fn task_usecases(config: &Config) -> Result<TaskUseCases<ApiClient>> {
    Ok(TaskUseCases::new(api_client(config)?))
}

fn statistics_usecases(config: &Config) -> Result<StatisticsUseCases<ApiClient>> {
    Ok(StatisticsUseCases::new(api_client(config)?))
}

/// A loaded board for `date`.
async fn open_board(usecases: TaskUseCases<ApiClient>, date: NaiveDate, show_completed: bool) -> Result<TaskBoard<ApiClient>> {
    let mut board = TaskBoard::new(usecases, date, show_completed);
    board.load().await?;
    Ok(board)
}

/// `--date` value, or today.
fn resolve_date(date: Option<&str>) -> Result<NaiveDate> {
    match date {
        Some(value) => parse_date(value),
        None => Ok(today()),
    }
}
