use super::{resolve_date, task_usecases};
use crate::{
    libs::{
        board::TaskBoard,
        calendar::{format_date, Direction},
        config::Config,
        messages::Message,
        view::View,
    },
    msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Day to show (YYYY-MM-DD), defaults to today
    #[arg(short, long)]
    date: Option<String>,
    /// Show the day before --date
    #[arg(long, conflicts_with = "next")]
    prev: bool,
    /// Show the day after --date
    #[arg(long)]
    next: bool,
    /// Hide completed tasks
    #[arg(long, conflicts_with = "show_completed")]
    hide_completed: bool,
    /// Show completed tasks even when hidden by default
    #[arg(long)]
    show_completed: bool,
}

pub async fn cmd(args: ListArgs) -> Result<()> {
    let config = Config::read()?;
    let show_completed = visibility(config.display().show_completed, args.show_completed, args.hide_completed);

    let mut board = TaskBoard::new(task_usecases(&config)?, resolve_date(args.date.as_deref())?, show_completed);
    match (args.prev, args.next) {
        (true, _) => board.navigate(Direction::Prev).await?,
        (_, true) => board.navigate(Direction::Next).await?,
        _ => {
            board.load().await?;
        }
    }

    print_board(&board)
}

/// Resolves the completed-task toggle from the config default and flags.
pub(crate) fn visibility(default: bool, show: bool, hide: bool) -> bool {
    match (show, hide) {
        (true, _) => true,
        (_, true) => false,
        _ => default,
    }
}

pub(crate) fn print_board<R>(board: &TaskBoard<R>) -> Result<()>
where
    R: crate::api::TaskRepository + Clone + Send + Sync + 'static,
{
    let date = format_date(board.date());
    let visible = board.visible_tasks();

    msg_print!(Message::TasksHeader(date.clone()), true);
    if visible.is_empty() && board.hidden_count() == 0 {
        msg_info!(Message::NoTasksForDate(date));
        return Ok(());
    }

    View::tasks(&visible)?;
    if board.hidden_count() > 0 {
        msg_info!(Message::HiddenCompletedTasks(board.hidden_count()));
    }

    Ok(())
}
