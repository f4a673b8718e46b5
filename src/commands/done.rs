use super::{list::visibility, open_board, task_usecases};
use crate::{
    libs::{config::Config, messages::Message, task::TaskId},
    msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct DoneArgs {
    /// Task ID
    id: TaskId,
    /// Pick the next task among open tasks only
    #[arg(long)]
    hide_completed: bool,
}

pub async fn cmd(args: DoneArgs) -> Result<()> {
    let config = Config::read()?;
    let usecases = task_usecases(&config)?;

    let task = usecases.get_task(args.id).await?;
    if task.completed {
        msg_info!(Message::TaskAlreadyCompleted(task.title));
        return Ok(());
    }

    let show_completed = visibility(config.display().show_completed, false, args.hide_completed);
    let mut board = open_board(usecases, task.date, show_completed).await?;
    let outcome = board.complete(args.id).await?;

    msg_success!(Message::TaskCompleted(outcome.task.title));
    match outcome.next_focus {
        Some(next) => msg_print!(Message::NextIncomplete(format!("#{} {}", next.id, next.title))),
        None => msg_info!(Message::AllTasksCompleted),
    }

    Ok(())
}
