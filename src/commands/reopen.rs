use super::{open_board, task_usecases};
use crate::{
    libs::{config::Config, messages::Message, task::TaskId},
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ReopenArgs {
    /// Task ID
    id: TaskId,
}

pub async fn cmd(args: ReopenArgs) -> Result<()> {
    let config = Config::read()?;
    let usecases = task_usecases(&config)?;

    let task = usecases.get_task(args.id).await?;
    if !task.completed {
        msg_info!(Message::TaskAlreadyOpen(task.title));
        return Ok(());
    }

    let mut board = open_board(usecases, task.date, true).await?;
    let task = board.reopen(args.id).await?;

    msg_success!(Message::TaskReopened(task.title));
    Ok(())
}
