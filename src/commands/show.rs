use super::task_usecases;
use crate::{
    libs::{config::Config, messages::Message, task::TaskId, view::View},
    msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Task ID
    id: TaskId,
}

pub async fn cmd(args: ShowArgs) -> Result<()> {
    let config = Config::read()?;
    let task = task_usecases(&config)?.get_task(args.id).await?;

    msg_print!(Message::TaskDetailsHeader(task.id.to_string()), true);
    View::task(&task)?;

    Ok(())
}
