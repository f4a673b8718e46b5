use super::{open_board, task_usecases};
use crate::{
    libs::{config::Config, messages::Message, task::TaskId},
    msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Task ID
    id: TaskId,
    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

pub async fn cmd(args: DeleteArgs) -> Result<()> {
    let config = Config::read()?;
    let usecases = task_usecases(&config)?;
    let task = usecases.get_task(args.id).await?;

    if !args.yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteTask(task.title.clone()).to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            msg_info!(Message::DeleteCancelled);
            return Ok(());
        }
    }

    let mut board = open_board(usecases, task.date, true).await?;
    board.delete(task.id).await?;

    msg_success!(Message::TaskDeleted(task.title));
    Ok(())
}
