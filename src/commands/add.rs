use super::{resolve_date, task_usecases};
use crate::{
    libs::{board::TaskBoard, config::Config, messages::Message},
    msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// Task title
    #[arg(required = true)]
    title: String,
    /// Day of the task (YYYY-MM-DD), defaults to today
    #[arg(short, long)]
    date: Option<String>,
    /// Free-form note
    #[arg(short, long)]
    memo: Option<String>,
    /// Time of day the task is due (HH:MM)
    #[arg(long)]
    deadline: Option<String>,
}

pub async fn cmd(args: AddArgs) -> Result<()> {
    let config = Config::read()?;
    let date = resolve_date(args.date.as_deref())?;

    let mut board = TaskBoard::new(task_usecases(&config)?, date, true);
    let task = board.create(&args.title, args.memo, args.deadline.as_deref()).await?;

    msg_success!(Message::TaskCreated(task.title));
    Ok(())
}
