use super::{resolve_date, task_usecases};
use crate::{
    libs::{calendar::format_date, config::Config, messages::Message},
    msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct SeedArgs {
    /// Day to fill (YYYY-MM-DD), defaults to today
    #[arg(short, long)]
    date: Option<String>,
}

pub async fn cmd(args: SeedArgs) -> Result<()> {
    let config = Config::read()?;
    let date = resolve_date(args.date.as_deref())?;

    let response = task_usecases(&config)?.seed_tasks(date).await?;

    msg_success!(Message::SeedCreated(response.count, format_date(date)));
    Ok(())
}
