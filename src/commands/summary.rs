use super::statistics_usecases;
use crate::{
    libs::{calendar::SummaryPeriod, config::Config, messages::Message, view::View},
    msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct SummaryArgs {
    /// Period to summarize
    #[arg(short, long, value_enum, default_value_t = SummaryPeriod::All)]
    period: SummaryPeriod,
}

pub async fn cmd(args: SummaryArgs) -> Result<()> {
    let config = Config::read()?;
    let summary = statistics_usecases(&config)?.get_summary(args.period).await?;

    msg_print!(Message::SummaryHeader(summary.period.clone()), true);
    View::statistics_summary(&summary)?;

    Ok(())
}
