//! Completion statistics over a date range.
//!
//! The range comes from `--preset`, or from `--from`/`--to`. Missing bounds
//! default to the configured number of days ending today.

use super::statistics_usecases;
use crate::{
    libs::{
        calendar::{format_date, parse_date, today, DateRange, PeriodPreset},
        config::{Config, DisplayConfig},
        messages::Message,
        statistics::{SummaryCards, ViewMode},
        view::View,
    },
    msg_info, msg_print,
};
use anyhow::Result;
use chrono::NaiveDate;
use clap::Args;

#[derive(Debug, Args)]
pub struct StatsArgs {
    /// First day of the range (YYYY-MM-DD)
    #[arg(long, conflicts_with = "preset")]
    from: Option<String>,
    /// Last day of the range (YYYY-MM-DD), defaults to today
    #[arg(long, conflicts_with = "preset")]
    to: Option<String>,
    /// Quick range ending today
    #[arg(short, long, value_enum)]
    preset: Option<PeriodPreset>,
    /// Grouping of the chart rows
    #[arg(short, long, value_enum)]
    by: Option<ViewMode>,
}

pub async fn cmd(args: StatsArgs) -> Result<()> {
    let config = Config::read()?;
    let display = config.display();
    let range = resolve_range(&args, &display, today())?;
    let mode = args.by.unwrap_or(display.view);

    let statistics = statistics_usecases(&config)?
        .get_statistics(range.start, range.end, mode.into())
        .await?;

    msg_print!(
        Message::StatisticsHeader(format_date(range.start), format_date(range.end), mode.to_string()),
        true
    );
    View::summary_cards(&SummaryCards::from(&statistics.summary))?;

    let entries = statistics.chart(mode);
    if entries.is_empty() {
        msg_info!(Message::NoStatistics);
        return Ok(());
    }
    View::chart(&entries)?;

    Ok(())
}

fn resolve_range(args: &StatsArgs, display: &DisplayConfig, today: NaiveDate) -> Result<DateRange> {
    if let Some(preset) = args.preset {
        return Ok(preset.range(today));
    }

    let end = match args.to.as_deref() {
        Some(value) => parse_date(value)?,
        None => today,
    };
    match args.from.as_deref() {
        Some(value) => DateRange::new(parse_date(value)?, end),
        None => DateRange::trailing(end, display.stats_days),
    }
}
