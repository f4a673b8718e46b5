//! Naive calendar-date helpers: day navigation and statistics ranges.
//!
//! Dates never carry a timezone. "Today" is the local calendar day at the
//! moment the command runs.

use crate::libs::messages::Message;
use crate::{msg_bail_anyhow, msg_error_anyhow};
use anyhow::Result;
use chrono::{Datelike, Days, Local, NaiveDate};
use clap::ValueEnum;
use std::fmt;

/// Default length of the statistics range when no preset or bounds are given.
pub const DEFAULT_STATS_DAYS: i64 = 30;

/// Longest statistics range the setup wizard accepts.
pub const MAX_STATS_DAYS: i64 = 3650;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn parse_date(value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d").map_err(|_| msg_error_anyhow!(Message::InvalidDate(value.to_string())))
}

pub fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Moves exactly one calendar day, rolling over months and years.
pub fn shift_day(date: NaiveDate, direction: Direction) -> Result<NaiveDate> {
    let shifted = match direction {
        Direction::Prev => date.pred_opt(),
        Direction::Next => date.succ_opt(),
    };
    shifted.ok_or_else(|| msg_error_anyhow!(Message::DateOutOfRange))
}

/// Quick ranges offered by the statistics command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PeriodPreset {
    Today,
    /// Monday of the current week through today.
    Week,
    /// First day of the current month through today.
    Month,
    #[value(name = "last30")]
    Last30Days,
    #[value(name = "last90")]
    Last90Days,
}

impl PeriodPreset {
    pub fn range(&self, today: NaiveDate) -> DateRange {
        let back = |days: u64| today.checked_sub_days(Days::new(days)).unwrap_or(NaiveDate::MIN);
        let start = match self {
            PeriodPreset::Today => today,
            PeriodPreset::Week => back(today.weekday().num_days_from_monday() as u64),
            PeriodPreset::Month => today.with_day(1).unwrap_or(today),
            PeriodPreset::Last30Days => back(30),
            PeriodPreset::Last90Days => back(90),
        };
        DateRange { start, end: today }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self> {
        if start > end {
            msg_bail_anyhow!(Message::InvalidDateRange(format_date(start), format_date(end)));
        }
        Ok(Self { start, end })
    }

    /// The range starting `days` days before `end`. Negative counts mean zero.
    pub fn trailing(end: NaiveDate, days: i64) -> Result<Self> {
        let start = end
            .checked_sub_days(Days::new(days.max(0) as u64))
            .ok_or_else(|| msg_error_anyhow!(Message::DateOutOfRange))?;
        Ok(Self { start, end })
    }
}

/// Period names understood by the summary endpoint.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum SummaryPeriod {
    Today,
    Week,
    Month,
    #[default]
    All,
}

impl SummaryPeriod {
    pub fn as_str(&self) -> &'static str {
        match self {
            SummaryPeriod::Today => "today",
            SummaryPeriod::Week => "week",
            SummaryPeriod::Month => "month",
            SummaryPeriod::All => "all",
        }
    }
}

impl fmt::Display for SummaryPeriod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
