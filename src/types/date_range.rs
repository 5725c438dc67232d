use std::fmt;
use std::fmt::{Display, Formatter};

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::Serialize;

use crate::types::errors::RangeError;
use crate::types::timestamp::{parse_date, parse_timestamp};

const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// An inclusive `[start, end]` window over `last_activity_date`.
///
/// `start <= end` is not enforced; a reversed range simply matches nothing.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize)]
pub struct DateRange {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>
}

impl DateRange {
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Self {
        Self { start, end }
    }

    /// Smallest range holding every instant, or `None` when there are none.
    pub fn covering<I>(instants: I) -> Option<Self>
    where
        I: IntoIterator<Item = DateTime<Utc>>,
    {
        instants.into_iter().fold(None, |range: Option<DateRange>, instant| {
            Some(match range {
                Some(range) => DateRange::new(range.start.min(instant), range.end.max(instant)),
                None => DateRange::new(instant, instant)
            })
        })
    }

    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        instant >= self.start && instant <= self.end
    }

    pub fn is_reversed(&self) -> bool {
        self.start > self.end
    }
}

impl Display for DateRange {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "{} .. {}", self.start.format(DISPLAY_FORMAT), self.end.format(DISPLAY_FORMAT))
    }
}

/// Which inputs the range pickers accept: calendar days only, or full date-times.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Serialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Granularity {
    Date,
    #[default]
    DateTime
}

impl Granularity {
    /// Parses one range bound. Calendar dates resolve to midnight UTC for both ends of the range.
    pub fn parse_bound(self, value: &str) -> Result<DateTime<Utc>, RangeError> {
        match self {
            Granularity::Date => parse_date(value).ok_or_else(|| RangeError::DateRequired(value.trim().to_string())),
            Granularity::DateTime => Ok(parse_timestamp(value)?)
        }
    }
}
