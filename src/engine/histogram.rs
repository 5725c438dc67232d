use std::collections::HashMap;

use chrono::{DateTime, TimeDelta, Utc};
use clap::ValueEnum;
use serde::Serialize;
use tracing::debug;

use crate::models::TransactionRecord;
use crate::types::{truncate_to_hour, DateRange};

/// Decides what happens to records whose hour the bucket walk never generated.
///
/// Walking from a non-aligned `start` in 1-hour steps can stop short of `truncate(end)`,
/// e.g. `09:46:32 .. 00:00:00` produces `23:00` as its last bucket, so a record at exactly
/// `00:00:00` has nowhere to go.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Hash, Serialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum HistogramBoundary {
    /// Such records are silently left out of the histogram.
    Legacy,
    /// The bucket holding `range.end` is always generated.
    #[default]
    InclusiveEnd
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, Serialize)]
pub struct HourBucket {
    pub hour_start: DateTime<Utc>,
    pub normal: usize,
    pub fraud: usize
}

impl HourBucket {
    fn empty(hour_start: DateTime<Utc>) -> Self {
        Self { hour_start, normal: 0, fraud: 0 }
    }

    pub fn total(&self) -> usize {
        self.normal + self.fraud
    }
}

/// Normal vs fraud counts per hour, on a gap-free axis from `range.start` to `range.end`.
pub fn hourly_histogram<R: AsRef<TransactionRecord>>(
    records: &[R],
    range: &DateRange,
    boundary: HistogramBoundary
) -> Vec<HourBucket> {
    let mut buckets = Vec::<HourBucket>::new();
    let mut positions = HashMap::<DateTime<Utc>, usize>::new();

    let mut push_bucket = |hour: DateTime<Utc>| {
        positions.entry(hour).or_insert_with(|| {
            buckets.push(HourBucket::empty(hour));
            buckets.len() - 1
        });
    };

    let step = TimeDelta::hours(1);
    let mut cursor = Some(range.start);

    while let Some(instant) = cursor.filter(|instant| *instant <= range.end) {
        push_bucket(truncate_to_hour(instant));
        cursor = instant.checked_add_signed(step);
    }

    if boundary == HistogramBoundary::InclusiveEnd && !range.is_reversed() {
        push_bucket(truncate_to_hour(range.end));
    }

    let mut dropped = 0usize;

    for record in records {
        let record: &TransactionRecord = record.as_ref();

        match positions.get(&truncate_to_hour(record.last_activity_date)) {
            Some(&index) if record.is_fraud => buckets[index].fraud += 1,
            Some(&index) => buckets[index].normal += 1,
            None => dropped += 1
        }
    }

    if dropped > 0 {
        debug!("{dropped} record(s) fell outside the generated hour buckets");
    }

    buckets
}
