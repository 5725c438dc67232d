use std::collections::{HashMap, HashSet};
use std::ops::AddAssign;

use serde::Serialize;

use crate::engine::ScatterAxis;
use crate::models::TransactionRecord;
use crate::types::DateRange;

/// Fraud totals over a filtered set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FraudStats {
    pub count: usize,
    pub total_amount: f64,
    /// `NaN` when the filtered set is empty.
    pub percentage: f64
}

/// One record projected onto the fraud scatter chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScatterPoint {
    pub x: f64,
    /// `NaN` when the record carries no balance information.
    pub y: f64,
    pub is_fraud: bool,
    pub label: String
}

/// Every record whose `last_activity_date` lies in the inclusive range, in input order.
pub fn filter_by_range<'a>(records: &'a [TransactionRecord], range: &DateRange) -> Vec<&'a TransactionRecord> {
    records.iter()
        .filter(|record| range.contains(record.last_activity_date))
        .collect()
}

/// Record counts per literal type, in first-seen order.
pub fn count_by_type<R: AsRef<TransactionRecord>>(records: &[R]) -> Vec<(String, usize)> {
    group_by_type(records, |_| 1)
}

/// Amount totals per literal type, in first-seen order.
pub fn amount_by_type<R: AsRef<TransactionRecord>>(records: &[R]) -> Vec<(String, f64)> {
    group_by_type(records, |record| record.amount)
}

pub fn total_amount<R: AsRef<TransactionRecord>>(records: &[R]) -> f64 {
    iter(records).fold(0.0, |sum, record| sum + record.amount)
}

/// Mean amount, `NaN` for an empty set.
pub fn average_amount<R: AsRef<TransactionRecord>>(records: &[R]) -> f64 {
    if records.is_empty() {
        return f64::NAN;
    }

    total_amount(records) / records.len() as f64
}

pub fn fraud_stats<R: AsRef<TransactionRecord>>(records: &[R]) -> FraudStats {
    let (count, total_amount) = iter(records)
        .filter(|record| record.is_fraud)
        .fold((0, 0.0), |(count, sum), record| (count + 1, sum + record.amount));

    let percentage = if records.is_empty() {
        f64::NAN
    } else {
        count as f64 / records.len() as f64 * 100.0
    };

    FraudStats { count, total_amount, percentage }
}

pub fn scatter_projection<R: AsRef<TransactionRecord>>(records: &[R], axis: ScatterAxis) -> Vec<ScatterPoint> {
    iter(records)
        .map(|record| {
            let balance_difference = match axis {
                ScatterAxis::Origin => record.origin_balance_difference(),
                ScatterAxis::Destination => record.destination_balance_difference()
            };

            ScatterPoint {
                x: record.amount,
                y: balance_difference.unwrap_or(f64::NAN),
                is_fraud: record.is_fraud,
                label: record.country.clone()
            }
        })
        .collect()
}

pub fn unique_countries<R: AsRef<TransactionRecord>>(records: &[R]) -> usize {
    iter(records)
        .map(|record| record.country.as_str())
        .collect::<HashSet<_>>()
        .len()
}

fn group_by_type<R, T, F>(records: &[R], mut value: F) -> Vec<(String, T)>
where
    R: AsRef<TransactionRecord>,
    T: AddAssign + Default,
    F: FnMut(&TransactionRecord) -> T,
{
    let mut positions = HashMap::<&str, usize>::new();
    let mut groups = Vec::<(String, T)>::new();

    for record in iter(records) {
        let index = *positions.entry(record.transaction_type.as_str()).or_insert_with(|| {
            groups.push((record.transaction_type.clone(), T::default()));
            groups.len() - 1
        });

        groups[index].1 += value(record);
    }

    groups
}

fn iter<R: AsRef<TransactionRecord>>(records: &[R]) -> impl Iterator<Item = &TransactionRecord> {
    records.iter().map(|record| record.as_ref())
}
