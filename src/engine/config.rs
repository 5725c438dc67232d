use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::Serialize;

use crate::engine::HistogramBoundary;
use crate::models::Dataset;
use crate::types::{AmountFormat, DateRange, Granularity, RangeError};

// 2024-08-30T09:46:32Z .. 2024-09-01T00:00:00Z, the window of the bundled refresh
const DEFAULT_START_SECONDS: i64 = 1_725_011_192;
const DEFAULT_END_SECONDS: i64 = 1_725_148_800;

pub const DEFAULT_DOCUMENTATION_PATH: &str = "7.12 Transaction Fraud Model Documentation.pdf";

/// Series plotted by the transaction type distribution.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Serialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    #[default]
    Count,
    Amount
}

/// Charts shown on the fraud insights section.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Serialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum FraudChart {
    #[default]
    Histogram,
    Scatter,
    Both
}

impl FraudChart {
    pub fn shows_histogram(self) -> bool {
        matches!(self, FraudChart::Histogram | FraudChart::Both)
    }

    pub fn shows_scatter(self) -> bool {
        matches!(self, FraudChart::Scatter | FraudChart::Both)
    }
}

/// Balance difference used as the scatter chart's y axis.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Serialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum ScatterAxis {
    #[default]
    Origin,
    Destination
}

/// The knobs that used to differ between copies of the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardConfig {
    pub metric: Metric,
    pub fraud_chart: FraudChart,
    pub granularity: Granularity,
    pub amount_format: AmountFormat,
    pub boundary: HistogramBoundary,
    pub scatter_axis: ScatterAxis,
    pub default_range: DateRange,
    pub documentation_path: String
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            metric: Metric::default(),
            fraud_chart: FraudChart::default(),
            granularity: Granularity::default(),
            amount_format: AmountFormat::default(),
            boundary: HistogramBoundary::default(),
            scatter_axis: ScatterAxis::default(),
            default_range: DateRange::new(
                DateTime::from_timestamp(DEFAULT_START_SECONDS, 0).unwrap_or(DateTime::UNIX_EPOCH),
                DateTime::from_timestamp(DEFAULT_END_SECONDS, 0).unwrap_or(DateTime::UNIX_EPOCH)
            ),
            documentation_path: DEFAULT_DOCUMENTATION_PATH.to_string()
        }
    }
}

impl DashboardConfig {
    /// Resolves the active range, bound by bound.
    ///
    /// An explicit bound always wins. Otherwise `span_dataset` takes the bound from the dataset's
    /// extent, falling back to the configured default range when the dataset is empty.
    ///
    /// # Errors
    /// Returns `RangeError` if an explicit bound does not parse under the configured granularity.
    pub fn resolve_range(
        &self,
        start: Option<&str>,
        end: Option<&str>,
        span_dataset: bool,
        dataset: &Dataset
    ) -> Result<DateRange, RangeError> {
        let fallback = span_dataset.then(|| dataset.extent()).flatten().unwrap_or(self.default_range);

        Ok(DateRange::new(
            self.bound(start, fallback.start)?,
            self.bound(end, fallback.end)?
        ))
    }

    fn bound(&self, value: Option<&str>, fallback: DateTime<Utc>) -> Result<DateTime<Utc>, RangeError> {
        match value {
            Some(value) => self.granularity.parse_bound(value),
            None => Ok(fallback)
        }
    }
}
