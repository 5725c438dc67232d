use std::sync::Arc;
use std::time::Duration;

use moka::future::Cache;
use serde::Serialize;
use tracing::debug;

use crate::engine::{
    amount_by_type, average_amount, count_by_type, filter_by_range, fraud_stats, hourly_histogram, scatter_projection,
    total_amount, unique_countries, DashboardConfig, FraudStats, HourBucket, Metric, ScatterPoint
};
use crate::models::Dataset;
use crate::types::DateRange;

const DEFAULT_CACHE_CAPACITY: u64 = 64;

/// Legend colors, assigned to type slices by position.
pub const PALETTE: [&str; 10] = [
    "#0088FE", "#00C49F", "#FFBB28", "#FF8042", "#8884D8", "#82CA9D", "#FFC0CB", "#A52A2A", "#DDA0DD", "#FF69B4"
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TypeSlice {
    pub name: String,
    pub value: f64,
    pub color: &'static str
}

/// Every aggregate the dashboard sections draw from, for one date range.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSnapshot {
    pub range: DateRange,
    pub total_transactions: usize,
    pub total_amount: f64,
    /// `NaN` (serialized as `null`) when no record is in range.
    pub average_amount: f64,
    pub unique_countries: usize,
    pub metric: Metric,
    pub type_distribution: Vec<TypeSlice>,
    pub fraud: FraudStats,
    pub histogram: Vec<HourBucket>,
    pub scatter: Vec<ScatterPoint>
}

impl DashboardSnapshot {
    pub fn is_empty(&self) -> bool {
        self.total_transactions == 0
    }
}

/// Serves dashboard snapshots over an immutable dataset.
///
/// Snapshots are pure functions of the dataset, the configuration and the range, so they are
/// memoized per range and shared behind an `Arc`.
pub struct DashboardEngine {
    dataset: Dataset,
    config: DashboardConfig,
    //NOTE: A `show` run asks for a single range, the cache pays off for callers that query several
    //      ranges over the same dataset
    cache: Cache<DateRange, Arc<DashboardSnapshot>>
}

impl DashboardEngine {
    pub fn new(dataset: Dataset, config: DashboardConfig) -> Self {
        Self {
            dataset,
            config,
            cache: build_cache(DEFAULT_CACHE_CAPACITY, None)
        }
    }

    #[cfg(test)]
    pub fn with_cache_capacity(mut self, capacity: u64) -> Self {
        self.cache = build_cache(capacity, self.cache.policy().time_to_live());
        self
    }

    #[cfg(test)]
    pub fn with_cache_timeout(mut self, timeout: Duration) -> Self {
        let capacity = self.cache.policy().max_capacity().unwrap_or(DEFAULT_CACHE_CAPACITY);
        self.cache = build_cache(capacity, Some(timeout));
        self
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Returns the snapshot for `range`, computing it on the first request.
    pub async fn snapshot(&self, range: DateRange) -> Arc<DashboardSnapshot> {
        self.cache.get_with(range, async { Arc::new(self.compute(&range)) }).await
    }

    /// Builds a snapshot without consulting the cache.
    pub fn compute(&self, range: &DateRange) -> DashboardSnapshot {
        let filtered = filter_by_range(self.dataset.records(), range);

        debug!("Computing snapshot for [{range}] over {} of {} records", filtered.len(), self.dataset.len());

        let type_distribution = match self.config.metric {
            Metric::Count => slices(count_by_type(&filtered).into_iter().map(|(name, count)| (name, count as f64))),
            Metric::Amount => slices(amount_by_type(&filtered))
        };

        let histogram = if self.config.fraud_chart.shows_histogram() {
            hourly_histogram(&filtered, range, self.config.boundary)
        } else {
            Vec::new()
        };

        let scatter = if self.config.fraud_chart.shows_scatter() {
            scatter_projection(&filtered, self.config.scatter_axis)
        } else {
            Vec::new()
        };

        DashboardSnapshot {
            range: *range,
            total_transactions: filtered.len(),
            total_amount: total_amount(&filtered),
            average_amount: average_amount(&filtered),
            unique_countries: unique_countries(&filtered),
            metric: self.config.metric,
            type_distribution,
            fraud: fraud_stats(&filtered),
            histogram,
            scatter
        }
    }
}

fn build_cache(capacity: u64, timeout: Option<Duration>) -> Cache<DateRange, Arc<DashboardSnapshot>> {
    let builder = Cache::builder().max_capacity(capacity);

    match timeout {
        Some(timeout) => builder.time_to_live(timeout).build(),
        None => builder.build()
    }
}

fn slices<I>(groups: I) -> Vec<TypeSlice>
where
    I: IntoIterator<Item = (String, f64)>,
{
    groups.into_iter()
        .enumerate()
        .map(|(index, (name, value))| TypeSlice {
            name,
            value,
            color: PALETTE[index % PALETTE.len()]
        })
        .collect()
}
