mod aggregation;
mod config;
mod dashboard;
mod histogram;

pub use aggregation::{
    amount_by_type, average_amount, count_by_type, filter_by_range, fraud_stats, scatter_projection, total_amount,
    unique_countries, FraudStats, ScatterPoint
};
pub use config::{DashboardConfig, FraudChart, Metric, ScatterAxis};
pub use dashboard::{DashboardEngine, DashboardSnapshot, TypeSlice};
pub use histogram::{hourly_histogram, HistogramBoundary, HourBucket};
