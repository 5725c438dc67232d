use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use tracing::level_filters::LevelFilter;

use crate::engine::{DashboardConfig, FraudChart, HistogramBoundary, Metric, ScatterAxis};
use crate::predict::{PredictionRequest, DEFAULT_ENDPOINT};
use crate::render::OutputFormat;
use crate::types::{AmountFormat, Granularity};

const DEFAULT_STATE_FILE: &str = ".transaction-dashboard.json";

#[derive(Debug, Parser)]
#[command(
    name = "transaction-dashboard",
    version,
    about = "Transaction analytics dashboard and salary prediction client",
    disable_help_subcommand = true
)]
pub struct Cli {
    /// Diagnostics written to stderr at this level and above
    #[arg(long, global = true, value_enum, default_value_t = LogLevel::Error)]
    pub log_level: LogLevel,
    /// Where the last viewed section is remembered between runs
    #[arg(long, global = true, default_value = DEFAULT_STATE_FILE)]
    pub state_file: PathBuf,
    #[command(subcommand)]
    pub command: Command
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Render one dashboard section
    Show(ShowArgs),
    /// Ask the salary model for a prediction
    Predict(PredictArgs)
}

#[derive(Debug, Clone, Copy, Eq, PartialEq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::ERROR,
            LogLevel::Warn => LevelFilter::WARN,
            LogLevel::Info => LevelFilter::INFO,
            LogLevel::Debug => LevelFilter::DEBUG,
            LogLevel::Trace => LevelFilter::TRACE
        }
    }
}

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Section id or path such as `/transactions`; defaults to the last one shown
    pub section: Option<String>,
    /// `sample`, a CSV file path or an http(s) URL
    #[arg(long, default_value = "sample")]
    pub source: String,
    /// Range start; the default range applies when omitted
    #[arg(long)]
    pub start: Option<String>,
    /// Range end; the default range applies when omitted
    #[arg(long)]
    pub end: Option<String>,
    /// Span the whole dataset for any bound not given explicitly
    #[arg(long)]
    pub all: bool,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    /// Series of the type distribution
    #[arg(long, value_enum, default_value_t = Metric::Count)]
    pub metric: Metric,
    #[arg(long, value_enum, default_value_t = FraudChart::Histogram)]
    pub fraud_chart: FraudChart,
    /// Accepted range inputs
    #[arg(long, value_enum, default_value_t = Granularity::DateTime)]
    pub granularity: Granularity,
    #[arg(long, value_enum, default_value_t = AmountFormat::Legacy)]
    pub amount_format: AmountFormat,
    /// Whether the hour holding the range end always gets a bucket
    #[arg(long, value_enum, default_value_t = HistogramBoundary::InclusiveEnd)]
    pub boundary: HistogramBoundary,
    /// Balance difference plotted against the amount
    #[arg(long, value_enum, default_value_t = ScatterAxis::Origin)]
    pub scatter_axis: ScatterAxis,
    #[arg(long)]
    pub documentation_path: Option<String>
}

impl ShowArgs {
    pub fn config(&self) -> DashboardConfig {
        let defaults = DashboardConfig::default();

        DashboardConfig {
            metric: self.metric,
            fraud_chart: self.fraud_chart,
            granularity: self.granularity,
            amount_format: self.amount_format,
            boundary: self.boundary,
            scatter_axis: self.scatter_axis,
            documentation_path: self.documentation_path.clone().unwrap_or(defaults.documentation_path),
            default_range: defaults.default_range
        }
    }
}

#[derive(Debug, Args)]
pub struct PredictArgs {
    #[arg(long)]
    pub age: f64,
    #[arg(long)]
    pub gender: String,
    #[arg(long)]
    pub education: String,
    #[arg(long)]
    pub job_title: String,
    /// Years of experience
    #[arg(long)]
    pub experience: f64,
    #[arg(long, default_value = DEFAULT_ENDPOINT)]
    pub endpoint: String
}

impl PredictArgs {
    pub fn request(&self) -> PredictionRequest {
        PredictionRequest {
            age: self.age,
            gender: self.gender.clone(),
            education: self.education.clone(),
            job_title: self.job_title.clone(),
            years_of_experience: self.experience
        }
    }
}
