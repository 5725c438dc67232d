use super::{render, OutputFormat, MODEL_PLACEHOLDER, SUBSET_NOTE, TITLE};

use anyhow::{anyhow, Result};
use chrono::{DateTime, TimeDelta, TimeZone, Utc};
use serde_json::Value;

use crate::engine::{DashboardConfig, DashboardEngine, DashboardSnapshot, FraudChart, Metric};
use crate::models::{Dataset, Section, TransactionRecord};
use crate::types::{AmountFormat, DateRange};

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 8, 30, 10, 0, 0).unwrap()
}

fn create_snapshot(records: Vec<TransactionRecord>, config: &DashboardConfig) -> DashboardSnapshot {
    let engine = DashboardEngine::new(Dataset::new(records), config.clone());

    engine.compute(&DateRange::new(t0(), t0() + TimeDelta::hours(1)))
}

fn scenario_records() -> Vec<TransactionRecord> {
    let created = t0() - TimeDelta::days(30);

    vec![
        TransactionRecord::new("1", 100.0, "PAYMENT", "USA", created, t0(), false),
        TransactionRecord::new("2", 150_000.0, "TRANSFER", "UK", created, t0() + TimeDelta::minutes(30), true),
    ]
}

#[test]
fn test_fraud_insights_text_shows_cards_and_histogram() {
    let config = DashboardConfig::default();
    let snapshot = create_snapshot(scenario_records(), &config);

    let output = render(OutputFormat::Text, Section::FraudInsights, Some(&snapshot), &config).unwrap();

    assert!(output.starts_with(TITLE));
    assert!(output.contains(SUBSET_NOTE));
    assert!(output.contains("Fraud Insights  [2024-08-30 10:00:00 UTC .. 2024-08-30 11:00:00 UTC]"));
    assert!(output.contains("Fraud Transactions  1"));
    assert!(output.contains("Total Fraud Amount  $0.15 M"));
    assert!(output.contains("Fraud Percentage    50.00%"));
    assert!(output.contains("8/30, 10:00 AM"));
    assert!(output.contains("8/30, 11:00 AM"));
    assert!(output.contains("Fraudulent  Total"));
    assert!(!output.contains("Amount vs Balance Difference"));
}

#[test]
fn test_fraud_insights_text_honors_chart_and_amount_format() {
    let config = DashboardConfig {
        fraud_chart: FraudChart::Scatter,
        amount_format: AmountFormat::Plain,
        ..DashboardConfig::default()
    };
    let snapshot = create_snapshot(scenario_records(), &config);

    let output = render(OutputFormat::Text, Section::FraudInsights, Some(&snapshot), &config).unwrap();

    assert!(output.contains("Total Fraud Amount  $150000.00"));
    assert!(output.contains("Amount vs Balance Difference"));
    assert!(output.contains("$NaN"));
    assert!(!output.contains("Reported Transactions"));
}

#[test]
fn test_transactions_text_shows_cards_and_distribution() {
    let config = DashboardConfig {
        amount_format: AmountFormat::Scaled,
        ..DashboardConfig::default()
    };
    let snapshot = create_snapshot(scenario_records(), &config);

    let output = render(OutputFormat::Text, Section::Transactions, Some(&snapshot), &config).unwrap();

    assert!(output.contains("Total Transaction Amount    $150.10 K"));
    assert!(output.contains("Average Transaction Amount  $75.05 K"));
    assert!(output.contains("Total Transactions          2"));
    assert!(output.contains("Unique Countries            2"));
    assert!(output.contains("Transaction Types Distribution (by count)"));
    assert!(output.contains("#0088FE"));
    assert!(output.contains("#00C49F"));
}

#[test]
fn test_transactions_text_of_empty_range_uses_sentinels() {
    let config = DashboardConfig {
        metric: Metric::Amount,
        ..DashboardConfig::default()
    };
    let snapshot = create_snapshot(Vec::new(), &config);

    let output = render(OutputFormat::Text, Section::Transactions, Some(&snapshot), &config).unwrap();

    assert!(output.contains("Total Transaction Amount    $0.00"));
    assert!(output.contains("Average Transaction Amount  $NaN"));
    assert!(output.contains("(by amount)"));
    assert!(output.contains("No transactions in the selected range."));
}

#[test]
fn test_static_sections_ignore_snapshot() {
    let config = DashboardConfig::default();

    let model = render(OutputFormat::Text, Section::Model, None, &config).unwrap();
    let documentation = render(OutputFormat::Text, Section::Documentation, None, &config).unwrap();

    assert!(model.contains(MODEL_PLACEHOLDER));
    assert!(documentation.contains("7.12 Transaction Fraud Model Documentation.pdf"));
}

#[test]
fn test_json_output_carries_snapshot() -> Result<()> {
    let config = DashboardConfig::default();
    let snapshot = create_snapshot(scenario_records(), &config);

    let output = render(OutputFormat::Json, Section::Transactions, Some(&snapshot), &config)?;
    let value: Value = serde_json::from_str(&output)?;

    assert_eq!(value["section"], "transactions");
    assert_eq!(value["snapshot"]["total_transactions"], 2);
    assert_eq!(value["snapshot"]["fraud"]["count"], 1);
    assert_eq!(value["snapshot"]["type_distribution"][0]["name"], "PAYMENT");
    assert!(value.get("message").is_none());

    Ok(())
}

#[test]
fn test_json_output_serializes_nan_as_null() -> Result<()> {
    let config = DashboardConfig::default();
    let snapshot = create_snapshot(Vec::new(), &config);

    let output = render(OutputFormat::Json, Section::FraudInsights, Some(&snapshot), &config)?;
    let value: Value = serde_json::from_str(&output)?;
    let average = value["snapshot"].get("average_amount").ok_or_else(|| anyhow!("average_amount missing"))?;

    assert!(average.is_null());
    assert!(value["snapshot"]["fraud"]["percentage"].is_null());

    Ok(())
}

#[test]
fn test_json_output_for_documentation_names_document() -> Result<()> {
    let config = DashboardConfig {
        documentation_path: "docs/model.pdf".to_string(),
        ..DashboardConfig::default()
    };

    let output = render(OutputFormat::Json, Section::Documentation, None, &config)?;
    let value: Value = serde_json::from_str(&output)?;

    assert_eq!(value["document"], "docs/model.pdf");
    assert!(value.get("snapshot").is_none());

    Ok(())
}
