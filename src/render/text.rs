use std::fmt::Write;

use crate::engine::{DashboardConfig, DashboardSnapshot, HourBucket, Metric, ScatterPoint, TypeSlice};
use crate::models::Section;
use crate::render::{MODEL_PLACEHOLDER, SUBSET_NOTE, TITLE};
use crate::types::{format_percentage, AmountFormat};

const INDENT: usize = 2;
const COLUMN_GAP: usize = 2;
const TICK_FORMAT: &str = "%-m/%-d, %-I:%M %p";
const REFRESH_NOTE: &str = "last refreshed September 1st 12:00:00 AM";
const NO_DATA: &str = "No transactions in the selected range.";

pub(super) fn render(section: Section, snapshot: Option<&DashboardSnapshot>, config: &DashboardConfig) -> String {
    let mut lines = vec![TITLE.to_string(), format!("({SUBSET_NOTE})"), String::new()];

    let heading = match snapshot.filter(|_| section.is_filterable()) {
        Some(snapshot) => format!("{}  [{}]", section.title(), snapshot.range),
        None => section.title().to_string()
    };
    lines.push(heading);
    lines.push(String::new());

    match (section, snapshot) {
        (Section::FraudInsights, Some(snapshot)) => fraud_insights(&mut lines, snapshot, config),
        (Section::Transactions, Some(snapshot)) => transactions(&mut lines, snapshot, config.amount_format),
        (Section::FraudInsights | Section::Transactions, None) => lines.push(indent(NO_DATA)),
        (Section::Model, _) => {
            lines.push("Model Information".to_string());
            lines.push(indent(MODEL_PLACEHOLDER));
        }
        (Section::Documentation, _) => {
            lines.extend(key_value_rows(&[("Document", config.documentation_path.clone())], INDENT));
        }
    }

    let mut output = lines.join("\n");
    output.push('\n');
    output
}

fn fraud_insights(lines: &mut Vec<String>, snapshot: &DashboardSnapshot, config: &DashboardConfig) {
    lines.extend(key_value_rows(&[
        ("Fraud Transactions", snapshot.fraud.count.to_string()),
        ("Total Fraud Amount", config.amount_format.format(snapshot.fraud.total_amount)),
        ("Fraud Percentage", format_percentage(snapshot.fraud.percentage))
    ], INDENT));

    if config.fraud_chart.shows_histogram() {
        lines.push(String::new());
        lines.push(format!("Reported Transactions ({REFRESH_NOTE})"));
        lines.extend(histogram_table(&snapshot.histogram));
    }

    if config.fraud_chart.shows_scatter() {
        lines.push(String::new());
        lines.push("Amount vs Balance Difference".to_string());

        if snapshot.scatter.is_empty() {
            lines.push(indent(NO_DATA));
        } else {
            lines.extend(scatter_table(&snapshot.scatter, config.amount_format));
        }
    }
}

fn transactions(lines: &mut Vec<String>, snapshot: &DashboardSnapshot, amount_format: AmountFormat) {
    lines.extend(key_value_rows(&[
        ("Total Transaction Amount", amount_format.format(snapshot.total_amount)),
        ("Average Transaction Amount", amount_format.format(snapshot.average_amount)),
        ("Total Transactions", snapshot.total_transactions.to_string()),
        ("Unique Countries", snapshot.unique_countries.to_string())
    ], INDENT));

    lines.push(String::new());

    let series = match snapshot.metric {
        Metric::Count => "count",
        Metric::Amount => "amount"
    };
    lines.push(format!("Transaction Types Distribution (by {series})"));

    if snapshot.is_empty() {
        lines.push(indent(NO_DATA));
    } else {
        lines.extend(type_table(&snapshot.type_distribution, snapshot.metric, amount_format));
    }
}

fn histogram_table(buckets: &[HourBucket]) -> Vec<String> {
    let rows = buckets.iter()
        .map(|bucket| vec![
            bucket.hour_start.format(TICK_FORMAT).to_string(),
            bucket.normal.to_string(),
            bucket.fraud.to_string(),
            bucket.total().to_string()
        ])
        .collect::<Vec<_>>();

    table(&["Hour", "Normal", "Fraudulent", "Total"], &rows)
}

fn scatter_table(points: &[ScatterPoint], amount_format: AmountFormat) -> Vec<String> {
    let rows = points.iter()
        .map(|point| vec![
            point.label.clone(),
            amount_format.format(point.x),
            amount_format.format(point.y),
            if point.is_fraud { "fraud" } else { "normal" }.to_string()
        ])
        .collect::<Vec<_>>();

    table(&["Country", "Amount", "Balance Difference", "Status"], &rows)
}

fn type_table(slices: &[TypeSlice], metric: Metric, amount_format: AmountFormat) -> Vec<String> {
    let rows = slices.iter()
        .map(|slice| {
            let value = match metric {
                Metric::Count => format!("{}", slice.value),
                Metric::Amount => amount_format.format(slice.value)
            };

            vec![slice.name.clone(), value, slice.color.to_string()]
        })
        .collect::<Vec<_>>();

    table(&["Type", "Value", "Color"], &rows)
}

fn key_value_rows(entries: &[(&str, String)], indent: usize) -> Vec<String> {
    let label_width = entries.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
    let padding = " ".repeat(indent);

    entries.iter()
        .map(|(label, value)| format!("{padding}{label:<label_width$}  {value}"))
        .collect()
}

fn table(columns: &[&str], rows: &[Vec<String>]) -> Vec<String> {
    let mut widths = columns.iter().map(|column| column.len()).collect::<Vec<_>>();

    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    let header = columns.iter().map(|column| column.to_string()).collect::<Vec<_>>();

    std::iter::once(&header)
        .chain(rows)
        .map(|row| format_row(row, &widths))
        .collect()
}

fn format_row(cells: &[String], widths: &[usize]) -> String {
    let mut line = " ".repeat(INDENT);

    for (index, (cell, &width)) in cells.iter().zip(widths).enumerate() {
        if index > 0 {
            line.push_str(&" ".repeat(COLUMN_GAP));
        }

        let _ = write!(line, "{cell:<width$}");
    }

    line.trim_end().to_string()
}

fn indent(text: &str) -> String {
    format!("{}{text}", " ".repeat(INDENT))
}
