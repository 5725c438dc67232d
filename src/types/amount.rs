use clap::ValueEnum;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::Serialize;

const DECIMAL_PLACES: u32 = 2;
const LEGACY_THRESHOLD: f64 = 100_000.0;
const MILLION: f64 = 1_000_000.0;
const THOUSAND: f64 = 1_000.0;
const NOT_A_NUMBER: &str = "NaN";

/// How monetary values are rendered on the dashboard cards.
///
/// `Legacy` reproduces the deployed dashboard: anything from 100,000 upwards is divided by
/// one million and suffixed with `M`, so `$150,000` shows as `$0.15 M`. Whether that threshold
/// was intended has not been confirmed, so the behavior stays selectable instead of being fixed.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Serialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum AmountFormat {
    #[default]
    Legacy,
    /// Two decimals, no scaling.
    Plain,
    /// Millions from 1,000,000 and thousands from 1,000.
    Scaled
}

impl AmountFormat {
    pub fn format(self, amount: f64) -> String {
        if amount.is_nan() {
            return format!("${NOT_A_NUMBER}");
        }

        match self {
            AmountFormat::Legacy if amount >= LEGACY_THRESHOLD => {
                format!("${} M", fixed(amount / MILLION))
            }
            AmountFormat::Scaled if amount.abs() >= MILLION => {
                format!("${} M", fixed(amount / MILLION))
            }
            AmountFormat::Scaled if amount.abs() >= THOUSAND => {
                format!("${} K", fixed(amount / THOUSAND))
            }
            _ => format!("${}", fixed(amount))
        }
    }
}

/// Renders a percentage with two decimals, `NaN%` for the empty-set sentinel.
pub fn format_percentage(percentage: f64) -> String {
    if percentage.is_nan() {
        return format!("{NOT_A_NUMBER}%");
    }

    format!("{}%", fixed(percentage))
}

//NOTE: The exact binary value is kept so that 1.005 (stored as 1.00499...) rounds to 1.00 the way the
//      deployed dashboard's `toFixed(2)` does
fn fixed(value: f64) -> String {
    match Decimal::from_f64_retain(value) {
        Some(decimal) => {
            let rounded = decimal.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
            format!("{rounded:.2}")
        }
        None => format!("{value:.2}")
    }
}
