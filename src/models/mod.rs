mod dataset;
mod errors;
mod section;
mod transaction;

use serde::Serialize;

pub use dataset::Dataset;
pub use section::Section;
pub use transaction::TransactionRecord;

/// A pass-through column value after dynamic typing.
///
/// Numeric-looking text becomes a number, blank cells become `Empty` and everything
/// else is kept verbatim.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(f64),
    Text(String),
    Empty
}

impl FieldValue {
    pub fn coerce(raw: &str) -> Self {
        let value = raw.trim();

        if value.is_empty() {
            return FieldValue::Empty;
        }

        match value.parse::<f64>() {
            Ok(number) if number.is_finite() && looks_numeric(value) => FieldValue::Number(number),
            _ => FieldValue::Text(value.to_string())
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(number) => Some(*number),
            _ => None
        }
    }
}

//NOTE: f64::from_str also accepts words such as "inf" and "NaN", only plain decimal notation counts here
fn looks_numeric(value: &str) -> bool {
    value.chars().all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+' | 'e' | 'E'))
}
