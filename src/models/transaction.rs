use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use csv::StringRecord;
use serde::Serialize;
use tracing::debug;

use crate::models::errors::RecordError;
use crate::models::FieldValue;
use crate::types::{parse_timestamp, RecordId};

const ID: &str = "id";
const AMOUNT: &str = "amount";
const TYPE: &str = "type";
const COUNTRY: &str = "country";
const CREATION_DATE: &str = "creation_date";
const LAST_ACTIVITY_DATE: &str = "last_activity_date";
const IS_FRAUD: &str = "is_fraud";

const CORE_FIELDS: [&str; 7] = [ID, AMOUNT, TYPE, COUNTRY, CREATION_DATE, LAST_ACTIVITY_DATE, IS_FRAUD];

const DIFF_ORIG: &str = "diffOrig";
const DIFF_DEST: &str = "diffDest";
const OLD_BALANCE_ORIG: &str = "oldBalanceOrig";
const NEW_BALANCE_ORIG: &str = "newBalanceOrig";
const OLD_BALANCE_DEST: &str = "oldBalanceDest";
const NEW_BALANCE_DEST: &str = "newBalanceDest";

/// One row of the working dataset.
///
/// Only rows whose `creation_date` and `last_activity_date` both parse make it into a
/// dataset. Records are never mutated once loaded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TransactionRecord {
    /// Opaque identifier, unique within a dataset.
    pub id: RecordId,
    pub amount: f64,
    /// Open categorical label, grouped by its literal value.
    #[serde(rename = "type")]
    pub transaction_type: String,
    pub country: String,
    pub creation_date: DateTime<Utc>,
    pub last_activity_date: DateTime<Utc>,
    pub is_fraud: bool,
    /// Every other column (balances, names, coordinates), passed through untouched.
    pub enrichment: BTreeMap<String, FieldValue>
}

impl TransactionRecord {
    pub fn new(
        id: impl Into<RecordId>,
        amount: f64,
        transaction_type: impl Into<String>,
        country: impl Into<String>,
        creation_date: DateTime<Utc>,
        last_activity_date: DateTime<Utc>,
        is_fraud: bool
    ) -> Self {
        Self {
            id: id.into(),
            amount,
            transaction_type: transaction_type.into(),
            country: country.into(),
            creation_date,
            last_activity_date,
            is_fraud,
            enrichment: BTreeMap::new()
        }
    }

    pub fn with_field(mut self, name: impl Into<String>, value: FieldValue) -> Self {
        self.enrichment.insert(name.into(), value);
        self
    }

    /// Builds a record from one CSV data row.
    ///
    /// `row` is the 1-based data row number, used for diagnostics and as the id when the
    /// source has no `id` column.
    ///
    /// # Errors
    /// Returns `RecordError` if:
    /// - Either date column is missing or does not parse.
    /// - The amount is missing or not numeric.
    pub fn from_row(row: usize, headers: &StringRecord, values: &StringRecord) -> Result<Self, RecordError> {
        let field = |name: &str| cell(headers, values, name);

        let creation_date = required_timestamp(row, CREATION_DATE, field(CREATION_DATE))?;
        let last_activity_date = required_timestamp(row, LAST_ACTIVITY_DATE, field(LAST_ACTIVITY_DATE))?;

        let raw_amount = field(AMOUNT).ok_or_else(|| RecordError::missing_field(row, AMOUNT))?;
        let amount = FieldValue::coerce(raw_amount).as_number()
            .ok_or_else(|| RecordError::invalid_amount(row, raw_amount))?;

        if last_activity_date < creation_date {
            debug!("Row [{row}] has last activity before creation, keeping it");
        }

        let enrichment = headers.iter()
            .zip(values.iter())
            .filter(|(header, _)| !CORE_FIELDS.contains(header))
            .map(|(header, value)| (header.to_string(), FieldValue::coerce(value)))
            .collect();

        Ok(Self {
            id: field(ID).map_or_else(|| row.to_string(), str::to_string),
            amount,
            transaction_type: field(TYPE).unwrap_or_default().to_string(),
            country: field(COUNTRY).unwrap_or_default().to_string(),
            creation_date,
            last_activity_date,
            is_fraud: field(IS_FRAUD).is_some_and(parse_fraud_flag),
            enrichment
        })
    }

    pub fn number(&self, field: &str) -> Option<f64> {
        self.enrichment.get(field).and_then(FieldValue::as_number)
    }

    /// Balance drained from the origin account, `diffOrig` when present.
    pub fn origin_balance_difference(&self) -> Option<f64> {
        self.number(DIFF_ORIG).or_else(|| {
            Some(self.number(OLD_BALANCE_ORIG)? - self.number(NEW_BALANCE_ORIG)?)
        })
    }

    /// Balance credited to the destination account, `diffDest` when present.
    pub fn destination_balance_difference(&self) -> Option<f64> {
        self.number(DIFF_DEST).or_else(|| {
            Some(self.number(NEW_BALANCE_DEST)? - self.number(OLD_BALANCE_DEST)?)
        })
    }
}

impl AsRef<TransactionRecord> for TransactionRecord {
    fn as_ref(&self) -> &TransactionRecord {
        self
    }
}

fn cell<'a>(headers: &StringRecord, values: &'a StringRecord, name: &str) -> Option<&'a str> {
    headers.iter()
        .position(|header| header == name)
        .and_then(|index| values.get(index))
        .map(str::trim)
        .filter(|value| !value.is_empty())
}

fn required_timestamp(row: usize, field: &'static str, value: Option<&str>) -> Result<DateTime<Utc>, RecordError> {
    let value = value.ok_or_else(|| RecordError::missing_field(row, field))?;

    parse_timestamp(value).map_err(|error| RecordError::invalid_timestamp(row, field, error))
}

/// `True`/`False` style flags, case-insensitive, plus `1`/`0`. Anything else is not fraud.
fn parse_fraud_flag(value: &str) -> bool {
    let value = value.trim();

    value.eq_ignore_ascii_case("true") || value == "1"
}
