use thiserror::Error;

use crate::types::TimestampError;

#[derive(Debug, Error)]
pub enum RecordError {
    #[error("Row [{row}] is missing required field [{field}]")]
    MissingField {
        row: usize,
        field: &'static str
    },
    #[error("Row [{row}] has an invalid timestamp in [{field}]: {source}")]
    InvalidTimestamp {
        row: usize,
        field: &'static str,
        source: TimestampError
    },
    #[error("Row [{row}] has a non-numeric amount [{value}]")]
    InvalidAmount {
        row: usize,
        value: String
    }
}

impl RecordError {
    pub fn missing_field(row: usize, field: &'static str) -> Self {
        Self::MissingField { row, field }
    }

    pub fn invalid_timestamp(row: usize, field: &'static str, source: TimestampError) -> Self {
        Self::InvalidTimestamp { row, field, source }
    }

    pub fn invalid_amount(row: usize, value: &str) -> Self {
        Self::InvalidAmount { row, value: value.to_string() }
    }
}

#[derive(Debug, Error, Eq, PartialEq)]
#[error("Section with ID {0} not found.")]
pub struct UnknownSection(pub String);
