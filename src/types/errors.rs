use thiserror::Error;

#[derive(Debug, Error)]
pub enum TimestampError {
    #[error("Timestamp error: Value is an empty string")]
    Empty,
    #[error("Timestamp error: Unrecognized format '{0}'")]
    InvalidFormat(String)
}

#[derive(Debug, Error)]
pub enum RangeError {
    #[error("Range error: {0}")]
    Timestamp(#[from] TimestampError),
    #[error("Range error: '{0}' is not a calendar date (expected YYYY-MM-DD)")]
    DateRequired(String)
}
