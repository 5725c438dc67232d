mod amount;
mod date_range;
mod errors;
#[cfg(test)]
mod tests;
mod timestamp;

pub use amount::{format_percentage, AmountFormat};
pub use date_range::{DateRange, Granularity};
pub use errors::{RangeError, TimestampError};
pub use timestamp::{parse_timestamp, truncate_to_hour};

pub type RecordId = String;
