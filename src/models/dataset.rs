use std::sync::Arc;

use crate::models::TransactionRecord;
use crate::types::DateRange;

/// The immutable, session-wide record set.
///
/// Cloning is cheap; every clone shares the same records.
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Arc<[TransactionRecord]>
}

impl Dataset {
    pub fn new(records: Vec<TransactionRecord>) -> Self {
        Self {
            records: records.into()
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new())
    }

    pub fn records(&self) -> &[TransactionRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Earliest to latest `last_activity_date`, `None` for an empty dataset.
    pub fn extent(&self) -> Option<DateRange> {
        DateRange::covering(self.records.iter().map(|record| record.last_activity_date))
    }
}
