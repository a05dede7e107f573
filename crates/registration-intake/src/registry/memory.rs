//! In-memory registration log.

use super::{RegistrationRecord, ValidatedSubmission};
use serde::Serialize;

/// Append-only, insertion-ordered log of accepted registrations.
///
/// Identifiers come from a counter owned by the log, so they keep increasing
/// for as long as the log lives and are never handed out twice.
#[derive(Debug, Default, Serialize)]
pub struct RegistrationLog {
    records: Vec<RegistrationRecord>,
    #[serde(skip)]
    last_id: u64,
}

impl RegistrationLog {
    /// Create a new empty log.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
            last_id: 0,
        }
    }

    /// Create a record for a validated submission and append it.
    pub fn append(&mut self, submission: ValidatedSubmission) -> &RegistrationRecord {
        self.last_id += 1;
        let record = RegistrationRecord::new(self.last_id, submission);
        self.records.push(record);
        &self.records[self.records.len() - 1]
    }

    /// All records in insertion order.
    pub fn records(&self) -> &[RegistrationRecord] {
        &self.records
    }

    /// Number of stored records.
    pub fn count(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
