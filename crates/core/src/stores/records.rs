//! Queue-record access.
//!
//! The backend owns queue-record lifecycle; the core only reads snapshots
//! scoped to an owning staff member. [`InMemoryRecordStore`] is the reference
//! implementation of the contract, used in tests and as a snapshot holder.

use dentiq_types::StaffId;

use crate::error::ClinicResult;
use crate::statistics::QueueRecord;

/// Contract for fetching the queue records owned by a staff member.
///
/// Freshness and consistency are the store's responsibility; callers receive
/// a point-in-time snapshot.
pub trait RecordStore {
    fn records_for(&self, owner: &StaffId) -> ClinicResult<Vec<QueueRecord>>;
}

/// Snapshot-backed record store.
#[derive(Clone, Debug, Default)]
pub struct InMemoryRecordStore {
    records: Vec<QueueRecord>,
}

impl InMemoryRecordStore {
    pub fn new(records: Vec<QueueRecord>) -> Self {
        Self { records }
    }

    pub fn push(&mut self, record: QueueRecord) {
        self.records.push(record);
    }
}

impl RecordStore for InMemoryRecordStore {
    fn records_for(&self, owner: &StaffId) -> ClinicResult<Vec<QueueRecord>> {
        Ok(self
            .records
            .iter()
            .filter(|record| &record.owner == owner)
            .cloned()
            .collect())
    }
}
