//! Collaborator store seams.
//!
//! The core never performs I/O of its own; it consumes these contracts. The
//! session store persists a single serialized identity across process
//! restarts, and the record store serves queue-record snapshots scoped to an
//! owning staff member.

pub mod records;
pub mod session;

pub use records::{InMemoryRecordStore, RecordStore};
pub use session::{JsonFileSessionStore, SessionStore};
