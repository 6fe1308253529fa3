//! # dentiq core
//!
//! Domain logic for the dentiq dental-clinic staff and patient-queue client.
//!
//! This crate contains the pure pieces the screens build on:
//! - Role-based capability resolution ([`permissions`])
//! - Per-treatment statistics over queue records ([`statistics`])
//! - The explicit session lifecycle and its local persistence ([`session`],
//!   [`stores`])
//!
//! **No I/O concerns beyond the local session file**: authentication,
//! networking, and record CRUD live with the backend client that feeds these
//! functions their inputs.

pub mod config;
pub mod constants;
pub mod error;
pub mod identity;
pub mod permissions;
pub mod session;
pub mod statistics;
pub mod stores;

pub use config::CoreConfig;
pub use error::{ClinicError, ClinicResult};
pub use identity::{allocate_staff_id, Identity, OrgRef, Role};
pub use permissions::{resolve, CapabilitySet};
pub use session::Session;
pub use statistics::{aggregate, QueueRecord, StatisticsResult};
pub use stores::{InMemoryRecordStore, JsonFileSessionStore, RecordStore, SessionStore};

pub use dentiq_types::{EmailAddress, Label, RecordId, StaffId, TextError};
