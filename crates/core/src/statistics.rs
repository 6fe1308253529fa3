//! Per-treatment statistics over patient-queue records.
//!
//! A screen fetches a snapshot of queue records from the record store, then
//! asks this module for display-ready counts over a date window. The pass is
//! pure, O(n), and never fails: malformed or partial data degrades to an
//! empty or partial result rather than an error, because statistics display
//! must not crash on bad records.
//!
//! Filtering order is fixed: owner first, then the date interval.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use dentiq_types::{RecordId, StaffId};
use serde::{Deserialize, Serialize};

use crate::constants::{UNKNOWN_TREATMENT_LABEL, UNSET_TREATMENT_LABEL};

/// One patient encounter as read from the record store.
///
/// Lifecycle is owned entirely by the store; this is a read-only snapshot
/// unit. The optional fields reflect what the backend actually serves:
/// records may lack a treatment label or either timestamp.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueueRecord {
    pub id: RecordId,
    /// Staff member the encounter belongs to.
    pub owner: StaffId,
    /// Assigned treatment label, if any.
    #[serde(default)]
    pub treatment: Option<String>,
    /// When the encounter was completed.
    #[serde(default)]
    pub completed_at: Option<DateTime<Utc>>,
    /// Fallback timestamp for records never explicitly completed.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl QueueRecord {
    /// Completion time when set, otherwise the last-modified time.
    ///
    /// A record with neither timestamp matches no interval.
    pub fn effective_timestamp(&self) -> Option<DateTime<Utc>> {
        self.completed_at.or(self.updated_at)
    }
}

/// Per-treatment counts plus their total, derived on demand.
///
/// Invariant: `total` equals the sum of the per-category counts.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatisticsResult {
    pub categories: HashMap<String, u64>,
    pub total: u64,
}

impl StatisticsResult {
    /// Count for a single treatment label, zero when absent.
    pub fn count(&self, treatment: &str) -> u64 {
        self.categories.get(treatment).copied().unwrap_or(0)
    }
}

/// Aggregate `records` owned by `owner` whose effective timestamp falls
/// within the closed interval `[from, to]`.
///
/// Records carrying the not-yet-assigned placeholder label are excluded from
/// both the per-category counts and the total. Records with a missing or
/// empty label are counted under the `"Unknown"` fallback category.
///
/// An inverted interval (`from > to`) yields an empty result rather than an
/// error.
pub fn aggregate(
    records: &[QueueRecord],
    owner: &StaffId,
    from: DateTime<Utc>,
    to: DateTime<Utc>,
) -> StatisticsResult {
    if from > to {
        tracing::debug!(%from, %to, "inverted statistics interval, returning empty result");
        return StatisticsResult::default();
    }

    let mut categories: HashMap<String, u64> = HashMap::new();
    let mut total = 0u64;

    for record in records.iter().filter(|r| &r.owner == owner) {
        let ts = match record.effective_timestamp() {
            Some(ts) => ts,
            None => continue,
        };
        if ts < from || ts > to {
            continue;
        }

        let label = match record.treatment.as_deref() {
            Some(t) if !t.is_empty() => t,
            _ => UNKNOWN_TREATMENT_LABEL,
        };
        if label == UNSET_TREATMENT_LABEL {
            continue;
        }

        *categories.entry(label.to_owned()).or_insert(0) += 1;
        total += 1;
    }

    StatisticsResult { categories, total }
}
