//! Shared constants for the dentiq core.

/// File name for the persisted session under the session directory.
pub const SESSION_FILE_NAME: &str = "session.json";

/// Placeholder treatment label the queue UI assigns before a treatment has
/// been chosen. Records still carrying it are excluded from statistics.
pub const UNSET_TREATMENT_LABEL: &str = "Treatment";

/// Fallback category for records whose treatment label is missing or empty.
pub const UNKNOWN_TREATMENT_LABEL: &str = "Unknown";
