//! Staff identity types.
//!
//! This module defines the authenticated staff member as the backend observes
//! it: a string-keyed profile with a closed role classification and optional
//! clinic or independent-practice affiliations.
//!
//! Responsibilities:
//! - Define the closed `Role` enumeration with its backend wire tags
//! - Define `Identity`, the profile held for the duration of a session
//! - Allocate fresh staff identifiers for newly registered accounts

use dentiq_types::{EmailAddress, Label, StaffId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::permissions::{resolve, CapabilitySet};

/// Staff classification determining permissions.
///
/// Roles are assigned at account creation and read-only from the client's
/// perspective. The set is closed: the backend never stores any other tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    SuperAdmin,
    Coordinator,
    TeamLeader,
    Doctor,
}

impl Role {
    /// Backend wire tag for this role.
    pub fn as_str(self) -> &'static str {
        match self {
            Role::SuperAdmin => "super_admin",
            Role::Coordinator => "coordinator",
            Role::TeamLeader => "team_leader",
            Role::Doctor => "doctor",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifier plus display name for a clinic or an independent practice.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrgRef {
    pub id: String,
    pub name: String,
}

/// An authenticated staff member's profile, held for the duration of a
/// session and persisted locally for session continuity.
///
/// `clinic` is the assigned clinic affiliation; `practice` is the independent
/// practice used while no clinic has been assigned yet. Either, both, or
/// neither may be present.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: StaffId,
    pub name: Label,
    pub email: EmailAddress,
    pub role: Role,
    #[serde(default)]
    pub clinic: Option<OrgRef>,
    #[serde(default)]
    pub practice: Option<OrgRef>,
    pub approved: bool,
}

impl Identity {
    /// Creates a profile with no affiliations and pending approval.
    pub fn new(id: StaffId, name: Label, email: EmailAddress, role: Role) -> Self {
        Self {
            id,
            name,
            email,
            role,
            clinic: None,
            practice: None,
            approved: false,
        }
    }

    /// Capabilities granted by this profile's role.
    pub fn capabilities(&self) -> CapabilitySet {
        resolve(self.role)
    }
}

/// Allocates a fresh staff identifier in the 32-hex form the backend uses
/// for account keys.
pub fn allocate_staff_id() -> StaffId {
    let raw = Uuid::new_v4().simple().to_string();
    // The simple uuid form is 32 hex characters, never empty.
    StaffId::new(raw).expect("uuid simple form is non-empty")
}
