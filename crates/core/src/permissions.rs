//! Role-based capability resolution.
//!
//! Maps a staff [`Role`] to the fixed set of view/manage rights the UI
//! consults before offering an action.
//!
//! Design policy: the four grants are authored independently rather than
//! derived from one another. There is no inheritance or composition between
//! roles, so changing one role's flags must never be assumed to affect
//! another. The exhaustive `match` in [`resolve`] guarantees at compile time
//! that every role has a fully populated set.

use serde::{Deserialize, Serialize};

use crate::identity::Role;

/// The full set of boolean permission flags derived from a [`Role`].
///
/// Every flag is explicitly set for every role; no flag is ever left to a
/// default. A pure value type: equal roles always yield equal sets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapabilitySet {
    pub view_departments: bool,
    pub view_doctor_list: bool,
    pub view_own_statistics: bool,
    pub view_timeline: bool,
    pub add_doctor: bool,
    pub delete_doctor: bool,
    pub delete_team_leader: bool,
    pub delete_coordinator: bool,
    pub promote_to_team_leader: bool,
    pub promote_to_coordinator: bool,
    pub demote_team_leader: bool,
    pub move_doctor: bool,
    pub view_all_doctors: bool,
    pub view_clinic_doctors: bool,
    pub view_doctor_profile: bool,
    pub edit_own_profile: bool,
    pub edit_any_profile: bool,
    pub reset_password: bool,
    pub view_all_clinics: bool,
    pub view_own_clinic: bool,
    pub manage_patients: bool,
    pub view_archive: bool,
}

/// Resolve the capability set granted by a role.
///
/// Pure and total over the closed `Role` enumeration; safe to call any number
/// of times. An out-of-range role is unrepresentable, so there is no error
/// path here.
pub fn resolve(role: Role) -> CapabilitySet {
    match role {
        Role::SuperAdmin => CapabilitySet {
            view_departments: true,
            view_doctor_list: true,
            view_own_statistics: true,
            view_timeline: false,
            add_doctor: true,
            delete_doctor: true,
            delete_team_leader: true,
            delete_coordinator: true,
            promote_to_team_leader: true,
            promote_to_coordinator: true,
            demote_team_leader: true,
            move_doctor: true,
            view_all_doctors: true,
            view_clinic_doctors: true,
            view_doctor_profile: true,
            edit_own_profile: false,
            edit_any_profile: true,
            reset_password: true,
            view_all_clinics: true,
            view_own_clinic: true,
            manage_patients: true,
            view_archive: true,
        },
        Role::Coordinator => CapabilitySet {
            view_departments: true,
            view_doctor_list: true,
            view_own_statistics: true,
            view_timeline: false,
            add_doctor: true,
            delete_doctor: true,
            delete_team_leader: true,
            delete_coordinator: false,
            promote_to_team_leader: true,
            promote_to_coordinator: false,
            demote_team_leader: true,
            move_doctor: true,
            view_all_doctors: true,
            view_clinic_doctors: true,
            view_doctor_profile: true,
            edit_own_profile: false,
            edit_any_profile: false,
            reset_password: false,
            view_all_clinics: true,
            view_own_clinic: true,
            manage_patients: true,
            view_archive: true,
        },
        Role::TeamLeader => CapabilitySet {
            view_departments: false,
            view_doctor_list: true,
            view_own_statistics: true,
            view_timeline: true,
            add_doctor: false,
            delete_doctor: false,
            delete_team_leader: false,
            delete_coordinator: false,
            promote_to_team_leader: false,
            promote_to_coordinator: false,
            demote_team_leader: false,
            move_doctor: false,
            view_all_doctors: false,
            view_clinic_doctors: true,
            view_doctor_profile: true,
            edit_own_profile: false,
            edit_any_profile: false,
            reset_password: false,
            view_all_clinics: false,
            view_own_clinic: true,
            manage_patients: true,
            view_archive: false,
        },
        Role::Doctor => CapabilitySet {
            view_departments: false,
            view_doctor_list: true,
            view_own_statistics: true,
            view_timeline: true,
            add_doctor: false,
            delete_doctor: false,
            delete_team_leader: false,
            delete_coordinator: false,
            promote_to_team_leader: false,
            promote_to_coordinator: false,
            demote_team_leader: false,
            move_doctor: false,
            view_all_doctors: false,
            view_clinic_doctors: true,
            view_doctor_profile: false,
            edit_own_profile: false,
            edit_any_profile: false,
            reset_password: false,
            view_all_clinics: false,
            view_own_clinic: true,
            manage_patients: true,
            view_archive: false,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_ROLES: [Role; 4] = [
        Role::SuperAdmin,
        Role::Coordinator,
        Role::TeamLeader,
        Role::Doctor,
    ];

    /// Expected set from one row of the grant table, in field order.
    fn caps(flags: [bool; 22]) -> CapabilitySet {
        CapabilitySet {
            view_departments: flags[0],
            view_doctor_list: flags[1],
            view_own_statistics: flags[2],
            view_timeline: flags[3],
            add_doctor: flags[4],
            delete_doctor: flags[5],
            delete_team_leader: flags[6],
            delete_coordinator: flags[7],
            promote_to_team_leader: flags[8],
            promote_to_coordinator: flags[9],
            demote_team_leader: flags[10],
            move_doctor: flags[11],
            view_all_doctors: flags[12],
            view_clinic_doctors: flags[13],
            view_doctor_profile: flags[14],
            edit_own_profile: flags[15],
            edit_any_profile: flags[16],
            reset_password: flags[17],
            view_all_clinics: flags[18],
            view_own_clinic: flags[19],
            manage_patients: flags[20],
            view_archive: flags[21],
        }
    }

    #[test]
    fn resolve_is_deterministic() {
        for role in ALL_ROLES {
            assert_eq!(resolve(role), resolve(role));
        }
    }

    #[test]
    fn resolve_matches_the_authored_grant_table_exactly() {
        const T: bool = true;
        const F: bool = false;

        let table = [
            (
                Role::SuperAdmin,
                [
                    T, T, T, F, T, T, T, T, T, T, T, T, T, T, T, F, T, T, T, T, T, T,
                ],
            ),
            (
                Role::Coordinator,
                [
                    T, T, T, F, T, T, T, F, T, F, T, T, T, T, T, F, F, F, T, T, T, T,
                ],
            ),
            (
                Role::TeamLeader,
                [
                    F, T, T, T, F, F, F, F, F, F, F, F, F, T, T, F, F, F, F, T, T, F,
                ],
            ),
            (
                Role::Doctor,
                [
                    F, T, T, T, F, F, F, F, F, F, F, F, F, T, F, F, F, F, F, T, T, F,
                ],
            ),
        ];

        for (role, flags) in table {
            assert_eq!(resolve(role), caps(flags), "grant table mismatch for {role}");
        }
    }

    #[test]
    fn super_admin_holds_every_grant_except_own_profile_and_timeline() {
        let caps = resolve(Role::SuperAdmin);
        assert!(caps.view_departments);
        assert!(caps.delete_coordinator);
        assert!(caps.promote_to_coordinator);
        assert!(caps.edit_any_profile);
        assert!(caps.reset_password);
        assert!(caps.view_archive);
        assert!(!caps.view_timeline);
        assert!(!caps.edit_own_profile);
    }

    #[test]
    fn coordinator_cannot_touch_coordinators_or_profiles() {
        let caps = resolve(Role::Coordinator);
        assert!(caps.view_departments);
        assert!(caps.add_doctor);
        assert!(caps.delete_team_leader);
        assert!(caps.demote_team_leader);
        assert!(caps.view_all_clinics);
        assert!(!caps.delete_coordinator);
        assert!(!caps.promote_to_coordinator);
        assert!(!caps.edit_any_profile);
        assert!(!caps.reset_password);
        assert!(!caps.view_timeline);
    }

    #[test]
    fn team_leader_sees_timeline_and_own_clinic_only() {
        let caps = resolve(Role::TeamLeader);
        assert!(caps.view_timeline);
        assert!(caps.view_doctor_list);
        assert!(caps.view_clinic_doctors);
        assert!(caps.view_doctor_profile);
        assert!(caps.view_own_clinic);
        assert!(caps.manage_patients);
        assert!(!caps.view_departments);
        assert!(!caps.view_all_doctors);
        assert!(!caps.view_all_clinics);
        assert!(!caps.add_doctor);
        assert!(!caps.view_archive);
    }

    #[test]
    fn doctor_grant_matches_table() {
        let caps = resolve(Role::Doctor);
        assert!(!caps.view_doctor_profile);
        assert!(caps.view_timeline);
        assert!(caps.manage_patients);
        assert!(!caps.edit_any_profile);
        assert!(caps.view_doctor_list);
        assert!(caps.view_own_statistics);
        assert!(caps.view_clinic_doctors);
        assert!(caps.view_own_clinic);
        assert!(!caps.view_departments);
        assert!(!caps.delete_doctor);
        assert!(!caps.move_doctor);
    }

    #[test]
    fn everyone_can_list_doctors_and_manage_patients() {
        for role in ALL_ROLES {
            let caps = resolve(role);
            assert!(caps.view_doctor_list, "{role} should list doctors");
            assert!(caps.view_own_statistics, "{role} should see own statistics");
            assert!(caps.view_clinic_doctors, "{role} should see clinic doctors");
            assert!(caps.view_own_clinic, "{role} should see own clinic");
            assert!(caps.manage_patients, "{role} should manage patients");
            assert!(!caps.edit_own_profile, "{role} cannot edit own profile");
        }
    }
}
