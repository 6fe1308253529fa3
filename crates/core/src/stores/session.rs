//! Session persistence.
//!
//! A [`SessionStore`] holds at most one serialized [`Identity`] so the app
//! can restore a sign-in across process restarts. Until a load succeeds,
//! callers must treat the session as signed out.
//!
//! [`JsonFileSessionStore`] is the on-device implementation: one pretty-printed
//! JSON file under the configured session directory. A corrupt file is
//! discarded with a warning rather than surfaced as an error, matching the
//! app's fall-through-to-login behaviour; genuine I/O failures are surfaced.

use std::fs;
use std::io;
use std::sync::Arc;

use crate::config::CoreConfig;
use crate::error::{ClinicError, ClinicResult};
use crate::identity::Identity;

/// Contract for persisting and restoring the single active identity.
pub trait SessionStore {
    /// Persist `identity`, replacing any previously stored one.
    fn save(&self, identity: &Identity) -> ClinicResult<()>;

    /// Restore the stored identity, or `None` when nothing usable is stored.
    fn load(&self) -> ClinicResult<Option<Identity>>;

    /// Remove any stored identity. Idempotent.
    fn clear(&self) -> ClinicResult<()>;
}

/// File-backed session store writing `session.json` under the configured
/// session directory.
#[derive(Clone)]
pub struct JsonFileSessionStore {
    cfg: Arc<CoreConfig>,
}

impl JsonFileSessionStore {
    pub fn new(cfg: Arc<CoreConfig>) -> Self {
        Self { cfg }
    }
}

impl SessionStore for JsonFileSessionStore {
    fn save(&self, identity: &Identity) -> ClinicResult<()> {
        fs::create_dir_all(self.cfg.session_dir()).map_err(ClinicError::SessionDirCreation)?;

        let json = serde_json::to_string_pretty(identity).map_err(ClinicError::Serialization)?;
        fs::write(self.cfg.session_file(), json).map_err(ClinicError::SessionWrite)?;
        Ok(())
    }

    fn load(&self) -> ClinicResult<Option<Identity>> {
        let path = self.cfg.session_file();
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(ClinicError::SessionRead(e)),
        };

        match serde_json::from_str::<Identity>(&contents) {
            Ok(identity) => Ok(Some(identity)),
            Err(e) => {
                // Unreadable session files fall through to a fresh login.
                tracing::warn!(
                    path = %path.display(),
                    error = %e,
                    "discarding unreadable session file"
                );
                Ok(None)
            }
        }
    }

    fn clear(&self) -> ClinicResult<()> {
        match fs::remove_file(self.cfg.session_file()) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ClinicError::SessionRemove(e)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::identity::{Identity, Role};
    use crate::session::Session;
    use dentiq_types::{EmailAddress, Label, StaffId};

    fn store_in(dir: &std::path::Path) -> JsonFileSessionStore {
        let cfg = CoreConfig::new(dir.join("session")).expect("valid config");
        JsonFileSessionStore::new(Arc::new(cfg))
    }

    fn identity() -> Identity {
        Identity::new(
            StaffId::new("lead-9").expect("valid id"),
            Label::new("Dr. Amara Okafor").expect("valid name"),
            EmailAddress::parse("amara@smileline.example").expect("valid email"),
            Role::TeamLeader,
        )
    }

    #[test]
    fn load_on_fresh_directory_yields_none() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = store_in(dir.path());
        assert!(store.load().expect("load").is_none());
    }

    #[test]
    fn identity_survives_a_store_restart() {
        let dir = tempfile::tempdir().expect("tempdir");

        store_in(dir.path()).save(&identity()).expect("save");

        // A second store over the same directory simulates a process restart.
        let restored = store_in(dir.path()).load().expect("load");
        assert_eq!(restored, Some(identity()));
    }

    #[test]
    fn clear_is_idempotent() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = store_in(dir.path());

        store.save(&identity()).expect("save");
        store.clear().expect("first clear");
        store.clear().expect("second clear");
        assert!(store.load().expect("load").is_none());
    }

    #[test]
    fn corrupt_session_file_degrades_to_signed_out() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = store_in(dir.path());

        store.save(&identity()).expect("save");
        fs::write(store.cfg.session_file(), "{ not json").expect("corrupt");

        assert!(store.load().expect("load").is_none());
    }

    #[test]
    fn session_round_trips_through_the_store() {
        let dir = tempfile::tempdir().expect("tempdir");
        let store = store_in(dir.path());

        let mut session = Session::signed_out();
        session.sign_in(identity());
        session.persist(&store).expect("persist");

        let restored = Session::restore(&store).expect("restore");
        assert_eq!(restored, session);

        session.sign_out();
        session.persist(&store).expect("persist sign-out");
        let restored = Session::restore(&store).expect("restore");
        assert!(!restored.is_signed_in());
    }
}
