//! Explicit session lifecycle.
//!
//! The currently signed-in staff member is held in an owned [`Session`] value
//! passed to whatever needs it, never in ambient global state. The session
//! keeps the active [`Identity`] and the [`CapabilitySet`] derived from its
//! role in lock-step: capabilities are recomputed on every identity change,
//! and an absent identity always means an absent capability set.
//!
//! Persistence is explicit. Call [`Session::persist`] after a lifecycle
//! change to mirror the session into a [`SessionStore`], and
//! [`Session::restore`] at startup to rebuild it.

use crate::error::ClinicResult;
use crate::identity::Identity;
use crate::permissions::{resolve, CapabilitySet};
use crate::stores::SessionStore;

/// The active sign-in state, exactly one identity at a time.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    identity: Option<Identity>,
    capabilities: Option<CapabilitySet>,
}

impl Session {
    /// A session with nobody signed in.
    pub fn signed_out() -> Self {
        Self::default()
    }

    /// Rebuild a session from whatever the store holds.
    ///
    /// A store with no persisted identity yields a signed-out session.
    ///
    /// # Errors
    ///
    /// Returns a `ClinicError` if the store itself fails to read.
    pub fn restore(store: &dyn SessionStore) -> ClinicResult<Self> {
        let mut session = Self::signed_out();
        if let Some(identity) = store.load()? {
            session.sign_in(identity);
        }
        Ok(session)
    }

    /// Install `identity` as the active sign-in, replacing any previous one.
    pub fn sign_in(&mut self, identity: Identity) {
        tracing::debug!(staff = %identity.id, role = %identity.role, "signing in");
        self.capabilities = Some(resolve(identity.role));
        self.identity = Some(identity);
    }

    /// Overwrite the active profile after an edit, recomputing capabilities.
    ///
    /// Signing in an absent session this way is equivalent to [`sign_in`];
    /// a profile update can arrive while restore is still pending.
    ///
    /// [`sign_in`]: Session::sign_in
    pub fn update_profile(&mut self, identity: Identity) {
        tracing::debug!(staff = %identity.id, "updating active profile");
        self.capabilities = Some(resolve(identity.role));
        self.identity = Some(identity);
    }

    /// Clear the active identity and its capabilities.
    pub fn sign_out(&mut self) {
        if let Some(identity) = self.identity.take() {
            tracing::debug!(staff = %identity.id, "signing out");
        }
        self.capabilities = None;
    }

    /// Mirror the current state into `store`: save the active identity, or
    /// clear the store when signed out.
    ///
    /// # Errors
    ///
    /// Returns a `ClinicError` if the store fails to write.
    pub fn persist(&self, store: &dyn SessionStore) -> ClinicResult<()> {
        match &self.identity {
            Some(identity) => store.save(identity),
            None => store.clear(),
        }
    }

    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    pub fn capabilities(&self) -> Option<&CapabilitySet> {
        self.capabilities.as_ref()
    }

    pub fn is_signed_in(&self) -> bool {
        self.identity.is_some()
    }
}
