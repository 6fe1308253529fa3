//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into core
//! services, so no operation reads process-wide environment variables while
//! handling a request. This keeps behaviour consistent across threads and test
//! harnesses.

use crate::constants::SESSION_FILE_NAME;
use crate::error::{ClinicError, ClinicResult};
use std::path::{Path, PathBuf};

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    session_dir: PathBuf,
}

impl CoreConfig {
    /// Create a new `CoreConfig` rooted at the given session storage directory.
    pub fn new(session_dir: PathBuf) -> ClinicResult<Self> {
        if session_dir.as_os_str().is_empty() {
            return Err(ClinicError::InvalidInput(
                "session_dir cannot be empty".into(),
            ));
        }

        Ok(Self { session_dir })
    }

    pub fn session_dir(&self) -> &Path {
        &self.session_dir
    }

    /// Path of the single persisted session file.
    pub fn session_file(&self) -> PathBuf {
        self.session_dir.join(SESSION_FILE_NAME)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_empty_session_dir() {
        let err = CoreConfig::new(PathBuf::new()).expect_err("empty dir must be rejected");
        assert!(matches!(err, ClinicError::InvalidInput(_)));
    }

    #[test]
    fn session_file_lives_under_the_session_dir() {
        let cfg = CoreConfig::new(PathBuf::from("/data/app")).expect("valid config");
        assert_eq!(cfg.session_dir(), Path::new("/data/app"));
        assert_eq!(cfg.session_file(), PathBuf::from("/data/app/session.json"));
    }
}
