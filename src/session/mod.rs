//! Session Persistence and Login Validation
//!
//! A locally persisted "current identity" marker lets the app restore a
//! session at startup without re-authenticating. The marker carries username
//! and role only — the credential is stripped by construction. Authentication
//! policy itself stays with the caller; this module only checks a credential
//! against the roster.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::shared::{Role, User};

/// File name of the session marker
const SESSION_FILE: &str = "session.json";

/// Directory name under the platform data dir
const APP_DIR: &str = "bigengine";

/// Session errors
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("no data directory available on this platform")]
    NoDataDir,
    #[error("session I/O error: {0}")]
    Io(#[from] io::Error),
    #[error("session marker is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// The persisted current identity: username and role, credential stripped
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionUser {
    pub username: String,
    pub role: Role,
}

impl From<&User> for SessionUser {
    fn from(user: &User) -> Self {
        Self {
            username: user.username.clone(),
            role: user.role,
        }
    }
}

/// Durable store for the session marker
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Open the store at the platform-default location
    pub fn open_default() -> Result<Self, SessionError> {
        let dir = dirs::data_dir().ok_or(SessionError::NoDataDir)?;
        Ok(Self {
            path: dir.join(APP_DIR).join(SESSION_FILE),
        })
    }

    /// Open the store at an explicit path
    pub fn at_path(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the marker written by the last login, if any
    pub fn restore(&self) -> Result<Option<SessionUser>, SessionError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => {
                let user = serde_json::from_str(&contents)?;
                tracing::debug!(path = %self.path.display(), "restored session");
                Ok(Some(user))
            }
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    /// Write the marker after a successful login
    pub fn persist(&self, user: &User) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let marker = SessionUser::from(user);
        fs::write(&self.path, serde_json::to_string(&marker)?)?;
        tracing::info!(username = %marker.username, "session persisted");
        Ok(())
    }

    /// Remove the marker on logout; removing an absent marker is fine
    pub fn clear(&self) -> Result<(), SessionError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(err.into()),
        }
    }
}

/// Check a username/password pair against the roster.
///
/// Returns the matching user with the credential stripped, or `None` when the
/// username is unknown or the password does not match.
pub fn validate_login(roster: &[User], username: &str, password: Option<&str>) -> Option<User> {
    let user = roster.iter().find(|u| u.username == username)?;
    if user.password.as_deref() == password {
        Some(user.redacted())
    } else {
        tracing::debug!(username, "login rejected");
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Vec<User> {
        vec![
            User::new("admin", "letmein", Role::Admin),
            User::new("worker", "pw", Role::User),
        ]
    }

    #[test]
    fn test_validate_login_success_is_redacted() {
        let user = validate_login(&roster(), "admin", Some("letmein")).unwrap();
        assert_eq!(user.username, "admin");
        assert_eq!(user.role, Role::Admin);
        assert!(user.password.is_none());
    }

    #[test]
    fn test_validate_login_rejects_bad_password() {
        assert!(validate_login(&roster(), "admin", Some("wrong")).is_none());
        assert!(validate_login(&roster(), "admin", None).is_none());
    }

    #[test]
    fn test_validate_login_rejects_unknown_user() {
        assert!(validate_login(&roster(), "ghost", Some("pw")).is_none());
    }

    #[test]
    fn test_session_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::at_path(dir.path().join(SESSION_FILE));

        assert_eq!(store.restore().unwrap(), None);

        let user = User::new("admin", "letmein", Role::Admin);
        store.persist(&user).unwrap();

        let restored = store.restore().unwrap().unwrap();
        assert_eq!(restored.username, "admin");
        assert_eq!(restored.role, Role::Admin);

        // The marker on disk must not contain the credential.
        let raw = std::fs::read_to_string(store.path()).unwrap();
        assert!(!raw.contains("letmein"));

        store.clear().unwrap();
        assert_eq!(store.restore().unwrap(), None);
        // Clearing twice is not an error.
        store.clear().unwrap();
    }
}
