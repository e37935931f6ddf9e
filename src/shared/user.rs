//! User Roster Types
//!
//! Users are keyed by `username`, unique within the roster. The optional
//! `password` field is a secret: it is only ever read by the login validator,
//! and every surface handed to read-only consumers carries a redacted copy.

use serde::{Deserialize, Serialize};

/// Role assigned to a user account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    User,
}

/// A user account in the roster
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
    /// Secret credential; `None` on every redacted copy
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    pub role: Role,
}

impl User {
    pub fn new(username: impl Into<String>, password: impl Into<String>, role: Role) -> Self {
        Self {
            username: username.into(),
            password: Some(password.into()),
            role,
        }
    }

    /// Copy of this user with the credential stripped
    pub fn redacted(&self) -> Self {
        Self {
            username: self.username.clone(),
            password: None,
            role: self.role,
        }
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}
