//! The Application-Data Aggregate
//!
//! `AppData` is the complete payload mirrored to the remote store: every save
//! transmits the whole aggregate, never a partial update.

use serde::{Deserialize, Serialize};

use crate::shared::service::Service;
use crate::shared::settings::Settings;
use crate::shared::user::User;

/// The full in-memory aggregate of submissions, users, and settings
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppData {
    /// Insertion-ordered submissions, unique by `submission_id`
    pub submissions: Vec<Service>,
    /// Roster, unique by `username`
    pub users: Vec<User>,
    pub settings: Settings,
}

impl AppData {
    /// Find a submission by its stable id
    pub fn submission(&self, submission_id: &str) -> Option<&Service> {
        self.submissions
            .iter()
            .find(|s| s.submission_id == submission_id)
    }

    /// Find a roster entry by username
    pub fn user(&self, username: &str) -> Option<&User> {
        self.users.iter().find(|u| u.username == username)
    }

    /// Roster with every credential stripped, for read-only consumers
    pub fn users_redacted(&self) -> Vec<User> {
        self.users.iter().map(User::redacted).collect()
    }
}
