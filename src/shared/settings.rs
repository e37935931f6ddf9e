//! Application Settings
//!
//! Three URL strings persisted both locally (see [`crate::config`]) and as
//! part of the remote aggregate. A non-empty `remote_endpoint_url` is the
//! sole switch that enables synchronization.

use serde::{Deserialize, Serialize};

/// Application settings
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Endpoint of the spreadsheet-backed remote store; empty means offline
    pub remote_endpoint_url: String,
    /// Endpoint used by the form for media uploads
    pub upload_endpoint_url: String,
    /// Custom logo shown in the header
    pub logo_url: String,
}

impl Settings {
    /// Whether remote synchronization is enabled
    pub fn sync_enabled(&self) -> bool {
        !self.remote_endpoint_url.is_empty()
    }
}
