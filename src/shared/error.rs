//! Shared Error Types
//!
//! Two layers of failure are distinguished:
//!
//! - `RemoteError` - what the remote store reports (network, HTTP status,
//!   malformed payload). The coordinator treats every remote rejection
//!   uniformly.
//! - `SyncError` - the coordinator's classification into the two kinds that
//!   matter to callers: hydration failed (`Load`) or a remote write failed
//!   (`Save`). Both carry a display-ready message and neither is fatal: every
//!   failure path leaves the in-memory snapshot intact and operable.
//!
//! # Thread Safety
//!
//! All error types are `Send + Sync` and can be safely shared across thread
//! boundaries.

use thiserror::Error;

/// Failure reported by the remote store
#[derive(Debug, Error, Clone)]
pub enum RemoteError {
    /// Transport-level failure (endpoint unreachable, timeout, DNS)
    #[error("network error: {message}")]
    Network {
        /// Human-readable error message
        message: String,
    },

    /// The endpoint answered with a non-success status
    #[error("remote endpoint returned HTTP {status}")]
    Http {
        /// HTTP status code
        status: u16,
    },

    /// The endpoint answered but the payload could not be decoded
    #[error("malformed payload: {message}")]
    Malformed {
        /// Human-readable error message
        message: String,
    },
}

impl RemoteError {
    /// Create a new network error
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
        }
    }

    /// Create a new malformed-payload error
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::Malformed {
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for RemoteError {
    fn from(err: serde_json::Error) -> Self {
        Self::malformed(format!("JSON error: {}", err))
    }
}

/// Classified synchronization failure exposed to callers
#[derive(Debug, Error, Clone)]
pub enum SyncError {
    /// Hydration from the remote store failed; the snapshot degraded to
    /// defaults and the application remains usable offline
    #[error("load failed: {message}")]
    Load {
        /// Display-ready error message
        message: String,
    },

    /// A remote write failed; local edits are preserved and the save is
    /// retried on the next mutation
    #[error("save failed: {message}")]
    Save {
        /// Display-ready error message
        message: String,
    },
}

impl SyncError {
    /// Classify a remote failure observed during hydration
    pub fn load(err: &RemoteError) -> Self {
        Self::Load {
            message: err.to_string(),
        }
    }

    /// Classify a remote failure observed during a save
    pub fn save(err: &RemoteError) -> Self {
        Self::Save {
            message: err.to_string(),
        }
    }

    /// The display-ready message carried by either kind
    pub fn message(&self) -> &str {
        match self {
            Self::Load { message } | Self::Save { message } => message,
        }
    }
}
