//! # Synchronization Engine
//!
//! The coordinator and its supporting pieces:
//!
//! - **Coordinator**: mutation entry points, the load/save protocol, and the
//!   sync-status state machine
//! - **Debounce**: the cancellable timer that coalesces rapid edits
//! - **Status**: the observable `Offline | Synced | Unsaved | Syncing | Error`
//!   signal
//!
//! ## State machine
//!
//! ```text
//! OFFLINE  --(endpoint configured & mutation)--> UNSAVED
//! SYNCED   --(mutation)--> UNSAVED
//! UNSAVED  --(debounce timer fires)--> SYNCING
//! SYNCING  --(remote save ok)--> SYNCED
//! SYNCING  --(remote save fails)--> ERROR
//! ERROR    --(mutation)--> UNSAVED
//! any      --(endpoint cleared)--> OFFLINE
//! ```
//!
//! Initial state is `OFFLINE` until hydration completes. There is no terminal
//! state; the machine runs for the process lifetime.

pub mod coordinator;
pub mod debounce;
pub mod status;

use std::time::Duration;

pub use coordinator::SyncCoordinator;
pub use debounce::DebounceTimer;
pub use status::{SyncSignal, SyncStatus};

/// Debounce window applied after the last mutation before a remote write
const DEFAULT_DEBOUNCE: Duration = Duration::from_secs(2);

/// Configuration for the sync coordinator
#[derive(Debug, Clone)]
pub struct SyncConfig {
    /// Delay after the last mutation before the aggregate is pushed
    pub debounce: Duration,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            debounce: DEFAULT_DEBOUNCE,
        }
    }
}

impl SyncConfig {
    /// Config with a custom debounce window
    pub fn with_debounce(debounce: Duration) -> Self {
        Self { debounce }
    }
}
