//! Sync Status Signal
//!
//! `SyncStatus` describes the relationship between local and remote state,
//! not domain data, and is held apart from the snapshot. The channel fans the
//! value out two ways: a `watch` for "what is it right now" and a `broadcast`
//! stream that delivers every transition uncoalesced, so an observer can see
//! `Unsaved` even when `Syncing` follows on the next tick.

use serde::{Deserialize, Serialize};
use tokio::sync::{broadcast, watch};

/// Transition-stream buffer; observers that lag further than this miss events
const EVENT_BUFFER: usize = 64;

/// The externally observable sync state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SyncStatus {
    /// No remote endpoint configured; nothing is ever pushed
    Offline,
    /// Local and remote copies match as far as we know
    Synced,
    /// Local edits exist that have not been pushed yet
    Unsaved,
    /// A remote write is in flight
    Syncing,
    /// The last remote operation failed; local edits are preserved
    Error,
}

/// Status plus optional display-ready error detail
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncSignal {
    pub status: SyncStatus,
    pub error: Option<String>,
}

impl SyncSignal {
    pub fn offline() -> Self {
        Self {
            status: SyncStatus::Offline,
            error: None,
        }
    }

    pub fn synced() -> Self {
        Self {
            status: SyncStatus::Synced,
            error: None,
        }
    }

    pub fn unsaved() -> Self {
        Self {
            status: SyncStatus::Unsaved,
            error: None,
        }
    }

    pub fn syncing() -> Self {
        Self {
            status: SyncStatus::Syncing,
            error: None,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            status: SyncStatus::Error,
            error: Some(message.into()),
        }
    }
}

impl Default for SyncSignal {
    fn default() -> Self {
        Self::offline()
    }
}

/// Fan-out channel for sync status transitions
pub(crate) struct StatusChannel {
    current: watch::Sender<SyncSignal>,
    events: broadcast::Sender<SyncSignal>,
}

impl StatusChannel {
    pub(crate) fn new() -> Self {
        let (current, _) = watch::channel(SyncSignal::offline());
        let (events, _) = broadcast::channel(EVENT_BUFFER);
        Self { current, events }
    }

    /// Publish a transition; emitted even when the value is unchanged, so a
    /// timer reset is observable as a repeated `Unsaved`.
    pub(crate) fn set(&self, signal: SyncSignal) {
        tracing::debug!(status = ?signal.status, error = ?signal.error, "sync status");
        self.current.send_replace(signal.clone());
        // No receivers is fine.
        let _ = self.events.send(signal);
    }

    pub(crate) fn get(&self) -> SyncSignal {
        self.current.borrow().clone()
    }

    pub(crate) fn subscribe(&self) -> watch::Receiver<SyncSignal> {
        self.current.subscribe()
    }

    pub(crate) fn events(&self) -> broadcast::Receiver<SyncSignal> {
        self.events.subscribe()
    }
}
