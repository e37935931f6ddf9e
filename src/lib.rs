//! # BigEngine Sync
//!
//! Local-state / remote-persistence synchronization engine for the
//! "A Big Engine" vehicle-service application.
//!
//! The crate owns the authoritative in-memory copy of all application data
//! (service submissions, user roster, settings), coalesces rapid local edits
//! into a single remote write through a fixed debounce window, and exposes a
//! sync-status signal for presentation.
//!
//! # Module Structure
//!
//! - **`shared`** - Domain types used by every module
//!   - Service submissions with tyre/battery/add-on detail lines
//!   - User roster with credential redaction
//!   - Settings and the `AppData` aggregate
//! - **`config`** - Local durable configuration (TOML on disk)
//! - **`remote`** - The `RemoteStore` abstraction and its HTTP implementation
//! - **`state`** - `ApplicationState`, the single owned snapshot
//! - **`session`** - Session marker persistence and login validation
//! - **`sync`** - The `SyncCoordinator`, debounce timer, and status signal
//!
//! # Usage
//!
//! ```rust,no_run
//! use bigengine_sync::config::ConfigStore;
//! use bigengine_sync::remote::HttpRemoteStore;
//! use bigengine_sync::sync::{SyncConfig, SyncCoordinator};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ConfigStore::open_default()?;
//! let coordinator = SyncCoordinator::new(HttpRemoteStore::new(), config, SyncConfig::default());
//!
//! // Hydrate once at startup; a failure degrades to defaults, never fatal.
//! let _ = coordinator.hydrate().await;
//!
//! // Local mutations always succeed and schedule a debounced remote save:
//! // coordinator.save_submission(service, ServiceStatus::Submitted).await;
//! # Ok(())
//! # }
//! ```
//!
//! # Concurrency
//!
//! Mutations, timer callbacks, and remote-call completions interleave on the
//! tokio runtime; the snapshot lives behind a single `RwLock` and is only
//! written through the coordinator's mutation entry points (single-writer
//! rule). At most one debounce timer is live at a time and at most one remote
//! save is in flight.

/// Domain types shared by every module
pub mod shared;

/// Local durable configuration
pub mod config;

/// Remote persistence endpoint
pub mod remote;

/// Owned application state snapshot
pub mod state;

/// Session marker persistence and login validation
pub mod session;

/// Synchronization coordinator, debounce timer, and status signal
pub mod sync;
