//! # Sync Coordinator
//!
//! Keeps the application snapshot mirrored to the remote store without
//! performing a remote write per keystroke, while giving the caller an
//! accurate, low-latency signal of sync health.
//!
//! ## Protocol
//!
//! - `hydrate` runs once at startup: load the aggregate, or degrade to
//!   defaults and surface an error signal; never fatal.
//! - Every mutation entry point updates the snapshot, then re-arms a single
//!   debounce timer. Only the most recent mutation within the window survives
//!   to trigger a write — last-write-wins batching of the whole aggregate.
//! - On timer expiry the snapshot is captured fresh (at firing time, not at
//!   arming time) and pushed. Success moves to `Synced` unless mutations
//!   landed while the save was in flight, in which case a new cycle is armed.
//!   Failure moves to `Error` with the snapshot untouched; mutations that
//!   queued mid-flight also re-arm a cycle, otherwise the next mutation or a
//!   [`SyncCoordinator::force_sync`] retries the full aggregate.
//! - An empty `remote_endpoint_url` is a hard policy switch: no timer, no
//!   write, state forced to `Offline`.

use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use chrono::{TimeDelta, Utc};
use tokio::sync::{broadcast, watch};

use crate::config::ConfigStore;
use crate::remote::RemoteStore;
use crate::shared::{AppData, Service, ServiceStatus, Settings, SyncError, User};
use crate::state::ApplicationState;
use crate::sync::debounce::DebounceTimer;
use crate::sync::status::{StatusChannel, SyncSignal, SyncStatus};
use crate::sync::SyncConfig;

/// The local-state / remote-persistence synchronization engine
pub struct SyncCoordinator<R: RemoteStore> {
    inner: Arc<Inner<R>>,
}

struct Inner<R> {
    store: R,
    config: ConfigStore,
    state: ApplicationState,
    status: StatusChannel,
    timer: DebounceTimer,
    debounce: Duration,
    /// Bumped on every save-relevant mutation; lets a completing save detect
    /// work that queued while it was in flight
    mutation_seq: AtomicU64,
    /// At most one remote save runs at a time
    save_in_flight: AtomicBool,
}

impl<R: RemoteStore> Clone for SyncCoordinator<R> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<R: RemoteStore> SyncCoordinator<R> {
    /// Create a coordinator over a remote store and the local durable config
    pub fn new(store: R, config: ConfigStore, sync_config: SyncConfig) -> Self {
        Self {
            inner: Arc::new(Inner {
                store,
                config,
                state: ApplicationState::default(),
                status: StatusChannel::new(),
                timer: DebounceTimer::new(),
                debounce: sync_config.debounce,
                mutation_seq: AtomicU64::new(0),
                save_in_flight: AtomicBool::new(false),
            }),
        }
    }

    /// Read-only access to the owned snapshot
    pub fn state(&self) -> &ApplicationState {
        &self.inner.state
    }

    /// Current sync signal
    pub fn status(&self) -> SyncSignal {
        self.inner.status.get()
    }

    /// Subscription tracking the current sync signal
    pub fn subscribe(&self) -> watch::Receiver<SyncSignal> {
        self.inner.status.subscribe()
    }

    /// Stream of every status transition, uncoalesced
    pub fn events(&self) -> broadcast::Receiver<SyncSignal> {
        self.inner.status.events()
    }

    /// Hydrate the snapshot from the remote store. Called exactly once at
    /// startup. Failure degrades to an empty snapshot (the locally persisted
    /// settings are retained so sync can recover) and surfaces an `Error`
    /// signal; the caller can always proceed.
    pub async fn hydrate(&self) -> Result<AppData, SyncError> {
        let local = match self.inner.config.load() {
            Ok(settings) => settings,
            Err(err) => {
                tracing::warn!(error = %err, "local settings unreadable, using defaults");
                Settings::default()
            }
        };
        self.inner
            .state
            .write(|data| data.settings = local.clone())
            .await;

        if !local.sync_enabled() {
            tracing::info!("no remote endpoint configured, starting offline");
            return Ok(self.inner.state.read().await);
        }

        match self.inner.store.load(&local.remote_endpoint_url).await {
            Ok(data) => {
                self.inner.state.write(|snapshot| *snapshot = data).await;
                let snapshot = self.inner.state.read().await;
                if snapshot.settings.sync_enabled() {
                    self.inner.status.set(SyncSignal::synced());
                }
                Ok(snapshot)
            }
            Err(err) => {
                let sync_err = SyncError::load(&err);
                tracing::error!(error = %sync_err, "failed to load initial data");
                self.inner
                    .state
                    .write(|snapshot| {
                        *snapshot = AppData::default();
                        snapshot.settings = local;
                    })
                    .await;
                self.inner.status.set(SyncSignal::error(sync_err.message()));
                Err(sync_err)
            }
        }
    }

    /// Upsert a submission, matched by `submission_id`: an existing record is
    /// replaced in place (sequence position preserved), a new one is
    /// appended. Status and timestamp are stamped here, not by the caller;
    /// the timestamp strictly advances on every save of the same id.
    pub async fn save_submission(&self, mut service: Service, status: ServiceStatus) -> Service {
        service.status = status;
        let stamped = self
            .inner
            .state
            .write(|data| {
                let now = Utc::now();
                match data
                    .submissions
                    .iter_mut()
                    .find(|s| s.submission_id == service.submission_id)
                {
                    Some(existing) => {
                        service.timestamp = if now > existing.timestamp {
                            now
                        } else {
                            // Clock did not advance between saves; still
                            // guarantee a strictly greater stamp.
                            existing.timestamp + TimeDelta::milliseconds(1)
                        };
                        *existing = service.clone();
                    }
                    None => {
                        service.timestamp = now;
                        data.submissions.push(service.clone());
                    }
                }
                service
            })
            .await;
        tracing::info!(submission_id = %stamped.submission_id, status = ?stamped.status, "submission saved");
        self.notify_mutation().await;
        stamped
    }

    /// Replace the user roster. Usernames are unique; duplicates keep their
    /// first occurrence.
    pub async fn replace_users(&self, users: Vec<User>) {
        self.inner
            .state
            .write(|data| {
                let mut roster: Vec<User> = Vec::with_capacity(users.len());
                for user in users {
                    if roster.iter().all(|u| u.username != user.username) {
                        roster.push(user);
                    } else {
                        tracing::warn!(username = %user.username, "duplicate username dropped");
                    }
                }
                data.users = roster;
            })
            .await;
        self.notify_mutation().await;
    }

    /// Replace the settings. Persisted to the local durable config
    /// synchronously — sync eligibility changes immediately. Clearing the
    /// endpoint forces `Offline` and cancels any armed timer; configuring it
    /// while `Offline` optimistically reports `Synced` (connectivity is
    /// assumed until the next save attempt proves otherwise).
    pub async fn update_settings(&self, settings: Settings) {
        if let Err(err) = self.inner.config.save(&settings) {
            // Local persistence trouble never blocks the in-memory update.
            tracing::warn!(error = %err, "failed to persist settings locally");
        }

        let previous = self.inner.status.get();
        self.inner
            .state
            .write(|data| data.settings = settings.clone())
            .await;

        if !settings.sync_enabled() {
            self.inner.timer.cancel();
            self.inner.status.set(SyncSignal::offline());
            return;
        }

        if previous.status == SyncStatus::Offline {
            self.inner.status.set(SyncSignal::synced());
        }

        // The settings are part of the aggregate, so this is a mutation too.
        self.notify_mutation().await;
    }

    /// Skip the debounce window and push the current snapshot now. Manual
    /// retry path out of the `Error` state; a no-op while offline.
    pub async fn force_sync(&self) {
        if !self.inner.state.settings().await.sync_enabled() {
            self.inner.status.set(SyncSignal::offline());
            return;
        }
        self.inner.timer.cancel();
        Inner::run_save_cycle(Arc::clone(&self.inner)).await;
    }

    /// React to a completed local mutation: force `Offline` when no endpoint
    /// is configured, otherwise mark `Unsaved`, clear any stale error, and
    /// cancel-then-arm the debounce timer.
    async fn notify_mutation(&self) {
        if !self.inner.state.settings().await.sync_enabled() {
            self.inner.timer.cancel();
            self.inner.status.set(SyncSignal::offline());
            return;
        }
        self.inner.mutation_seq.fetch_add(1, Ordering::SeqCst);
        self.inner.status.set(SyncSignal::unsaved());
        Inner::arm_save_timer(&self.inner);
    }
}

impl<R: RemoteStore> Inner<R> {
    fn arm_save_timer(inner: &Arc<Self>) {
        let cycle = Arc::clone(inner);
        inner
            .timer
            .arm(inner.debounce, move || Self::run_save_cycle(cycle));
    }

    /// One save cycle: capture the snapshot at firing time, push it, and
    /// resolve the state machine from the outcome.
    async fn run_save_cycle(inner: Arc<Self>) {
        // Sampled before the snapshot capture: a mutation racing the capture
        // is then counted as pending and triggers another cycle instead of
        // being reported saved.
        let seq_at_fire = inner.mutation_seq.load(Ordering::SeqCst);
        let snapshot = inner.state.read().await;
        if !snapshot.settings.sync_enabled() {
            // Endpoint cleared between arming and firing.
            inner.status.set(SyncSignal::offline());
            return;
        }
        if inner.save_in_flight.swap(true, Ordering::SeqCst) {
            // The in-flight save re-arms on completion when work queued
            // behind it, so this fire can simply stand down.
            return;
        }

        inner.status.set(SyncSignal::syncing());
        tracing::info!(
            submissions = snapshot.submissions.len(),
            users = snapshot.users.len(),
            "pushing snapshot to remote store"
        );

        let result = inner
            .store
            .save(&snapshot.settings.remote_endpoint_url, &snapshot)
            .await;
        inner.save_in_flight.store(false, Ordering::SeqCst);

        // The endpoint may have been cleared while the save was in flight;
        // the result is still applied internally but the observed state is
        // forced offline.
        if !inner.state.settings().await.sync_enabled() {
            inner.status.set(SyncSignal::offline());
            return;
        }

        match result {
            Ok(()) => {
                if inner.mutation_seq.load(Ordering::SeqCst) != seq_at_fire {
                    // Mutations queued during the in-flight save; the result
                    // must not mask the pending work.
                    inner.status.set(SyncSignal::unsaved());
                    Self::arm_save_timer(&inner);
                } else {
                    inner.status.set(SyncSignal::synced());
                }
            }
            Err(err) => {
                let sync_err = SyncError::save(&err);
                tracing::error!(error = %sync_err, "remote save failed, local edits preserved");
                inner.status.set(SyncSignal::error(sync_err.message()));
                if inner.mutation_seq.load(Ordering::SeqCst) != seq_at_fire {
                    // A mutation that queued behind this save stood down at
                    // the in-flight guard; its timer is gone, so the next
                    // cycle has to be armed here.
                    Self::arm_save_timer(&inner);
                }
            }
        }
    }
}
