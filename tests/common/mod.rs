//! Common test utilities
//!
//! A scriptable in-memory [`RemoteStore`] plus fixture helpers shared by the
//! integration tests. The mock records every save call (endpoint + payload)
//! and can be told to fail, or to hold each save in flight for a while so
//! tests can interleave mutations with a pending remote call.

#![allow(dead_code)]

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use bigengine_sync::config::ConfigStore;
use bigengine_sync::remote::RemoteStore;
use bigengine_sync::shared::{AppData, RemoteError, Role, Service, Settings, User};
use bigengine_sync::sync::{SyncConfig, SyncCoordinator};

pub const ENDPOINT: &str = "https://sheets.example/app";

/// Scriptable remote store for coordinator tests
#[derive(Clone, Default)]
pub struct MockRemoteStore {
    inner: Arc<MockInner>,
}

#[derive(Default)]
struct MockInner {
    load_data: Mutex<Option<AppData>>,
    saves: Mutex<Vec<(String, AppData)>>,
    fail_load: AtomicBool,
    fail_saves: AtomicBool,
    save_delay: Mutex<Option<Duration>>,
}

impl MockRemoteStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Data the next `load` call will return
    pub fn set_load_data(&self, data: AppData) {
        *self.inner.load_data.lock().unwrap() = Some(data);
    }

    pub fn set_fail_load(&self, fail: bool) {
        self.inner.fail_load.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_saves(&self, fail: bool) {
        self.inner.fail_saves.store(fail, Ordering::SeqCst);
    }

    /// Hold every save in flight for `delay` before it resolves
    pub fn set_save_delay(&self, delay: Duration) {
        *self.inner.save_delay.lock().unwrap() = Some(delay);
    }

    pub fn save_count(&self) -> usize {
        self.inner.saves.lock().unwrap().len()
    }

    /// Recorded saves, in call order
    pub fn saves(&self) -> Vec<(String, AppData)> {
        self.inner.saves.lock().unwrap().clone()
    }

    pub fn last_save(&self) -> AppData {
        self.inner
            .saves
            .lock()
            .unwrap()
            .last()
            .expect("no save recorded")
            .1
            .clone()
    }
}

impl RemoteStore for MockRemoteStore {
    async fn load(&self, _endpoint: &str) -> Result<AppData, RemoteError> {
        if self.inner.fail_load.load(Ordering::SeqCst) {
            return Err(RemoteError::network("connection refused"));
        }
        Ok(self
            .inner
            .load_data
            .lock()
            .unwrap()
            .clone()
            .unwrap_or_default())
    }

    async fn save(&self, endpoint: &str, data: &AppData) -> Result<(), RemoteError> {
        self.inner
            .saves
            .lock()
            .unwrap()
            .push((endpoint.to_string(), data.clone()));
        let delay = *self.inner.save_delay.lock().unwrap();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }
        if self.inner.fail_saves.load(Ordering::SeqCst) {
            return Err(RemoteError::Http { status: 502 });
        }
        Ok(())
    }
}

/// Settings pointing at the test endpoint
pub fn online_settings() -> Settings {
    Settings {
        remote_endpoint_url: ENDPOINT.to_string(),
        upload_endpoint_url: String::new(),
        logo_url: String::new(),
    }
}

/// A populated aggregate the mock can serve on load
pub fn seeded_app_data() -> AppData {
    let mut data = AppData::default();
    data.submissions.push(Service::new());
    data.users.push(User::new("admin", "letmein", Role::Admin));
    data.settings = online_settings();
    data
}

/// Coordinator over a mock store with a 2-second debounce and a config file
/// in a fresh temp dir. The temp dir guard must stay alive for the test.
pub fn coordinator(
    store: MockRemoteStore,
) -> (SyncCoordinator<MockRemoteStore>, tempfile::TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let config = ConfigStore::at_path(dir.path().join("settings.toml"));
    let coordinator = SyncCoordinator::new(
        store,
        config,
        SyncConfig::with_debounce(Duration::from_secs(2)),
    );
    (coordinator, dir)
}

/// Coordinator already hydrated into the `Synced` state
pub async fn synced_coordinator(
    store: &MockRemoteStore,
) -> (SyncCoordinator<MockRemoteStore>, tempfile::TempDir) {
    store.set_load_data(seeded_app_data());
    let dir = tempfile::tempdir().unwrap();
    let config = ConfigStore::at_path(dir.path().join("settings.toml"));
    config.save(&online_settings()).unwrap();
    let coordinator = SyncCoordinator::new(
        store.clone(),
        config,
        SyncConfig::with_debounce(Duration::from_secs(2)),
    );
    coordinator.hydrate().await.unwrap();
    (coordinator, dir)
}

/// Let spawned timer/save tasks run to quiescence under paused time
pub async fn settle() {
    tokio::time::sleep(Duration::from_millis(10)).await;
}
