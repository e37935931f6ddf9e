//! Remote Persistence Endpoint
//!
//! The remote store is an opaque, fallible persistence endpoint with
//! unbounded latency. It is consumed exactly two ways: one `load` at startup
//! to hydrate the snapshot, and a `save` of the full aggregate per debounce
//! expiry. The store itself is a pure transport: the coordinator resolves the
//! endpoint URL from the current settings at call time, so an endpoint edit
//! takes effect on the very next remote call.

/// HTTP implementation backed by `reqwest`
pub mod http;

use std::future::Future;

use crate::shared::{AppData, RemoteError};

pub use http::HttpRemoteStore;

/// A key-value-ish persistence endpoint for the full aggregate
pub trait RemoteStore: Send + Sync + 'static {
    /// Fetch the complete aggregate from the endpoint
    fn load(&self, endpoint: &str) -> impl Future<Output = Result<AppData, RemoteError>> + Send;

    /// Persist the complete aggregate to the endpoint
    fn save(
        &self,
        endpoint: &str,
        data: &AppData,
    ) -> impl Future<Output = Result<(), RemoteError>> + Send;
}
