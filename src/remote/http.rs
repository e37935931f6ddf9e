//! HTTP Remote Store
//!
//! Talks JSON to the spreadsheet-backed web endpoint: `GET` returns the full
//! aggregate, `POST` replaces it. Any transport failure, non-success status,
//! or undecodable payload maps to a [`RemoteError`]; the coordinator treats
//! them all uniformly. Timeout policy lives in the `reqwest` client.

use reqwest::Client;

use crate::remote::RemoteStore;
use crate::shared::{AppData, RemoteError};

/// HTTP-backed implementation of [`RemoteStore`]
#[derive(Debug, Clone, Default)]
pub struct HttpRemoteStore {
    client: Client,
}

impl HttpRemoteStore {
    /// Create a store with a default client
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with a preconfigured client (timeouts, proxies)
    pub fn with_client(client: Client) -> Self {
        Self { client }
    }
}

impl RemoteStore for HttpRemoteStore {
    async fn load(&self, endpoint: &str) -> Result<AppData, RemoteError> {
        tracing::debug!(endpoint, "loading app data");
        let response = self
            .client
            .get(endpoint)
            .send()
            .await
            .map_err(|e| RemoteError::network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(endpoint, status = status.as_u16(), "load rejected");
            return Err(RemoteError::Http {
                status: status.as_u16(),
            });
        }

        let body = response
            .text()
            .await
            .map_err(|e| RemoteError::network(e.to_string()))?;
        let data: AppData = serde_json::from_str(&body)?;
        tracing::info!(
            endpoint,
            submissions = data.submissions.len(),
            users = data.users.len(),
            "loaded app data"
        );
        Ok(data)
    }

    async fn save(&self, endpoint: &str, data: &AppData) -> Result<(), RemoteError> {
        tracing::debug!(
            endpoint,
            submissions = data.submissions.len(),
            "saving app data"
        );
        let response = self
            .client
            .post(endpoint)
            .json(data)
            .send()
            .await
            .map_err(|e| RemoteError::network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(endpoint, status = status.as_u16(), "save rejected");
            return Err(RemoteError::Http {
                status: status.as_u16(),
            });
        }
        Ok(())
    }
}
