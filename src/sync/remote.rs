//! HTTP client for the hoopoe task endpoints.
//!
//! The contract is four routes on one server:
//!
//! ```text
//! GET    /fetch-task        → full collection of lists (cards embedded)
//! POST   /add-task          ← new list or card JSON
//! PUT    /update-task       ← edited list or card JSON
//! POST   /update-task       ← moved card JSON (drag-and-drop path)
//! DELETE /delete-task/{id}
//! ```

use serde::Serialize;
use thiserror::Error;

use crate::board::List;
use crate::config::SyncConfig;

/// Failure talking to the remote store.
#[derive(Debug, Error)]
pub enum RemoteStoreError {
    /// Transport-level failure (connect, timeout, body decode).
    #[error("remote store request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The server answered outside the 2xx range.
    #[error("remote store returned HTTP {status} for {url}")]
    Status {
        status: reqwest::StatusCode,
        url: String,
    },
}

/// Client for the remote task store.
#[derive(Debug, Clone)]
pub struct RemoteStore {
    base_url: String,
    http: reqwest::Client,
}

impl RemoteStore {
    /// Build a client for the configured server.
    pub fn new(config: &SyncConfig) -> Result<Self, RemoteStoreError> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout())
            .build()?;
        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    /// Absolute URL of the fetch-all endpoint. Doubles as the cache key.
    pub fn fetch_url(&self) -> String {
        format!("{}/fetch-task", self.base_url)
    }

    /// GET the full collection of lists.
    pub async fn fetch_all(&self) -> Result<Vec<List>, RemoteStoreError> {
        let url = self.fetch_url();
        log::debug!("GET {}", url);
        let resp = self.http.get(&url).send().await?;
        Ok(check_status(resp, &url)?.json().await?)
    }

    /// POST a freshly created list or card.
    pub async fn create<T: Serialize>(&self, entity: &T) -> Result<(), RemoteStoreError> {
        let url = format!("{}/add-task", self.base_url);
        log::debug!("POST {}", url);
        let resp = self.http.post(&url).json(entity).send().await?;
        check_status(resp, &url).map(drop)
    }

    /// PUT an edited list or card.
    pub async fn update<T: Serialize>(&self, entity: &T) -> Result<(), RemoteStoreError> {
        let url = format!("{}/update-task", self.base_url);
        log::debug!("PUT {}", url);
        let resp = self.http.put(&url).json(entity).send().await?;
        check_status(resp, &url).map(drop)
    }

    /// POST a moved card's new state to the update endpoint.
    ///
    /// Drag-and-drop moves persist with POST rather than PUT; the server
    /// accepts both on this route.
    pub async fn update_moved<T: Serialize>(&self, entity: &T) -> Result<(), RemoteStoreError> {
        let url = format!("{}/update-task", self.base_url);
        log::debug!("POST {}", url);
        let resp = self.http.post(&url).json(entity).send().await?;
        check_status(resp, &url).map(drop)
    }

    /// DELETE the list or card with `id`.
    pub async fn delete(&self, id: &str) -> Result<(), RemoteStoreError> {
        let url = format!("{}/delete-task/{}", self.base_url, id);
        log::debug!("DELETE {}", url);
        let resp = self.http.delete(&url).send().await?;
        check_status(resp, &url).map(drop)
    }
}

fn check_status(
    resp: reqwest::Response,
    url: &str,
) -> Result<reqwest::Response, RemoteStoreError> {
    if resp.status().is_success() {
        Ok(resp)
    } else {
        Err(RemoteStoreError::Status {
            status: resp.status(),
            url: url.to_string(),
        })
    }
}
