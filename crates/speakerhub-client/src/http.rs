//! HTTP implementations of the remote collection traits.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use speakerhub_core::config::ApiConfig;
use speakerhub_core::error::{AppError, ErrorKind};
use speakerhub_core::result::AppResult;
use speakerhub_core::types::SpeakerId;
use speakerhub_entity::{Activity, NewSpeaker, OrderEntry, Speaker, SpeakerPatch};

use crate::shape::normalize_collection;
use crate::traits::{ActivityDirectory, SpeakerCollection};

/// Generic per-operation fallback messages, used when the server supplies
/// no structured detail.
const FETCH_FAILED: &str = "Failed to fetch speakers. Please try again.";
const CREATE_FAILED: &str = "Failed to add speaker";
const UPDATE_FAILED: &str = "Failed to update speaker";
const DELETE_FAILED: &str = "Failed to delete speaker";
const REORDER_FAILED: &str = "Failed to reorder speakers";
const ACTIVITIES_FAILED: &str = "Failed to fetch activities";

/// Build a reqwest client with the configured timeout.
fn build_client(timeout_seconds: u64) -> AppResult<Client> {
    Client::builder()
        .timeout(Duration::from_secs(timeout_seconds))
        .build()
        .map_err(|e| AppError::with_source(ErrorKind::Internal, "Failed to build HTTP client", e))
}

/// Map a request-level failure (no response received) to a transport fault.
fn transport_error(err: reqwest::Error, fallback: &str) -> AppError {
    tracing::error!(error = %err, "No response received");
    AppError::with_source(ErrorKind::Transport, fallback.to_string(), err)
}

/// Map a non-success response to a remote-rejection fault, preferring the
/// server-supplied `detail` message over the per-operation fallback.
async fn rejection_error(resp: reqwest::Response, fallback: &str) -> AppError {
    let status = resp.status();
    let detail = resp
        .json::<serde_json::Value>()
        .await
        .ok()
        .and_then(|v| v.get("detail")?.as_str().map(str::to_string));
    tracing::error!(status = %status, detail = detail.as_deref(), "Remote rejection");
    AppError::remote(detail.unwrap_or_else(|| fallback.to_string()))
}

/// HTTP implementation of [`SpeakerCollection`].
#[derive(Debug, Clone)]
pub struct HttpSpeakerCollection {
    client: Client,
    base_url: String,
}

impl HttpSpeakerCollection {
    /// Create a collection client from configuration.
    pub fn from_config(config: &ApiConfig) -> AppResult<Self> {
        Ok(Self {
            client: build_client(config.timeout_seconds)?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    fn collection_url(&self) -> String {
        format!("{}/speakers/", self.base_url)
    }

    fn record_url(&self, id: SpeakerId) -> String {
        format!("{}/speakers/{id}", self.base_url)
    }

    fn reorder_url(&self) -> String {
        format!("{}/speakers/reorder", self.base_url)
    }
}

#[async_trait]
impl SpeakerCollection for HttpSpeakerCollection {
    async fn list(&self) -> AppResult<Vec<Speaker>> {
        let resp = self
            .client
            .get(self.collection_url())
            .send()
            .await
            .map_err(|e| transport_error(e, FETCH_FAILED))?;
        if !resp.status().is_success() {
            return Err(rejection_error(resp, FETCH_FAILED).await);
        }
        let value = resp.json::<serde_json::Value>().await.map_err(|e| {
            AppError::with_source(ErrorKind::Malformed, "Speaker collection is not JSON", e)
        })?;
        normalize_collection(value)
    }

    async fn create(&self, draft: &NewSpeaker) -> AppResult<Speaker> {
        let resp = self
            .client
            .post(self.collection_url())
            .json(draft)
            .send()
            .await
            .map_err(|e| transport_error(e, CREATE_FAILED))?;
        if !resp.status().is_success() {
            return Err(rejection_error(resp, CREATE_FAILED).await);
        }
        let speaker = resp.json::<Speaker>().await.map_err(|e| {
            AppError::with_source(ErrorKind::Malformed, "Malformed created speaker", e)
        })?;
        tracing::info!(id = %speaker.id, "Created speaker");
        Ok(speaker.normalized())
    }

    async fn update(&self, id: SpeakerId, patch: &SpeakerPatch) -> AppResult<Speaker> {
        let resp = self
            .client
            .patch(self.record_url(id))
            .json(patch)
            .send()
            .await
            .map_err(|e| transport_error(e, UPDATE_FAILED))?;
        if !resp.status().is_success() {
            return Err(rejection_error(resp, UPDATE_FAILED).await);
        }
        let speaker = resp.json::<Speaker>().await.map_err(|e| {
            AppError::with_source(ErrorKind::Malformed, "Malformed updated speaker", e)
        })?;
        tracing::info!(id = %id, "Updated speaker");
        Ok(speaker.normalized())
    }

    async fn delete(&self, id: SpeakerId) -> AppResult<()> {
        let resp = self
            .client
            .delete(self.record_url(id))
            .send()
            .await
            .map_err(|e| transport_error(e, DELETE_FAILED))?;
        if !resp.status().is_success() {
            return Err(rejection_error(resp, DELETE_FAILED).await);
        }
        tracing::info!(id = %id, "Deleted speaker");
        Ok(())
    }

    async fn reorder(&self, entries: &[OrderEntry]) -> AppResult<()> {
        let resp = self
            .client
            .post(self.reorder_url())
            .json(entries)
            .send()
            .await
            .map_err(|e| transport_error(e, REORDER_FAILED))?;
        if !resp.status().is_success() {
            return Err(rejection_error(resp, REORDER_FAILED).await);
        }
        tracing::info!(count = entries.len(), "Reordered speakers");
        Ok(())
    }
}

/// HTTP implementation of [`ActivityDirectory`].
#[derive(Debug, Clone)]
pub struct HttpActivityDirectory {
    client: Client,
    base_url: String,
}

impl HttpActivityDirectory {
    /// Create an activity directory client from configuration.
    pub fn from_config(config: &ApiConfig) -> AppResult<Self> {
        Ok(Self {
            client: build_client(config.timeout_seconds)?,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl ActivityDirectory for HttpActivityDirectory {
    async fn list(&self) -> AppResult<Vec<Activity>> {
        let resp = self
            .client
            .get(format!("{}/activities/", self.base_url))
            .send()
            .await
            .map_err(|e| transport_error(e, ACTIVITIES_FAILED))?;
        if !resp.status().is_success() {
            return Err(rejection_error(resp, ACTIVITIES_FAILED).await);
        }
        resp.json::<Vec<Activity>>().await.map_err(|e| {
            AppError::with_source(ErrorKind::Malformed, "Malformed activity collection", e)
        })
    }
}
