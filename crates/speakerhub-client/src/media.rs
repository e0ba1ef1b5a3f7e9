//! HTTP implementation of the media service trait.

use std::time::Duration;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::Client;

use speakerhub_core::config::MediaConfig;
use speakerhub_core::error::{AppError, ErrorKind};
use speakerhub_core::result::AppResult;
use speakerhub_core::traits::MediaStore;
use speakerhub_core::types::MediaRef;

/// Media service client speaking the host platform's media HTTP surface.
///
/// Replace-style uploads use PUT against the media slot, create-style
/// uploads use POST against the same path.
#[derive(Debug, Clone)]
pub struct HttpMediaStore {
    client: Client,
    base_url: String,
}

impl HttpMediaStore {
    /// Create a media client from configuration.
    ///
    /// `base_url` should already be resolved (see
    /// [`speakerhub_core::config::AppConfig::media_base_url`]).
    pub fn new(base_url: &str, config: &MediaConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| {
                AppError::with_source(ErrorKind::Internal, "Failed to build HTTP client", e)
            })?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    fn media_url(&self, media: &MediaRef) -> String {
        format!("{}/media/{}", self.base_url, media)
    }
}

#[async_trait]
impl MediaStore for HttpMediaStore {
    async fn upload(&self, media: &MediaRef, data: Bytes, replace: bool) -> AppResult<()> {
        let url = self.media_url(media);
        let request = if replace {
            self.client.put(&url)
        } else {
            self.client.post(&url)
        };
        let resp = request.body(data).send().await.map_err(|e| {
            AppError::with_source(ErrorKind::Media, "Image upload failed", e)
        })?;
        if !resp.status().is_success() {
            return Err(AppError::media(format!(
                "Image upload failed (status {})",
                resp.status()
            )));
        }
        tracing::info!(media = %media, replace, "Uploaded image");
        Ok(())
    }

    async fn delete(&self, media: &MediaRef) -> AppResult<()> {
        let resp = self
            .client
            .delete(self.media_url(media))
            .send()
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Media, "Image delete failed", e))?;
        if !resp.status().is_success() {
            return Err(AppError::media(format!(
                "Image delete failed (status {})",
                resp.status()
            )));
        }
        tracing::info!(media = %media, "Deleted image");
        Ok(())
    }

    fn public_url(&self, media: &MediaRef) -> String {
        self.media_url(media)
    }

    async fn resolve_url(&self, media: &MediaRef) -> AppResult<String> {
        let url = self.media_url(media);
        let resp = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Media, "Image is unreachable", e))?;
        if !resp.status().is_success() {
            return Err(AppError::media(format!(
                "Image is unreachable (status {})",
                resp.status()
            )));
        }
        Ok(url)
    }
}
