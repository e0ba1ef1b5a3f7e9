//! Media service trait for image resources.
//!
//! The media service is a host-provided collaborator: speaker records only
//! carry an opaque [`MediaRef`] pointing at an image slot it manages. The
//! trait is defined here in `speakerhub-core` and implemented over HTTP in
//! `speakerhub-client`.

use async_trait::async_trait;
use bytes::Bytes;

use crate::result::AppResult;
use crate::types::MediaRef;

/// Trait for the external media service.
#[async_trait]
pub trait MediaStore: Send + Sync + std::fmt::Debug + 'static {
    /// Upload image bytes into an existing media slot.
    ///
    /// `replace` selects the replace-style verb; passing `false` performs a
    /// create-style upload instead. The target slot may or may not already
    /// hold content server-side, which is why both verbs exist.
    async fn upload(&self, media: &MediaRef, data: Bytes, replace: bool) -> AppResult<()>;

    /// Delete the image resource behind a media slot.
    async fn delete(&self, media: &MediaRef) -> AppResult<()>;

    /// Return the public URL for a media slot without touching the network.
    fn public_url(&self, media: &MediaRef) -> String;

    /// Resolve a media slot to a fetchable URL, verifying it is reachable.
    async fn resolve_url(&self, media: &MediaRef) -> AppResult<String>;
}
