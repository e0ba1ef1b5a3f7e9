//! Remote collection traits.
//!
//! These are the seams between the directory/editor components and the
//! network: services receive `Arc<dyn SpeakerCollection>` and friends, so
//! tests substitute in-memory fakes.

use async_trait::async_trait;

use speakerhub_core::result::AppResult;
use speakerhub_core::types::SpeakerId;
use speakerhub_entity::{Activity, NewSpeaker, OrderEntry, Speaker, SpeakerPatch};

/// Trait for the remote speaker collection endpoint.
#[async_trait]
pub trait SpeakerCollection: Send + Sync + std::fmt::Debug + 'static {
    /// Retrieve the full collection.
    async fn list(&self) -> AppResult<Vec<Speaker>>;

    /// Create a record. The server assigns the id and the image slot.
    async fn create(&self, draft: &NewSpeaker) -> AppResult<Speaker>;

    /// Update a record by id. The image field is tri-state, see
    /// [`speakerhub_entity::ImagePatch`].
    async fn update(&self, id: SpeakerId, patch: &SpeakerPatch) -> AppResult<Speaker>;

    /// Delete a record by id.
    async fn delete(&self, id: SpeakerId) -> AppResult<()>;

    /// Persist a complete new ordering of the collection.
    async fn reorder(&self, entries: &[OrderEntry]) -> AppResult<()>;
}

/// Trait for the host platform's activity collection.
#[async_trait]
pub trait ActivityDirectory: Send + Sync + std::fmt::Debug + 'static {
    /// Retrieve all activities.
    async fn list(&self) -> AppResult<Vec<Activity>>;
}
