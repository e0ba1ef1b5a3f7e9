//! Speaker directory store.
//!
//! Owns the canonical local projection of the remote speaker collection.
//! The list is wholly replaced on every successful refresh; it is a
//! read-through projection of server state, not an independent cache.

use std::sync::Arc;

use validator::Validate;

use speakerhub_client::{
    ActivityDirectory, HttpActivityDirectory, HttpSpeakerCollection, SpeakerCollection,
};
use speakerhub_core::config::AppConfig;
use speakerhub_core::error::ErrorKind;
use speakerhub_core::result::AppResult;
use speakerhub_core::traits::{MediaStore, NoticeLevel, Notifier};
use speakerhub_core::types::{ActivityId, PageResponse, SpeakerId};
use speakerhub_entity::{Activity, NewSpeaker, OrderEntry, Speaker, SpeakerPatch};

use crate::validate::draft_error;
use crate::views::{self, ListQuery, SpeakerSortField};

/// Direction for an adjacent-swap reorder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveDirection {
    /// Swap with the previous visible row.
    Up,
    /// Swap with the next visible row.
    Down,
}

/// The speaker directory store.
///
/// Collaborators are injected at construction; there is no ambient access
/// to the host platform. All remote faults come back as error values and
/// are additionally recorded in [`DirectoryStore::last_error`] — the store
/// never enters an unrecoverable state, a fresh refresh can always be
/// retried.
#[derive(Debug)]
pub struct DirectoryStore {
    collection: Arc<dyn SpeakerCollection>,
    activity_directory: Arc<dyn ActivityDirectory>,
    notifier: Arc<dyn Notifier>,
    speakers: Vec<Speaker>,
    activities: Vec<Activity>,
    query: ListQuery,
    page_size: u64,
    loading: bool,
    last_error: Option<String>,
    // Monotonic refresh counter. A response is only applied when no newer
    // refresh was issued while it was in flight, so overlapping refreshes
    // cannot let a stale response overwrite a newer list.
    refresh_seq: u64,
}

impl DirectoryStore {
    /// Create a new store.
    pub fn new(
        collection: Arc<dyn SpeakerCollection>,
        activity_directory: Arc<dyn ActivityDirectory>,
        notifier: Arc<dyn Notifier>,
        page_size: u64,
    ) -> Self {
        Self {
            collection,
            activity_directory,
            notifier,
            speakers: Vec::new(),
            activities: Vec::new(),
            query: ListQuery::default(),
            page_size: page_size.max(1),
            loading: false,
            last_error: None,
            refresh_seq: 0,
        }
    }

    /// Create a store backed by the configured HTTP endpoints.
    pub fn from_config(config: &AppConfig, notifier: Arc<dyn Notifier>) -> AppResult<Self> {
        let collection = Arc::new(HttpSpeakerCollection::from_config(&config.api)?);
        let activity_directory = Arc::new(HttpActivityDirectory::from_config(&config.api)?);
        Ok(Self::new(
            collection,
            activity_directory,
            notifier,
            config.list.page_size,
        ))
    }

    /// The current local projection, in server order.
    pub fn speakers(&self) -> &[Speaker] {
        &self.speakers
    }

    /// The cached activity collection.
    pub fn activities(&self) -> &[Activity] {
        &self.activities
    }

    /// Whether a remote call is in flight.
    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// The message of the most recent failed operation, if any.
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    /// The current view query state.
    pub fn query(&self) -> &ListQuery {
        &self.query
    }

    /// Set the free-text filter.
    pub fn set_search(&mut self, search: impl Into<String>) {
        self.query.search = search.into();
    }

    /// Set or clear the activity filter.
    pub fn set_activity_filter(&mut self, activity: Option<ActivityId>) {
        self.query.activity = activity;
    }

    /// Select a sort column (re-selecting flips the direction).
    pub fn toggle_sort(&mut self, field: SpeakerSortField) {
        self.query.sort.toggle(field);
    }

    /// Jump to a page (1-based).
    pub fn set_page(&mut self, page: u64) {
        self.query.page = page.max(1);
    }

    /// The current page of the filtered and sorted list.
    pub fn view(&self) -> PageResponse<Speaker> {
        views::page(&self.speakers, &self.activities, &self.query, self.page_size)
    }

    /// The full visible ordering (filtered and sorted, unpaginated).
    pub fn visible(&self) -> Vec<&Speaker> {
        views::visible(&self.speakers, &self.activities, &self.query)
    }

    /// Retrieve the full collection and replace the local projection.
    pub async fn refresh(&mut self) -> AppResult<()> {
        self.refresh_seq += 1;
        let seq = self.refresh_seq;
        self.loading = true;
        self.last_error = None;

        let result = self.collection.list().await;
        self.loading = false;

        match result {
            Ok(speakers) => {
                if seq == self.refresh_seq {
                    self.speakers = speakers;
                } else {
                    tracing::debug!(seq, "Dropping stale refresh response");
                }
                Ok(())
            }
            Err(e) => {
                // An unrecognized response shape empties the projection
                // rather than leaving a list the server no longer vouches
                // for; transport and rejection faults keep the last good
                // list so the screen stays usable.
                if e.kind == ErrorKind::Malformed {
                    self.speakers.clear();
                }
                self.last_error = Some(e.message.clone());
                Err(e)
            }
        }
    }

    /// Refresh the cached activity collection.
    pub async fn refresh_activities(&mut self) -> AppResult<()> {
        match self.activity_directory.list().await {
            Ok(activities) => {
                self.activities = activities;
                Ok(())
            }
            Err(e) => {
                self.last_error = Some(e.message.clone());
                Err(e)
            }
        }
    }

    /// Create a record. Returns the server-assigned record (including its
    /// id and image slot) so the caller can chain an image upload.
    pub async fn create(&mut self, draft: &NewSpeaker) -> AppResult<Speaker> {
        draft.validate().map_err(|e| draft_error(&e))?;
        self.loading = true;
        self.last_error = None;
        let result = self.collection.create(draft).await;
        self.loading = false;
        result.inspect_err(|e| self.last_error = Some(e.message.clone()))
    }

    /// Update a record by id.
    pub async fn update(&mut self, id: SpeakerId, patch: &SpeakerPatch) -> AppResult<Speaker> {
        patch.validate().map_err(|e| draft_error(&e))?;
        self.loading = true;
        self.last_error = None;
        let result = self.collection.update(id, patch).await;
        self.loading = false;
        result.inspect_err(|e| self.last_error = Some(e.message.clone()))
    }

    /// Delete a record by id. Does not touch the associated image
    /// resource; that cleanup is an explicit editor action.
    pub async fn delete(&mut self, id: SpeakerId) -> AppResult<()> {
        self.loading = true;
        self.last_error = None;
        let result = self.collection.delete(id).await;
        self.loading = false;
        result.inspect_err(|e| self.last_error = Some(e.message.clone()))
    }

    /// Persist a complete new ordering, then refresh the projection.
    pub async fn reorder(&mut self, entries: &[OrderEntry]) -> AppResult<()> {
        match self.collection.reorder(entries).await {
            Ok(()) => {
                self.notifier
                    .notify(NoticeLevel::Success, "Speakers reordered");
                self.refresh().await
            }
            Err(e) => {
                self.last_error = Some(e.message.clone());
                self.notifier.notify(NoticeLevel::Error, &e.message);
                Err(e)
            }
        }
    }

    /// Swap a visible row with its neighbour and persist the new ordering.
    ///
    /// `index` addresses the full visible (filtered and sorted) ordering.
    /// Moving past either boundary is a silent no-op.
    pub async fn move_speaker(
        &mut self,
        index: usize,
        direction: MoveDirection,
    ) -> AppResult<()> {
        let mut ordered = views::visible_ids(&self.speakers, &self.activities, &self.query);
        if index >= ordered.len() {
            return Ok(());
        }
        let target = match direction {
            MoveDirection::Up => match index.checked_sub(1) {
                Some(target) => target,
                None => return Ok(()),
            },
            MoveDirection::Down => {
                let target = index + 1;
                if target >= ordered.len() {
                    return Ok(());
                }
                target
            }
        };
        ordered.swap(index, target);

        let entries: Vec<OrderEntry> = ordered
            .into_iter()
            .enumerate()
            .map(|(position, id)| OrderEntry {
                id,
                order: position as u32,
            })
            .collect();
        self.reorder(&entries).await
    }

    /// Serialize the current filtered list to the export artifact.
    pub fn export_json(&self, media: &dyn MediaStore) -> AppResult<String> {
        let visible = self.visible();
        crate::export::export_json(&visible, &self.activities, media)
    }
}
