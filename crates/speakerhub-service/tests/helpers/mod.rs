//! Shared in-memory fakes for service integration tests.

use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use bytes::Bytes;

use speakerhub_client::{ActivityDirectory, SpeakerCollection};
use speakerhub_core::error::AppError;
use speakerhub_core::result::AppResult;
use speakerhub_core::traits::{MediaStore, NoticeLevel, Notifier};
use speakerhub_core::types::{ActivityId, MediaRef, SpeakerId};
use speakerhub_entity::{
    Activity, ImagePatch, NewSpeaker, OrderEntry, SocialLinks, Speaker, SpeakerPatch,
};

/// Build a speaker record fixture.
pub fn speaker(id: i64, name: &str, description: &str, activity: Option<i64>) -> Speaker {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "name": name,
        "description": description,
        "activity_id": activity
    }))
    .expect("speaker fixture")
}

/// Build a minimal valid create draft.
pub fn draft(name: &str, description: &str) -> NewSpeaker {
    NewSpeaker {
        name: name.to_string(),
        role: String::new(),
        description: description.to_string(),
        activity_id: None,
        links: SocialLinks::default(),
    }
}

/// Build an activity fixture.
pub fn activity(id: i64, name: &str) -> Activity {
    Activity {
        id: ActivityId::new(id),
        name: name.to_string(),
        date: None,
    }
}

/// In-memory speaker collection.
#[derive(Debug)]
pub struct FakeCollection {
    pub speakers: Mutex<Vec<Speaker>>,
    pub reorders: Mutex<Vec<Vec<OrderEntry>>>,
    pub fail_with: Mutex<Option<AppError>>,
    pub list_calls: Mutex<u32>,
    next_id: Mutex<i64>,
}

impl Default for FakeCollection {
    fn default() -> Self {
        Self {
            speakers: Mutex::default(),
            reorders: Mutex::default(),
            fail_with: Mutex::default(),
            list_calls: Mutex::default(),
            next_id: Mutex::new(1),
        }
    }
}

impl FakeCollection {
    pub fn seeded(speakers: Vec<Speaker>) -> Self {
        let next_id = speakers.iter().map(|s| s.id.into_inner()).max().unwrap_or(0) + 1;
        Self {
            speakers: Mutex::new(speakers),
            next_id: Mutex::new(next_id),
            ..Self::default()
        }
    }

    pub fn fail_next_with(&self, message: &str) {
        *self.fail_with.lock().expect("lock") = Some(AppError::remote(message));
    }

    pub fn fail_next_malformed(&self, message: &str) {
        *self.fail_with.lock().expect("lock") = Some(AppError::malformed(message));
    }

    fn take_failure(&self) -> Option<AppError> {
        self.fail_with.lock().expect("lock").take()
    }
}

#[async_trait]
impl SpeakerCollection for FakeCollection {
    async fn list(&self) -> AppResult<Vec<Speaker>> {
        *self.list_calls.lock().expect("lock") += 1;
        if let Some(e) = self.take_failure() {
            return Err(e);
        }
        Ok(self.speakers.lock().expect("lock").clone())
    }

    async fn create(&self, draft: &NewSpeaker) -> AppResult<Speaker> {
        if let Some(e) = self.take_failure() {
            return Err(e);
        }
        let mut next_id = self.next_id.lock().expect("lock");
        let id = *next_id;
        *next_id += 1;
        let created = Speaker {
            id: SpeakerId::new(id),
            name: draft.name.clone(),
            role: draft.role.clone(),
            description: draft.description.clone(),
            image: Some(MediaRef::new(format!("slot-{id}"))),
            activity_id: draft.activity_id,
            links: draft.links.clone(),
        };
        self.speakers.lock().expect("lock").push(created.clone());
        Ok(created)
    }

    async fn update(&self, id: SpeakerId, patch: &SpeakerPatch) -> AppResult<Speaker> {
        if let Some(e) = self.take_failure() {
            return Err(e);
        }
        let mut speakers = self.speakers.lock().expect("lock");
        let speaker = speakers
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or_else(|| AppError::not_found("Speaker not found"))?;
        speaker.name = patch.name.clone();
        speaker.role = patch.role.clone();
        speaker.description = patch.description.clone();
        speaker.activity_id = patch.activity_id;
        speaker.links = patch.links.clone();
        match &patch.image {
            ImagePatch::Unchanged => {}
            ImagePatch::Clear => speaker.image = None,
            ImagePatch::Set(media) => speaker.image = Some(media.clone()),
        }
        Ok(speaker.clone())
    }

    async fn delete(&self, id: SpeakerId) -> AppResult<()> {
        if let Some(e) = self.take_failure() {
            return Err(e);
        }
        self.speakers.lock().expect("lock").retain(|s| s.id != id);
        Ok(())
    }

    async fn reorder(&self, entries: &[OrderEntry]) -> AppResult<()> {
        if let Some(e) = self.take_failure() {
            return Err(e);
        }
        self.reorders.lock().expect("lock").push(entries.to_vec());
        let mut speakers = self.speakers.lock().expect("lock");
        speakers.sort_by_key(|s| {
            entries
                .iter()
                .find(|e| e.id == s.id)
                .map(|e| e.order)
                .unwrap_or(u32::MAX)
        });
        Ok(())
    }
}

/// In-memory activity directory.
#[derive(Debug, Default)]
pub struct FakeActivities {
    pub activities: Vec<Activity>,
}

impl FakeActivities {
    pub fn seeded(activities: Vec<Activity>) -> Self {
        Self { activities }
    }
}

#[async_trait]
impl ActivityDirectory for FakeActivities {
    async fn list(&self) -> AppResult<Vec<Activity>> {
        Ok(self.activities.clone())
    }
}

/// In-memory media store recording uploads and deletes.
#[derive(Debug, Default)]
pub struct FakeMedia {
    pub uploads: Mutex<Vec<(String, bool)>>,
    pub deletes: Mutex<Vec<String>>,
    pub reject_replace: AtomicBool,
    pub fail_all: AtomicBool,
}

impl FakeMedia {
    pub fn rejecting_replace() -> Self {
        let media = Self::default();
        media.reject_replace.store(true, Ordering::SeqCst);
        media
    }

    pub fn failing() -> Self {
        let media = Self::default();
        media.fail_all.store(true, Ordering::SeqCst);
        media
    }
}

#[async_trait]
impl MediaStore for FakeMedia {
    async fn upload(&self, media: &MediaRef, _data: Bytes, replace: bool) -> AppResult<()> {
        self.uploads
            .lock()
            .expect("lock")
            .push((media.to_string(), replace));
        if self.fail_all.load(Ordering::SeqCst) {
            return Err(AppError::media("Image upload failed"));
        }
        if replace && self.reject_replace.load(Ordering::SeqCst) {
            return Err(AppError::media("No existing image to replace"));
        }
        Ok(())
    }

    async fn delete(&self, media: &MediaRef) -> AppResult<()> {
        self.deletes.lock().expect("lock").push(media.to_string());
        if self.fail_all.load(Ordering::SeqCst) {
            return Err(AppError::media("Image delete failed"));
        }
        Ok(())
    }

    fn public_url(&self, media: &MediaRef) -> String {
        format!("https://media.test/{media}")
    }

    async fn resolve_url(&self, media: &MediaRef) -> AppResult<String> {
        Ok(self.public_url(media))
    }
}

/// Notifier recording every notice it receives.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    pub notices: Mutex<Vec<(NoticeLevel, String)>>,
}

impl RecordingNotifier {
    pub fn contains(&self, level: NoticeLevel, fragment: &str) -> bool {
        self.notices
            .lock()
            .expect("lock")
            .iter()
            .any(|(l, m)| *l == level && m.contains(fragment))
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, level: NoticeLevel, message: &str) {
        self.notices
            .lock()
            .expect("lock")
            .push((level, message.to_string()));
    }
}
