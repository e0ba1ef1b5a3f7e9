//! Add/edit record editor with two-phase save.
//!
//! Phase one persists the record fields; phase two uploads the image into
//! the slot the server assigned. A phase-two failure never rolls back
//! phase one: the record stays saved and the caller is told the image was
//! left behind.

use std::collections::BTreeMap;
use std::sync::Arc;

use bytes::Bytes;

use speakerhub_core::error::AppError;
use speakerhub_core::result::AppResult;
use speakerhub_core::traits::{MediaStore, NoticeLevel, Notifier};
use speakerhub_core::types::{ActivityId, MediaRef, SpeakerId};
use speakerhub_entity::{ImagePatch, NewSpeaker, SocialLinks, Speaker, SpeakerPatch};

use crate::directory::DirectoryStore;
use crate::validate::SocialValidator;

/// What the editor is doing: creating a record or editing an existing one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditorMode {
    /// Drafting a new record.
    Create,
    /// Editing the record with this id.
    Edit(SpeakerId),
}

/// Pending image action for the open editor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ImageAction {
    /// Leave the image as it is.
    #[default]
    Keep,
    /// Remove the image.
    Clear,
    /// Attach these bytes as the new image.
    Attach(Bytes),
}

/// Outcome of a successful save.
#[derive(Debug, Clone, PartialEq)]
pub enum SaveOutcome {
    /// Record and image both persisted.
    Saved(Speaker),
    /// Record persisted but the image upload failed on both attempts.
    SavedWithoutImage(Speaker),
}

impl SaveOutcome {
    /// The persisted record, whichever way the image went.
    pub fn speaker(&self) -> &Speaker {
        match self {
            Self::Saved(s) | Self::SavedWithoutImage(s) => s,
        }
    }
}

/// Editable form fields of the open editor.
#[derive(Debug, Clone, Default)]
pub struct SpeakerForm {
    /// Display name.
    pub name: String,
    /// Short role text.
    pub role: String,
    /// Description text.
    pub description: String,
    /// Selected activity, if any.
    pub activity_id: Option<ActivityId>,
    /// Social media URLs.
    pub links: SocialLinks,
}

impl SpeakerForm {
    fn from_speaker(speaker: &Speaker) -> Self {
        Self {
            name: speaker.name.clone(),
            role: speaker.role.clone(),
            description: speaker.description.clone(),
            activity_id: speaker.activity_id,
            links: speaker.links.clone(),
        }
    }

    fn to_draft(&self) -> NewSpeaker {
        NewSpeaker {
            name: self.name.clone(),
            role: self.role.clone(),
            description: self.description.clone(),
            activity_id: self.activity_id,
            links: self.links.clone(),
        }
    }
}

/// One open add/edit editor session.
///
/// The session owns its draft and its field-level error map; a failed
/// submission keeps the draft intact so the user can correct and retry.
#[derive(Debug)]
pub struct EditorSession {
    mode: EditorMode,
    /// The editable draft.
    pub form: SpeakerForm,
    image: ImageAction,
    existing_image: Option<MediaRef>,
    errors: BTreeMap<&'static str, String>,
    validator: SocialValidator,
    media: Arc<dyn MediaStore>,
    notifier: Arc<dyn Notifier>,
}

impl EditorSession {
    /// Open an empty editor for a new record.
    pub fn add(media: Arc<dyn MediaStore>, notifier: Arc<dyn Notifier>) -> AppResult<Self> {
        Ok(Self {
            mode: EditorMode::Create,
            form: SpeakerForm::default(),
            image: ImageAction::Keep,
            existing_image: None,
            errors: BTreeMap::new(),
            validator: SocialValidator::new()?,
            media,
            notifier,
        })
    }

    /// Open an editor pre-filled from an existing record.
    pub fn edit(
        speaker: &Speaker,
        media: Arc<dyn MediaStore>,
        notifier: Arc<dyn Notifier>,
    ) -> AppResult<Self> {
        Ok(Self {
            mode: EditorMode::Edit(speaker.id),
            form: SpeakerForm::from_speaker(speaker),
            image: ImageAction::Keep,
            existing_image: speaker.image.clone(),
            errors: BTreeMap::new(),
            validator: SocialValidator::new()?,
            media,
            notifier,
        })
    }

    /// The editor mode.
    pub fn mode(&self) -> EditorMode {
        self.mode
    }

    /// The pending image action.
    pub fn image_action(&self) -> &ImageAction {
        &self.image
    }

    /// Field-level errors from the last validation pass.
    pub fn errors(&self) -> &BTreeMap<&'static str, String> {
        &self.errors
    }

    /// Resolve a preview URL for the record's current image, if any.
    pub async fn image_preview_url(&self) -> AppResult<Option<String>> {
        match &self.existing_image {
            Some(media) => Ok(Some(self.media.resolve_url(media).await?)),
            None => Ok(None),
        }
    }

    /// Stage new image bytes for upload on the next save.
    pub fn attach_image(&mut self, data: Bytes) {
        self.image = ImageAction::Attach(data);
    }

    /// Remove the current image.
    ///
    /// If the record already had one, the media resource is deleted in the
    /// background; a failure there only logs, the form is not blocked.
    pub fn clear_image(&mut self) {
        match self.existing_image.take() {
            Some(media_ref) => {
                let media = Arc::clone(&self.media);
                tokio::spawn(async move {
                    if let Err(e) = media.delete(&media_ref).await {
                        tracing::warn!(media = %media_ref, "Failed to delete image: {e}");
                    }
                });
            }
            None => self
                .notifier
                .notify(NoticeLevel::Info, "No image to remove"),
        }
        self.image = ImageAction::Clear;
    }

    /// Run all field checks, refreshing the error map.
    ///
    /// Returns `true` when the draft is submittable.
    pub fn validate(&mut self) -> bool {
        self.errors.clear();
        if self.form.name.trim().is_empty() {
            self.errors.insert("name", "Speaker name is required".to_string());
        }
        if self.form.description.trim().is_empty() {
            self.errors
                .insert("description", "Description is required".to_string());
        }
        for (field, message) in self.validator.check_links(&self.form.links) {
            self.errors.insert(field, message.to_string());
        }
        self.errors.is_empty()
    }

    /// The update payload this session would send, including the tri-state
    /// image field.
    pub fn to_patch(&self) -> SpeakerPatch {
        let image = match &self.image {
            ImageAction::Clear => ImagePatch::Clear,
            // Attached bytes go through the media service after the record
            // save, not through the record payload.
            ImageAction::Attach(_) => ImagePatch::Unchanged,
            ImageAction::Keep => {
                if self.existing_image.is_some() {
                    ImagePatch::Unchanged
                } else {
                    ImagePatch::Clear
                }
            }
        };
        SpeakerPatch {
            name: self.form.name.clone(),
            role: self.form.role.clone(),
            description: self.form.description.clone(),
            activity_id: self.form.activity_id,
            links: self.form.links.clone(),
            image,
        }
    }

    /// Submit the draft: validate, save the record, then upload any
    /// attached image into the saved record's slot.
    ///
    /// Validation failures return before any network traffic. A record
    /// save failure keeps the form intact for retry. An image upload
    /// failure after a successful save yields
    /// [`SaveOutcome::SavedWithoutImage`].
    pub async fn submit(&mut self, store: &mut DirectoryStore) -> AppResult<SaveOutcome> {
        if !self.validate() {
            return Err(AppError::validation(
                "Please fix the errors in the form before submitting",
            ));
        }

        let (pending, success) = match self.mode {
            EditorMode::Create => ("Adding speaker...", "Speaker added successfully!"),
            EditorMode::Edit(_) => ("Updating speaker...", "Speaker updated successfully!"),
        };
        self.notifier.notify(NoticeLevel::Info, pending);

        let saved = match self.mode {
            EditorMode::Create => store.create(&self.form.to_draft()).await,
            EditorMode::Edit(id) => store.update(id, &self.to_patch()).await,
        };
        let saved = match saved {
            Ok(speaker) => speaker,
            Err(e) => {
                self.notifier.notify(NoticeLevel::Error, &e.message);
                return Err(e);
            }
        };

        let outcome = match self.image.clone() {
            ImageAction::Attach(data) => {
                let slot = saved
                    .image
                    .clone()
                    .unwrap_or_else(|| MediaRef::new(format!("speakers/{}", saved.id)));
                match self.upload_with_fallback(&slot, data).await {
                    Ok(()) => {
                        self.notifier
                            .notify(NoticeLevel::Success, "Image uploaded successfully");
                        SaveOutcome::Saved(saved)
                    }
                    Err(e) => {
                        tracing::warn!(media = %slot, "Image upload failed: {e}");
                        self.notifier.notify(
                            NoticeLevel::Warning,
                            "Speaker saved, but image upload failed",
                        );
                        SaveOutcome::SavedWithoutImage(saved)
                    }
                }
            }
            ImageAction::Keep | ImageAction::Clear => SaveOutcome::Saved(saved),
        };

        self.notifier.notify(NoticeLevel::Success, success);
        self.reset();

        if let Err(e) = store.refresh().await {
            tracing::warn!("Refresh after save failed: {e}");
        }
        Ok(outcome)
    }

    /// Try a replace-style upload first; the media service rejects it when
    /// the slot is still empty, so fall back to a create-style upload.
    async fn upload_with_fallback(&self, slot: &MediaRef, data: Bytes) -> AppResult<()> {
        match self.media.upload(slot, data.clone(), true).await {
            Ok(()) => Ok(()),
            Err(e) => {
                tracing::debug!(media = %slot, "Replace upload failed, retrying as create: {e}");
                self.media.upload(slot, data, false).await
            }
        }
    }

    fn reset(&mut self) {
        self.form = SpeakerForm::default();
        self.image = ImageAction::Keep;
        self.existing_image = None;
        self.errors.clear();
    }
}
