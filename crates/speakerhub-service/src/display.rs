//! Read-only display widget query path.
//!
//! The widget never mutates anything: it fetches the collection, narrows
//! it through its selector, and resolves activity details for a chosen
//! speaker.

use std::collections::BTreeSet;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use speakerhub_client::{ActivityDirectory, SpeakerCollection};
use speakerhub_core::result::AppResult;
use speakerhub_core::types::{ActivityId, SpeakerId};
use speakerhub_entity::{Activity, Speaker};

/// Selector configured on a placed widget.
///
/// An exact id match takes precedence over the activity filter; the name
/// query then narrows whatever remains.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WidgetSelector {
    /// Show exactly this speaker.
    #[serde(default)]
    pub speaker_id: Option<SpeakerId>,
    /// Show speakers attached to this activity.
    #[serde(default)]
    pub activity_id: Option<ActivityId>,
    /// Case-insensitive name substring filter.
    #[serde(default)]
    pub name_query: String,
}

/// A speaker with the activities it appears in.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SpeakerDetail {
    /// The speaker record.
    pub speaker: Speaker,
    /// Activities joined through every record sharing this speaker's name.
    pub activities: Vec<Activity>,
}

/// The read-only speaker display widget.
#[derive(Debug)]
pub struct SpeakerWidget {
    collection: Arc<dyn SpeakerCollection>,
    activity_directory: Arc<dyn ActivityDirectory>,
}

impl SpeakerWidget {
    /// Create a widget over the given collections.
    pub fn new(
        collection: Arc<dyn SpeakerCollection>,
        activity_directory: Arc<dyn ActivityDirectory>,
    ) -> Self {
        Self {
            collection,
            activity_directory,
        }
    }

    /// Fetch the collection and narrow it through the selector.
    pub async fn load(&self, selector: &WidgetSelector) -> AppResult<Vec<Speaker>> {
        let mut speakers = self.collection.list().await?;

        if let Some(id) = selector.speaker_id {
            speakers.retain(|s| s.id == id);
        } else if let Some(activity) = selector.activity_id {
            speakers.retain(|s| s.activity_id == Some(activity));
        }

        let needle = selector.name_query.trim().to_lowercase();
        if !needle.is_empty() {
            speakers.retain(|s| s.name.to_lowercase().contains(&needle));
        }

        Ok(speakers)
    }

    /// Resolve the activities a speaker appears in.
    ///
    /// The same person can be stored as several records, one per activity;
    /// the join is therefore by name over the whole collection, not by the
    /// one record's `activity_id`.
    pub async fn detail(&self, speaker: &Speaker) -> AppResult<SpeakerDetail> {
        let speakers = self.collection.list().await?;
        let activities = self.activity_directory.list().await?;

        let member_ids: BTreeSet<ActivityId> = speakers
            .iter()
            .filter(|s| s.name == speaker.name)
            .filter_map(|s| s.activity_id)
            .collect();

        let joined = activities
            .into_iter()
            .filter(|a| member_ids.contains(&a.id))
            .collect();

        Ok(SpeakerDetail {
            speaker: speaker.clone(),
            activities: joined,
        })
    }
}
