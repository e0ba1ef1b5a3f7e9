//! Speaker entity model and its create/update drafts.

use serde::de::Deserializer;
use serde::{Deserialize, Serialize};
use validator::Validate;

use speakerhub_core::types::{ActivityId, MediaRef, SpeakerId};

/// Stand-in label for records that arrive with a blank name.
pub const UNNAMED_SPEAKER: &str = "Unnamed Speaker";

/// The four supported social platforms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialPlatform {
    /// LinkedIn profile or company page.
    Linkedin,
    /// Facebook profile.
    Facebook,
    /// Instagram profile.
    Instagram,
    /// YouTube channel or short link.
    Youtube,
}

impl SocialPlatform {
    /// All platforms, in wire-field order.
    pub const ALL: [SocialPlatform; 4] = [
        SocialPlatform::Linkedin,
        SocialPlatform::Facebook,
        SocialPlatform::Instagram,
        SocialPlatform::Youtube,
    ];

    /// The wire field name for this platform.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Linkedin => "linkedin",
            Self::Facebook => "facebook",
            Self::Instagram => "instagram",
            Self::Youtube => "youtube",
        }
    }
}

/// Social media URLs attached to a speaker.
///
/// Each field is either a populated URL or absent. On the wire absent
/// fields serialize as explicit `null`, never as omitted keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
    /// LinkedIn URL.
    #[serde(default)]
    pub linkedin: Option<String>,
    /// Facebook URL.
    #[serde(default)]
    pub facebook: Option<String>,
    /// Instagram URL.
    #[serde(default)]
    pub instagram: Option<String>,
    /// YouTube URL.
    #[serde(default)]
    pub youtube: Option<String>,
}

impl SocialLinks {
    /// Get the URL for a platform, if populated.
    pub fn get(&self, platform: SocialPlatform) -> Option<&str> {
        let value = match platform {
            SocialPlatform::Linkedin => &self.linkedin,
            SocialPlatform::Facebook => &self.facebook,
            SocialPlatform::Instagram => &self.instagram,
            SocialPlatform::Youtube => &self.youtube,
        };
        value.as_deref()
    }

    /// Set the URL for a platform. Blank input clears the field, so empty
    /// strings never reach the wire.
    pub fn set(&mut self, platform: SocialPlatform, url: impl Into<String>) {
        let url = url.into();
        let value = if url.trim().is_empty() { None } else { Some(url) };
        match platform {
            SocialPlatform::Linkedin => self.linkedin = value,
            SocialPlatform::Facebook => self.facebook = value,
            SocialPlatform::Instagram => self.instagram = value,
            SocialPlatform::Youtube => self.youtube = value,
        }
    }

    /// Iterate over all platforms and their populated URLs.
    pub fn iter(&self) -> impl Iterator<Item = (SocialPlatform, Option<&str>)> {
        SocialPlatform::ALL.into_iter().map(|p| (p, self.get(p)))
    }
}

/// A speaker record as projected from the remote collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Speaker {
    /// Server-assigned identifier, immutable once assigned.
    pub id: SpeakerId,
    /// Display name.
    #[serde(default)]
    pub name: String,
    /// Optional short role text.
    #[serde(default)]
    pub role: String,
    /// Longer description text.
    #[serde(default)]
    pub description: String,
    /// Reference to the image slot held by the media service.
    #[serde(default)]
    pub image: Option<MediaRef>,
    /// The activity this speaker is attached to, if any.
    #[serde(default, deserialize_with = "deserialize_lenient_activity")]
    pub activity_id: Option<ActivityId>,
    /// Social media URLs.
    #[serde(flatten)]
    pub links: SocialLinks,
}

impl Speaker {
    /// Normalize a freshly fetched record: blank names get a stand-in
    /// label so every row stays addressable in a list.
    pub fn normalized(mut self) -> Self {
        if self.name.trim().is_empty() {
            self.name = UNNAMED_SPEAKER.to_string();
        }
        self
    }
}

/// Draft for creating a speaker record.
///
/// The remote store assigns the id and the image slot; the create payload
/// never carries an image field.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct NewSpeaker {
    /// Display name. Required.
    #[validate(length(min = 1, message = "Speaker name is required"))]
    pub name: String,
    /// Optional short role text.
    #[serde(default)]
    pub role: String,
    /// Description text. Required.
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    /// The activity to attach the speaker to, serialized as explicit null
    /// when unset.
    pub activity_id: Option<ActivityId>,
    /// Social media URLs.
    #[serde(flatten)]
    pub links: SocialLinks,
}

/// Tri-state image field for update payloads.
///
/// `Unchanged` is never serialized (the key is omitted), `Clear` becomes
/// explicit `null`, and `Set` carries a replacement reference.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ImagePatch {
    /// Leave the server-side image reference untouched.
    #[default]
    Unchanged,
    /// Clear the image reference.
    Clear,
    /// Replace the image reference.
    Set(MediaRef),
}

impl ImagePatch {
    /// Whether this patch leaves the image untouched.
    pub fn is_unchanged(&self) -> bool {
        matches!(self, Self::Unchanged)
    }
}

impl Serialize for ImagePatch {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            // `Unchanged` is filtered out by skip_serializing_if before
            // this is reached; treat it like a cleared field if it is not.
            Self::Unchanged | Self::Clear => serializer.serialize_none(),
            Self::Set(media) => media.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for ImagePatch {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match Option::<MediaRef>::deserialize(deserializer)? {
            None => Self::Clear,
            Some(media) => Self::Set(media),
        })
    }
}

/// Draft for updating an existing speaker record.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct SpeakerPatch {
    /// Display name. Required.
    #[validate(length(min = 1, message = "Speaker name is required"))]
    pub name: String,
    /// Optional short role text.
    #[serde(default)]
    pub role: String,
    /// Description text. Required.
    #[validate(length(min = 1, message = "Description is required"))]
    pub description: String,
    /// The activity to attach the speaker to.
    pub activity_id: Option<ActivityId>,
    /// Social media URLs.
    #[serde(flatten)]
    pub links: SocialLinks,
    /// Tri-state image field: omitted when unchanged.
    #[serde(default, skip_serializing_if = "ImagePatch::is_unchanged")]
    pub image: ImagePatch,
}

/// One entry of a full-collection reorder payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderEntry {
    /// The speaker being positioned.
    pub id: SpeakerId,
    /// Zero-based position in the new ordering.
    pub order: u32,
}

/// Tolerant deserializer for activity identifiers.
///
/// The host platform is inconsistent about whether `activity_id` arrives
/// as a JSON number or a numeric string; both are coerced. A string that
/// does not parse is tolerated as unset.
fn deserialize_lenient_activity<'de, D>(deserializer: D) -> Result<Option<ActivityId>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Int(i64),
        Str(String),
    }

    Ok(match Option::<Raw>::deserialize(deserializer)? {
        None => None,
        Some(Raw::Int(value)) => Some(ActivityId::new(value)),
        Some(Raw::Str(value)) => value.trim().parse::<i64>().ok().map(ActivityId::new),
    })
}
