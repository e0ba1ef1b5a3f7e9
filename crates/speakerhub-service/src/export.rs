//! Speakers export artifact.

use speakerhub_core::result::AppResult;
use speakerhub_core::traits::MediaStore;
use speakerhub_entity::{Activity, SocialPlatform, Speaker, SpeakerExport};

/// Project speakers into flat export rows.
///
/// Dangling or unset activity references export as empty strings, as do
/// missing images and links.
pub fn build_export(
    speakers: &[&Speaker],
    activities: &[Activity],
    media: &dyn MediaStore,
) -> Vec<SpeakerExport> {
    speakers
        .iter()
        .map(|s| SpeakerExport {
            name: s.name.clone(),
            description: s.description.clone(),
            activity: s
                .activity_id
                .and_then(|id| Activity::name_by_id(activities, id))
                .unwrap_or("")
                .to_string(),
            image_url: s
                .image
                .as_ref()
                .map(|m| media.public_url(m))
                .unwrap_or_default(),
            linkedin: link(s, SocialPlatform::Linkedin),
            facebook: link(s, SocialPlatform::Facebook),
            instagram: link(s, SocialPlatform::Instagram),
            youtube: link(s, SocialPlatform::Youtube),
        })
        .collect()
}

/// Serialize export rows to the pretty-printed JSON artifact.
pub fn export_json(
    speakers: &[&Speaker],
    activities: &[Activity],
    media: &dyn MediaStore,
) -> AppResult<String> {
    let rows = build_export(speakers, activities, media);
    Ok(serde_json::to_string_pretty(&rows)?)
}

fn link(speaker: &Speaker, platform: SocialPlatform) -> String {
    speaker.links.get(platform).unwrap_or_default().to_string()
}
