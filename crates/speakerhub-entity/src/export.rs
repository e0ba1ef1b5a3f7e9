//! Flat export projection of a speaker record.

use serde::{Deserialize, Serialize};

/// One row of the downloadable speakers export artifact.
///
/// Every field is a plain string; missing values export as empty strings
/// rather than nulls so the artifact stays spreadsheet-friendly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeakerExport {
    /// Speaker name.
    pub name: String,
    /// Speaker description.
    pub description: String,
    /// Resolved activity name, empty when unassigned or dangling.
    pub activity: String,
    /// Public image URL, empty when no image is attached.
    pub image_url: String,
    /// LinkedIn URL.
    pub linkedin: String,
    /// Facebook URL.
    pub facebook: String,
    /// Instagram URL.
    pub instagram: String,
    /// YouTube URL.
    pub youtube: String,
}
