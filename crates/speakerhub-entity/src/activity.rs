//! Activity entity from the host platform.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use speakerhub_core::types::ActivityId;

/// An activity (session, talk slot) owned by the host platform.
///
/// Speakers reference activities by id; the reference may dangle when an
/// activity has been removed, in which case callers display a stand-in
/// label instead of failing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    /// Host-assigned identifier.
    pub id: ActivityId,
    /// Display name.
    pub name: String,
    /// When the activity takes place, if scheduled.
    #[serde(default)]
    pub date: Option<DateTime<Utc>>,
}

impl Activity {
    /// Resolve an activity name by id within a slice of activities.
    ///
    /// Returns `None` for a dangling reference.
    pub fn name_by_id(activities: &[Activity], id: ActivityId) -> Option<&str> {
        activities
            .iter()
            .find(|a| a.id == id)
            .map(|a| a.name.as_str())
    }

    /// Display label for a possibly dangling activity reference.
    pub fn label_for(activities: &[Activity], id: ActivityId) -> String {
        match Self::name_by_id(activities, id) {
            Some(name) => name.to_string(),
            None => format!("Activity #{id}"),
        }
    }
}
