//! Derived list views: filter, sort, and paginate.
//!
//! These are pure functions over the store's current list and query state;
//! nothing here is cached, every call recomputes from scratch.

use serde::{Deserialize, Serialize};

use speakerhub_core::types::{ActivityId, PageRequest, PageResponse, SortDirection, SpeakerId};
use speakerhub_entity::{Activity, Speaker};

/// Sortable columns of the speaker list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SpeakerSortField {
    /// Speaker name.
    Name,
    /// Speaker role.
    Role,
    /// Speaker description.
    Description,
    /// Resolved activity name.
    Activity,
}

/// A sort specification: column plus direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortSpec {
    /// Column to sort by.
    pub field: SpeakerSortField,
    /// Sort direction.
    pub direction: SortDirection,
}

impl Default for SortSpec {
    fn default() -> Self {
        Self {
            field: SpeakerSortField::Name,
            direction: SortDirection::Asc,
        }
    }
}

impl SortSpec {
    /// Select a sort column. Re-selecting the active column flips the
    /// direction; selecting a new column resets to ascending.
    pub fn toggle(&mut self, field: SpeakerSortField) {
        if self.field == field {
            self.direction = self.direction.flipped();
        } else {
            self.field = field;
            self.direction = SortDirection::Asc;
        }
    }
}

/// Query state driving the derived views.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ListQuery {
    /// Free-text filter over name and description.
    #[serde(default)]
    pub search: String,
    /// Restrict to speakers attached to this activity.
    #[serde(default)]
    pub activity: Option<ActivityId>,
    /// Sort specification.
    #[serde(default)]
    pub sort: SortSpec,
    /// Current page (1-based; 0 is treated as 1).
    #[serde(default)]
    pub page: u64,
}

/// Filter the list by free text and activity.
///
/// A speaker matches when the query is empty or a case-insensitive
/// substring of its name or description, and when the activity filter is
/// unset or equal to its `activity_id`.
pub fn filter<'a>(speakers: &'a [Speaker], query: &ListQuery) -> Vec<&'a Speaker> {
    let needle = query.search.to_lowercase();
    speakers
        .iter()
        .filter(|s| {
            let matches_search = needle.is_empty()
                || s.name.to_lowercase().contains(&needle)
                || s.description.to_lowercase().contains(&needle);
            let matches_activity =
                query.activity.is_none() || s.activity_id == query.activity;
            matches_search && matches_activity
        })
        .collect()
}

/// Sort key for one speaker. Activity sorting resolves the activity name
/// through the activity collection; dangling references sort as empty.
fn sort_key<'a>(
    speaker: &'a Speaker,
    field: SpeakerSortField,
    activities: &'a [Activity],
) -> &'a str {
    match field {
        SpeakerSortField::Name => &speaker.name,
        SpeakerSortField::Role => &speaker.role,
        SpeakerSortField::Description => &speaker.description,
        SpeakerSortField::Activity => speaker
            .activity_id
            .and_then(|id| Activity::name_by_id(activities, id))
            .unwrap_or(""),
    }
}

/// Sort a filtered view in place.
pub fn sort(items: &mut [&Speaker], spec: SortSpec, activities: &[Activity]) {
    items.sort_by(|a, b| {
        let ka = sort_key(a, spec.field, activities);
        let kb = sort_key(b, spec.field, activities);
        spec.direction.orient(ka.cmp(kb))
    });
}

/// Compute the full visible ordering (filtered and sorted, unpaginated).
pub fn visible<'a>(
    speakers: &'a [Speaker],
    activities: &[Activity],
    query: &ListQuery,
) -> Vec<&'a Speaker> {
    let mut items = filter(speakers, query);
    sort(&mut items, query.sort, activities);
    items
}

/// Identifiers of the visible ordering, used to build reorder payloads.
pub fn visible_ids(
    speakers: &[Speaker],
    activities: &[Activity],
    query: &ListQuery,
) -> Vec<SpeakerId> {
    visible(speakers, activities, query)
        .into_iter()
        .map(|s| s.id)
        .collect()
}

/// Compute one page of the visible ordering.
pub fn page(
    speakers: &[Speaker],
    activities: &[Activity],
    query: &ListQuery,
    page_size: u64,
) -> PageResponse<Speaker> {
    let items = visible(speakers, activities, query);
    let total_items = items.len() as u64;
    let request = PageRequest::new(query.page.max(1), page_size);
    let page_items = request
        .slice(&items)
        .iter()
        .map(|s| (*s).clone())
        .collect();
    PageResponse::new(page_items, request.page, request.page_size, total_items)
}
