//! Integration tests for the read-only display widget.

mod helpers;

use std::sync::Arc;

use speakerhub_core::types::{ActivityId, SpeakerId};
use speakerhub_service::{SpeakerWidget, WidgetSelector};

use helpers::{FakeActivities, FakeCollection};

fn widget() -> SpeakerWidget {
    let collection = Arc::new(FakeCollection::seeded(vec![
        helpers::speaker(1, "Ana Silva", "Keynote", Some(7)),
        helpers::speaker(2, "Bruno", "Workshop", Some(8)),
        // Same person attached to a second activity as a separate record.
        helpers::speaker(3, "Ana Silva", "Panel", Some(8)),
        helpers::speaker(4, "Carla", "Closing", None),
    ]));
    let activities = Arc::new(FakeActivities::seeded(vec![
        helpers::activity(7, "Opening day"),
        helpers::activity(8, "Main stage"),
        helpers::activity(9, "Unrelated"),
    ]));
    SpeakerWidget::new(collection, activities)
}

#[tokio::test]
async fn test_id_selector_takes_precedence_over_activity() {
    let widget = widget();
    let selector = WidgetSelector {
        speaker_id: Some(SpeakerId::new(2)),
        activity_id: Some(ActivityId::new(7)),
        ..WidgetSelector::default()
    };
    let speakers = widget.load(&selector).await.expect("load");
    assert_eq!(speakers.len(), 1);
    assert_eq!(speakers[0].name, "Bruno");
}

#[tokio::test]
async fn test_activity_selector_filters_membership() {
    let widget = widget();
    let selector = WidgetSelector {
        activity_id: Some(ActivityId::new(8)),
        ..WidgetSelector::default()
    };
    let speakers = widget.load(&selector).await.expect("load");
    let names: Vec<_> = speakers.iter().map(|s| s.name.clone()).collect();
    assert_eq!(names, ["Bruno", "Ana Silva"]);
}

#[tokio::test]
async fn test_name_query_narrows_case_insensitively() {
    let widget = widget();
    let selector = WidgetSelector {
        name_query: "  ANA ".to_string(),
        ..WidgetSelector::default()
    };
    let speakers = widget.load(&selector).await.expect("load");
    assert_eq!(speakers.len(), 2);
    assert!(speakers.iter().all(|s| s.name == "Ana Silva"));
}

#[tokio::test]
async fn test_empty_selector_returns_everything() {
    let widget = widget();
    let speakers = widget
        .load(&WidgetSelector::default())
        .await
        .expect("load");
    assert_eq!(speakers.len(), 4);
}

#[tokio::test]
async fn test_detail_joins_activities_across_same_name_records() {
    let widget = widget();
    let ana = helpers::speaker(1, "Ana Silva", "Keynote", Some(7));
    let detail = widget.detail(&ana).await.expect("detail");
    let names: Vec<_> = detail.activities.iter().map(|a| a.name.clone()).collect();
    assert_eq!(names, ["Opening day", "Main stage"]);
}

#[tokio::test]
async fn test_detail_for_unattached_speaker_has_no_activities() {
    let widget = widget();
    let carla = helpers::speaker(4, "Carla", "Closing", None);
    let detail = widget.detail(&carla).await.expect("detail");
    assert!(detail.activities.is_empty());
}
