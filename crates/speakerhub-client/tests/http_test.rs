//! Integration tests for the HTTP adapters against a mock server.

use serde_json::json;
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use speakerhub_client::{HttpMediaStore, HttpSpeakerCollection, SpeakerCollection};
use speakerhub_core::config::{ApiConfig, MediaConfig};
use speakerhub_core::error::ErrorKind;
use speakerhub_core::traits::MediaStore;
use speakerhub_core::types::{MediaRef, SpeakerId};
use speakerhub_entity::{ImagePatch, NewSpeaker, OrderEntry, SocialLinks, SpeakerPatch};

fn collection_for(server: &MockServer) -> HttpSpeakerCollection {
    let config = ApiConfig {
        base_url: server.uri(),
        timeout_seconds: 5,
    };
    HttpSpeakerCollection::from_config(&config).expect("build collection client")
}

fn draft(name: &str, description: &str) -> NewSpeaker {
    NewSpeaker {
        name: name.to_string(),
        role: String::new(),
        description: description.to_string(),
        activity_id: None,
        links: SocialLinks::default(),
    }
}

fn patch(name: &str, image: ImagePatch) -> SpeakerPatch {
    SpeakerPatch {
        name: name.to_string(),
        role: String::new(),
        description: "Keynote".to_string(),
        activity_id: None,
        links: SocialLinks::default(),
        image,
    }
}

#[tokio::test]
async fn list_accepts_bare_array_and_wrapped_shapes() {
    for body in [
        json!([{"id": 1, "name": "Ana Silva"}]),
        json!({"results": [{"id": 1, "name": "Ana Silva"}]}),
        json!({"items": [{"id": 1, "name": "Ana Silva"}]}),
    ] {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/speakers/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .mount(&server)
            .await;

        let speakers = collection_for(&server).list().await.expect("list speakers");
        assert_eq!(speakers.len(), 1);
        assert_eq!(speakers[0].name, "Ana Silva");
    }
}

#[tokio::test]
async fn list_rejects_unrecognized_shape() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/speakers/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
        .mount(&server)
        .await;

    let err = collection_for(&server).list().await.expect_err("should fail");
    assert_eq!(err.kind, ErrorKind::Malformed);
}

#[tokio::test]
async fn create_sends_nulls_and_no_image_field() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/speakers/"))
        .and(body_json(json!({
            "name": "Jane Doe",
            "role": "",
            "description": "Keynote",
            "activity_id": null,
            "linkedin": "https://linkedin.com/in/janedoe",
            "facebook": null,
            "instagram": null,
            "youtube": null
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 11,
            "name": "Jane Doe",
            "description": "Keynote",
            "image": "slot-11"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let mut draft = draft("Jane Doe", "Keynote");
    draft
        .links
        .set(speakerhub_entity::SocialPlatform::Linkedin, "https://linkedin.com/in/janedoe");

    let created = collection_for(&server).create(&draft).await.expect("create");
    assert_eq!(created.id, SpeakerId::new(11));
    assert_eq!(created.image, Some(MediaRef::new("slot-11")));
}

#[tokio::test]
async fn create_prefers_server_detail_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/speakers/"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"detail": "Activity not found"})),
        )
        .mount(&server)
        .await;

    let err = collection_for(&server)
        .create(&draft("Jane", "Keynote"))
        .await
        .expect_err("should fail");
    assert_eq!(err.kind, ErrorKind::Remote);
    assert_eq!(err.message, "Activity not found");
}

#[tokio::test]
async fn create_falls_back_to_generic_message() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/speakers/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let err = collection_for(&server)
        .create(&draft("Jane", "Keynote"))
        .await
        .expect_err("should fail");
    assert_eq!(err.message, "Failed to add speaker");
}

#[tokio::test]
async fn update_with_clear_sends_explicit_null_image() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/speakers/5"))
        .and(body_json(json!({
            "name": "Jane",
            "role": "",
            "description": "Keynote",
            "activity_id": null,
            "linkedin": null,
            "facebook": null,
            "instagram": null,
            "youtube": null,
            "image": null
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"id": 5, "name": "Jane", "image": null})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let updated = collection_for(&server)
        .update(SpeakerId::new(5), &patch("Jane", ImagePatch::Clear))
        .await
        .expect("update");
    assert_eq!(updated.image, None);
}

#[tokio::test]
async fn update_with_unchanged_omits_image_key() {
    let server = MockServer::start().await;
    Mock::given(method("PATCH"))
        .and(path("/speakers/5"))
        .and(body_json(json!({
            "name": "Jane",
            "role": "",
            "description": "Keynote",
            "activity_id": null,
            "linkedin": null,
            "facebook": null,
            "instagram": null,
            "youtube": null
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"id": 5, "name": "Jane", "image": "slot-5"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let updated = collection_for(&server)
        .update(SpeakerId::new(5), &patch("Jane", ImagePatch::Unchanged))
        .await
        .expect("update");
    assert_eq!(updated.image, Some(MediaRef::new("slot-5")));
}

#[tokio::test]
async fn reorder_posts_id_order_pairs() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/speakers/reorder"))
        .and(body_json(json!([
            {"id": 2, "order": 0},
            {"id": 1, "order": 1},
            {"id": 3, "order": 2}
        ])))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let entries = [
        OrderEntry { id: SpeakerId::new(2), order: 0 },
        OrderEntry { id: SpeakerId::new(1), order: 1 },
        OrderEntry { id: SpeakerId::new(3), order: 2 },
    ];
    collection_for(&server)
        .reorder(&entries)
        .await
        .expect("reorder");
}

#[tokio::test]
async fn delete_hits_record_path() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/speakers/9"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    collection_for(&server)
        .delete(SpeakerId::new(9))
        .await
        .expect("delete");
}

#[tokio::test]
async fn media_upload_selects_verb_by_replace_flag() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/media/slot-1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/media/slot-1"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let store = HttpMediaStore::new(&server.uri(), &MediaConfig::default())
        .expect("build media client");
    let slot = MediaRef::new("slot-1");
    store
        .upload(&slot, bytes::Bytes::from_static(b"img"), true)
        .await
        .expect("replace upload");
    store
        .upload(&slot, bytes::Bytes::from_static(b"img"), false)
        .await
        .expect("create upload");
}

#[tokio::test]
async fn media_failed_upload_is_a_media_fault() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(path("/media/slot-1"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let store = HttpMediaStore::new(&server.uri(), &MediaConfig::default())
        .expect("build media client");
    let err = store
        .upload(&MediaRef::new("slot-1"), bytes::Bytes::from_static(b"img"), true)
        .await
        .expect_err("should fail");
    assert_eq!(err.kind, ErrorKind::Media);
}
