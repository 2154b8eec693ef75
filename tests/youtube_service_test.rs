use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use api_videoteca::config::YoutubeSettings;
use api_videoteca::errors::AppError;
use api_videoteca::services::YoutubeService;

fn settings(base_url: &str) -> YoutubeSettings {
    YoutubeSettings {
        api_key: "dummy_api_key".to_string(),
        base_url: base_url.to_string(),
        query: "manipulação de medicamentos".to_string(),
        region_code: "BR".to_string(),
        published_after: "2025-01-01T00:00:00Z".to_string(),
        published_before: "2026-01-01T00:00:00Z".to_string(),
    }
}

fn service_for(server: &MockServer) -> YoutubeService {
    YoutubeService::new(settings(&server.uri())).expect("service must build")
}

#[tokio::test]
async fn well_formed_items_map_verbatim() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("part", "snippet"))
        .and(query_param("q", "manipulação de medicamentos"))
        .and(query_param("regionCode", "BR"))
        .and(query_param("publishedAfter", "2025-01-01T00:00:00Z"))
        .and(query_param("publishedBefore", "2026-01-01T00:00:00Z"))
        .and(query_param("key", "dummy_api_key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [
                {
                    "id": { "videoId": "abc123" },
                    "snippet": {
                        "title": "Test Video",
                        "description": "Test Description",
                        "channelTitle": "Test Channel",
                        "publishedAt": "2025-05-01T00:00:00Z"
                    }
                },
                {
                    "id": { "videoId": "def456" },
                    "snippet": {
                        "title": "Second Video",
                        "description": "Second Description",
                        "channelTitle": "Second Channel",
                        "publishedAt": "2025-06-01T00:00:00Z"
                    }
                }
            ]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let videos = service_for(&server).fetch_videos().await.unwrap();

    assert_eq!(videos.len(), 2);
    assert_eq!(videos[0].external_id, "abc123");
    assert_eq!(videos[0].title, "Test Video");
    assert_eq!(videos[0].description, "Test Description");
    assert_eq!(videos[0].channel_title, "Test Channel");
    assert_eq!(videos[0].published_at.to_rfc3339(), "2025-05-01T00:00:00+00:00");
    assert_eq!(videos[1].external_id, "def456");
}

#[tokio::test]
async fn empty_items_array_returns_an_empty_list() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "items": [] })))
        .mount(&server)
        .await;

    let videos = service_for(&server).fetch_videos().await.unwrap();

    assert!(videos.is_empty());
}

#[tokio::test]
async fn absent_items_array_returns_an_empty_list() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    let videos = service_for(&server).fetch_videos().await.unwrap();

    assert!(videos.is_empty());
}

#[tokio::test]
async fn items_without_a_snippet_are_skipped() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [
                { "id": { "videoId": "no-snippet" } },
                {
                    "id": { "videoId": "abc123" },
                    "snippet": {
                        "title": "Test Video",
                        "description": "Test Description",
                        "channelTitle": "Test Channel",
                        "publishedAt": "2025-05-01T00:00:00Z"
                    }
                }
            ]
        })))
        .mount(&server)
        .await;

    let videos = service_for(&server).fetch_videos().await.unwrap();

    assert_eq!(videos.len(), 1);
    assert_eq!(videos[0].external_id, "abc123");
}

#[tokio::test]
async fn an_item_without_a_video_id_gets_an_empty_external_id() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [
                {
                    "snippet": {
                        "title": "Anonymous Video",
                        "description": "No id on this one",
                        "channelTitle": "Test Channel",
                        "publishedAt": "2025-05-01T00:00:00Z"
                    }
                }
            ]
        })))
        .mount(&server)
        .await;

    let videos = service_for(&server).fetch_videos().await.unwrap();

    assert_eq!(videos.len(), 1);
    assert_eq!(videos[0].external_id, "");
    assert_eq!(videos[0].title, "Anonymous Video");
}

#[tokio::test]
async fn an_unparseable_published_at_is_a_hard_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "items": [
                {
                    "id": { "videoId": "abc123" },
                    "snippet": {
                        "title": "Test Video",
                        "description": "Test Description",
                        "channelTitle": "Test Channel",
                        "publishedAt": "yesterday-ish"
                    }
                }
            ]
        })))
        .mount(&server)
        .await;

    let err = service_for(&server)
        .fetch_videos()
        .await
        .expect_err("a malformed publishedAt must fail the fetch");

    assert!(matches!(err, AppError::ExternalService(_)));
}

#[tokio::test]
async fn a_non_success_status_is_a_single_attempt_failure() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(403))
        .expect(1)
        .mount(&server)
        .await;

    let err = service_for(&server)
        .fetch_videos()
        .await
        .expect_err("a 403 from the API must fail the fetch");

    assert!(matches!(err, AppError::ExternalService(_)));
}

#[tokio::test]
async fn an_empty_api_key_fails_before_any_request() {
    let server = MockServer::start().await;

    // No mock mounted: a request against the server would 404 and the mock
    // server would record it. Construction must fail first.
    let mut empty_key = settings(&server.uri());
    empty_key.api_key = String::new();

    let err = YoutubeService::new(empty_key).expect_err("an empty key must be rejected");

    assert!(matches!(err, AppError::Configuration(_)));
    assert!(server.received_requests().await.unwrap().is_empty());
}
