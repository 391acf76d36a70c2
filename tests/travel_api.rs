//! Client-level tests against a mocked travel API.

use serde_json::json;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use vandre_admin::config::UpstreamConfig;
use vandre_admin::error::ApiError;
use vandre_admin::services::travel_api::TravelApiClient;

fn client_for(server: &MockServer) -> TravelApiClient {
    TravelApiClient::from_config(&UpstreamConfig {
        base_url: server.uri(),
        timeout_seconds: 5,
    })
}

fn booking_json(id: &str, package: &str, name: &str) -> serde_json::Value {
    json!({
        "id": id,
        "travelPackageId": package,
        "fullName": name,
        "rg": "12.345.678-9",
        "cpf": "123.456.789-00",
        "birthDate": "1990-05-12T00:00:00.000Z",
        "phone": "(11) 98765-4321",
        "email": "maria@example.com",
        "boardingLocation": "Terminal Tietê"
    })
}

#[tokio::test]
async fn list_bookings_attaches_bearer_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/bookings"))
        .and(header("authorization", "Bearer tok-1"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!([booking_json("b-1", "pkg-1", "Maria")])),
        )
        .mount(&server)
        .await;

    let bookings = client_for(&server).list_bookings(Some("tok-1")).await.unwrap();
    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0].full_name, "Maria");
}

#[tokio::test]
async fn create_booking_carries_no_authorization() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/bookings"))
        .respond_with(
            ResponseTemplate::new(201).set_body_json(booking_json("b-1", "pkg-1", "Maria da Silva")),
        )
        .mount(&server)
        .await;

    let payload = serde_json::from_value(json!({
        "travelPackageId": "pkg-1",
        "fullName": "Maria da Silva",
        "rg": "12.345.678-9",
        "cpf": "123.456.789-00",
        "birthDate": "1990-05-12",
        "phone": "(11) 98765-4321",
        "email": "maria@example.com",
        "boardingLocation": "Terminal Tietê"
    }))
    .unwrap();

    client_for(&server).create_booking(&payload).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert_eq!(requests.len(), 1);
    assert!(!requests[0].headers.contains_key("authorization"));
}

#[tokio::test]
async fn upstream_message_is_surfaced_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/bookings/b-9"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({ "message": "Reserva não encontrada" })),
        )
        .mount(&server)
        .await;

    let err = client_for(&server)
        .delete_booking("tok-1", "b-9")
        .await
        .unwrap_err();
    match err {
        ApiError::Upstream { status, message } => {
            assert_eq!(status.as_u16(), 404);
            assert_eq!(message, "Reserva não encontrada");
        }
        other => panic!("expected upstream error, got {other:?}"),
    }
}

#[tokio::test]
async fn upstream_error_without_message_falls_back_to_status_line() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/travel-packages"))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let err = client_for(&server)
        .list_travel_packages("tok-1")
        .await
        .unwrap_err();
    match err {
        ApiError::Upstream { status, message } => {
            assert_eq!(status.as_u16(), 500);
            assert!(message.contains("500"));
        }
        other => panic!("expected upstream error, got {other:?}"),
    }
}

#[tokio::test]
async fn user_listing_forwards_pagination_query() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/user/admin/users"))
        .and(query_param("skip", "20"))
        .and(query_param("limit", "10"))
        .and(query_param("search", "maria"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({ "users": [], "totalCount": 42 })),
        )
        .mount(&server)
        .await;

    let page = client_for(&server)
        .list_users("tok-1", 20, 10, "maria")
        .await
        .unwrap();
    assert_eq!(page.total_count, 42);
}

#[tokio::test]
async fn video_creation_is_authenticated_json() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/course/video"))
        .and(header("authorization", "Bearer tok-1"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "v-1",
            "title": "Aula 1",
            "url": "https://example.com/aula1.mp4",
            "group": { "id": "g-1", "title": "Módulo 1" }
        })))
        .mount(&server)
        .await;

    let payload = serde_json::from_value(json!({
        "title": "Aula 1",
        "url": "https://example.com/aula1.mp4",
        "durationMinutes": 12,
        "videoGroupId": "g-1",
        "courseId": "c-1"
    }))
    .unwrap();

    let video = client_for(&server).create_video("tok-1", &payload).await.unwrap();
    assert_eq!(video.id, "v-1");
}

#[tokio::test]
async fn course_groups_parse_from_a_bare_array() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/course/c-1/groups"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            { "id": "g-1", "title": "Módulo 1", "variant": "default" },
            { "id": "g-2", "title": "Módulo 2" }
        ])))
        .mount(&server)
        .await;

    let groups = client_for(&server).course_groups("c-1").await.unwrap();
    assert_eq!(groups.len(), 2);
    assert_eq!(groups[1].title, "Módulo 2");
}

#[tokio::test]
async fn unexpected_video_shape_yields_empty_list() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/course/videos"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "data": [1, 2, 3] })))
        .mount(&server)
        .await;

    let videos = client_for(&server).list_videos().await.unwrap();
    assert!(videos.is_empty());
}

#[tokio::test]
async fn total_videos_defaults_to_zero() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/course/videos/total"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
        .mount(&server)
        .await;

    assert_eq!(client_for(&server).total_videos().await.unwrap(), 0);
}
