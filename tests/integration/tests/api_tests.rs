//! API Integration Tests
//!
//! Each test spawns its own server on an ephemeral port over a fresh
//! in-memory store, so no external services are required.
//!
//! Run with: cargo test -p integration-tests --test api_tests

use std::time::Duration;

use chrono::Utc;
use integration_tests::{
    assert_json, assert_status, ErrorResponse, MessageResponse, ParticipantResponse,
    PostMessageRequest, RegisterRequest, TestServer,
};
use reqwest::StatusCode;

async fn register(server: &TestServer, name: &str) {
    let response = server
        .post("/participants", &RegisterRequest::named(name))
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();
}

async fn messages_for(server: &TestServer, user: &str) -> Vec<MessageResponse> {
    let response = server.get_as("/messages", Some(user)).await.unwrap();
    assert_json(response, StatusCode::OK).await.unwrap()
}

// ============================================================================
// Health Check Tests
// ============================================================================

#[tokio::test]
async fn test_health_check() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health").await.expect("Request failed");
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_health_ready() {
    let server = TestServer::start().await.expect("Failed to start server");
    let response = server.get("/health/ready").await.expect("Request failed");
    let body: serde_json::Value = assert_json(response, StatusCode::OK).await.unwrap();

    assert_eq!(body["status"], "ready");
    assert_eq!(body["checks"]["store"], "healthy");
}

#[tokio::test]
async fn test_responses_carry_request_id() {
    let server = TestServer::start().await.unwrap();
    let response = server.get("/health").await.unwrap();

    assert!(response.headers().contains_key("x-request-id"));
}

// ============================================================================
// Participant Tests
// ============================================================================

#[tokio::test]
async fn test_register_participant() {
    let server = TestServer::start().await.unwrap();
    let request = RegisterRequest::unique();

    let response = server.post("/participants", &request).await.unwrap();
    let created: ParticipantResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(created.name, request.name);
    assert!(created.last_status > 0);
}

#[tokio::test]
async fn test_register_appends_arrival_message() {
    let server = TestServer::start().await.unwrap();
    register(&server, "Ann").await;

    let messages = messages_for(&server, "Ann").await;
    assert_eq!(messages.len(), 1);
    assert_eq!(messages[0].from, "Ann");
    assert_eq!(messages[0].to, "Todos");
    assert_eq!(messages[0].kind, "message");
    assert_eq!(messages[0].time.len(), 8);
}

#[tokio::test]
async fn test_register_trims_name() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .post("/participants", &RegisterRequest::named("  Ann  "))
        .await
        .unwrap();
    let created: ParticipantResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(created.name, "Ann");
}

#[tokio::test]
async fn test_register_duplicate_name_conflicts() {
    let server = TestServer::start().await.unwrap();
    register(&server, "Ann").await;

    let response = server
        .post("/participants", &RegisterRequest::named("Ann"))
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::CONFLICT).await.unwrap();
    assert!(error.error.details.is_none());

    // No second arrival notice
    let arrivals = messages_for(&server, "Ann").await;
    assert_eq!(arrivals.len(), 1);
    assert_eq!(server.store.participant_count(), 1);
}

#[tokio::test]
async fn test_register_blank_name_is_rejected() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .post("/participants", &RegisterRequest::named("   "))
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::UNPROCESSABLE_ENTITY)
        .await
        .unwrap();

    assert!(error.error.details.is_some_and(|d| !d.is_empty()));
    assert_eq!(server.store.participant_count(), 0);
}

#[tokio::test]
async fn test_register_missing_name_is_rejected() {
    let server = TestServer::start().await.unwrap();

    let response = server.post_raw("/participants", "{}").await.unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::UNPROCESSABLE_ENTITY)
        .await
        .unwrap();

    assert_eq!(error.error.code, "INVALID_BODY");
}

#[tokio::test]
async fn test_concurrent_registration_admits_one() {
    let server = TestServer::start().await.unwrap();
    let request = RegisterRequest::named("Bob");

    let (first, second) = tokio::join!(
        server.post("/participants", &request),
        server.post("/participants", &request),
    );
    let mut statuses = [first.unwrap().status(), second.unwrap().status()];
    statuses.sort();

    assert_eq!(statuses, [StatusCode::CREATED, StatusCode::CONFLICT]);
    assert_eq!(server.store.participant_count(), 1);
    assert_eq!(messages_for(&server, "Bob").await.len(), 1);
}

#[tokio::test]
async fn test_list_participants() {
    let server = TestServer::start().await.unwrap();
    register(&server, "Bob").await;
    register(&server, "Ann").await;

    let response = server.get("/participants").await.unwrap();
    let participants: Vec<ParticipantResponse> =
        assert_json(response, StatusCode::OK).await.unwrap();

    let names: Vec<&str> = participants.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Ann", "Bob"]);
    assert!(participants.iter().all(|p| p.last_status > 0));
}

// ============================================================================
// Message Tests
// ============================================================================

#[tokio::test]
async fn test_post_message() {
    let server = TestServer::start().await.unwrap();
    register(&server, "Ann").await;

    let response = server
        .post_as("/messages", Some("Ann"), &PostMessageRequest::public("hi all"))
        .await
        .unwrap();
    let message: MessageResponse = assert_json(response, StatusCode::CREATED).await.unwrap();

    assert_eq!(message.from, "Ann");
    assert_eq!(message.to, "Todos");
    assert_eq!(message.text, "hi all");
    assert_eq!(message.kind, "message");
}

#[tokio::test]
async fn test_post_message_with_bad_type_appends_nothing() {
    let server = TestServer::start().await.unwrap();
    register(&server, "Ann").await;
    let before = server.store.messages().len();

    for kind in ["status", "shout"] {
        let response = server
            .post_as("/messages", Some("Ann"), &PostMessageRequest::with_kind(kind))
            .await
            .unwrap();
        assert_status(response, StatusCode::UNPROCESSABLE_ENTITY)
            .await
            .unwrap();
    }

    assert_eq!(server.store.messages().len(), before);
}

#[tokio::test]
async fn test_post_message_from_unregistered_sender() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .post_as("/messages", Some("Ghost"), &PostMessageRequest::public("boo"))
        .await
        .unwrap();
    assert_status(response, StatusCode::UNPROCESSABLE_ENTITY)
        .await
        .unwrap();
    assert!(server.store.messages().is_empty());
}

#[tokio::test]
async fn test_post_message_without_user_header() {
    let server = TestServer::start().await.unwrap();

    let response = server
        .post_as("/messages", None, &PostMessageRequest::public("hi"))
        .await
        .unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::UNPROCESSABLE_ENTITY)
        .await
        .unwrap();

    assert_eq!(error.error.code, "MISSING_HEADER");
}

#[tokio::test]
async fn test_private_messages_are_hidden_from_others() {
    let server = TestServer::start().await.unwrap();
    for name in ["Ann", "Bob", "Cid"] {
        register(&server, name).await;
    }

    let response = server
        .post_as("/messages", Some("Ann"), &PostMessageRequest::private("Bob", "psst"))
        .await
        .unwrap();
    assert_status(response, StatusCode::CREATED).await.unwrap();

    let is_secret = |m: &MessageResponse| m.text == "psst";
    assert!(messages_for(&server, "Ann").await.iter().any(is_secret));
    assert!(messages_for(&server, "Bob").await.iter().any(is_secret));
    assert!(!messages_for(&server, "Cid").await.iter().any(is_secret));
}

#[tokio::test]
async fn test_get_messages_newest_first_with_limit() {
    let server = TestServer::start().await.unwrap();
    register(&server, "Ann").await;
    for text in ["one", "two", "three"] {
        let response = server
            .post_as("/messages", Some("Ann"), &PostMessageRequest::public(text))
            .await
            .unwrap();
        assert_status(response, StatusCode::CREATED).await.unwrap();
    }

    let response = server.get_as("/messages?limit=2", Some("Ann")).await.unwrap();
    let messages: Vec<MessageResponse> = assert_json(response, StatusCode::OK).await.unwrap();

    let texts: Vec<&str> = messages.iter().map(|m| m.text.as_str()).collect();
    assert_eq!(texts, ["three", "two"]);
}

#[tokio::test]
async fn test_get_messages_rejects_bad_limit() {
    let server = TestServer::start().await.unwrap();

    for limit in ["0", "-3", "abc"] {
        let path = format!("/messages?limit={limit}");
        let response = server.get_as(&path, Some("Ann")).await.unwrap();
        let error: ErrorResponse = assert_json(response, StatusCode::UNPROCESSABLE_ENTITY)
            .await
            .unwrap();
        assert_eq!(error.error.code, "INVALID_QUERY_PARAMETER");
    }
}

#[tokio::test]
async fn test_get_messages_without_user_header() {
    let server = TestServer::start().await.unwrap();

    let response = server.get_as("/messages", None).await.unwrap();
    assert_status(response, StatusCode::UNPROCESSABLE_ENTITY)
        .await
        .unwrap();
}

// ============================================================================
// Heartbeat Tests
// ============================================================================

#[tokio::test]
async fn test_heartbeat_known_participant() {
    let server = TestServer::start().await.unwrap();
    register(&server, "Ann").await;

    let response = server.post_empty_as("/status", Some("Ann")).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
}

#[tokio::test]
async fn test_heartbeat_unknown_participant() {
    let server = TestServer::start().await.unwrap();

    let response = server.post_empty_as("/status", Some("Ghost")).await.unwrap();
    let error: ErrorResponse = assert_json(response, StatusCode::NOT_FOUND).await.unwrap();
    assert!(error.error.details.is_none());

    let response = server.post_empty_as("/status", None).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

// ============================================================================
// Presence Tests
// ============================================================================

#[tokio::test]
async fn test_inactive_participant_is_evicted() {
    let server = TestServer::start().await.unwrap();
    register(&server, "Ann").await;
    register(&server, "Bob").await;

    let report = server
        .sweeper()
        .sweep_at(Utc::now() + chrono::Duration::seconds(16))
        .await
        .report()
        .expect("sweep should complete");
    assert_eq!(report.evicted, 2);

    let response = server.get("/participants").await.unwrap();
    let participants: Vec<ParticipantResponse> =
        assert_json(response, StatusCode::OK).await.unwrap();
    assert!(participants.is_empty());

    let departures: Vec<MessageResponse> = messages_for(&server, "Cid")
        .await
        .into_iter()
        .filter(|m| m.kind == "status")
        .collect();
    assert_eq!(departures.len(), 2);
    assert!(departures.iter().any(|m| m.from == "Ann" && m.to == "Todos"));

    // Evicted participants can no longer heartbeat
    let response = server.post_empty_as("/status", Some("Ann")).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}

async fn last_status_of(server: &TestServer, name: &str) -> i64 {
    let response = server.get("/participants").await.unwrap();
    let participants: Vec<ParticipantResponse> =
        assert_json(response, StatusCode::OK).await.unwrap();
    participants
        .into_iter()
        .find(|p| p.name == name)
        .map(|p| p.last_status)
        .expect("participant should be listed")
}

#[tokio::test]
async fn test_heartbeat_keeps_participant_in_room() {
    let server = TestServer::start().await.unwrap();
    register(&server, "Bob").await;
    register(&server, "Ann").await;
    let registered_ms = last_status_of(&server, "Ann").await;
    tokio::time::sleep(Duration::from_millis(50)).await;

    let response = server.post_empty_as("/status", Some("Ann")).await.unwrap();
    assert_status(response, StatusCode::OK).await.unwrap();
    assert!(last_status_of(&server, "Ann").await >= registered_ms + 50);

    // Just past the timeout for anyone last seen at registration
    let now = chrono::DateTime::from_timestamp_millis(registered_ms + 10_001)
        .expect("timestamp in range");
    let report = server
        .sweeper()
        .sweep_at(now)
        .await
        .report()
        .expect("sweep should complete");
    assert_eq!(report.scanned, 2);
    assert_eq!(report.evicted, 1);

    let response = server.get("/participants").await.unwrap();
    let participants: Vec<ParticipantResponse> =
        assert_json(response, StatusCode::OK).await.unwrap();
    let names: Vec<&str> = participants.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["Ann"]);

    let response = server.post_empty_as("/status", Some("Bob")).await.unwrap();
    assert_status(response, StatusCode::NOT_FOUND).await.unwrap();
}
