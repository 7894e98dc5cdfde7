//! End-to-end tests of the chat turn protocol over HTTP
//!
//! These drive a real `SessionClient` through `ChatApi` against a mock
//! backend, covering request shape, transcript ordering, session handle
//! adoption, error surfacing, and the single-outstanding-send guard.

use std::sync::Arc;
use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{body_json, body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use calma::api::{ApiClient, ChatApi};
use calma::config::ApiConfig;
use calma::error::CalmaError;
use calma::session::{SessionClient, SessionState, TranscriptEntry};

fn session_over(server: &MockServer, jar: &tempfile::TempDir) -> SessionClient<ChatApi> {
    let client = ApiClient::new(&ApiConfig {
        base_url: format!("{}/api", server.uri()),
        timeout_seconds: 5,
    })
    .unwrap()
    .with_cookie_jar(jar.path().join("cookie"));
    SessionClient::new(ChatApi::new(Arc::new(client)), "u1".to_string())
}

fn turn_body(
    user_id: &str,
    user_text: &str,
    bot_id: &str,
    bot_text: &str,
    session: &str,
) -> serde_json::Value {
    json!({
        "userMessage": {
            "id": user_id,
            "message": user_text,
            "sender": "USER",
            "timestamp": "2026-08-30T10:00:00Z"
        },
        "botMessage": {
            "id": bot_id,
            "message": bot_text,
            "sender": "BOT",
            "timestamp": "2026-08-30T10:00:01Z",
            "emotionalTone": "warm",
            "detectedTopics": ["greeting"],
            "analysisResults": {
                "mood_detected": "neutral",
                "confidence": 0.82
            }
        },
        "session": {"id": session, "title": "A new conversation"}
    })
}

#[tokio::test]
async fn test_turn_sends_exactly_one_request_and_appends_in_order() {
    let server = MockServer::start().await;
    let jar = tempfile::tempdir().unwrap();

    Mock::given(method("POST"))
        .and(path("/api/chat/message"))
        .and(body_json(json!({"message": "Hey", "userId": "u1"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(turn_body("1", "Hey", "2", "Hello!", "s1")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let session = session_over(&server, &jar);
    let turn = session.send_turn("Hey").await.unwrap();
    assert_eq!(turn.user.message, "Hey");
    assert_eq!(turn.bot.message, "Hello!");

    let transcript = session.transcript();
    assert_eq!(transcript.len(), 2);
    assert!(matches!(&transcript[0], TranscriptEntry::User(m) if m.id == "1"));
    assert!(matches!(&transcript[1], TranscriptEntry::Bot(m) if m.id == "2"));
    assert_eq!(session.state(), SessionState::Active);
}

#[tokio::test]
async fn test_second_turn_carries_adopted_session_id() {
    let server = MockServer::start().await;
    let jar = tempfile::tempdir().unwrap();

    Mock::given(method("POST"))
        .and(path("/api/chat/message"))
        .and(body_json(json!({"message": "Hey", "userId": "u1"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(turn_body("1", "Hey", "2", "Hello!", "s1")),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/chat/message"))
        .and(body_json(json!({
            "message": "I'm sad",
            "userId": "u1",
            "sessionId": "s1"
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(turn_body("3", "I'm sad", "4", "I'm sorry to hear that.", "s1")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let session = session_over(&server, &jar);
    assert_eq!(session.session_id(), None);

    session.send_turn("Hey").await.unwrap();
    assert_eq!(session.session_id(), Some("s1".to_string()));

    let turn = session.send_turn("I'm sad").await.unwrap();
    assert_eq!(turn.bot.message, "I'm sorry to hear that.");
    assert_eq!(session.transcript_len(), 4);
}

#[tokio::test]
async fn test_adopted_session_id_survives_a_different_response_id() {
    let server = MockServer::start().await;
    let jar = tempfile::tempdir().unwrap();

    Mock::given(method("POST"))
        .and(path("/api/chat/message"))
        .and(body_partial_json(json!({"message": "Hey"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(turn_body("1", "Hey", "2", "Hello!", "s1")),
        )
        .expect(1)
        .mount(&server)
        .await;
    // Misbehaving backend hands back a different session id
    Mock::given(method("POST"))
        .and(path("/api/chat/message"))
        .and(body_partial_json(json!({"sessionId": "s1"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(turn_body("3", "Still here", "4", "Yes.", "s2")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let session = session_over(&server, &jar);
    session.send_turn("Hey").await.unwrap();
    session.send_turn("Still here").await.unwrap();
    assert_eq!(session.session_id(), Some("s1".to_string()));
}

#[tokio::test]
async fn test_empty_input_never_reaches_the_server() {
    let server = MockServer::start().await;
    let jar = tempfile::tempdir().unwrap();

    Mock::given(method("POST"))
        .and(path("/api/chat/message"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let session = session_over(&server, &jar);
    assert!(session.send_turn("").await.is_err());
    assert!(session.send_turn("  \n ").await.is_err());
    assert_eq!(session.transcript_len(), 0);
}

#[tokio::test]
async fn test_backend_message_surfaced_verbatim() {
    let server = MockServer::start().await;
    let jar = tempfile::tempdir().unwrap();

    Mock::given(method("POST"))
        .and(path("/api/chat/message"))
        .respond_with(
            ResponseTemplate::new(500)
                .set_body_json(json!({"message": "AI service unavailable"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let session = session_over(&server, &jar);
    let error = session.send_turn("Hey").await.unwrap_err();
    assert_eq!(error.to_string(), "AI service unavailable");
    assert_eq!(session.transcript_len(), 0);
    assert_eq!(session.session_id(), None);
}

#[tokio::test]
async fn test_unparseable_error_body_uses_fallback() {
    let server = MockServer::start().await;
    let jar = tempfile::tempdir().unwrap();

    Mock::given(method("POST"))
        .and(path("/api/chat/message"))
        .respond_with(ResponseTemplate::new(502).set_body_string("<html>bad gateway</html>"))
        .expect(1)
        .mount(&server)
        .await;

    let session = session_over(&server, &jar);
    let error = session.send_turn("Hey").await.unwrap_err();
    assert_eq!(error.to_string(), "Failed to send message");
}

#[tokio::test]
async fn test_blank_error_message_uses_fallback() {
    let server = MockServer::start().await;
    let jar = tempfile::tempdir().unwrap();

    Mock::given(method("POST"))
        .and(path("/api/chat/message"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"message": "  "})))
        .expect(1)
        .mount(&server)
        .await;

    let session = session_over(&server, &jar);
    let error = session.send_turn("Hey").await.unwrap_err();
    assert_eq!(error.to_string(), "Failed to send message");
}

#[tokio::test]
async fn test_failed_turn_preserves_transcript_and_session() {
    let server = MockServer::start().await;
    let jar = tempfile::tempdir().unwrap();

    Mock::given(method("POST"))
        .and(path("/api/chat/message"))
        .and(body_partial_json(json!({"message": "Hey"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(turn_body("1", "Hey", "2", "Hello!", "s1")),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/chat/message"))
        .and(body_partial_json(json!({"message": "Are you there?"})))
        .respond_with(
            ResponseTemplate::new(503).set_body_json(json!({"message": "AI service unavailable"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let session = session_over(&server, &jar);
    session.send_turn("Hey").await.unwrap();

    assert!(session.send_turn("Are you there?").await.is_err());
    assert_eq!(session.transcript_len(), 2);
    assert_eq!(session.session_id(), Some("s1".to_string()));
    assert_eq!(session.state(), SessionState::Active);
}

#[tokio::test]
async fn test_overlapping_send_is_rejected_without_a_second_request() {
    let server = MockServer::start().await;
    let jar = tempfile::tempdir().unwrap();

    // Exactly one request must land even though two sends are attempted
    Mock::given(method("POST"))
        .and(path("/api/chat/message"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(turn_body("1", "first", "2", "Hello!", "s1"))
                .set_delay(Duration::from_millis(200)),
        )
        .expect(1)
        .mount(&server)
        .await;

    let session = Arc::new(session_over(&server, &jar));

    let first = {
        let session = Arc::clone(&session);
        tokio::spawn(async move { session.send_turn("first").await })
    };

    // Wait for the first turn to be in flight
    while session.state() != SessionState::Sending {
        tokio::time::sleep(Duration::from_millis(5)).await;
    }

    let error = session.send_turn("second").await.unwrap_err();
    assert!(matches!(
        error.downcast_ref::<CalmaError>(),
        Some(CalmaError::SendInProgress)
    ));

    first.await.unwrap().unwrap();
    assert_eq!(session.transcript_len(), 2);
    assert_eq!(session.state(), SessionState::Active);
}

#[tokio::test]
async fn test_input_is_trimmed_before_sending() {
    let server = MockServer::start().await;
    let jar = tempfile::tempdir().unwrap();

    Mock::given(method("POST"))
        .and(path("/api/chat/message"))
        .and(body_json(json!({"message": "Hey", "userId": "u1"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(turn_body("1", "Hey", "2", "Hello!", "s1")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let session = session_over(&server, &jar);
    session.send_turn("   Hey  \n").await.unwrap();
}
