//! Integration tests of the REST wrappers against a mock backend
//!
//! Covers cookie capture and replay, envelope unwrapping, query-string
//! construction, and the `{message}` error normalization shared by every
//! endpoint wrapper.

use std::sync::Arc;

use serde_json::json;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use calma::api::{
    ApiClient, AppointmentApi, AuthApi, ChatApi, MoodApi, ProfileApi, ResourceApi, TherapistApi,
};
use calma::config::ApiConfig;
use calma::models::{ResourceFilters, ResourceType, Role, UpdateUserProfileRequest};

fn client_over(server: &MockServer, jar: &tempfile::TempDir) -> Arc<ApiClient> {
    Arc::new(
        ApiClient::new(&ApiConfig {
            base_url: format!("{}/api", server.uri()),
            timeout_seconds: 5,
        })
        .unwrap()
        .with_cookie_jar(jar.path().join("cookie")),
    )
}

fn user_body() -> serde_json::Value {
    json!({"id": "u1", "name": "Amina", "email": "amina@example.com", "role": "USER"})
}

#[tokio::test]
async fn test_login_stores_session_cookie() {
    let server = MockServer::start().await;
    let jar = tempfile::tempdir().unwrap();

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .and(body_json(json!({
            "email": "amina@example.com",
            "password": "hunter22"
        })))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("set-cookie", "calma.sid=abc123; Path=/; HttpOnly")
                .set_body_json(user_body()),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_over(&server, &jar);
    let auth = AuthApi::new(Arc::clone(&client));
    let user = auth.login("amina@example.com", "hunter22").await.unwrap();
    assert_eq!(user.name, "Amina");
    assert_eq!(user.role, Role::User);

    // Only the name=value pair is kept
    assert!(client.has_session());
    let stored = std::fs::read_to_string(jar.path().join("cookie")).unwrap();
    assert_eq!(stored, "calma.sid=abc123");
}

#[tokio::test]
async fn test_stored_cookie_attached_to_later_requests() {
    let server = MockServer::start().await;
    let jar = tempfile::tempdir().unwrap();
    std::fs::write(jar.path().join("cookie"), "calma.sid=abc123").unwrap();

    Mock::given(method("GET"))
        .and(path("/api/mood"))
        .and(header("cookie", "calma.sid=abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"moods": []})))
        .expect(1)
        .mount(&server)
        .await;

    let moods = MoodApi::new(client_over(&server, &jar));
    assert!(moods.history().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_failed_login_leaves_no_cookie() {
    let server = MockServer::start().await;
    let jar = tempfile::tempdir().unwrap();

    Mock::given(method("POST"))
        .and(path("/api/auth/login"))
        .respond_with(
            ResponseTemplate::new(401).set_body_json(json!({"message": "Invalid credentials"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let client = client_over(&server, &jar);
    let auth = AuthApi::new(Arc::clone(&client));
    let error = auth
        .login("amina@example.com", "wrong")
        .await
        .unwrap_err();
    assert_eq!(error.to_string(), "Invalid credentials");
    assert!(!client.has_session());
}

#[tokio::test]
async fn test_logout_clears_cookie_even_when_backend_fails() {
    let server = MockServer::start().await;
    let jar = tempfile::tempdir().unwrap();
    std::fs::write(jar.path().join("cookie"), "calma.sid=abc123").unwrap();

    Mock::given(method("POST"))
        .and(path("/api/auth/logout"))
        .respond_with(ResponseTemplate::new(500).set_body_json(json!({"message": "boom"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_over(&server, &jar);
    let auth = AuthApi::new(Arc::clone(&client));
    assert!(auth.logout().await.is_err());
    assert!(!client.has_session());
}

#[tokio::test]
async fn test_current_user_is_none_when_unauthenticated() {
    let server = MockServer::start().await;
    let jar = tempfile::tempdir().unwrap();

    Mock::given(method("GET"))
        .and(path("/api/auth/me"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"message": "Unauthorized"})))
        .expect(1)
        .mount(&server)
        .await;

    let auth = AuthApi::new(client_over(&server, &jar));
    assert!(auth.current_user().await.is_none());
}

#[tokio::test]
async fn test_current_user_parses_authenticated_response() {
    let server = MockServer::start().await;
    let jar = tempfile::tempdir().unwrap();

    Mock::given(method("GET"))
        .and(path("/api/auth/me"))
        .respond_with(ResponseTemplate::new(200).set_body_json(user_body()))
        .expect(1)
        .mount(&server)
        .await;

    let auth = AuthApi::new(client_over(&server, &jar));
    let user = auth.current_user().await.unwrap();
    assert_eq!(user.id, "u1");
}

#[tokio::test]
async fn test_mood_save_round_trip() {
    let server = MockServer::start().await;
    let jar = tempfile::tempdir().unwrap();

    Mock::given(method("POST"))
        .and(path("/api/mood"))
        .and(body_json(json!({"value": 4, "note": "slept well"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "m1",
            "userId": "u1",
            "mood": 4,
            "note": "slept well",
            "createdAt": "2026-08-30T08:00:00Z"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let moods = MoodApi::new(client_over(&server, &jar));
    let mood = moods.save(4, Some("slept well".to_string())).await.unwrap();
    assert_eq!(mood.mood, 4);
}

#[tokio::test]
async fn test_mood_value_out_of_range_never_reaches_the_server() {
    let server = MockServer::start().await;
    let jar = tempfile::tempdir().unwrap();

    Mock::given(method("POST"))
        .and(path("/api/mood"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let moods = MoodApi::new(client_over(&server, &jar));
    assert!(moods.save(0, None).await.is_err());
    assert!(moods.save(6, None).await.is_err());
}

#[tokio::test]
async fn test_resource_list_builds_query_and_unwraps_envelope() {
    let server = MockServer::start().await;
    let jar = tempfile::tempdir().unwrap();

    Mock::given(method("GET"))
        .and(path("/api/resources"))
        .and(query_param("type", "ARTICLE"))
        .and(query_param("tags", "anxiety,sleep"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "resources": [{
                "id": "r1",
                "title": "Managing anxious nights",
                "type": "ARTICLE",
                "link": "https://calma.example.com/r1",
                "tags": ["anxiety", "sleep"],
                "createdAt": "2026-08-01T00:00:00Z"
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let resources = ResourceApi::new(client_over(&server, &jar));
    let filters = ResourceFilters {
        resource_type: Some(ResourceType::Article),
        tags: Some("anxiety,sleep".to_string()),
        cultural_tags: None,
    };
    let listed = resources.list(&filters).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].resource_type, ResourceType::Article);
}

#[tokio::test]
async fn test_saved_resources_envelope_unwraps() {
    let server = MockServer::start().await;
    let jar = tempfile::tempdir().unwrap();

    Mock::given(method("GET"))
        .and(path("/api/saved-resource"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "savedResources": [{
                "id": "b1",
                "userId": "u1",
                "resourceId": "r1",
                "savedAt": "2026-08-20T12:00:00Z"
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let resources = ResourceApi::new(client_over(&server, &jar));
    let saved = resources.saved().await.unwrap();
    assert_eq!(saved.len(), 1);
    assert_eq!(saved[0].resource_id, "r1");
}

#[tokio::test]
async fn test_unsave_accepts_empty_success_body() {
    let server = MockServer::start().await;
    let jar = tempfile::tempdir().unwrap();

    Mock::given(method("DELETE"))
        .and(path("/api/saved-resource/b1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let resources = ResourceApi::new(client_over(&server, &jar));
    resources.unsave("b1").await.unwrap();
}

#[tokio::test]
async fn test_therapists_and_conversations_envelopes() {
    let server = MockServer::start().await;
    let jar = tempfile::tempdir().unwrap();

    Mock::given(method("GET"))
        .and(path("/api/user/therapists"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "therapists": [{
                "id": "t1",
                "name": "Dr. Okoye",
                "email": "okoye@example.com",
                "role": "THERAPIST",
                "specialization": "Anxiety"
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/therapist-chat"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "conversations": [{
                "therapist": {"id": "t1", "name": "Dr. Okoye", "email": "okoye@example.com"},
                "lastMessage": {
                    "message": "See you Thursday",
                    "timestamp": "2026-08-28T15:00:00Z"
                },
                "messageCount": 12
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = TherapistApi::new(client_over(&server, &jar));
    let therapists = api.list().await.unwrap();
    assert_eq!(therapists[0].specialization.as_deref(), Some("Anxiety"));

    let conversations = api.conversations().await.unwrap();
    assert_eq!(conversations[0].message_count, 12);
    assert_eq!(conversations[0].therapist.id, "t1");
}

#[tokio::test]
async fn test_appointments_list_unwraps_envelope() {
    let server = MockServer::start().await;
    let jar = tempfile::tempdir().unwrap();

    Mock::given(method("GET"))
        .and(path("/api/appointments/user"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "appointments": [{
                "id": "ap1",
                "userId": "u1",
                "therapistId": "t1",
                "scheduledAt": "2026-09-01T14:00:00Z",
                "duration": 60,
                "status": "SCHEDULED",
                "createdAt": "2026-08-25T09:00:00Z",
                "therapist": {"id": "t1", "name": "Dr. Okoye", "email": "okoye@example.com"}
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = AppointmentApi::new(client_over(&server, &jar));
    let appointments = api.list().await.unwrap();
    assert_eq!(appointments.len(), 1);
    assert_eq!(appointments[0].duration, 60);
    assert_eq!(appointments[0].therapist.as_ref().unwrap().name, "Dr. Okoye");
}

#[tokio::test]
async fn test_profile_update_sends_only_provided_fields() {
    let server = MockServer::start().await;
    let jar = tempfile::tempdir().unwrap();

    Mock::given(method("PUT"))
        .and(path("/api/user/profile"))
        .and(body_json(json!({"name": "Amina N."})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "u1",
            "name": "Amina N.",
            "email": "amina@example.com",
            "role": "USER",
            "createdAt": "2026-01-05T00:00:00Z"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let api = ProfileApi::new(client_over(&server, &jar));
    let profile = api
        .update(&UpdateUserProfileRequest {
            name: Some("Amina N.".to_string()),
            email: None,
        })
        .await
        .unwrap();
    assert_eq!(profile.name, "Amina N.");
}

#[tokio::test]
async fn test_cultural_profile_absence_is_silent() {
    let server = MockServer::start().await;
    let jar = tempfile::tempdir().unwrap();

    Mock::given(method("GET"))
        .and(path("/api/cultural-profile"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({"message": "No cultural profile"})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let api = ProfileApi::new(client_over(&server, &jar));
    assert!(api.get_cultural_optional().await.is_none());
}

#[tokio::test]
async fn test_health_check_parses_status() {
    let server = MockServer::start().await;
    let jar = tempfile::tempdir().unwrap();

    Mock::given(method("GET"))
        .and(path("/api/chat/health"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "status": "ok",
            "ai_service": "healthy",
            "timestamp": "2026-08-30T10:00:00Z"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let chat = ChatApi::new(client_over(&server, &jar));
    let health = chat.health().await.unwrap();
    assert_eq!(health.status, "ok");
    assert_eq!(health.ai_service, "healthy");
}
