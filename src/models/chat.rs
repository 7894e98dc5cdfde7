//! Chat message, session, and analysis payload types
//!
//! These are the wire shapes of the `/chat/message` exchange: one request
//! carries the user's text plus an optional session handle, one response
//! carries the stored user message, the paired bot reply, and the session
//! it belongs to.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Who authored a chat message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Sender {
    /// The authenticated user
    User,
    /// The AI support assistant
    Bot,
}

/// A single stored chat message
///
/// Identity is server-assigned; the client never fabricates ids.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    /// Server-assigned message id
    pub id: String,
    /// Message text
    pub message: String,
    /// Message author
    pub sender: Sender,
    /// Server-side arrival time
    pub timestamp: DateTime<Utc>,
}

/// Empathy and cultural-awareness scores attached to a bot reply
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct QualityMetrics {
    #[serde(default)]
    pub empathy_score: f64,
    #[serde(default)]
    pub cultural_awareness_score: f64,
}

/// Server-side analysis of the user's message
///
/// Opaque payload: every field is produced by the backend AI service and
/// only rendered by the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AnalysisResults {
    /// Mood label detected in the user's message
    #[serde(default)]
    pub mood_detected: String,
    /// Confidence of the mood detection, 0.0-1.0
    #[serde(default)]
    pub confidence: f64,
    /// Emotional intensity estimate
    #[serde(default)]
    pub emotional_intensity: f64,
    /// Resource ids the backend suggests surfacing
    #[serde(default)]
    pub suggested_resources: Vec<String>,
    /// Cultural elements recognized in the message
    #[serde(default)]
    pub cultural_elements_detected: Vec<String>,
    /// Reply quality metrics
    #[serde(default)]
    pub quality_metrics: QualityMetrics,
}

/// A bot reply: a chat message enriched with analysis payload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BotMessage {
    /// Server-assigned message id
    pub id: String,
    /// Reply text
    pub message: String,
    /// Always [`Sender::Bot`] on well-formed responses
    pub sender: Sender,
    /// Server-side arrival time
    pub timestamp: DateTime<Utc>,
    /// Emotional tone of the reply
    #[serde(default)]
    pub emotional_tone: String,
    /// Topics the backend detected in the conversation
    #[serde(default)]
    pub detected_topics: Vec<String>,
    /// Detailed analysis of the user's message
    #[serde(default)]
    pub analysis_results: AnalysisResults,
}

/// A backend-tracked conversation thread
///
/// Created implicitly by the backend on the first message of a
/// conversation; referenced by `sessionId` on subsequent sends.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatSession {
    /// Opaque session id
    pub id: String,
    /// Server-generated conversation title
    #[serde(default)]
    pub title: String,
}

/// Request body for `POST /chat/message`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageRequest {
    /// The user's message text, already trimmed
    pub message: String,
    /// Id of the authenticated user
    pub user_id: String,
    /// Session handle; absent on the first turn of a visit
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

/// Response body for `POST /chat/message`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendMessageResponse {
    /// The stored copy of the user's message
    pub user_message: ChatMessage,
    /// The paired bot reply
    pub bot_message: BotMessage,
    /// The session this turn belongs to
    pub session: ChatSession,
}

/// Response body for `GET /chat/health`, diagnostics only
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthCheckResponse {
    /// Overall service status
    pub status: String,
    /// Status of the AI backend the chat service depends on
    pub ai_service: String,
    /// Server-side timestamp of the check
    pub timestamp: String,
}
