//! Therapist directory and therapist messaging wire types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Account role
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    User,
    Therapist,
    Admin,
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::User => "user",
            Self::Therapist => "therapist",
            Self::Admin => "admin",
        };
        write!(f, "{}", s)
    }
}

/// A therapist listed in the directory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Therapist {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub specialization: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
}

/// Abbreviated therapist record embedded in appointments and conversations
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TherapistSummary {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// One direct message between a user and a therapist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TherapistChatMessage {
    pub id: String,
    pub sender_id: String,
    pub receiver_id: String,
    pub message: String,
    pub timestamp: DateTime<Utc>,
    /// Whether the receiver has seen the message
    #[serde(default)]
    pub read: bool,
}

/// The last message of a conversation, as shown in the conversation list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LastMessage {
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

/// A conversation summary with one therapist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Conversation {
    pub therapist: TherapistSummary,
    pub last_message: LastMessage,
    pub message_count: u64,
}

/// Request body for `POST /therapist-chat`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SendTherapistMessageRequest {
    pub therapist_id: String,
    pub message: String,
}

/// Response envelope for `GET /therapist-chat/{therapistId}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationMessagesResponse {
    #[serde(default)]
    pub messages: Vec<TherapistChatMessage>,
}

/// Response envelope for `GET /therapist-chat`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationsResponse {
    #[serde(default)]
    pub conversations: Vec<Conversation>,
}

/// Response envelope for `GET /user/therapists`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TherapistsResponse {
    #[serde(default)]
    pub therapists: Vec<Therapist>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_deserialize_therapist_directory_entry() {
        let body = json!({
            "id": "t42",
            "name": "Dr. Okafor",
            "email": "okafor@example.com",
            "role": "THERAPIST",
            "specialization": "Anxiety and family therapy"
        });
        let therapist: Therapist = serde_json::from_value(body).unwrap();
        assert_eq!(therapist.role, Role::Therapist);
        assert_eq!(
            therapist.specialization.as_deref(),
            Some("Anxiety and family therapy")
        );
        assert!(therapist.bio.is_none());
    }

    #[test]
    fn test_deserialize_conversation_summary() {
        let body = json!({
            "therapist": {"id": "t42", "name": "Dr. Okafor", "email": "okafor@example.com"},
            "lastMessage": {"message": "See you Tuesday", "timestamp": "2026-08-28T16:30:00Z"},
            "messageCount": 12
        });
        let conversation: Conversation = serde_json::from_value(body).unwrap();
        assert_eq!(conversation.message_count, 12);
        assert_eq!(conversation.last_message.message, "See you Tuesday");
    }

    #[test]
    fn test_message_read_flag_defaults_to_false() {
        let body = json!({
            "id": "msg1",
            "senderId": "u1",
            "receiverId": "t42",
            "message": "Hello",
            "timestamp": "2026-08-28T16:00:00Z"
        });
        let message: TherapistChatMessage = serde_json::from_value(body).unwrap();
        assert!(!message.read);
    }
}
