//! Therapist directory and therapist messaging endpoint wrapper

use crate::api::ApiClient;
use crate::error::{CalmaError, Result};
use crate::models::{
    Conversation, ConversationMessagesResponse, ConversationsResponse,
    SendTherapistMessageRequest, Therapist, TherapistChatMessage, TherapistsResponse,
};
use std::sync::Arc;

/// Wrapper for `/user/therapists` and `/therapist-chat` endpoints
#[derive(Debug, Clone)]
pub struct TherapistApi {
    client: Arc<ApiClient>,
}

impl TherapistApi {
    /// Create a new therapist wrapper sharing the given client
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// List therapists: `GET /user/therapists`
    pub async fn list(&self) -> Result<Vec<Therapist>> {
        let response: TherapistsResponse = self
            .client
            .get("/user/therapists", "Failed to fetch therapists")
            .await?;
        Ok(response.therapists)
    }

    /// Send a direct message to a therapist: `POST /therapist-chat`
    pub async fn send_message(
        &self,
        therapist_id: &str,
        message: &str,
    ) -> Result<TherapistChatMessage> {
        let trimmed = message.trim();
        if trimmed.is_empty() {
            return Err(CalmaError::Validation("message must not be empty".to_string()).into());
        }

        let request = SendTherapistMessageRequest {
            therapist_id: therapist_id.to_string(),
            message: trimmed.to_string(),
        };
        self.client
            .post("/therapist-chat", &request, "Failed to send message")
            .await
    }

    /// Fetch the message history with one therapist: `GET /therapist-chat/{therapistId}`
    pub async fn conversation_messages(
        &self,
        therapist_id: &str,
    ) -> Result<Vec<TherapistChatMessage>> {
        let response: ConversationMessagesResponse = self
            .client
            .get(
                &format!("/therapist-chat/{}", therapist_id),
                "Failed to fetch messages",
            )
            .await?;
        Ok(response.messages)
    }

    /// List conversation summaries: `GET /therapist-chat`
    pub async fn conversations(&self) -> Result<Vec<Conversation>> {
        let response: ConversationsResponse = self
            .client
            .get("/therapist-chat", "Failed to fetch conversations")
            .await?;
        Ok(response.conversations)
    }
}
