//! Chat endpoint wrapper
//!
//! One POST per chat turn; the backend creates the session implicitly on
//! the first message and returns it alongside the stored user message and
//! the bot reply. The health endpoint is diagnostics only and not part of
//! the send protocol.

use crate::api::ApiClient;
use crate::error::Result;
use crate::models::{HealthCheckResponse, SendMessageRequest, SendMessageResponse};
use crate::session::ChatTransport;
use async_trait::async_trait;
use std::sync::Arc;

/// Wrapper for `/chat/*` endpoints
#[derive(Debug, Clone)]
pub struct ChatApi {
    client: Arc<ApiClient>,
}

impl ChatApi {
    /// Create a new chat wrapper sharing the given client
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Send one chat turn: `POST /chat/message`
    ///
    /// # Errors
    ///
    /// Returns the backend `{message}` verbatim on non-2xx, else a generic
    /// fallback
    pub async fn send_message(&self, request: &SendMessageRequest) -> Result<SendMessageResponse> {
        tracing::debug!(
            "Sending chat turn: user={}, session={:?}",
            request.user_id,
            request.session_id
        );
        self.client
            .post("/chat/message", request, "Failed to send message")
            .await
    }

    /// Check chat service health: `GET /chat/health`
    pub async fn health(&self) -> Result<HealthCheckResponse> {
        self.client.get("/chat/health", "Health check failed").await
    }
}

#[async_trait]
impl ChatTransport for ChatApi {
    async fn send_message(&self, request: SendMessageRequest) -> Result<SendMessageResponse> {
        ChatApi::send_message(self, &request).await
    }
}
