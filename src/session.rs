//! Chat session continuity client
//!
//! This module implements the rule set by which the client and the backend
//! collaborate to maintain a conversation thread across messages: the
//! backend creates a session implicitly on the first turn, the client
//! adopts its id exactly once and carries it on every later turn.
//!
//! The client owns an append-only in-memory transcript for its lifetime.
//! Nothing is persisted locally and no close call is made on drop; session
//! lifetime beyond the client is the backend's concern.
//!
//! # Turn lifecycle
//!
//! - `Idle`: no session established, transcript possibly empty.
//! - `Sending`: one turn in flight; further sends are rejected, so at most
//!   one request is outstanding and replies append in request order.
//! - `Active`: session id adopted after the first successful reply.
//!
//! Failures are terminal for the turn only: the transcript and the session
//! handle are left untouched and nothing is retried automatically.

use crate::error::{CalmaError, Result};
use crate::models::{BotMessage, ChatMessage, SendMessageRequest, SendMessageResponse};
use async_trait::async_trait;
use std::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Transport seam for the chat endpoint
///
/// Implemented by [`crate::api::ChatApi`] over HTTP; tests substitute a
/// mock so the continuity rules can be exercised without a server.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChatTransport: Send + Sync {
    /// Deliver one chat turn and return the paired bot reply
    async fn send_message(&self, request: SendMessageRequest) -> Result<SendMessageResponse>;
}

/// Lifecycle state of a chat session client
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// No session established yet
    Idle,
    /// A turn is in flight; sends are serialized
    Sending,
    /// Session id adopted; subsequent turns carry it
    Active,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Idle => write!(f, "idle"),
            Self::Sending => write!(f, "sending"),
            Self::Active => write!(f, "active"),
        }
    }
}

/// One entry of the in-memory transcript
#[derive(Debug, Clone, PartialEq)]
pub enum TranscriptEntry {
    /// A message the user sent, as stored by the backend
    User(ChatMessage),
    /// A bot reply with its analysis payload
    Bot(Box<BotMessage>),
}

/// One completed turn: the stored user message and its paired bot reply
#[derive(Debug, Clone, PartialEq)]
pub struct Turn {
    /// The backend's stored copy of the user's message
    pub user: ChatMessage,
    /// The paired bot reply
    pub bot: BotMessage,
}

#[derive(Debug)]
struct SessionInner {
    state: SessionState,
    session_id: Option<String>,
    transcript: Vec<TranscriptEntry>,
}

/// Reverts `Sending` when a turn future is dropped before completing
///
/// A caller may cancel an in-flight turn (timeout, `select!`); without the
/// revert the client would stay in `Sending` and reject every later send.
struct InFlightGuard<'a> {
    inner: &'a Mutex<SessionInner>,
    armed: bool,
}

impl Drop for InFlightGuard<'_> {
    fn drop(&mut self) {
        if self.armed {
            let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
            inner.state = if inner.session_id.is_some() {
                SessionState::Active
            } else {
                SessionState::Idle
            };
        }
    }
}

/// Client for one conversation with the support assistant
///
/// The authenticated user id is an explicit dependency so the client is
/// testable without any ambient state. Interior state lives behind a
/// mutex so the single-outstanding-send guard holds even when the client
/// is shared across tasks.
///
/// # Examples
///
/// ```no_run
/// use calma::api::{ApiClient, ChatApi};
/// use calma::config::ApiConfig;
/// use calma::session::SessionClient;
/// use std::sync::Arc;
///
/// # async fn example() -> calma::error::Result<()> {
/// let api = Arc::new(ApiClient::new(&ApiConfig::default())?);
/// let session = SessionClient::new(ChatApi::new(api), "u1".to_string());
/// let turn = session.send_turn("Hey").await?;
/// println!("{}", turn.bot.message);
/// # Ok(())
/// # }
/// ```
pub struct SessionClient<T: ChatTransport> {
    transport: T,
    user_id: String,
    inner: Mutex<SessionInner>,
}

impl<T: ChatTransport> SessionClient<T> {
    /// Create a client with an empty transcript and no session
    pub fn new(transport: T, user_id: String) -> Self {
        Self {
            transport,
            user_id,
            inner: Mutex::new(SessionInner {
                state: SessionState::Idle,
                session_id: None,
                transcript: Vec::new(),
            }),
        }
    }

    /// Send one chat turn and append the confirmed exchange to the transcript
    ///
    /// Issues exactly one request. On success the stored user message and
    /// the bot reply are appended in that order, and the session id from
    /// the response is adopted if none is tracked yet. On failure nothing
    /// is appended, nothing is retried, and the session handle is left as
    /// it was.
    ///
    /// Dropping the returned future mid-flight (a timeout, a `select!`)
    /// abandons the turn: the in-flight guard is released and the
    /// transcript stays untouched, though the request itself may still
    /// reach the backend.
    ///
    /// # Errors
    ///
    /// - [`CalmaError::Validation`] when `text` is empty after trimming;
    ///   no request is issued.
    /// - [`CalmaError::SendInProgress`] when a turn is already in flight;
    ///   no request is issued.
    /// - Transport errors propagate with the backend message when present.
    pub async fn send_turn(&self, text: &str) -> Result<Turn> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(CalmaError::Validation("message must not be empty".to_string()).into());
        }

        let session_id = {
            let mut inner = self.lock();
            if inner.state == SessionState::Sending {
                return Err(CalmaError::SendInProgress.into());
            }
            inner.state = SessionState::Sending;
            inner.session_id.clone()
        };

        let mut guard = InFlightGuard {
            inner: &self.inner,
            armed: true,
        };

        let request = SendMessageRequest {
            message: trimmed.to_string(),
            user_id: self.user_id.clone(),
            session_id,
        };

        let result = self.transport.send_message(request).await;
        guard.armed = false;

        let mut inner = self.lock();
        match result {
            Ok(response) => {
                let SendMessageResponse {
                    user_message,
                    bot_message,
                    session,
                } = response;

                inner.transcript.push(TranscriptEntry::User(user_message.clone()));
                inner
                    .transcript
                    .push(TranscriptEntry::Bot(Box::new(bot_message.clone())));

                // Adopt the handle exactly once; a later response must
                // never overwrite an established session.
                if inner.session_id.is_none() {
                    tracing::debug!("Adopted session {}", session.id);
                    inner.session_id = Some(session.id);
                }
                inner.state = SessionState::Active;

                Ok(Turn {
                    user: user_message,
                    bot: bot_message,
                })
            }
            Err(e) => {
                inner.state = if inner.session_id.is_some() {
                    SessionState::Active
                } else {
                    SessionState::Idle
                };
                tracing::warn!("Chat turn failed: {}", e);
                Err(e)
            }
        }
    }

    /// Current lifecycle state
    pub fn state(&self) -> SessionState {
        self.lock().state
    }

    /// The tracked session handle, if one has been adopted
    pub fn session_id(&self) -> Option<String> {
        self.lock().session_id.clone()
    }

    /// The authenticated user this client sends as
    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    /// Snapshot of the transcript, in arrival order
    pub fn transcript(&self) -> Vec<TranscriptEntry> {
        self.lock().transcript.clone()
    }

    /// Number of transcript entries (user messages plus bot replies)
    pub fn transcript_len(&self) -> usize {
        self.lock().transcript.len()
    }

    fn lock(&self) -> MutexGuard<'_, SessionInner> {
        // A panic while holding the lock leaves consistent data; recover
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
