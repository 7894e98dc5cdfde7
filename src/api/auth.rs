//! Authentication endpoint wrapper
//!
//! Signup and login capture the backend's session cookie; `current_user`
//! deliberately swallows failures into `None` so callers can treat "not
//! logged in" and "backend unreachable" uniformly as an absent user.

use crate::api::ApiClient;
use crate::error::{CalmaError, Result};
use crate::models::{CurrentUser, LoginRequest, SignupRequest};
use regex::Regex;
use std::sync::Arc;

/// Wrapper for `/auth/*` endpoints
#[derive(Debug, Clone)]
pub struct AuthApi {
    client: Arc<ApiClient>,
}

impl AuthApi {
    /// Create a new auth wrapper sharing the given client
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Create an account: `POST /auth/signup`
    ///
    /// The session cookie from the response is persisted, so a successful
    /// signup leaves the client logged in.
    pub async fn signup(&self, name: &str, email: &str, password: &str) -> Result<CurrentUser> {
        validate_email(email)?;
        if name.trim().is_empty() {
            return Err(CalmaError::Validation("name must not be empty".to_string()).into());
        }

        let request = SignupRequest {
            name: name.trim().to_string(),
            email: email.trim().to_string(),
            password: password.to_string(),
        };
        self.client
            .post_capturing_session("/auth/signup", &request, "Registration failed")
            .await
    }

    /// Log in: `POST /auth/login`
    pub async fn login(&self, email: &str, password: &str) -> Result<CurrentUser> {
        validate_email(email)?;

        let request = LoginRequest {
            email: email.trim().to_string(),
            password: password.to_string(),
        };
        self.client
            .post_capturing_session("/auth/login", &request, "Login failed")
            .await
    }

    /// Log out: `POST /auth/logout`, then discard the stored cookie
    ///
    /// The local cookie is cleared even when the backend call fails; a
    /// dead session on the server is harmless, a stale local cookie is not.
    pub async fn logout(&self) -> Result<()> {
        let result: Result<serde_json::Value> = self
            .client
            .post("/auth/logout", &serde_json::json!({}), "Logout failed")
            .await;
        self.client.clear_session()?;
        result.map(|_| ())
    }

    /// Fetch the authenticated user: `GET /auth/me`
    ///
    /// Returns `None` on 401, on network failure, and on malformed bodies;
    /// this is the one deliberately silent path in the auth surface.
    pub async fn current_user(&self) -> Option<CurrentUser> {
        let response = match self.client.get_raw("/auth/me").await {
            Ok(response) => response,
            Err(e) => {
                tracing::debug!("current_user probe failed: {}", e);
                return None;
            }
        };
        if !response.status().is_success() {
            return None;
        }
        response.json::<CurrentUser>().await.ok()
    }

    /// Fetch the authenticated user or fail with an actionable error
    ///
    /// Used by commands that cannot proceed anonymously, such as chat.
    pub async fn require_user(&self) -> Result<CurrentUser> {
        self.current_user().await.ok_or_else(|| {
            CalmaError::Authentication("not logged in; run `calma auth login` first".to_string())
                .into()
        })
    }
}

fn validate_email(email: &str) -> Result<()> {
    // Deliberately loose; the backend owns real address validation
    let pattern = Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$")
        .map_err(|e| CalmaError::Validation(format!("email pattern: {}", e)))?;
    if pattern.is_match(email.trim()) {
        Ok(())
    } else {
        Err(CalmaError::Validation(format!("'{}' is not a valid email address", email)).into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_email_accepts_plain_address() {
        assert!(validate_email("amina@example.com").is_ok());
        assert!(validate_email("  amina@example.com  ").is_ok());
    }

    #[test]
    fn test_validate_email_rejects_garbage() {
        assert!(validate_email("").is_err());
        assert!(validate_email("not-an-email").is_err());
        assert!(validate_email("two@@example.com").is_err());
        assert!(validate_email("no@tld").is_err());
    }
}
