//! Shared HTTP client for the Calma backend
//!
//! All service wrappers go through [`ApiClient`]: one reqwest client with a
//! timeout and user agent, a configured base URL, a persisted session
//! cookie attached to every request, and uniform handling of the backend's
//! `{message}`-shaped error payloads.

use crate::config::ApiConfig;
use crate::error::{CalmaError, Result};
use reqwest::header::{COOKIE, SET_COOKIE};
use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde::Serialize;
use std::path::PathBuf;
use std::time::Duration;

/// Error payload the backend returns on non-2xx responses
#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    message: String,
}

/// HTTP client shared by all Calma service wrappers
///
/// # Examples
///
/// ```no_run
/// use calma::api::ApiClient;
/// use calma::config::ApiConfig;
///
/// # fn example() -> calma::error::Result<()> {
/// let client = ApiClient::new(&ApiConfig::default())?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    cookie_jar: PathBuf,
}

impl ApiClient {
    /// Create a new client from API configuration
    ///
    /// The session cookie, if one was stored by a previous login, is read
    /// from the default cookie-jar location on each request.
    ///
    /// # Errors
    ///
    /// Returns error if HTTP client initialization fails
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .user_agent(concat!("calma/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| CalmaError::Config(format!("Failed to create HTTP client: {}", e)))?;

        tracing::debug!("Initialized API client: base_url={}", config.base_url);

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            cookie_jar: crate::config::cookie_jar_path(),
        })
    }

    /// Use an explicit cookie-jar file instead of the default location
    pub fn with_cookie_jar(mut self, path: PathBuf) -> Self {
        self.cookie_jar = path;
        self
    }

    /// The configured base URL, without trailing slash
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Whether a session cookie is currently stored
    pub fn has_session(&self) -> bool {
        self.load_cookie().is_some()
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let mut builder = self.client.request(method, self.endpoint(path));
        if let Some(cookie) = self.load_cookie() {
            builder = builder.header(COOKIE, cookie);
        }
        builder
    }

    /// GET a typed response
    pub async fn get<T: DeserializeOwned>(&self, path: &str, fallback: &str) -> Result<T> {
        let response = self.request(Method::GET, path).send().await?;
        Self::handle_response(response, fallback).await
    }

    /// GET a typed response with query parameters
    pub async fn get_with_query<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        fallback: &str,
    ) -> Result<T> {
        let response = self
            .request(Method::GET, path)
            .query(query)
            .send()
            .await?;
        Self::handle_response(response, fallback).await
    }

    /// POST a JSON body, expect a typed response
    pub async fn post<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        fallback: &str,
    ) -> Result<T> {
        let response = self.request(Method::POST, path).json(body).send().await?;
        Self::handle_response(response, fallback).await
    }

    /// POST a JSON body and capture the session cookie from the response
    ///
    /// Used by signup and login: on success the backend's `Set-Cookie`
    /// session value is persisted to the cookie jar before the body is
    /// parsed.
    pub async fn post_capturing_session<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        fallback: &str,
    ) -> Result<T> {
        let response = self.request(Method::POST, path).json(body).send().await?;
        if response.status().is_success() {
            self.store_cookie_from(&response)?;
        }
        Self::handle_response(response, fallback).await
    }

    /// PUT a JSON body, expect a typed response
    pub async fn put<B: Serialize + ?Sized, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
        fallback: &str,
    ) -> Result<T> {
        let response = self.request(Method::PUT, path).json(body).send().await?;
        Self::handle_response(response, fallback).await
    }

    /// DELETE, expect a typed response
    pub async fn delete<T: DeserializeOwned>(&self, path: &str, fallback: &str) -> Result<T> {
        let response = self.request(Method::DELETE, path).send().await?;
        Self::handle_response(response, fallback).await
    }

    /// DELETE where the response body is irrelevant
    pub async fn delete_expecting_ok(&self, path: &str, fallback: &str) -> Result<()> {
        let response = self.request(Method::DELETE, path).send().await?;
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        Err(Self::error_from(response, status, fallback).await.into())
    }

    /// Raw GET returning the response, for callers that need the status
    pub(crate) async fn get_raw(&self, path: &str) -> Result<Response> {
        Ok(self.request(Method::GET, path).send().await?)
    }

    /// Normalize a response: 2xx deserializes, non-2xx surfaces `{message}`
    ///
    /// The backend's `message` field is surfaced verbatim when present and
    /// non-empty; otherwise the per-call `fallback` string is used.
    pub(crate) async fn handle_response<T: DeserializeOwned>(
        response: Response,
        fallback: &str,
    ) -> Result<T> {
        let status = response.status();
        if status.is_success() {
            return Ok(response.json::<T>().await?);
        }
        Err(Self::error_from(response, status, fallback).await.into())
    }

    async fn error_from(response: Response, status: StatusCode, fallback: &str) -> CalmaError {
        let message = match response.json::<ApiErrorBody>().await {
            Ok(body) if !body.message.trim().is_empty() => body.message,
            _ => fallback.to_string(),
        };
        tracing::warn!("API request failed: status={}, message={}", status, message);
        CalmaError::Api {
            status: status.as_u16(),
            message,
        }
    }

    /// Persist the session cookie from a `Set-Cookie` response header
    ///
    /// Only the `name=value` pair is kept; attributes are the backend's
    /// concern. Responses without a `Set-Cookie` header are a no-op.
    pub fn store_cookie_from(&self, response: &Response) -> Result<()> {
        let Some(header) = response.headers().get(SET_COOKIE) else {
            return Ok(());
        };
        let raw = header
            .to_str()
            .map_err(|e| CalmaError::Storage(format!("Unreadable Set-Cookie header: {}", e)))?;
        let pair = raw.split(';').next().unwrap_or(raw).trim();
        if pair.is_empty() {
            return Ok(());
        }

        if let Some(parent) = self.cookie_jar.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.cookie_jar, pair)?;
        tracing::debug!("Stored session cookie at {}", self.cookie_jar.display());
        Ok(())
    }

    /// Remove the stored session cookie, if any
    pub fn clear_session(&self) -> Result<()> {
        match std::fs::remove_file(&self.cookie_jar) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    fn load_cookie(&self) -> Option<String> {
        let contents = std::fs::read_to_string(&self.cookie_jar).ok()?;
        let trimmed = contents.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(trimmed.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client(jar: PathBuf) -> ApiClient {
        ApiClient::new(&ApiConfig {
            base_url: "http://localhost:3000/api".to_string(),
            timeout_seconds: 5,
        })
        .unwrap()
        .with_cookie_jar(jar)
    }

    #[test]
    fn test_endpoint_joins_without_double_slash() {
        let dir = tempfile::tempdir().unwrap();
        let client = test_client(dir.path().join("cookie"));
        assert_eq!(
            client.endpoint("/chat/message"),
            "http://localhost:3000/api/chat/message"
        );
        assert_eq!(
            client.endpoint("chat/health"),
            "http://localhost:3000/api/chat/health"
        );
    }

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = ApiClient::new(&ApiConfig {
            base_url: "http://localhost:3000/api/".to_string(),
            timeout_seconds: 5,
        })
        .unwrap();
        assert_eq!(client.base_url(), "http://localhost:3000/api");
    }

    #[test]
    fn test_has_session_reflects_jar_contents() {
        let dir = tempfile::tempdir().unwrap();
        let jar = dir.path().join("cookie");
        let client = test_client(jar.clone());
        assert!(!client.has_session());

        std::fs::write(&jar, "calma.sid=abc123").unwrap();
        assert!(client.has_session());
        assert_eq!(client.load_cookie().unwrap(), "calma.sid=abc123");
    }

    #[test]
    fn test_blank_jar_counts_as_no_session() {
        let dir = tempfile::tempdir().unwrap();
        let jar = dir.path().join("cookie");
        std::fs::write(&jar, "  \n").unwrap();
        let client = test_client(jar);
        assert!(!client.has_session());
    }

    #[test]
    fn test_clear_session_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let jar = dir.path().join("cookie");
        let client = test_client(jar.clone());

        // Nothing stored yet: clearing must not fail
        client.clear_session().unwrap();

        std::fs::write(&jar, "calma.sid=abc123").unwrap();
        client.clear_session().unwrap();
        assert!(!jar.exists());
    }
}
