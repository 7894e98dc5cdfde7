//! Mood tracking endpoint wrapper

use crate::api::ApiClient;
use crate::error::{CalmaError, Result};
use crate::models::{Mood, MoodHistoryResponse, SaveMoodRequest};
use std::sync::Arc;

/// Wrapper for `/mood` endpoints
#[derive(Debug, Clone)]
pub struct MoodApi {
    client: Arc<ApiClient>,
}

impl MoodApi {
    /// Create a new mood wrapper sharing the given client
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Record a mood entry: `POST /mood`
    ///
    /// # Errors
    ///
    /// Returns a validation error before any network call when `value` is
    /// outside the 1-5 scale
    pub async fn save(&self, value: u8, note: Option<String>) -> Result<Mood> {
        if !(1..=5).contains(&value) {
            return Err(CalmaError::Validation(format!(
                "mood value must be between 1 and 5, got {}",
                value
            ))
            .into());
        }

        let request = SaveMoodRequest { value, note };
        self.client
            .post("/mood", &request, "Failed to save mood")
            .await
    }

    /// Fetch recorded moods: `GET /mood`
    pub async fn history(&self) -> Result<Vec<Mood>> {
        let response: MoodHistoryResponse = self
            .client
            .get("/mood", "Failed to fetch mood history")
            .await?;
        Ok(response.moods)
    }
}
