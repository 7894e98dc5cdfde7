//! User profile and cultural profile endpoint wrapper

use crate::api::ApiClient;
use crate::error::Result;
use crate::models::{CulturalProfile, CulturalProfileRequest, UpdateUserProfileRequest, UserProfile};
use std::sync::Arc;

/// Wrapper for `/user/profile`, `/user`, and `/cultural-profile` endpoints
#[derive(Debug, Clone)]
pub struct ProfileApi {
    client: Arc<ApiClient>,
}

impl ProfileApi {
    /// Create a new profile wrapper sharing the given client
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Fetch the user profile: `GET /user/profile`
    pub async fn get(&self) -> Result<UserProfile> {
        self.client
            .get("/user/profile", "Failed to fetch user profile")
            .await
    }

    /// Update the user profile: `PUT /user/profile`
    pub async fn update(&self, request: &UpdateUserProfileRequest) -> Result<UserProfile> {
        self.client
            .put("/user/profile", request, "Failed to update user profile")
            .await
    }

    /// Permanently delete the account: `DELETE /user`
    ///
    /// The stored session cookie is discarded afterwards; it can no longer
    /// refer to anything.
    pub async fn delete_account(&self) -> Result<()> {
        self.client
            .delete_expecting_ok("/user", "Failed to delete account")
            .await?;
        self.client.clear_session()
    }

    /// Create a cultural profile: `POST /cultural-profile`
    pub async fn create_cultural(&self, request: &CulturalProfileRequest) -> Result<CulturalProfile> {
        self.client
            .post(
                "/cultural-profile",
                request,
                "Failed to create cultural profile",
            )
            .await
    }

    /// Fetch the cultural profile: `GET /cultural-profile`
    pub async fn get_cultural(&self) -> Result<CulturalProfile> {
        self.client
            .get("/cultural-profile", "Failed to fetch cultural profile")
            .await
    }

    /// Fetch the cultural profile, treating every failure as absence
    ///
    /// The profile is optional; flows that merely tailor output to it fall
    /// back to an absent state instead of surfacing errors.
    pub async fn get_cultural_optional(&self) -> Option<CulturalProfile> {
        match self.get_cultural().await {
            Ok(profile) => Some(profile),
            Err(e) => {
                tracing::debug!("No cultural profile available: {}", e);
                None
            }
        }
    }

    /// Update the cultural profile: `PUT /cultural-profile`
    pub async fn update_cultural(&self, request: &CulturalProfileRequest) -> Result<CulturalProfile> {
        self.client
            .put(
                "/cultural-profile",
                request,
                "Failed to update cultural profile",
            )
            .await
    }
}
