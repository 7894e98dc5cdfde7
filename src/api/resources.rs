//! Resources library endpoint wrapper

use crate::api::ApiClient;
use crate::error::Result;
use crate::models::{
    Resource, ResourceFilters, ResourcesResponse, SaveResourceRequest, SavedResource,
    SavedResourcesResponse,
};
use std::sync::Arc;

/// Wrapper for `/resources` and `/saved-resource` endpoints
#[derive(Debug, Clone)]
pub struct ResourceApi {
    client: Arc<ApiClient>,
}

impl ResourceApi {
    /// Create a new resources wrapper sharing the given client
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// List resources, optionally filtered: `GET /resources`
    pub async fn list(&self, filters: &ResourceFilters) -> Result<Vec<Resource>> {
        let query = filters.to_query();
        let response: ResourcesResponse = if query.is_empty() {
            self.client
                .get("/resources", "Failed to fetch resources")
                .await?
        } else {
            self.client
                .get_with_query("/resources", &query, "Failed to fetch resources")
                .await?
        };
        Ok(response.resources)
    }

    /// Fetch one resource: `GET /resources/{id}`
    pub async fn get(&self, id: &str) -> Result<Resource> {
        self.client
            .get(&format!("/resources/{}", id), "Failed to fetch resource")
            .await
    }

    /// Bookmark a resource: `POST /saved-resource`
    pub async fn save(&self, request: &SaveResourceRequest) -> Result<SavedResource> {
        self.client
            .post("/saved-resource", request, "Failed to save resource")
            .await
    }

    /// List bookmarks: `GET /saved-resource`
    pub async fn saved(&self) -> Result<Vec<SavedResource>> {
        let response: SavedResourcesResponse = self
            .client
            .get("/saved-resource", "Failed to fetch saved resources")
            .await?;
        Ok(response.saved_resources)
    }

    /// Remove a bookmark: `DELETE /saved-resource/{id}`
    pub async fn unsave(&self, id: &str) -> Result<()> {
        self.client
            .delete_expecting_ok(
                &format!("/saved-resource/{}", id),
                "Failed to unsave resource",
            )
            .await
    }
}
