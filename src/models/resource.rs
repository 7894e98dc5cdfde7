//! Resources library wire types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Kind of library resource
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ResourceType {
    Video,
    Article,
    Tool,
    Podcast,
    CulturalStory,
}

impl ResourceType {
    /// Parse a resource type from a CLI-friendly string
    pub fn parse_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "video" => Ok(Self::Video),
            "article" => Ok(Self::Article),
            "tool" => Ok(Self::Tool),
            "podcast" => Ok(Self::Podcast),
            "cultural-story" | "cultural_story" | "story" => Ok(Self::CulturalStory),
            other => Err(format!("Unknown resource type: {}", other)),
        }
    }

    /// Wire value of this type, as the backend expects it in query strings
    pub fn as_wire(&self) -> &'static str {
        match self {
            Self::Video => "VIDEO",
            Self::Article => "ARTICLE",
            Self::Tool => "TOOL",
            Self::Podcast => "PODCAST",
            Self::CulturalStory => "CULTURAL_STORY",
        }
    }
}

/// A library resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Resource {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
    pub link: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub cultural_tags: Vec<String>,
    #[serde(default)]
    pub target_audience: Vec<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// A bookmarked resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedResource {
    pub id: String,
    pub user_id: String,
    pub resource_id: String,
    #[serde(default)]
    pub recommendation_reason: Option<String>,
    #[serde(default)]
    pub cultural_relevance: Option<String>,
    pub saved_at: DateTime<Utc>,
    /// The referenced resource, when the backend expands it
    #[serde(default)]
    pub resource: Option<Resource>,
}

/// Request body for `POST /saved-resource`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveResourceRequest {
    pub resource_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommendation_reason: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cultural_relevance: Option<String>,
}

/// Query filters for `GET /resources`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResourceFilters {
    pub resource_type: Option<ResourceType>,
    /// Comma-separated tag list, passed through verbatim
    pub tags: Option<String>,
    /// Comma-separated cultural tag list, passed through verbatim
    pub cultural_tags: Option<String>,
}

impl ResourceFilters {
    /// Render the filters as query parameters
    ///
    /// Returns an empty vector when no filter is set, so callers can skip
    /// the query string entirely.
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut params = Vec::new();
        if let Some(resource_type) = &self.resource_type {
            params.push(("type", resource_type.as_wire().to_string()));
        }
        if let Some(tags) = &self.tags {
            params.push(("tags", tags.clone()));
        }
        if let Some(cultural_tags) = &self.cultural_tags {
            params.push(("culturalTags", cultural_tags.clone()));
        }
        params
    }
}

/// Response envelope for `GET /resources`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResourcesResponse {
    #[serde(default)]
    pub resources: Vec<Resource>,
}

/// Response envelope for `GET /saved-resource`
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedResourcesResponse {
    #[serde(default)]
    pub saved_resources: Vec<SavedResource>,
}
