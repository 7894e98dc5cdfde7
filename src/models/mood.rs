//! Mood tracking wire types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored mood entry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mood {
    /// Server-assigned entry id
    pub id: String,
    /// Owner of the entry
    pub user_id: String,
    /// Mood value on a 1-5 scale
    pub mood: u8,
    /// Optional free-text note
    #[serde(default)]
    pub note: Option<String>,
    /// When the entry was recorded
    pub created_at: DateTime<Utc>,
}

/// Request body for `POST /mood`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveMoodRequest {
    /// Mood value on a 1-5 scale
    pub value: u8,
    /// Optional free-text note
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// Response envelope for `GET /mood`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodHistoryResponse {
    /// Recorded moods, newest first
    #[serde(default)]
    pub moods: Vec<Mood>,
}
