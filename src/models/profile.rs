//! User profile and cultural profile wire types
//!
//! The cultural profile is the questionnaire the assistant uses to tailor
//! replies; all enums serialize as the backend's SCREAMING_SNAKE values.

use crate::models::therapist::Role;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The authenticated user's profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

/// Request body for `PUT /user/profile`
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UpdateUserProfileRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AgeGroup {
    Youth,
    Adult,
    Elder,
}

/// Where the user lives; named to avoid clashing with std and URL types
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum LocationKind {
    Urban,
    Rural,
    PeriUrban,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EducationLevel {
    Primary,
    Secondary,
    Tertiary,
    Postgraduate,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum FamilyStructure {
    Nuclear,
    Extended,
    SingleParent,
    Guardian,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RespectLevel {
    High,
    Moderate,
    Relaxed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum EconomicStatus {
    Low,
    Middle,
    High,
}

/// A stored cultural profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CulturalProfile {
    pub id: String,
    pub user_id: String,
    pub age_group: AgeGroup,
    pub location: LocationKind,
    pub education_level: EducationLevel,
    #[serde(default)]
    pub ethnic_background: Option<String>,
    #[serde(default)]
    pub religious_background: Option<String>,
    #[serde(default)]
    pub language_preference: Option<String>,
    pub family_structure: FamilyStructure,
    #[serde(default)]
    pub household_size: Option<u32>,
    pub has_elders: bool,
    #[serde(default)]
    pub communication_style: Option<String>,
    pub respect_level: RespectLevel,
    pub economic_status: EconomicStatus,
    #[serde(default)]
    pub employment_status: Option<String>,
    pub created_at: DateTime<Utc>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Request body for `POST /cultural-profile` and `PUT /cultural-profile`
///
/// Also the schema of the YAML answers file the CLI reads for
/// `profile cultural setup`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CulturalProfileRequest {
    pub age_group: AgeGroup,
    pub location: LocationKind,
    pub education_level: EducationLevel,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ethnic_background: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub religious_background: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language_preference: Option<String>,
    pub family_structure: FamilyStructure,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub household_size: Option<u32>,
    pub has_elders: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub communication_style: Option<String>,
    pub respect_level: RespectLevel,
    pub economic_status: EconomicStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub employment_status: Option<String>,
}
