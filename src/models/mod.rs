//! Wire types for the Calma backend REST API
//!
//! Every struct here mirrors a backend request or response envelope
//! exactly. The backend speaks camelCase JSON with SCREAMING_SNAKE enum
//! values; timestamps are RFC 3339. Analysis payloads attached to bot
//! replies are opaque to the client: displayed or ignored, never computed
//! here.

pub mod appointment;
pub mod auth;
pub mod chat;
pub mod mood;
pub mod profile;
pub mod resource;
pub mod therapist;

pub use appointment::{
    Appointment, AppointmentStatus, AppointmentsResponse, CreateAppointmentRequest,
    UpdateAppointmentRequest,
};
pub use auth::{CurrentUser, LoginRequest, SignupRequest};
pub use chat::{
    AnalysisResults, BotMessage, ChatMessage, ChatSession, HealthCheckResponse, QualityMetrics,
    SendMessageRequest, SendMessageResponse, Sender,
};
pub use mood::{Mood, MoodHistoryResponse, SaveMoodRequest};
pub use profile::{
    AgeGroup, CulturalProfile, CulturalProfileRequest, EconomicStatus, EducationLevel,
    FamilyStructure, LocationKind, RespectLevel, UpdateUserProfileRequest, UserProfile,
};
pub use resource::{
    Resource, ResourceFilters, ResourceType, ResourcesResponse, SaveResourceRequest,
    SavedResource, SavedResourcesResponse,
};
pub use therapist::{
    Conversation, ConversationMessagesResponse, ConversationsResponse, LastMessage, Role,
    SendTherapistMessageRequest, Therapist, TherapistChatMessage, TherapistSummary,
    TherapistsResponse,
};
