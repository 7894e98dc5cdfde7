//! Typed service wrappers around the Calma backend REST API
//!
//! Each submodule holds one wrapper struct translating CLI actions into
//! single HTTP request/response pairs. All wrappers share one
//! [`ApiClient`], which owns the credentialed transport and the error
//! normalization policy.

mod appointments;
mod auth;
mod chat;
mod client;
mod mood;
mod profile;
mod resources;
mod therapists;

pub use appointments::AppointmentApi;
pub use auth::AuthApi;
pub use chat::ChatApi;
pub use client::ApiClient;
pub use mood::MoodApi;
pub use profile::ProfileApi;
pub use resources::ResourceApi;
pub use therapists::TherapistApi;
