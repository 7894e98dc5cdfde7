//! Authentication wire types
//!
//! The backend issues an opaque session cookie on signup and login; the
//! client stores it and attaches it to every request. Token mechanics are
//! entirely server-side.

use crate::models::therapist::Role;
use serde::{Deserialize, Serialize};

/// Request body for `POST /auth/signup`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Request body for `POST /auth/login`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// The authenticated user, as returned by `GET /auth/me`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
}
