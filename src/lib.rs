//! Calma - command-line client for the Calma mental-health support platform
//!
//! Calma talks to the Calma backend REST API: an interactive chat with the
//! AI support assistant, mood tracking, a resources library, therapist
//! messaging, appointment booking, and profile management.
//!
//! The crate is organized into:
//! - [`cli`] - command-line interface definition
//! - [`config`] - configuration loading and validation
//! - [`api`] - typed wrappers over the backend REST endpoints
//! - [`session`] - chat session state and the turn protocol
//! - [`models`] - wire types shared by the API wrappers
//! - [`commands`] - handlers dispatched from the entrypoint
//! - [`error`] - error types

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod models;
pub mod session;

pub use config::Config;
pub use error::{CalmaError, Result};
pub use session::{SessionClient, SessionState};
