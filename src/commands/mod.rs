/*!
Command handlers for the CLI

This module provides command handlers invoked by the CLI entrypoint.
Each handler is intentionally small: it builds the shared API client,
calls one or more service wrappers, and renders the result. All business
logic (AI replies, mood analytics, scheduling conflicts) is server-side.
*/

use crate::api::ApiClient;
use crate::config::Config;
use crate::error::Result;
use chrono::{DateTime, Local, Utc};
use std::sync::Arc;

pub mod appointments;
pub mod auth;
pub mod chat;
pub mod health;
pub mod mood;
pub mod profile;
pub mod resources;
pub mod therapists;

/// Build the shared API client from configuration
pub(crate) fn build_client(config: &Config) -> Result<Arc<ApiClient>> {
    Ok(Arc::new(ApiClient::new(&config.api)?))
}

/// Render a timestamp in the user's local time
pub(crate) fn format_time(timestamp: &DateTime<Utc>) -> String {
    timestamp
        .with_timezone(&Local)
        .format("%Y-%m-%d %H:%M")
        .to_string()
}

/// Shorten free text to one table-cell-sized line
pub(crate) fn ellipsize(text: &str, max_chars: usize) -> String {
    let mut shortened: String = text.chars().take(max_chars).collect();
    if text.chars().count() > max_chars {
        shortened.push('…');
    }
    shortened.replace('\n', " ")
}
