//! Chat service health command handler

use crate::api::ChatApi;
use crate::commands::build_client;
use crate::config::Config;
use crate::error::Result;
use colored::Colorize;

/// Check the chat service and print its status
pub async fn run(config: Config) -> Result<()> {
    let chat = ChatApi::new(build_client(&config)?);
    let health = chat.health().await?;

    let status = if health.status == "ok" || health.status == "healthy" {
        health.status.green()
    } else {
        health.status.yellow()
    };
    println!("Chat service: {}", status);
    println!("AI service: {}", health.ai_service);
    println!("Checked at: {}", health.timestamp);
    Ok(())
}
