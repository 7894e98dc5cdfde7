//! Therapist directory and messaging command handlers

use crate::api::TherapistApi;
use crate::commands::{build_client, ellipsize, format_time};
use crate::config::Config;
use crate::error::Result;
use colored::Colorize;
use prettytable::{row, Table};

/// List available therapists
pub async fn list(config: Config) -> Result<()> {
    let api = TherapistApi::new(build_client(&config)?);
    let therapists = api.list().await?;
    if therapists.is_empty() {
        println!("No therapists available right now.");
        return Ok(());
    }

    let mut table = Table::new();
    table.add_row(row!["Id", "Name", "Specialization"]);
    for therapist in &therapists {
        table.add_row(row![
            therapist.id,
            therapist.name,
            therapist
                .specialization
                .as_deref()
                .map(|s| ellipsize(s, 48))
                .unwrap_or_default(),
        ]);
    }
    table.printstd();
    Ok(())
}

/// List conversation summaries
pub async fn conversations(config: Config) -> Result<()> {
    let api = TherapistApi::new(build_client(&config)?);
    let conversations = api.conversations().await?;
    if conversations.is_empty() {
        println!("No conversations yet. Start one with `calma messages send`.");
        return Ok(());
    }

    let mut table = Table::new();
    table.add_row(row!["Therapist", "Messages", "Last message", "When"]);
    for conversation in &conversations {
        table.add_row(row![
            format!("{} ({})", conversation.therapist.name, conversation.therapist.id),
            conversation.message_count,
            ellipsize(&conversation.last_message.message, 40),
            format_time(&conversation.last_message.timestamp),
        ]);
    }
    table.printstd();
    Ok(())
}

/// Show the message history with one therapist
pub async fn messages(config: Config, therapist_id: String) -> Result<()> {
    let api = TherapistApi::new(build_client(&config)?);
    let messages = api.conversation_messages(&therapist_id).await?;
    if messages.is_empty() {
        println!("No messages with this therapist yet.");
        return Ok(());
    }

    for message in &messages {
        let from_therapist = message.sender_id == therapist_id;
        let label = if from_therapist {
            format!("{} <<", format_time(&message.timestamp)).cyan()
        } else {
            format!("{} >>", format_time(&message.timestamp)).green()
        };
        println!("{} {}", label, message.message);
    }
    Ok(())
}

/// Send a direct message to a therapist
pub async fn send(config: Config, therapist_id: String, message: String) -> Result<()> {
    let api = TherapistApi::new(build_client(&config)?);
    let sent = api.send_message(&therapist_id, &message).await?;
    println!(
        "{}",
        format!("Sent at {}.", format_time(&sent.timestamp)).green()
    );
    Ok(())
}
