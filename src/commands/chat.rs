//! Interactive chat mode handler
//!
//! Resolves the authenticated user, then runs a readline loop that feeds
//! turns to the session continuity client and renders the bot replies.
//! The transcript lives for this visit only; quitting discards it and no
//! close call is sent to the backend.

use crate::api::{AuthApi, ChatApi};
use crate::commands::build_client;
use crate::config::Config;
use crate::error::Result;
use crate::models::BotMessage;
use crate::session::{SessionClient, SessionState};
use colored::Colorize;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

/// Special slash-commands recognized inside the chat loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SpecialCommand {
    Help,
    Status,
    Health,
    Exit,
    None,
}

fn parse_special_command(input: &str) -> SpecialCommand {
    match input {
        "/help" => SpecialCommand::Help,
        "/status" => SpecialCommand::Status,
        "/health" => SpecialCommand::Health,
        "/exit" | "/quit" | "exit" | "quit" => SpecialCommand::Exit,
        _ => SpecialCommand::None,
    }
}

/// Start an interactive chat with the support assistant
///
/// # Arguments
///
/// * `config` - Global configuration (consumed)
/// * `analysis` - Print the analysis payload with each reply, regardless
///   of the configured default
pub async fn run_chat(config: Config, analysis: bool) -> Result<()> {
    let client = build_client(&config)?;
    let auth = AuthApi::new(client.clone());
    let user = auth.require_user().await?;
    tracing::info!("Starting chat for user {}", user.id);

    let show_analysis = analysis || config.chat.show_analysis;
    let assistant = config.chat.assistant_name.clone();
    let session = SessionClient::new(ChatApi::new(client), user.id.clone());

    let mut rl = DefaultEditor::new()?;
    print_welcome(&assistant, &user.name);

    // Text of a failed send, pre-filled into the next prompt
    let mut unsent: Option<String> = None;

    loop {
        let prompt = format!("{} ", "you >>".green());
        let line = match unsent.take() {
            Some(text) if config.chat.restore_input_on_failure => {
                rl.readline_with_initial(&prompt, (&text, ""))
            }
            _ => rl.readline(&prompt),
        };

        match line {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }
                rl.add_history_entry(trimmed)?;

                match parse_special_command(trimmed) {
                    SpecialCommand::Help => {
                        print_help();
                        continue;
                    }
                    SpecialCommand::Status => {
                        print_status(&session, &user.name);
                        continue;
                    }
                    SpecialCommand::Health => {
                        match session_transport_health(&config).await {
                            Ok(line) => println!("{}", line),
                            Err(e) => println!("{}", format!("Health check failed: {}", e).red()),
                        }
                        continue;
                    }
                    SpecialCommand::Exit => break,
                    SpecialCommand::None => {}
                }

                match session.send_turn(trimmed).await {
                    Ok(turn) => {
                        print_reply(&assistant, &turn.bot, show_analysis);
                    }
                    Err(e) => {
                        println!("{}", format!("Message not sent: {}", e).red());
                        unsent = Some(trimmed.to_string());
                    }
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => return Err(e.into()),
        }
    }

    println!("Take care. Your conversation stays available next time you chat.");
    Ok(())
}

async fn session_transport_health(config: &Config) -> Result<String> {
    let client = build_client(config)?;
    let health = ChatApi::new(client).health().await?;
    Ok(format!(
        "chat service: {}, AI service: {}",
        health.status, health.ai_service
    ))
}

fn print_welcome(assistant: &str, user_name: &str) {
    println!("{}", format!("{} — a safe space to share your thoughts", assistant).cyan().bold());
    println!(
        "Hello {}! I'm here to support you. How are you feeling today?",
        user_name
    );
    println!("{}", "Type /help for commands, /exit to leave.\n".dimmed());
}

fn print_help() {
    println!("Available commands:");
    println!("  /help    Show this help");
    println!("  /status  Show session state and transcript length");
    println!("  /health  Check the chat service");
    println!("  /exit    Leave the chat");
}

fn print_status<T: crate::session::ChatTransport>(session: &SessionClient<T>, user_name: &str) {
    let state = session.state();
    let handle = session
        .session_id()
        .unwrap_or_else(|| "none yet".to_string());
    println!("User: {}", user_name);
    println!("Session: {} ({})", handle, state);
    println!("Messages this visit: {}", session.transcript_len());
    if state == SessionState::Idle {
        println!("A session starts with your first message.");
    }
}

fn print_reply(assistant: &str, bot: &BotMessage, show_analysis: bool) {
    println!("{} {}", format!("{} >>", assistant).cyan().bold(), bot.message);
    if show_analysis {
        let analysis = &bot.analysis_results;
        let mut parts = Vec::new();
        if !bot.emotional_tone.is_empty() {
            parts.push(format!("tone: {}", bot.emotional_tone));
        }
        if !analysis.mood_detected.is_empty() {
            parts.push(format!(
                "mood: {} ({:.0}%)",
                analysis.mood_detected,
                analysis.confidence * 100.0
            ));
        }
        if !bot.detected_topics.is_empty() {
            parts.push(format!("topics: {}", bot.detected_topics.join(", ")));
        }
        if !analysis.suggested_resources.is_empty() {
            parts.push(format!(
                "suggested resources: {}",
                analysis.suggested_resources.join(", ")
            ));
        }
        if !parts.is_empty() {
            println!("{}", format!("[{}]", parts.join(" | ")).dimmed());
        }
    }
    println!();
}
