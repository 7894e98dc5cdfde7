//! Mood tracking command handlers

use crate::api::MoodApi;
use crate::commands::{build_client, ellipsize, format_time};
use crate::config::Config;
use crate::error::Result;
use colored::Colorize;
use prettytable::{row, Table};

/// Record a mood entry
pub async fn log(config: Config, value: u8, note: Option<String>) -> Result<()> {
    let mood = MoodApi::new(build_client(&config)?);
    let entry = mood.save(value, note).await?;
    println!(
        "{}",
        format!(
            "Recorded mood {} at {}.",
            entry.mood,
            format_time(&entry.created_at)
        )
        .green()
    );
    Ok(())
}

/// List recorded moods
pub async fn history(config: Config) -> Result<()> {
    let mood = MoodApi::new(build_client(&config)?);
    let moods = mood.history().await?;
    if moods.is_empty() {
        println!("No moods recorded yet. Try `calma mood log 3`.");
        return Ok(());
    }

    let mut table = Table::new();
    table.add_row(row!["When", "Mood", "Note"]);
    for entry in &moods {
        table.add_row(row![
            format_time(&entry.created_at),
            entry.mood,
            entry.note.as_deref().map(|n| ellipsize(n, 48)).unwrap_or_default(),
        ]);
    }
    table.printstd();
    Ok(())
}
