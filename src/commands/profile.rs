//! User profile and cultural profile command handlers

use crate::api::ProfileApi;
use crate::commands::{build_client, format_time};
use crate::config::Config;
use crate::error::{CalmaError, Result};
use crate::models::{CulturalProfile, CulturalProfileRequest, UpdateUserProfileRequest};
use colored::Colorize;
use rustyline::DefaultEditor;

/// Show the user profile, plus whether a cultural profile exists
pub async fn show(config: Config) -> Result<()> {
    let api = ProfileApi::new(build_client(&config)?);
    let profile = api.get().await?;

    println!("{} <{}>", profile.name.bold(), profile.email);
    println!("Role: {}", profile.role);
    println!("Member since: {}", format_time(&profile.created_at));

    // Optional by design; absence is not an error
    match api.get_cultural_optional().await {
        Some(cultural) => {
            println!("Cultural profile: set (updated {})", last_touched(&cultural));
        }
        None => {
            println!("Cultural profile: not set. See `calma profile cultural setup`.");
        }
    }
    Ok(())
}

/// Update name and/or email
pub async fn update(config: Config, name: Option<String>, email: Option<String>) -> Result<()> {
    if name.is_none() && email.is_none() {
        return Err(CalmaError::Validation("nothing to update".to_string()).into());
    }

    let api = ProfileApi::new(build_client(&config)?);
    let profile = api.update(&UpdateUserProfileRequest { name, email }).await?;
    println!(
        "{}",
        format!("Profile updated: {} <{}>", profile.name, profile.email).green()
    );
    Ok(())
}

/// Permanently delete the account, after an explicit confirmation
pub async fn delete_account(config: Config) -> Result<()> {
    let mut rl = DefaultEditor::new()?;
    let answer = rl.readline("This permanently deletes your account and data. Type 'delete' to confirm: ")?;
    if answer.trim() != "delete" {
        println!("Aborted.");
        return Ok(());
    }

    let api = ProfileApi::new(build_client(&config)?);
    api.delete_account().await?;
    println!("Account deleted.");
    Ok(())
}

/// Show the cultural profile
pub async fn cultural_show(config: Config) -> Result<()> {
    let api = ProfileApi::new(build_client(&config)?);
    let profile = api.get_cultural().await?;
    print_cultural(&profile);
    Ok(())
}

/// Create the cultural profile from a YAML answers file
pub async fn cultural_setup(config: Config, file: String) -> Result<()> {
    let request = read_answers(&file)?;
    let api = ProfileApi::new(build_client(&config)?);
    let profile = api.create_cultural(&request).await?;
    println!("{}", "Cultural profile created.".green());
    print_cultural(&profile);
    Ok(())
}

/// Update the cultural profile from a YAML answers file
pub async fn cultural_update(config: Config, file: String) -> Result<()> {
    let request = read_answers(&file)?;
    let api = ProfileApi::new(build_client(&config)?);
    let profile = api.update_cultural(&request).await?;
    println!("{}", "Cultural profile updated.".green());
    print_cultural(&profile);
    Ok(())
}

fn read_answers(path: &str) -> Result<CulturalProfileRequest> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| CalmaError::Config(format!("Cannot read {}: {}", path, e)))?;
    let request = serde_yaml::from_str(&contents)
        .map_err(|e| CalmaError::Config(format!("Invalid answers file {}: {}", path, e)))?;
    Ok(request)
}

fn last_touched(profile: &CulturalProfile) -> String {
    format_time(profile.updated_at.as_ref().unwrap_or(&profile.created_at))
}

fn print_cultural(profile: &CulturalProfile) {
    println!("Age group: {:?}", profile.age_group);
    println!("Location: {:?}", profile.location);
    println!("Education: {:?}", profile.education_level);
    println!("Family structure: {:?}", profile.family_structure);
    if let Some(size) = profile.household_size {
        println!("Household size: {}", size);
    }
    println!("Elders at home: {}", if profile.has_elders { "yes" } else { "no" });
    println!("Respect level: {:?}", profile.respect_level);
    println!("Economic status: {:?}", profile.economic_status);
    if let Some(language) = &profile.language_preference {
        println!("Language preference: {}", language);
    }
    if let Some(background) = &profile.ethnic_background {
        println!("Ethnic background: {}", background);
    }
    if let Some(background) = &profile.religious_background {
        println!("Religious background: {}", background);
    }
    if let Some(style) = &profile.communication_style {
        println!("Communication style: {}", style);
    }
    if let Some(employment) = &profile.employment_status {
        println!("Employment: {}", employment);
    }
}
