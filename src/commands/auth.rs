//! Authentication command handlers

use crate::api::AuthApi;
use crate::commands::build_client;
use crate::config::Config;
use crate::error::{CalmaError, Result};
use colored::Colorize;
use rustyline::completion::Completer;
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::history::DefaultHistory;
use rustyline::validate::Validator;
use rustyline::{Editor, Helper};
use std::borrow::Cow;

/// Create an account and store the session cookie
pub async fn signup(config: Config, name: String, email: String) -> Result<()> {
    let password = prompt_new_password()?;
    let auth = AuthApi::new(build_client(&config)?);
    let user = auth.signup(&name, &email, &password).await?;
    println!(
        "{}",
        format!("Welcome, {}! Your account is ready and you are logged in.", user.name).green()
    );
    Ok(())
}

/// Log in and store the session cookie
pub async fn login(config: Config, email: String) -> Result<()> {
    let password = prompt_password("Password: ")?;
    let auth = AuthApi::new(build_client(&config)?);
    let user = auth.login(&email, &password).await?;
    println!("{}", format!("Logged in as {} <{}>", user.name, user.email).green());
    Ok(())
}

/// Log out and discard the stored session cookie
pub async fn logout(config: Config) -> Result<()> {
    let auth = AuthApi::new(build_client(&config)?);
    auth.logout().await?;
    println!("Logged out.");
    Ok(())
}

/// Show the currently authenticated user, if any
pub async fn whoami(config: Config) -> Result<()> {
    let auth = AuthApi::new(build_client(&config)?);
    match auth.current_user().await {
        Some(user) => println!("{} <{}> ({})", user.name, user.email, user.role),
        None => println!("Not logged in."),
    }
    Ok(())
}

/// Readline helper that renders every typed character as an asterisk
struct MaskedInput;

impl Highlighter for MaskedInput {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        Cow::Owned("*".repeat(line.chars().count()))
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Completer for MaskedInput {
    type Candidate = String;
}

impl Hinter for MaskedInput {
    type Hint = String;
}

impl Validator for MaskedInput {}
impl Helper for MaskedInput {}

fn prompt_password(prompt: &str) -> Result<String> {
    let mut rl: Editor<MaskedInput, DefaultHistory> = Editor::new()?;
    rl.set_helper(Some(MaskedInput));
    let password = rl.readline(prompt)?;
    if password.trim().is_empty() {
        return Err(CalmaError::Validation("password must not be empty".to_string()).into());
    }
    Ok(password)
}

fn prompt_new_password() -> Result<String> {
    let password = prompt_password("Choose a password: ")?;
    let confirmed = prompt_password("Repeat password: ")?;
    if password != confirmed {
        return Err(CalmaError::Validation("passwords do not match".to_string()).into());
    }
    Ok(password)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_masked_input_hides_typed_characters() {
        let mask = MaskedInput;
        assert_eq!(mask.highlight("hunter22", 0), "********");
        assert!(mask.highlight_char("h", 1, false));
    }

    #[test]
    fn test_masked_input_masks_per_character() {
        let mask = MaskedInput;
        // One asterisk per character, not per byte
        assert_eq!(mask.highlight("pässwörd", 0), "********");
        assert_eq!(mask.highlight("", 0), "");
    }
}
