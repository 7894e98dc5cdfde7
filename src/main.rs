//! Calma - command-line client for the Calma mental-health support platform
//!
//! Main entry point for the Calma CLI.

use anyhow::Result;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use calma::cli::{
    AppointmentCommand, AuthCommand, Cli, Commands, CulturalCommand, MessageCommand, MoodCommand,
    ProfileCommand, ResourceCommand,
};
use calma::commands;
use calma::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command line arguments
    let cli = Cli::parse_args();

    // Initialize tracing
    init_tracing(cli.verbose);

    // Load configuration
    let config_path = cli
        .config
        .clone()
        .unwrap_or_else(|| Config::default_path().to_string_lossy().to_string());
    let config = Config::load(&config_path, &cli)?;

    // Validate configuration
    config.validate()?;

    // Execute command
    match cli.command {
        Commands::Chat { analysis } => {
            tracing::info!("Starting interactive chat");
            commands::chat::run_chat(config, analysis).await?;
            Ok(())
        }
        Commands::Auth { command } => match command {
            AuthCommand::Signup { name, email } => {
                tracing::info!("Creating account for {}", email);
                commands::auth::signup(config, name, email).await?;
                Ok(())
            }
            AuthCommand::Login { email } => {
                tracing::info!("Logging in as {}", email);
                commands::auth::login(config, email).await?;
                Ok(())
            }
            AuthCommand::Logout => {
                commands::auth::logout(config).await?;
                Ok(())
            }
            AuthCommand::Whoami => {
                commands::auth::whoami(config).await?;
                Ok(())
            }
        },
        Commands::Mood { command } => match command {
            MoodCommand::Log { value, note } => {
                tracing::info!("Recording mood entry");
                commands::mood::log(config, value, note).await?;
                Ok(())
            }
            MoodCommand::History => {
                commands::mood::history(config).await?;
                Ok(())
            }
        },
        Commands::Resources { command } => match command {
            ResourceCommand::List {
                resource_type,
                tags,
                cultural_tags,
            } => {
                commands::resources::list(config, resource_type, tags, cultural_tags).await?;
                Ok(())
            }
            ResourceCommand::Show { id } => {
                commands::resources::show(config, id).await?;
                Ok(())
            }
            ResourceCommand::Save { id, reason } => {
                commands::resources::save(config, id, reason).await?;
                Ok(())
            }
            ResourceCommand::Saved => {
                commands::resources::saved(config).await?;
                Ok(())
            }
            ResourceCommand::Unsave { id } => {
                commands::resources::unsave(config, id).await?;
                Ok(())
            }
        },
        Commands::Therapists => {
            commands::therapists::list(config).await?;
            Ok(())
        }
        Commands::Messages { command } => match command {
            MessageCommand::Conversations => {
                commands::therapists::conversations(config).await?;
                Ok(())
            }
            MessageCommand::List { therapist_id } => {
                commands::therapists::messages(config, therapist_id).await?;
                Ok(())
            }
            MessageCommand::Send {
                therapist_id,
                message,
            } => {
                tracing::info!("Sending message to therapist {}", therapist_id);
                commands::therapists::send(config, therapist_id, message).await?;
                Ok(())
            }
        },
        Commands::Appointments { command } => match command {
            AppointmentCommand::Book {
                therapist,
                at,
                duration,
                reason,
                location,
            } => {
                tracing::info!("Booking appointment with therapist {}", therapist);
                commands::appointments::book(config, therapist, at, duration, reason, location)
                    .await?;
                Ok(())
            }
            AppointmentCommand::List => {
                commands::appointments::list(config).await?;
                Ok(())
            }
            AppointmentCommand::Show { id } => {
                commands::appointments::show(config, id).await?;
                Ok(())
            }
            AppointmentCommand::Update {
                id,
                at,
                duration,
                notes,
            } => {
                commands::appointments::update(config, id, at, duration, notes).await?;
                Ok(())
            }
            AppointmentCommand::Cancel { id } => {
                commands::appointments::cancel(config, id).await?;
                Ok(())
            }
        },
        Commands::Profile { command } => match command {
            ProfileCommand::Show => {
                commands::profile::show(config).await?;
                Ok(())
            }
            ProfileCommand::Update { name, email } => {
                commands::profile::update(config, name, email).await?;
                Ok(())
            }
            ProfileCommand::DeleteAccount => {
                tracing::warn!("Account deletion requested");
                commands::profile::delete_account(config).await?;
                Ok(())
            }
            ProfileCommand::Cultural { command } => match command {
                CulturalCommand::Show => {
                    commands::profile::cultural_show(config).await?;
                    Ok(())
                }
                CulturalCommand::Setup { file } => {
                    commands::profile::cultural_setup(config, file).await?;
                    Ok(())
                }
                CulturalCommand::Update { file } => {
                    commands::profile::cultural_update(config, file).await?;
                    Ok(())
                }
            },
        },
        Commands::Health => {
            commands::health::run(config).await?;
            Ok(())
        }
    }
}

/// Initialize tracing subscriber with environment filter
fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "calma=debug" } else { "calma=info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
