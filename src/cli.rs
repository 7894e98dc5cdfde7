//! Command-line interface definition for the Calma client
//!
//! This module defines the CLI structure using clap's derive API,
//! providing commands for chat, authentication, mood tracking,
//! resources, therapists, appointments, and profile management.

use clap::{Parser, Subcommand};

/// Calma - command-line client for the Calma mental-health support platform
///
/// Talk to the AI support assistant, track your mood, browse resources,
/// message therapists, and manage appointments from the terminal.
#[derive(Parser, Debug, Clone)]
#[command(name = "calma")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,

    /// Override the backend API base URL from config
    #[arg(long, env = "CALMA_API_URL")]
    pub api_url: Option<String>,

    /// Command to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available commands for the Calma client
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Start an interactive chat with the support assistant
    Chat {
        /// Print the assistant's emotional-tone and topic analysis with each reply
        #[arg(long)]
        analysis: bool,
    },

    /// Account authentication
    Auth {
        /// Authentication subcommand
        #[command(subcommand)]
        command: AuthCommand,
    },

    /// Mood tracking
    Mood {
        /// Mood subcommand
        #[command(subcommand)]
        command: MoodCommand,
    },

    /// Browse and bookmark the resources library
    Resources {
        /// Resources subcommand
        #[command(subcommand)]
        command: ResourceCommand,
    },

    /// List available therapists
    Therapists,

    /// Direct messaging with therapists
    Messages {
        /// Messaging subcommand
        #[command(subcommand)]
        command: MessageCommand,
    },

    /// Appointment booking and management
    Appointments {
        /// Appointments subcommand
        #[command(subcommand)]
        command: AppointmentCommand,
    },

    /// User and cultural profile management
    Profile {
        /// Profile subcommand
        #[command(subcommand)]
        command: ProfileCommand,
    },

    /// Check chat service health
    Health,
}

/// Authentication subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum AuthCommand {
    /// Create a new account
    Signup {
        /// Display name
        #[arg(short, long)]
        name: String,

        /// Email address
        #[arg(short, long)]
        email: String,
    },

    /// Log in to an existing account
    Login {
        /// Email address
        #[arg(short, long)]
        email: String,
    },

    /// Log out and discard the stored session
    Logout,

    /// Show the currently authenticated user
    Whoami,
}

/// Mood tracking subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum MoodCommand {
    /// Record how you are feeling right now
    Log {
        /// Mood value on a 1-5 scale (1 = very low, 5 = great)
        value: u8,

        /// Optional note attached to the entry
        #[arg(short, long)]
        note: Option<String>,
    },

    /// Show previously recorded moods
    History,
}

/// Resource library subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ResourceCommand {
    /// List resources, optionally filtered
    List {
        /// Filter by resource type (video, article, tool, podcast, cultural-story)
        #[arg(short = 't', long = "type")]
        resource_type: Option<String>,

        /// Filter by comma-separated tags
        #[arg(long)]
        tags: Option<String>,

        /// Filter by comma-separated cultural tags
        #[arg(long)]
        cultural_tags: Option<String>,
    },

    /// Show one resource in detail
    Show {
        /// Resource identifier
        id: String,
    },

    /// Bookmark a resource
    Save {
        /// Resource identifier
        id: String,

        /// Why this resource was recommended
        #[arg(long)]
        reason: Option<String>,
    },

    /// List bookmarked resources
    Saved,

    /// Remove a bookmark
    Unsave {
        /// Saved-resource identifier
        id: String,
    },
}

/// Therapist messaging subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum MessageCommand {
    /// List conversations with therapists
    Conversations,

    /// List messages exchanged with one therapist
    List {
        /// Therapist identifier
        therapist_id: String,
    },

    /// Send a message to a therapist
    Send {
        /// Therapist identifier
        therapist_id: String,

        /// Message text
        message: String,
    },
}

/// Appointment subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum AppointmentCommand {
    /// Book a new appointment
    Book {
        /// Therapist identifier
        #[arg(short, long)]
        therapist: String,

        /// Scheduled time (RFC 3339, e.g. 2026-09-01T14:00:00Z)
        #[arg(short = 'a', long)]
        at: String,

        /// Duration in minutes
        #[arg(short, long, default_value_t = 60)]
        duration: u32,

        /// Reason for the visit
        #[arg(long)]
        reason: Option<String>,

        /// Location or meeting link note
        #[arg(long)]
        location: Option<String>,
    },

    /// List your appointments
    List,

    /// Show one appointment in detail
    Show {
        /// Appointment identifier
        id: String,
    },

    /// Reschedule or annotate an appointment
    Update {
        /// Appointment identifier
        id: String,

        /// New scheduled time (RFC 3339)
        #[arg(short = 'a', long)]
        at: Option<String>,

        /// New duration in minutes
        #[arg(short, long)]
        duration: Option<u32>,

        /// Updated notes
        #[arg(long)]
        notes: Option<String>,
    },

    /// Cancel an appointment
    Cancel {
        /// Appointment identifier
        id: String,
    },
}

/// Profile subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum ProfileCommand {
    /// Show your user profile
    Show,

    /// Update your user profile
    Update {
        /// New display name
        #[arg(short, long)]
        name: Option<String>,

        /// New email address
        #[arg(short, long)]
        email: Option<String>,
    },

    /// Permanently delete your account
    DeleteAccount,

    /// Cultural profile questionnaire
    Cultural {
        /// Cultural profile subcommand
        #[command(subcommand)]
        command: CulturalCommand,
    },
}

/// Cultural profile subcommands
#[derive(Subcommand, Debug, Clone)]
pub enum CulturalCommand {
    /// Show your cultural profile, if one exists
    Show,

    /// Create a cultural profile from a YAML answers file
    Setup {
        /// Path to a YAML file with questionnaire answers
        #[arg(short, long)]
        file: String,
    },

    /// Update a cultural profile from a YAML answers file
    Update {
        /// Path to a YAML file with questionnaire answers
        #[arg(short, long)]
        file: String,
    },
}

impl Cli {
    /// Parse command line arguments
    ///
    /// # Returns
    ///
    /// Returns the parsed CLI structure
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
