//! Appointment command handlers

use crate::api::AppointmentApi;
use crate::commands::{build_client, ellipsize, format_time};
use crate::config::Config;
use crate::error::{CalmaError, Result};
use crate::models::{Appointment, CreateAppointmentRequest, UpdateAppointmentRequest};
use chrono::{DateTime, Utc};
use colored::Colorize;
use prettytable::{row, Table};

/// Book a new appointment
pub async fn book(
    config: Config,
    therapist: String,
    at: String,
    duration: u32,
    reason: Option<String>,
    location: Option<String>,
) -> Result<()> {
    let scheduled_at = parse_time(&at)?;
    let api = AppointmentApi::new(build_client(&config)?);
    let appointment = api
        .create(&CreateAppointmentRequest {
            therapist_id: therapist,
            scheduled_at,
            duration,
            reason,
            notes: None,
            meeting_link: None,
            location,
        })
        .await?;

    println!(
        "{}",
        format!(
            "Booked appointment {} for {} ({} min, {}).",
            appointment.id,
            format_time(&appointment.scheduled_at),
            appointment.duration,
            appointment.status
        )
        .green()
    );
    Ok(())
}

/// List the user's appointments
pub async fn list(config: Config) -> Result<()> {
    let api = AppointmentApi::new(build_client(&config)?);
    let appointments = api.list().await?;
    if appointments.is_empty() {
        println!("No appointments.");
        return Ok(());
    }

    let mut table = Table::new();
    table.add_row(row!["Id", "When", "Duration", "Status", "Therapist"]);
    for appointment in &appointments {
        table.add_row(row![
            appointment.id,
            format_time(&appointment.scheduled_at),
            format!("{} min", appointment.duration),
            appointment.status,
            therapist_label(appointment),
        ]);
    }
    table.printstd();
    Ok(())
}

/// Show one appointment in detail
pub async fn show(config: Config, id: String) -> Result<()> {
    let api = AppointmentApi::new(build_client(&config)?);
    let appointment = api.get(&id).await?;

    println!("Appointment {}", appointment.id.bold());
    println!("When: {} ({} min)", format_time(&appointment.scheduled_at), appointment.duration);
    println!("Status: {}", appointment.status);
    println!("Therapist: {}", therapist_label(&appointment));
    if let Some(reason) = &appointment.reason {
        println!("Reason: {}", reason);
    }
    if let Some(notes) = &appointment.notes {
        println!("Notes: {}", ellipsize(notes, 200));
    }
    if let Some(link) = &appointment.meeting_link {
        println!("Meeting link: {}", link);
    }
    if let Some(location) = &appointment.location {
        println!("Location: {}", location);
    }
    Ok(())
}

/// Reschedule or annotate an appointment
pub async fn update(
    config: Config,
    id: String,
    at: Option<String>,
    duration: Option<u32>,
    notes: Option<String>,
) -> Result<()> {
    let scheduled_at = at.as_deref().map(parse_time).transpose()?;
    if scheduled_at.is_none() && duration.is_none() && notes.is_none() {
        return Err(CalmaError::Validation("nothing to update".to_string()).into());
    }

    let api = AppointmentApi::new(build_client(&config)?);
    let appointment = api
        .update(
            &id,
            &UpdateAppointmentRequest {
                scheduled_at,
                duration,
                notes,
                ..Default::default()
            },
        )
        .await?;
    println!(
        "{}",
        format!(
            "Updated: {} ({} min, {}).",
            format_time(&appointment.scheduled_at),
            appointment.duration,
            appointment.status
        )
        .green()
    );
    Ok(())
}

/// Cancel an appointment
pub async fn cancel(config: Config, id: String) -> Result<()> {
    let api = AppointmentApi::new(build_client(&config)?);
    let appointment = api.cancel(&id).await?;
    println!("Appointment {} is now {}.", appointment.id, appointment.status);
    Ok(())
}

fn parse_time(input: &str) -> Result<DateTime<Utc>> {
    DateTime::parse_from_rfc3339(input)
        .map(|t| t.with_timezone(&Utc))
        .map_err(|e| {
            CalmaError::Validation(format!(
                "'{}' is not an RFC 3339 time (try 2026-09-01T14:00:00Z): {}",
                input, e
            ))
            .into()
        })
}

fn therapist_label(appointment: &Appointment) -> String {
    appointment
        .therapist
        .as_ref()
        .map(|t| t.name.clone())
        .unwrap_or_else(|| appointment.therapist_id.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_time_accepts_rfc3339() {
        let time = parse_time("2026-09-01T14:00:00Z").unwrap();
        assert_eq!(time.to_rfc3339(), "2026-09-01T14:00:00+00:00");
    }

    #[test]
    fn test_parse_time_accepts_offsets() {
        let time = parse_time("2026-09-01T14:00:00+03:00").unwrap();
        assert_eq!(time.to_rfc3339(), "2026-09-01T11:00:00+00:00");
    }

    #[test]
    fn test_parse_time_rejects_bare_date() {
        assert!(parse_time("2026-09-01").is_err());
    }
}
