//! Appointment endpoint wrapper
//!
//! Scheduling conflicts are resolved server-side; the client only carries
//! the requested slot and surfaces whatever the backend decides.

use crate::api::ApiClient;
use crate::error::Result;
use crate::models::{
    Appointment, AppointmentsResponse, CreateAppointmentRequest, UpdateAppointmentRequest,
};
use std::sync::Arc;

/// Wrapper for `/appointments` endpoints
#[derive(Debug, Clone)]
pub struct AppointmentApi {
    client: Arc<ApiClient>,
}

impl AppointmentApi {
    /// Create a new appointments wrapper sharing the given client
    pub fn new(client: Arc<ApiClient>) -> Self {
        Self { client }
    }

    /// Book an appointment: `POST /appointments`
    pub async fn create(&self, request: &CreateAppointmentRequest) -> Result<Appointment> {
        self.client
            .post("/appointments", request, "Failed to create appointment")
            .await
    }

    /// List the user's appointments: `GET /appointments/user`
    pub async fn list(&self) -> Result<Vec<Appointment>> {
        let response: AppointmentsResponse = self
            .client
            .get("/appointments/user", "Failed to fetch appointments")
            .await?;
        Ok(response.appointments)
    }

    /// Fetch one appointment: `GET /appointments/{id}`
    pub async fn get(&self, id: &str) -> Result<Appointment> {
        self.client
            .get(
                &format!("/appointments/{}", id),
                "Failed to fetch appointment",
            )
            .await
    }

    /// Reschedule or annotate: `PUT /appointments/{id}`
    pub async fn update(
        &self,
        id: &str,
        request: &UpdateAppointmentRequest,
    ) -> Result<Appointment> {
        self.client
            .put(
                &format!("/appointments/{}", id),
                request,
                "Failed to update appointment",
            )
            .await
    }

    /// Cancel: `DELETE /appointments/{id}`
    ///
    /// The backend marks the appointment cancelled and returns it.
    pub async fn cancel(&self, id: &str) -> Result<Appointment> {
        self.client
            .delete(
                &format!("/appointments/{}", id),
                "Failed to cancel appointment",
            )
            .await
    }
}
