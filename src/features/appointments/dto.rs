use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::features::appointments::model::Appointment;

/// Request DTO for creating or replacing an appointment
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct UpsertAppointmentDto {
    /// Appointment title
    #[validate(length(min = 1, message = "title is required"))]
    #[schema(example = "Monthly check-up")]
    pub title: String,
    /// Optional details
    pub description: Option<String>,
    /// Date and time of the appointment
    pub appointment_date: DateTime<Utc>,
    /// Clinic or hospital
    pub location: Option<String>,
    /// Attending doctor
    pub doctor_name: Option<String>,
}

/// Response DTO for appointments
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct AppointmentResponseDto {
    pub id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub appointment_date: DateTime<Utc>,
    pub location: Option<String>,
    pub doctor_name: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Appointment> for AppointmentResponseDto {
    fn from(appointment: Appointment) -> Self {
        Self {
            id: appointment.id,
            title: appointment.title,
            description: appointment.description,
            appointment_date: appointment.appointment_date,
            location: appointment.location,
            doctor_name: appointment.doctor_name,
            created_at: appointment.created_at,
            updated_at: appointment.updated_at,
        }
    }
}
