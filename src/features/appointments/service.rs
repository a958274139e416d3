use sqlx::PgPool;
use uuid::Uuid;

use crate::core::error::{AppError, Result};
use crate::features::appointments::dto::{AppointmentResponseDto, UpsertAppointmentDto};
use crate::features::appointments::model::Appointment;

const APPOINTMENT_COLUMNS: &str = "id, user_id, title, description, appointment_date, \
     location, doctor_name, created_at, updated_at";

/// Service for medical appointments
pub struct AppointmentService {
    pool: PgPool,
}

impl AppointmentService {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// All appointments for one user in chronological order; the client
    /// does the calendar day-bucketing
    pub async fn list(&self, user_id: &str) -> Result<Vec<AppointmentResponseDto>> {
        let sql = format!(
            "SELECT {} FROM medical_appointments WHERE user_id = $1 ORDER BY appointment_date ASC",
            APPOINTMENT_COLUMNS
        );

        let appointments = sqlx::query_as::<_, Appointment>(&sql)
            .bind(user_id)
            .fetch_all(&self.pool)
            .await?;

        Ok(appointments
            .into_iter()
            .map(AppointmentResponseDto::from)
            .collect())
    }

    pub async fn create(
        &self,
        dto: UpsertAppointmentDto,
        user_id: &str,
    ) -> Result<AppointmentResponseDto> {
        let sql = format!(
            "INSERT INTO medical_appointments \
                 (user_id, title, description, appointment_date, location, doctor_name) \
             VALUES ($1, $2, $3, $4, $5, $6) \
             RETURNING {}",
            APPOINTMENT_COLUMNS
        );

        let appointment = sqlx::query_as::<_, Appointment>(&sql)
            .bind(user_id)
            .bind(&dto.title)
            .bind(&dto.description)
            .bind(dto.appointment_date)
            .bind(&dto.location)
            .bind(&dto.doctor_name)
            .fetch_one(&self.pool)
            .await?;

        tracing::info!(
            "Appointment created: id={}, date={}",
            appointment.id,
            appointment.appointment_date
        );

        Ok(appointment.into())
    }

    pub async fn update(
        &self,
        id: Uuid,
        dto: UpsertAppointmentDto,
        user_id: &str,
    ) -> Result<AppointmentResponseDto> {
        let sql = format!(
            "UPDATE medical_appointments \
             SET title = $1, description = $2, appointment_date = $3, location = $4, \
                 doctor_name = $5, updated_at = NOW() \
             WHERE id = $6 AND user_id = $7 \
             RETURNING {}",
            APPOINTMENT_COLUMNS
        );

        let appointment = sqlx::query_as::<_, Appointment>(&sql)
            .bind(&dto.title)
            .bind(&dto.description)
            .bind(dto.appointment_date)
            .bind(&dto.location)
            .bind(&dto.doctor_name)
            .bind(id)
            .bind(user_id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or_else(|| AppError::NotFound("Appointment not found".to_string()))?;

        Ok(appointment.into())
    }

    pub async fn delete(&self, id: Uuid, user_id: &str) -> Result<()> {
        let result = sqlx::query("DELETE FROM medical_appointments WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(&self.pool)
            .await?;

        if result.rows_affected() == 0 {
            return Err(AppError::NotFound("Appointment not found".to_string()));
        }

        Ok(())
    }
}
