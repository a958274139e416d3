use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use crate::core::error::AppError;
use crate::core::extractor::AppJson;
use crate::features::appointments::dto::{AppointmentResponseDto, UpsertAppointmentDto};
use crate::features::appointments::service::AppointmentService;
use crate::features::auth::model::AuthenticatedUser;
use crate::shared::types::{ApiResponse, Meta};

/// List the authenticated user's appointments in chronological order
#[utoipa::path(
    get,
    path = "/api/appointments",
    tag = "appointments",
    responses(
        (status = 200, description = "Appointments for the authenticated user", body = ApiResponse<Vec<AppointmentResponseDto>>),
        (status = 401, description = "Authentication required")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_appointments(
    user: AuthenticatedUser,
    State(service): State<Arc<AppointmentService>>,
) -> Result<Json<ApiResponse<Vec<AppointmentResponseDto>>>, AppError> {
    let appointments = service.list(&user.sub).await?;
    let total = appointments.len() as i64;

    Ok(Json(ApiResponse::success(
        Some(appointments),
        None,
        Some(Meta { total }),
    )))
}

/// Create an appointment
#[utoipa::path(
    post,
    path = "/api/appointments",
    tag = "appointments",
    request_body = UpsertAppointmentDto,
    responses(
        (status = 201, description = "Appointment created", body = ApiResponse<AppointmentResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Authentication required")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn create_appointment(
    user: AuthenticatedUser,
    State(service): State<Arc<AppointmentService>>,
    AppJson(dto): AppJson<UpsertAppointmentDto>,
) -> Result<(StatusCode, Json<ApiResponse<AppointmentResponseDto>>), AppError> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let appointment = service.create(dto, &user.sub).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(appointment), None, None)),
    ))
}

/// Replace an appointment
#[utoipa::path(
    put,
    path = "/api/appointments/{id}",
    tag = "appointments",
    params(
        ("id" = Uuid, Path, description = "Appointment id")
    ),
    request_body = UpsertAppointmentDto,
    responses(
        (status = 200, description = "Appointment updated", body = ApiResponse<AppointmentResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Authentication required"),
        (status = 404, description = "Appointment not found")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn update_appointment(
    user: AuthenticatedUser,
    State(service): State<Arc<AppointmentService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpsertAppointmentDto>,
) -> Result<Json<ApiResponse<AppointmentResponseDto>>, AppError> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let appointment = service.update(id, dto, &user.sub).await?;

    Ok(Json(ApiResponse::success(Some(appointment), None, None)))
}

/// Delete an appointment
#[utoipa::path(
    delete,
    path = "/api/appointments/{id}",
    tag = "appointments",
    params(
        ("id" = Uuid, Path, description = "Appointment id")
    ),
    responses(
        (status = 200, description = "Appointment deleted"),
        (status = 401, description = "Authentication required"),
        (status = 404, description = "Appointment not found")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn delete_appointment(
    user: AuthenticatedUser,
    State(service): State<Arc<AppointmentService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    service.delete(id, &user.sub).await?;

    Ok(Json(ApiResponse::success(
        None,
        Some("Appointment deleted successfully".to_string()),
        None,
    )))
}
