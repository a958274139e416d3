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
use crate::features::auth::model::AuthenticatedUser;
use crate::features::notes::dto::{CreateNoteDto, NoteResponseDto, UpdateNoteDto};
use crate::features::notes::service::NoteService;
use crate::shared::types::{ApiResponse, Meta};

/// List the authenticated user's daily notes, newest day first
#[utoipa::path(
    get,
    path = "/api/notes",
    tag = "notes",
    responses(
        (status = 200, description = "Notes for the authenticated user", body = ApiResponse<Vec<NoteResponseDto>>),
        (status = 401, description = "Authentication required")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_notes(
    user: AuthenticatedUser,
    State(service): State<Arc<NoteService>>,
) -> Result<Json<ApiResponse<Vec<NoteResponseDto>>>, AppError> {
    let notes = service.list(&user.sub).await?;
    let total = notes.len() as i64;

    Ok(Json(ApiResponse::success(
        Some(notes),
        None,
        Some(Meta { total }),
    )))
}

/// Create a daily note
#[utoipa::path(
    post,
    path = "/api/notes",
    tag = "notes",
    request_body = CreateNoteDto,
    responses(
        (status = 201, description = "Note created", body = ApiResponse<NoteResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Authentication required")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn create_note(
    user: AuthenticatedUser,
    State(service): State<Arc<NoteService>>,
    AppJson(dto): AppJson<CreateNoteDto>,
) -> Result<(StatusCode, Json<ApiResponse<NoteResponseDto>>), AppError> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let note = service.create(dto, &user.sub).await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(note), None, None)),
    ))
}

/// Update a daily note
#[utoipa::path(
    put,
    path = "/api/notes/{id}",
    tag = "notes",
    params(
        ("id" = Uuid, Path, description = "Note id")
    ),
    request_body = UpdateNoteDto,
    responses(
        (status = 200, description = "Note updated", body = ApiResponse<NoteResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Authentication required"),
        (status = 404, description = "Note not found")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn update_note(
    user: AuthenticatedUser,
    State(service): State<Arc<NoteService>>,
    Path(id): Path<Uuid>,
    AppJson(dto): AppJson<UpdateNoteDto>,
) -> Result<Json<ApiResponse<NoteResponseDto>>, AppError> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let note = service.update(id, dto, &user.sub).await?;

    Ok(Json(ApiResponse::success(Some(note), None, None)))
}

/// Delete a daily note
#[utoipa::path(
    delete,
    path = "/api/notes/{id}",
    tag = "notes",
    params(
        ("id" = Uuid, Path, description = "Note id")
    ),
    responses(
        (status = 200, description = "Note deleted"),
        (status = 401, description = "Authentication required"),
        (status = 404, description = "Note not found")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn delete_note(
    user: AuthenticatedUser,
    State(service): State<Arc<NoteService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<()>>, AppError> {
    service.delete(id, &user.sub).await?;

    Ok(Json(ApiResponse::success(
        None,
        Some("Note deleted successfully".to_string()),
        None,
    )))
}
