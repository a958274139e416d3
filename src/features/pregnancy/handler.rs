use axum::{extract::State, Json};
use std::sync::Arc;
use validator::Validate;

use crate::core::error::AppError;
use crate::core::extractor::AppJson;
use crate::features::auth::model::AuthenticatedUser;
use crate::features::pregnancy::dto::{PregnancyInfoResponseDto, UpsertPregnancyInfoDto};
use crate::features::pregnancy::service::PregnancyService;
use crate::shared::types::ApiResponse;

/// Get the authenticated user's pregnancy info
#[utoipa::path(
    get,
    path = "/api/pregnancy",
    tag = "pregnancy",
    responses(
        (status = 200, description = "Pregnancy info", body = ApiResponse<PregnancyInfoResponseDto>),
        (status = 401, description = "Authentication required"),
        (status = 404, description = "Pregnancy info not set up yet")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_pregnancy_info(
    user: AuthenticatedUser,
    State(service): State<Arc<PregnancyService>>,
) -> Result<Json<ApiResponse<PregnancyInfoResponseDto>>, AppError> {
    let info = service.get(&user.sub).await?;

    Ok(Json(ApiResponse::success(Some(info), None, None)))
}

/// Set up or edit the authenticated user's pregnancy info
#[utoipa::path(
    put,
    path = "/api/pregnancy",
    tag = "pregnancy",
    request_body = UpsertPregnancyInfoDto,
    responses(
        (status = 200, description = "Pregnancy info saved", body = ApiResponse<PregnancyInfoResponseDto>),
        (status = 400, description = "Validation error"),
        (status = 401, description = "Authentication required")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn upsert_pregnancy_info(
    user: AuthenticatedUser,
    State(service): State<Arc<PregnancyService>>,
    AppJson(dto): AppJson<UpsertPregnancyInfoDto>,
) -> Result<Json<ApiResponse<PregnancyInfoResponseDto>>, AppError> {
    dto.validate()
        .map_err(|e| AppError::Validation(e.to_string()))?;

    let info = service.upsert(dto, &user.sub).await?;

    Ok(Json(ApiResponse::success(
        Some(info),
        Some("Pregnancy info saved".to_string()),
        None,
    )))
}
