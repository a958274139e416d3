use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use std::sync::Arc;
use tracing::debug;
use uuid::Uuid;

use crate::core::error::AppError;
use crate::features::auth::model::AuthenticatedUser;
use crate::features::documents::dtos::{
    is_mime_type_allowed, DeleteDocumentResponseDto, DocumentCategoryDto, DocumentResponseDto,
    UploadDocumentDto, ViewLinkResponseDto, ALLOWED_MIME_TYPES,
};
use crate::features::documents::services::{DocumentService, DocumentUpload};
use crate::shared::constants::MAX_DOCUMENT_SIZE;
use crate::shared::types::{ApiResponse, Meta};

/// Upload a medical document
///
/// Accepts multipart/form-data with:
/// - `file`: The file to upload (required, PDF or image)
/// - `title`: Display title (required)
/// - `description`: Optional free text
/// - `document_date`: Optional date of the medical event (YYYY-MM-DD)
/// - `category`: ultrasound, labresult, prescription or other (default)
#[utoipa::path(
    post,
    path = "/api/documents",
    tag = "documents",
    request_body(
        content = UploadDocumentDto,
        content_type = "multipart/form-data",
        description = "Document upload form",
    ),
    responses(
        (status = 201, description = "Document uploaded successfully", body = ApiResponse<DocumentResponseDto>),
        (status = 400, description = "Missing title/file or invalid field"),
        (status = 401, description = "Authentication required"),
        (status = 409, description = "Storage key collision"),
        (status = 413, description = "File too large"),
        (status = 502, description = "Blob store unavailable")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn upload_document(
    user: AuthenticatedUser,
    State(service): State<Arc<DocumentService>>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<ApiResponse<DocumentResponseDto>>), AppError> {
    let mut file_data: Option<Vec<u8>> = None;
    let mut file_name: Option<String> = None;
    let mut content_type: Option<String> = None;
    let mut title = String::new();
    let mut description: Option<String> = None;
    let mut document_date: Option<NaiveDate> = None;
    let mut category = DocumentCategoryDto::default();

    // Process multipart fields
    while let Some(field) = multipart.next_field().await.map_err(|e| {
        debug!("Failed to read multipart field: {}", e);
        AppError::BadRequest(format!("Failed to read multipart data: {}", e))
    })? {
        let field_name = field.name().unwrap_or("").to_string();

        match field_name.as_str() {
            "file" => {
                let ct = field
                    .content_type()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "application/octet-stream".to_string());

                let fname = field
                    .file_name()
                    .map(|s| s.to_string())
                    .unwrap_or_else(|| "unnamed".to_string());

                let data = field.bytes().await.map_err(|e| {
                    debug!("Failed to read file bytes: {}", e);
                    AppError::BadRequest(format!("Failed to read file data: {}", e))
                })?;

                file_data = Some(data.to_vec());
                file_name = Some(fname);
                content_type = Some(ct);
            }
            "title" => {
                title = field.text().await.map_err(|e| {
                    AppError::BadRequest(format!("Failed to read title field: {}", e))
                })?;
            }
            "description" => {
                let text = field.text().await.map_err(|e| {
                    AppError::BadRequest(format!("Failed to read description field: {}", e))
                })?;
                if !text.is_empty() {
                    description = Some(text);
                }
            }
            "document_date" => {
                let text = field.text().await.map_err(|e| {
                    AppError::BadRequest(format!("Failed to read document_date field: {}", e))
                })?;
                if !text.is_empty() {
                    let parsed = NaiveDate::parse_from_str(&text, "%Y-%m-%d").map_err(|_| {
                        AppError::BadRequest(format!(
                            "Invalid document_date '{}', expected YYYY-MM-DD",
                            text
                        ))
                    })?;
                    document_date = Some(parsed);
                }
            }
            "category" => {
                let text = field.text().await.map_err(|e| {
                    AppError::BadRequest(format!("Failed to read category field: {}", e))
                })?;
                category = DocumentCategoryDto::parse(&text);
            }
            _ => {
                // Ignore unknown fields
                debug!("Ignoring unknown field: {}", field_name);
            }
        }
    }

    // Missing title/file are validation failures, rejected before any I/O
    let file_data =
        file_data.ok_or_else(|| AppError::Validation("file is required".to_string()))?;
    let file_name =
        file_name.ok_or_else(|| AppError::Validation("file is required".to_string()))?;
    let content_type =
        content_type.ok_or_else(|| AppError::Validation("file is required".to_string()))?;

    // Validate file size
    if file_data.len() > MAX_DOCUMENT_SIZE {
        return Err(AppError::BadRequest(format!(
            "File too large. Maximum size is {} bytes ({} MB)",
            MAX_DOCUMENT_SIZE,
            MAX_DOCUMENT_SIZE / 1024 / 1024
        )));
    }

    // Validate MIME type
    if !is_mime_type_allowed(&content_type) {
        return Err(AppError::BadRequest(format!(
            "File type '{}' is not allowed. Allowed types: {}",
            content_type,
            ALLOWED_MIME_TYPES.join(", ")
        )));
    }

    let response = service
        .upload(
            DocumentUpload {
                data: file_data,
                original_filename: file_name,
                content_type,
                title,
                description,
                document_date,
                category,
            },
            &user.sub,
        )
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::success(Some(response), None, None)),
    ))
}

/// List the authenticated user's documents, newest first
///
/// Each record carries a fresh signed view link valid for ten minutes.
/// Records whose link could not be issued are still listed, without a link.
#[utoipa::path(
    get,
    path = "/api/documents",
    tag = "documents",
    responses(
        (status = 200, description = "Documents for the authenticated user", body = ApiResponse<Vec<DocumentResponseDto>>),
        (status = 401, description = "Authentication required")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn list_documents(
    user: AuthenticatedUser,
    State(service): State<Arc<DocumentService>>,
) -> Result<Json<ApiResponse<Vec<DocumentResponseDto>>>, AppError> {
    let documents = service.list(&user.sub).await?;
    let total = documents.len() as i64;

    Ok(Json(ApiResponse::success(
        Some(documents),
        None,
        Some(Meta { total }),
    )))
}

/// Issue a fresh view link for one document
///
/// Meant to be called immediately before rendering, since a link from an
/// earlier listing may already have expired.
#[utoipa::path(
    get,
    path = "/api/documents/{id}/link",
    tag = "documents",
    params(
        ("id" = Uuid, Path, description = "Document id")
    ),
    responses(
        (status = 200, description = "Fresh signed view link", body = ApiResponse<ViewLinkResponseDto>),
        (status = 401, description = "Authentication required"),
        (status = 403, description = "Document belongs to another user"),
        (status = 404, description = "Document or underlying object not found"),
        (status = 502, description = "Link could not be issued")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn get_view_link(
    user: AuthenticatedUser,
    State(service): State<Arc<DocumentService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<ViewLinkResponseDto>>, AppError> {
    let link = service.view_link(id, &user.sub).await?;

    Ok(Json(ApiResponse::success(Some(link), None, None)))
}

/// Delete a document
///
/// Removes the stored object first, then the metadata row. Only the owner
/// can delete a document.
#[utoipa::path(
    delete,
    path = "/api/documents/{id}",
    tag = "documents",
    params(
        ("id" = Uuid, Path, description = "Document id")
    ),
    responses(
        (status = 200, description = "Document deleted successfully", body = ApiResponse<DeleteDocumentResponseDto>),
        (status = 401, description = "Authentication required"),
        (status = 403, description = "Document belongs to another user"),
        (status = 404, description = "Document not found"),
        (status = 502, description = "Blob store unavailable; document kept")
    ),
    security(
        ("bearer_auth" = [])
    )
)]
pub async fn delete_document(
    user: AuthenticatedUser,
    State(service): State<Arc<DocumentService>>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<DeleteDocumentResponseDto>>, AppError> {
    service.delete(id, &user.sub).await?;

    Ok(Json(ApiResponse::success(
        Some(DeleteDocumentResponseDto { deleted: true }),
        Some("Document deleted successfully".to_string()),
        None,
    )))
}
