use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get},
    Router,
};
use std::sync::Arc;

use crate::features::documents::handlers::{
    delete_document, get_view_link, list_documents, upload_document,
};
use crate::features::documents::services::DocumentService;
use crate::shared::constants::MAX_DOCUMENT_SIZE;

/// Create routes for the documents feature
pub fn routes(document_service: Arc<DocumentService>) -> Router {
    Router::new()
        .route(
            "/api/documents",
            // Allow body size up to MAX_DOCUMENT_SIZE + buffer for multipart overhead
            get(list_documents)
                .post(upload_document)
                .layer(DefaultBodyLimit::max(MAX_DOCUMENT_SIZE + 1024 * 1024)),
        )
        .route("/api/documents/{id}/link", get(get_view_link))
        .route("/api/documents/{id}", delete(delete_document))
        .with_state(document_service)
}
