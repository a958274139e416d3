use axum::{
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;

use crate::features::notes::handler::{create_note, delete_note, list_notes, update_note};
use crate::features::notes::service::NoteService;

/// Create routes for the notes feature
pub fn routes(note_service: Arc<NoteService>) -> Router {
    Router::new()
        .route("/api/notes", get(list_notes))
        .route("/api/notes", post(create_note))
        .route("/api/notes/{id}", put(update_note))
        .route("/api/notes/{id}", delete(delete_note))
        .with_state(note_service)
}
