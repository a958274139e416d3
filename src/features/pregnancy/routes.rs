use axum::{
    routing::{get, put},
    Router,
};
use std::sync::Arc;

use crate::features::pregnancy::handler::{get_pregnancy_info, upsert_pregnancy_info};
use crate::features::pregnancy::service::PregnancyService;

/// Create routes for the pregnancy feature
pub fn routes(pregnancy_service: Arc<PregnancyService>) -> Router {
    Router::new()
        .route("/api/pregnancy", get(get_pregnancy_info))
        .route("/api/pregnancy", put(upsert_pregnancy_info))
        .with_state(pregnancy_service)
}
