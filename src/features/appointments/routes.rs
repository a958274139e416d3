use axum::{
    routing::{delete, get, post, put},
    Router,
};
use std::sync::Arc;

use crate::features::appointments::handler::{
    create_appointment, delete_appointment, list_appointments, update_appointment,
};
use crate::features::appointments::service::AppointmentService;

/// Create routes for the appointments feature
pub fn routes(appointment_service: Arc<AppointmentService>) -> Router {
    Router::new()
        .route("/api/appointments", get(list_appointments))
        .route("/api/appointments", post(create_appointment))
        .route("/api/appointments/{id}", put(update_appointment))
        .route("/api/appointments/{id}", delete(delete_appointment))
        .with_state(appointment_service)
}
