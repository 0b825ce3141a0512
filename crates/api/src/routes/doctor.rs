use axum::{Router, routing::get};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/doctor/:doctorid/patients",
            get(handlers::doctor::list_doctor_patients),
        )
        // Plural alias, matching the appointments route
        .route(
            "/doctors/:doctorid/patients",
            get(handlers::doctor::list_doctor_patients),
        )
        .route(
            "/doctors/:doctorid/appointments",
            get(handlers::doctor::list_doctor_appointments),
        )
}
