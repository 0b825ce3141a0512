use axum::{
    Router,
    routing::{get, put},
};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/timeslots",
            get(handlers::timeslot::list_timeslots).post(handlers::timeslot::create_timeslot),
        )
        .route(
            "/api/timeslots/:timeslotid",
            put(handlers::timeslot::update_timeslot).delete(handlers::timeslot::delete_timeslot),
        )
}
