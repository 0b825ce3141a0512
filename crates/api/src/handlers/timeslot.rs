//! # Timeslot Handlers
//!
//! CRUD over the `DoctorTimeSlots` table. Each handler issues exactly one
//! statement through the repository. Writes are validated before the
//! statement is issued.

use axum::{Json, extract::State, http::StatusCode};
use clinic_core::models::timeslot::{CreateTimeslotRequest, Timeslot, UpdateTimeslotRequest};
use std::sync::Arc;
use tracing::{debug, info};

use crate::{
    ApiState,
    extract::{JsonBody, Path},
    middleware::error_handling::AppError,
};

/// `GET /api/timeslots`
#[axum::debug_handler]
pub async fn list_timeslots(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<Timeslot>>, AppError> {
    let timeslots = state.repository.list_timeslots().await?;
    debug!(count = timeslots.len(), "listed timeslots");
    Ok(Json(timeslots))
}

/// `POST /api/timeslots`
///
/// Responds 400 before touching the database when `date`, `starttime` or
/// `endtime` is missing; `doctorid` falls back to doctor 1.
#[axum::debug_handler]
pub async fn create_timeslot(
    State(state): State<Arc<ApiState>>,
    JsonBody(payload): JsonBody<CreateTimeslotRequest>,
) -> Result<(StatusCode, Json<Timeslot>), AppError> {
    let new_timeslot = payload.validate()?;

    let timeslot = state.repository.create_timeslot(new_timeslot).await?;
    info!(
        timeslotid = timeslot.timeslotid,
        doctorid = timeslot.doctorid,
        "created timeslot"
    );

    Ok((StatusCode::CREATED, Json(timeslot)))
}

/// `PUT /api/timeslots/:timeslotid`
///
/// Replaces every mutable column. The body must carry `date`, `starttime` and
/// `endtime` like a create does, otherwise 400. An id that matches no row
/// yields 200 with a `null` body.
#[axum::debug_handler]
pub async fn update_timeslot(
    State(state): State<Arc<ApiState>>,
    Path(timeslot_id): Path<i32>,
    JsonBody(payload): JsonBody<UpdateTimeslotRequest>,
) -> Result<Json<Option<Timeslot>>, AppError> {
    let update = payload.validate()?;

    let timeslot = state
        .repository
        .update_timeslot(timeslot_id, update)
        .await?;

    if timeslot.is_none() {
        debug!(timeslot_id, "update matched no timeslot");
    } else {
        info!(timeslot_id, "updated timeslot");
    }

    Ok(Json(timeslot))
}

/// `DELETE /api/timeslots/:timeslotid`
#[axum::debug_handler]
pub async fn delete_timeslot(
    State(state): State<Arc<ApiState>>,
    Path(timeslot_id): Path<i32>,
) -> Result<StatusCode, AppError> {
    let removed = state.repository.delete_timeslot(timeslot_id).await?;
    info!(timeslot_id, removed, "deleted timeslot");
    Ok(StatusCode::NO_CONTENT)
}
