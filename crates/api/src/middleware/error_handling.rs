//! # Error Handling Middleware
//!
//! Maps domain errors to HTTP status codes and JSON bodies of the form
//! `{"error": "<message>"}`.
//!
//! Server-side failures (database faults, internal errors, panics) are logged
//! here and answered with the fixed body `{"error": "Internal Server Error"}`;
//! their details never reach the client.

use std::any::Any;

use axum::{
    Json,
    extract::rejection::{BytesRejection, PathRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use clinic_core::errors::ClinicError;
use serde_json::json;
use tracing::error;

/// Body message for every 500 response.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal Server Error";

/// Application error wrapper that provides HTTP status code mapping
///
/// # Example
///
/// ```
/// use axum::Json;
/// use clinic_api::middleware::error_handling::AppError;
/// use clinic_core::errors::ClinicError;
///
/// async fn handler(rows: Vec<String>) -> Result<Json<Vec<String>>, AppError> {
///     if rows.is_empty() {
///         return Err(AppError(ClinicError::NotFound("Nothing here.".to_string())));
///     }
///     Ok(Json(rows))
/// }
/// # fn main() {}
/// ```
#[derive(Debug)]
pub struct AppError(pub ClinicError);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.0.is_server_error() {
            error!(error = ?self.0, "request failed");
            return internal_error_response();
        }

        let status = match &self.0 {
            ClinicError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::BAD_REQUEST,
        };

        let body = Json(json!({ "error": self.0.to_string() }));
        (status, body).into_response()
    }
}

impl From<ClinicError> for AppError {
    fn from(err: ClinicError) -> Self {
        AppError(err)
    }
}

/// Gateway failures surface as `eyre::Report`; treat them as database errors.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(ClinicError::Database(err))
    }
}

/// Unparseable path segments, such as a non-numeric id.
impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError(ClinicError::Validation(rejection.body_text()))
    }
}

impl From<BytesRejection> for AppError {
    fn from(rejection: BytesRejection) -> Self {
        AppError(ClinicError::Validation(rejection.body_text()))
    }
}

/// Maps a ClinicError to an HTTP response
pub fn map_error(err: ClinicError) -> Response {
    AppError(err).into_response()
}

/// The generic 500 response shared by error mapping and panic recovery.
pub fn internal_error_response() -> Response {
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": INTERNAL_ERROR_MESSAGE })),
    )
        .into_response()
}

/// Terminal handler for panics raised while serving a request.
///
/// Installed through `tower_http::catch_panic::CatchPanicLayer::custom`.
pub fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(message) = payload.downcast_ref::<String>() {
        message.as_str()
    } else if let Some(message) = payload.downcast_ref::<&str>() {
        message
    } else {
        "unknown panic payload"
    };

    error!(panic = %detail, "request handler panicked");
    internal_error_response()
}

/// Router fallback for paths no route matches.
pub async fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Json(json!({ "error": "Not Found" }))).into_response()
}
