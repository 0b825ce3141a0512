//! Request extractors whose failures come back through [`AppError`], so a bad
//! path or body gets the same `{"error": ...}` shape as every other error.

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, FromRequestParts, Request},
    http::header,
};
use clinic_core::errors::ClinicError;
use serde::de::DeserializeOwned;

use crate::middleware::error_handling::AppError;

/// Typed path parameters; unparseable segments become 400.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Path), rejection(AppError))]
pub struct Path<T>(pub T);

/// A JSON request body.
///
/// A request without a JSON content type, or with an empty body, decodes as
/// `{}` so that presence checks report the missing fields. Bodies that are
/// not valid JSON for `T` become 400.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for JsonBody<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(is_json_content_type);
        let bytes = Bytes::from_request(req, state).await?;

        let body: &[u8] = if is_json && !bytes.trim_ascii().is_empty() {
            &bytes
        } else {
            b"{}"
        };

        serde_json::from_slice(body).map(JsonBody).map_err(|err| {
            AppError(ClinicError::Validation(format!("Invalid request body: {err}")))
        })
    }
}

fn is_json_content_type(value: &str) -> bool {
    let essence = value.split(';').next().unwrap_or_default().trim().to_ascii_lowercase();
    essence == "application/json"
        || (essence.starts_with("application/") && essence.ends_with("+json"))
}
