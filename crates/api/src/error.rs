//! Error responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use tally_core::spending::SpendingError;
use tally_shared::AppError;
use tracing::{error, warn};

/// Maps spending errors to HTTP responses.
///
/// Validation failures become `400` with a specific code; storage failures
/// are logged and reduced to a generic `500`.
pub fn spending_error_response(e: SpendingError) -> Response {
    let app_error = AppError::from(e);
    let code = app_error.error_code();

    if app_error.is_client_error() {
        warn!(code, error = %app_error, "Rejected spending request");
    } else {
        error!(error = %app_error, "Spending request failed");
    }

    let status =
        StatusCode::from_u16(app_error.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    (
        status,
        Json(json!({
            "error": code,
            "message": app_error.public_message()
        })),
    )
        .into_response()
}
