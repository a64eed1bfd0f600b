//! Router-level error responses
//!
//! axum answers unknown routes, wrong methods and extractor rejections with
//! plain-text bodies. These are rewritten into the JSON error envelope so
//! clients only ever see one error shape.

use axum::{
    http::{header, StatusCode},
    response::Response,
};

use crate::error::envelope;

/// Fallback for unknown routes
pub async fn not_found() -> Response {
    envelope(StatusCode::NOT_FOUND)
}

/// Replace non-JSON client/server error bodies with the JSON envelope
pub async fn envelope_plain_errors(response: Response) -> Response {
    let status = response.status();
    if !(status.is_client_error() || status.is_server_error()) {
        return response;
    }

    let is_json = response
        .headers()
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.starts_with("application/json"))
        .unwrap_or(false);

    if is_json {
        response
    } else {
        envelope(status)
    }
}
