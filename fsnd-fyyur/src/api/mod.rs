//! HTTP handlers for fsnd-fyyur
//!
//! Reads render a page; mutations redirect with a flash message
//! (post/redirect/get).

pub mod artists;
pub mod health;
pub mod home;
pub mod records;
pub mod shows;
pub mod venues;

pub use health::health_routes;

use axum::extract::rejection::PathRejection;
use axum::extract::Path;
use axum::http::StatusCode;
use axum::response::Response;
use serde::Deserialize;

use crate::error::{error_page, PageError, PageResult};

/// `search_term` field of the search forms (query string or form body)
#[derive(Debug, Default, Deserialize)]
pub struct SearchForm {
    #[serde(default)]
    pub search_term: String,
}

/// Numeric record id from the path; anything else is a 404
pub(crate) fn record_id(path: Result<Path<i64>, PathRejection>) -> PageResult<i64> {
    path.map(|Path(id)| id)
        .map_err(|e| PageError::NotFound(e.body_text()))
}

/// Fallback for unknown routes
pub async fn not_found() -> Response {
    error_page(StatusCode::NOT_FOUND)
}
