//! Landing page handler

use axum::{http::HeaderMap, response::Response};

use crate::{flash, pages};

/// GET /
pub async fn home_page(headers: HeaderMap) -> Response {
    pages::page("Home", flash::take(&headers), &pages::home::home())
}
