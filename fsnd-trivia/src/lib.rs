//! fsnd-trivia library - trivia question JSON API
//!
//! Categories, paginated question listing, search, creation, deletion and
//! a random quiz. Every error leaves as `{success, error, message}`.

use axum::http::{header, Method};
use axum::Router;
use sqlx::SqlitePool;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod api;
pub mod cli;
pub mod db;
pub mod error;

pub use crate::error::{ApiError, ApiResult};

/// Application state shared across HTTP handlers
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool
    pub db: SqlitePool,
}

impl AppState {
    /// Create new application state
    pub fn new(db: SqlitePool) -> Self {
        Self { db }
    }
}

/// CORS policy: any origin, the headers and methods the front end uses
fn cors_layer() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(Any)
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
        .allow_methods([
            Method::GET,
            Method::PATCH,
            Method::POST,
            Method::DELETE,
            Method::OPTIONS,
        ])
}

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::middleware;
    use axum::routing::{delete, get, post};

    Router::new()
        .route("/categories", get(api::list_categories))
        .route("/categories/:category_id/questions", get(api::questions_by_category))
        .route("/questions", get(api::list_questions).post(api::create_question))
        .route("/questions/search", post(api::search_questions))
        .route("/questions/:question_id", delete(api::delete_question))
        .route("/quizzes", post(api::play_quiz))
        .merge(api::health_routes())
        .fallback(api::not_found)
        .layer(middleware::map_response(api::envelope_plain_errors))
        .layer(cors_layer())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
