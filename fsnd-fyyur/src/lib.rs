//! fsnd-fyyur library - venue, artist and show listings rendered as HTML
//!
//! Venues are grouped by city and state, detail pages split shows into past
//! and upcoming, and every mutation reports back through a flash message.

use axum::Router;
use sqlx::SqlitePool;
use tower_http::trace::TraceLayer;

pub mod api;
pub mod cli;
pub mod datetime;
pub mod db;
pub mod error;
pub mod flash;
pub mod forms;
pub mod genres;
pub mod pages;

pub use crate::error::{PageError, PageResult};

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

/// Build application router
pub fn build_router(state: AppState) -> Router {
    use axum::routing::{get, post};

    Router::new()
        .route("/", get(api::home::home_page))
        // Venues
        .route("/venues", get(api::venues::list_venues))
        .route(
            "/venues/search",
            get(api::venues::search_venues_query).post(api::venues::search_venues),
        )
        .route(
            "/venues/create",
            get(api::venues::new_venue_form).post(api::venues::create_venue),
        )
        .route(
            "/venues/:venue_id",
            get(api::venues::show_venue).delete(api::venues::delete_venue),
        )
        .route(
            "/venues/:venue_id/edit",
            get(api::venues::edit_venue_form).post(api::venues::update_venue),
        )
        .route("/venues/:venue_id/delete", post(api::venues::delete_venue))
        // Artists
        .route("/artists", get(api::artists::list_artists))
        .route(
            "/artists/search",
            get(api::artists::search_artists_query).post(api::artists::search_artists),
        )
        .route(
            "/artists/create",
            get(api::artists::new_artist_form).post(api::artists::create_artist),
        )
        .route(
            "/artists/:artist_id",
            get(api::artists::show_artist).delete(api::artists::delete_artist),
        )
        .route(
            "/artists/:artist_id/edit",
            get(api::artists::edit_artist_form).post(api::artists::update_artist),
        )
        .route("/artists/:artist_id/delete", post(api::artists::delete_artist))
        // Shows
        .route("/shows", get(api::shows::list_shows))
        .route(
            "/shows/create",
            get(api::shows::new_show_form).post(api::shows::create_show),
        )
        .merge(api::health_routes())
        .fallback(api::not_found)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
