//! Venue handlers

use async_trait::async_trait;
use axum::{
    extract::{rejection::PathRejection, Path, Query, State},
    http::HeaderMap,
    response::Response,
    Form,
};
use sqlx::{SqliteConnection, SqlitePool};

use super::records::{self, RecordKind};
use super::{record_id, SearchForm};
use crate::datetime;
use crate::db::{shows, venues, VenueInput};
use crate::error::{PageError, PageResult};
use crate::flash;
use crate::forms::{self, FormError, FormFields};
use crate::pages;
use crate::AppState;

/// GET /venues
pub async fn list_venues(State(state): State<AppState>, headers: HeaderMap) -> PageResult<Response> {
    let listings = venues::list_venues(&state.db, datetime::now()).await?;
    let areas = venues::group_by_area(listings);

    Ok(pages::page("Venues", flash::take(&headers), &pages::venues::list(&areas)))
}

async fn render_search(state: &AppState, headers: &HeaderMap, term: &str) -> PageResult<Response> {
    let results = venues::search_venues(&state.db, term, datetime::now()).await?;

    Ok(pages::page(
        "Venue search",
        flash::take(headers),
        &pages::search_results("venues", term, &results),
    ))
}

/// GET /venues/search?search_term=...
pub async fn search_venues_query(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<SearchForm>,
) -> PageResult<Response> {
    render_search(&state, &headers, &query.search_term).await
}

/// POST /venues/search
pub async fn search_venues(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<SearchForm>,
) -> PageResult<Response> {
    render_search(&state, &headers, &form.search_term).await
}

/// GET /venues/:venue_id
pub async fn show_venue(
    State(state): State<AppState>,
    headers: HeaderMap,
    path: Result<Path<i64>, PathRejection>,
) -> PageResult<Response> {
    let venue_id = record_id(path)?;
    let venue = venues::load_venue(&state.db, venue_id)
        .await?
        .ok_or_else(|| PageError::NotFound(format!("venue {}", venue_id)))?;

    let all_shows = shows::shows_for_venue(&state.db, venue_id).await?;
    let (past, upcoming) = shows::partition_by_time(all_shows, datetime::now());

    Ok(pages::page(
        &venue.name,
        flash::take(&headers),
        &pages::venues::detail(&venue, &past, &upcoming),
    ))
}

/// GET /venues/create
pub async fn new_venue_form(headers: HeaderMap) -> Response {
    pages::page(
        "New venue",
        flash::take(&headers),
        &pages::forms::venue_form("List a new venue", "/venues/create", &VenueInput::default()),
    )
}

/// POST /venues/create
pub async fn create_venue(State(state): State<AppState>, Form(pairs): Form<Vec<(String, String)>>) -> Response {
    records::create::<Venues>(&state, FormFields::new(pairs)).await
}

/// GET /venues/:venue_id/edit
pub async fn edit_venue_form(
    State(state): State<AppState>,
    headers: HeaderMap,
    path: Result<Path<i64>, PathRejection>,
) -> PageResult<Response> {
    let venue_id = record_id(path)?;
    let venue = venues::load_venue(&state.db, venue_id)
        .await?
        .ok_or_else(|| PageError::NotFound(format!("venue {}", venue_id)))?;

    let action = format!("/venues/{}/edit", venue_id);
    Ok(pages::page(
        "Edit venue",
        flash::take(&headers),
        &pages::forms::venue_form(&format!("Edit venue {}", venue.name), &action, &VenueInput::from(&venue)),
    ))
}

/// POST /venues/:venue_id/edit
pub async fn update_venue(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> PageResult<Response> {
    let venue_id = record_id(path)?;
    records::update::<Venues>(&state, venue_id, FormFields::new(pairs)).await
}

/// DELETE /venues/:venue_id and POST /venues/:venue_id/delete
pub async fn delete_venue(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> PageResult<Response> {
    let venue_id = record_id(path)?;
    records::delete::<Venues>(&state, venue_id).await
}

/// Venue rows edited through the shared form flows
pub struct Venues;

#[async_trait]
impl RecordKind for Venues {
    const LABEL: &'static str = "Venue";
    const PATH: &'static str = "/venues";

    type Input = VenueInput;

    fn parse(form: &FormFields) -> Result<VenueInput, FormError> {
        forms::venue_input(form)
    }

    async fn name_of(pool: &SqlitePool, id: i64) -> fsnd_common::Result<Option<String>> {
        Ok(venues::load_venue(pool, id).await?.map(|venue| venue.name))
    }

    async fn insert(conn: &mut SqliteConnection, input: &VenueInput) -> fsnd_common::Result<i64> {
        venues::insert_venue(conn, input).await
    }

    async fn update(conn: &mut SqliteConnection, id: i64, input: &VenueInput) -> fsnd_common::Result<bool> {
        venues::update_venue(conn, id, input).await
    }

    async fn delete(conn: &mut SqliteConnection, id: i64) -> fsnd_common::Result<bool> {
        venues::delete_venue(conn, id).await
    }
}
