//! Artist handlers

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
use crate::db::{artists, shows, ArtistInput};
use crate::error::{PageError, PageResult};
use crate::flash;
use crate::forms::{self, FormError, FormFields};
use crate::pages;
use crate::AppState;

/// GET /artists
pub async fn list_artists(State(state): State<AppState>, headers: HeaderMap) -> PageResult<Response> {
    let listings = artists::list_artists(&state.db, datetime::now()).await?;

    Ok(pages::page("Artists", flash::take(&headers), &pages::artists::list(&listings)))
}

async fn render_search(state: &AppState, headers: &HeaderMap, term: &str) -> PageResult<Response> {
    let results = artists::search_artists(&state.db, term, datetime::now()).await?;

    Ok(pages::page(
        "Artist search",
        flash::take(headers),
        &pages::search_results("artists", term, &results),
    ))
}

/// GET /artists/search?search_term=...
pub async fn search_artists_query(
    State(state): State<AppState>,
    headers: HeaderMap,
    Query(query): Query<SearchForm>,
) -> PageResult<Response> {
    render_search(&state, &headers, &query.search_term).await
}

/// POST /artists/search
pub async fn search_artists(
    State(state): State<AppState>,
    headers: HeaderMap,
    Form(form): Form<SearchForm>,
) -> PageResult<Response> {
    render_search(&state, &headers, &form.search_term).await
}

/// GET /artists/:artist_id
pub async fn show_artist(
    State(state): State<AppState>,
    headers: HeaderMap,
    path: Result<Path<i64>, PathRejection>,
) -> PageResult<Response> {
    let artist_id = record_id(path)?;
    let artist = artists::load_artist(&state.db, artist_id)
        .await?
        .ok_or_else(|| PageError::NotFound(format!("artist {}", artist_id)))?;

    let all_shows = shows::shows_for_artist(&state.db, artist_id).await?;
    let (past, upcoming) = shows::partition_by_time(all_shows, datetime::now());

    Ok(pages::page(
        &artist.name,
        flash::take(&headers),
        &pages::artists::detail(&artist, &past, &upcoming),
    ))
}

/// GET /artists/create
pub async fn new_artist_form(headers: HeaderMap) -> Response {
    pages::page(
        "New artist",
        flash::take(&headers),
        &pages::forms::artist_form("List a new artist", "/artists/create", &ArtistInput::default()),
    )
}

/// POST /artists/create
pub async fn create_artist(State(state): State<AppState>, Form(pairs): Form<Vec<(String, String)>>) -> Response {
    records::create::<Artists>(&state, FormFields::new(pairs)).await
}

/// GET /artists/:artist_id/edit
pub async fn edit_artist_form(
    State(state): State<AppState>,
    headers: HeaderMap,
    path: Result<Path<i64>, PathRejection>,
) -> PageResult<Response> {
    let artist_id = record_id(path)?;
    let artist = artists::load_artist(&state.db, artist_id)
        .await?
        .ok_or_else(|| PageError::NotFound(format!("artist {}", artist_id)))?;

    let action = format!("/artists/{}/edit", artist_id);
    Ok(pages::page(
        "Edit artist",
        flash::take(&headers),
        &pages::forms::artist_form(&format!("Edit artist {}", artist.name), &action, &ArtistInput::from(&artist)),
    ))
}

/// POST /artists/:artist_id/edit
pub async fn update_artist(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> PageResult<Response> {
    let artist_id = record_id(path)?;
    records::update::<Artists>(&state, artist_id, FormFields::new(pairs)).await
}

/// DELETE /artists/:artist_id and POST /artists/:artist_id/delete
pub async fn delete_artist(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> PageResult<Response> {
    let artist_id = record_id(path)?;
    records::delete::<Artists>(&state, artist_id).await
}

/// Artist rows edited through the shared form flows
pub struct Artists;

#[async_trait]
impl RecordKind for Artists {
    const LABEL: &'static str = "Artist";
    const PATH: &'static str = "/artists";

    type Input = ArtistInput;

    fn parse(form: &FormFields) -> Result<ArtistInput, FormError> {
        forms::artist_input(form)
    }

    async fn name_of(pool: &SqlitePool, id: i64) -> fsnd_common::Result<Option<String>> {
        Ok(artists::load_artist(pool, id).await?.map(|artist| artist.name))
    }

    async fn insert(conn: &mut SqliteConnection, input: &ArtistInput) -> fsnd_common::Result<i64> {
        artists::insert_artist(conn, input).await
    }

    async fn update(conn: &mut SqliteConnection, id: i64, input: &ArtistInput) -> fsnd_common::Result<bool> {
        artists::update_artist(conn, id, input).await
    }

    async fn delete(conn: &mut SqliteConnection, id: i64) -> fsnd_common::Result<bool> {
        artists::delete_artist(conn, id).await
    }
}
