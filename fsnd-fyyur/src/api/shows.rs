//! Show handlers

use axum::{extract::State, http::HeaderMap, response::Response, Form};
use tracing::{info, warn};

use crate::db::{artists, shows, venues};
use crate::error::{PageResult, SubmitError};
use crate::flash;
use crate::forms::{self, FormFields};
use crate::pages;
use crate::AppState;

/// GET /shows
pub async fn list_shows(State(state): State<AppState>, headers: HeaderMap) -> PageResult<Response> {
    let all_shows = shows::list_shows(&state.db).await?;

    Ok(pages::page("Shows", flash::take(&headers), &pages::shows::list(&all_shows)))
}

/// GET /shows/create
pub async fn new_show_form(State(state): State<AppState>, headers: HeaderMap) -> PageResult<Response> {
    let artist_choices = artists::artist_choices(&state.db).await?;
    let venue_choices = venues::venue_choices(&state.db).await?;

    Ok(pages::page(
        "New show",
        flash::take(&headers),
        &pages::forms::show_form(&artist_choices, &venue_choices),
    ))
}

async fn insert_from_form(state: &AppState, form: &FormFields) -> Result<i64, SubmitError> {
    let show = forms::new_show(form)?;
    let mut tx = state.db.begin().await?;

    match shows::insert_show(&mut *tx, &show).await {
        Ok(id) => {
            tx.commit().await?;
            Ok(id)
        }
        Err(e) => {
            tx.rollback().await?;
            Err(e.into())
        }
    }
}

/// POST /shows/create
///
/// An unknown artist or venue id fails the foreign key and is reported
/// like any other failure.
pub async fn create_show(State(state): State<AppState>, Form(pairs): Form<Vec<(String, String)>>) -> Response {
    let form = FormFields::new(pairs);

    match insert_from_form(&state, &form).await {
        Ok(id) => {
            info!("Created show {}", id);
            flash::redirect_with("/", "Show was successfully listed!")
        }
        Err(e) => {
            warn!("Show not created: {}", e);
            flash::redirect_with("/", "An error occurred. Show could not be listed.")
        }
    }
}
