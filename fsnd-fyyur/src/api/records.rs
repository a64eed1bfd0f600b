//! Form-driven create/update/delete shared by venues and artists
//!
//! Each mutation runs in its own transaction and ends in a redirect carrying
//! a flash message. A [`RecordKind`] supplies the form parsing and the
//! repository calls for one table.

use async_trait::async_trait;
use axum::response::Response;
use sqlx::{SqliteConnection, SqlitePool};
use tracing::{info, warn};

use crate::error::{PageError, PageResult, SubmitError};
use crate::flash;
use crate::forms::{FormError, FormFields};
use crate::AppState;

/// One editable listing table
#[async_trait]
pub trait RecordKind: Send + Sync + 'static {
    /// Capitalized label used in flash messages ("Venue")
    const LABEL: &'static str;
    /// Collection path; detail pages live at `{PATH}/{id}`
    const PATH: &'static str;

    type Input: Send + Sync;

    fn parse(form: &FormFields) -> Result<Self::Input, FormError>;

    /// Display name of an existing record
    async fn name_of(pool: &SqlitePool, id: i64) -> fsnd_common::Result<Option<String>>;

    async fn insert(conn: &mut SqliteConnection, input: &Self::Input) -> fsnd_common::Result<i64>;

    /// False when no row has `id`
    async fn update(conn: &mut SqliteConnection, id: i64, input: &Self::Input) -> fsnd_common::Result<bool>;

    async fn delete(conn: &mut SqliteConnection, id: i64) -> fsnd_common::Result<bool>;
}

async fn insert_from_form<R: RecordKind>(state: &AppState, form: &FormFields) -> Result<i64, SubmitError> {
    let input = R::parse(form)?;
    let mut tx = state.db.begin().await?;

    match R::insert(&mut *tx, &input).await {
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

async fn update_from_form<R: RecordKind>(state: &AppState, id: i64, form: &FormFields) -> Result<bool, SubmitError> {
    let input = R::parse(form)?;
    let mut tx = state.db.begin().await?;

    match R::update(&mut *tx, id, &input).await {
        Ok(true) => {
            tx.commit().await?;
            Ok(true)
        }
        Ok(false) => {
            tx.rollback().await?;
            Ok(false)
        }
        Err(e) => {
            tx.rollback().await?;
            Err(e.into())
        }
    }
}

/// Insert from a submitted form and redirect home
pub async fn create<R: RecordKind>(state: &AppState, form: FormFields) -> Response {
    let name = form.text("name").unwrap_or_default().to_string();

    match insert_from_form::<R>(state, &form).await {
        Ok(id) => {
            info!("Created {} {} ({})", R::LABEL, id, name);
            flash::redirect_with("/", &format!("{} {} was successfully listed!", R::LABEL, name))
        }
        Err(e) => {
            warn!("{} {:?} not created: {}", R::LABEL, name, e);
            flash::redirect_with(
                "/",
                &format!("An error occurred. {} {} could not be listed.", R::LABEL, name),
            )
        }
    }
}

/// Update from a submitted form and redirect to the detail page
///
/// A missing record is a 404; a rejected form or failed write flashes.
pub async fn update<R: RecordKind>(state: &AppState, id: i64, form: FormFields) -> PageResult<Response> {
    let name = form.text("name").unwrap_or_default().to_string();
    let location = format!("{}/{}", R::PATH, id);

    match update_from_form::<R>(state, id, &form).await {
        Ok(true) => {
            info!("Updated {} {} ({})", R::LABEL, id, name);
            Ok(flash::redirect_with(
                &location,
                &format!("The {} {} has been successfully updated!", R::LABEL, name),
            ))
        }
        Ok(false) => Err(PageError::NotFound(format!("{} {}", R::LABEL, id))),
        Err(e) => {
            warn!("{} {} not updated: {}", R::LABEL, id, e);
            Ok(flash::redirect_with(
                &location,
                &format!("The {} {} could not be updated!", R::LABEL, name),
            ))
        }
    }
}

/// Delete a record and redirect home
///
/// A missing record only flashes "not found"; nothing is deleted.
pub async fn delete<R: RecordKind>(state: &AppState, id: i64) -> PageResult<Response> {
    let Some(name) = R::name_of(&state.db, id).await? else {
        return Ok(flash::redirect_with("/", &format!("{} was not found", R::LABEL)));
    };

    let mut tx = state.db.begin().await?;
    let message = match R::delete(&mut *tx, id).await {
        Ok(_) => {
            tx.commit().await?;
            info!("Deleted {} {} ({})", R::LABEL, id, name);
            format!("{} {} was deleted", R::LABEL, name)
        }
        Err(e) => {
            tx.rollback().await?;
            warn!("Delete of {} {} rolled back: {}", R::LABEL, id, e);
            format!("An error occurred. {} {} could not be deleted", R::LABEL, name)
        }
    };

    Ok(flash::redirect_with("/", &message))
}
