//! Error types for fsnd-fyyur
//!
//! Errors surface as the rendered 404 or 500 page; details go to the log.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;
use tracing::{debug, error};

use crate::forms::FormError;
use crate::pages::{self, errors};

/// Page handler error type
#[derive(Debug, Error)]
pub enum PageError {
    /// Missing record or unknown route (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// fsnd-common error (database, configuration)
    #[error("Common error: {0}")]
    Common(#[from] fsnd_common::Error),
}

impl From<sqlx::Error> for PageError {
    fn from(err: sqlx::Error) -> Self {
        PageError::Common(fsnd_common::Error::Database(err))
    }
}

impl PageError {
    pub fn status(&self) -> StatusCode {
        match self {
            PageError::NotFound(_) => StatusCode::NOT_FOUND,
            PageError::Common(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Rendered error page for `status`
pub fn error_page(status: StatusCode) -> Response {
    if status == StatusCode::NOT_FOUND {
        pages::page_with_status(status, "Not Found", None, &errors::not_found())
    } else {
        pages::page_with_status(status, "Server Error", None, &errors::server_error())
    }
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("Request failed: {}", self);
        } else {
            debug!("Request rejected: {}", self);
        }

        error_page(status)
    }
}

/// Result type for page handlers
pub type PageResult<T> = Result<T, PageError>;

/// Failure of a form submission; reported to the user through a flash message
#[derive(Debug, Error)]
pub enum SubmitError {
    /// Missing or malformed field
    #[error("Invalid form: {0}")]
    Form(#[from] FormError),

    /// Database failure, including constraint violations
    #[error("Common error: {0}")]
    Common(#[from] fsnd_common::Error),
}

impl From<sqlx::Error> for SubmitError {
    fn from(err: sqlx::Error) -> Self {
        SubmitError::Common(fsnd_common::Error::Database(err))
    }
}
