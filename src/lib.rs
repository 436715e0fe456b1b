//! Atelier is a small web app for curating and showcasing a design portfolio.
//!
//! Administrators group visual designs into categories and promote a subset
//! as "featured" for prominent display. Visitors browse a public gallery and
//! preview images in a modal. All catalog writes go through the
//! [Catalog] service, which owns the consistency rules between
//! categories and designs.
//!
//! This library provides a REST API that serves HTML pages directly, plus a
//! small JSON endpoint for toggling the featured flag.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use tokio::signal;

mod admin;
mod alert;
mod auth;
mod catalog;
mod category;
mod dashboard;
mod db;
mod design;
mod endpoints;
mod gallery;
mod html;
mod internal_server_error;
mod log_in;
mod log_out;
mod logging;
mod navigation;
mod not_found;
mod password;
mod routing;
mod state;

#[cfg(test)]
mod test_utils;

pub use admin::{Admin, AdminId, count_admins, create_admin, get_admin_by_username};
pub use catalog::Catalog;
pub use category::CategoryId;
pub use db::initialize as initialize_db;
pub use logging::logging_middleware;
pub use password::{PasswordHash, ValidatedPassword};
pub use routing::build_router;
pub use state::AppState;

use crate::{
    alert::Alert,
    internal_server_error::InternalServerError,
    not_found::get_404_not_found_response,
};

/// An async task that waits for either the ctrl+c or terminate signal,
/// whichever comes first, and then signals the server to shut down
/// gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The user provided an invalid username/password combination.
    #[error("invalid credentials")]
    InvalidCredentials,

    /// The auth token cookie is missing from the cookie jar in the request.
    #[error("no auth token in the cookie jar")]
    CookieMissing,

    /// The user provided a password that is too easy to guess.
    #[error("password is too weak: {0}")]
    TooWeak(String),

    /// An unexpected error occurred with the underlying hashing library.
    ///
    /// The error string should only be logged for debugging on the server.
    /// Clients should only be shown a generic internal error.
    #[error("hashing failed: {0}")]
    HashingError(String),

    /// An error occurred while serializing a struct as JSON.
    #[error("could not serialize as JSON: {0}")]
    JSONSerializationError(String),

    /// An empty (or whitespace-only) string was used to create a category
    /// name.
    #[error("Category name cannot be empty")]
    EmptyCategoryName,

    /// A category create would collide with an existing category name.
    ///
    /// Name uniqueness is case-sensitive, see
    /// [CategoryName](category::CategoryName).
    #[error("a category with that name already exists")]
    DuplicateCategoryName,

    /// The category ID attached to a design does not refer to an existing
    /// category.
    #[error("the category ID does not refer to a valid category")]
    InvalidCategory(Option<CategoryId>),

    /// An empty string was used as a design title.
    #[error("Design title cannot be empty")]
    EmptyDesignTitle,

    /// An empty string was used as a design image URL.
    #[error("Design image URL cannot be empty")]
    EmptyImageUrl,

    /// An admin create would collide with an existing username.
    #[error("an admin with that username already exists")]
    DuplicateUsername,

    /// The requested resource was not found.
    ///
    /// For HTTP request handlers, the client should check that the
    /// parameters (e.g., ID) are correct and that the resource has been
    /// created.
    ///
    /// Internally, this error may occur when a query returns no rows.
    #[error("the requested resource could not be found")]
    NotFound,

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// Could not acquire the database lock.
    #[error("could not acquire the database lock")]
    DatabaseLockError,
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            // Code 2067 occurs when a UNIQUE constraint failed.
            rusqlite::Error::SqliteFailure(sql_error, Some(ref desc))
                if sql_error.extended_code == 2067 && desc.contains("category.name") =>
            {
                Error::DuplicateCategoryName
            }
            rusqlite::Error::SqliteFailure(sql_error, Some(ref desc))
                if sql_error.extended_code == 2067 && desc.contains("admin.username") =>
            {
                Error::DuplicateUsername
            }
            // Code 787 occurs when a FOREIGN KEY constraint failed.
            rusqlite::Error::SqliteFailure(sql_error, Some(_))
                if sql_error.extended_code == 787 =>
            {
                Error::InvalidCategory(None)
            }
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound => get_404_not_found_response(),
            // Any errors that are not handled above are not intended to be
            // shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                InternalServerError::default().into_response()
            }
        }
    }
}

impl Error {
    /// Convert the error into an HTML alert fragment for HTMX form
    /// endpoints.
    fn into_alert_response(self) -> Response {
        match self {
            Error::EmptyCategoryName | Error::EmptyDesignTitle | Error::EmptyImageUrl => (
                StatusCode::BAD_REQUEST,
                Alert::error("Invalid input", &self.to_string()).into_html(),
            )
                .into_response(),
            Error::DuplicateCategoryName => (
                StatusCode::BAD_REQUEST,
                Alert::error(
                    "Duplicate category name",
                    "A category with that name already exists. \
                    Category names are case-sensitive.",
                )
                .into_html(),
            )
                .into_response(),
            Error::InvalidCategory(category_id) => (
                StatusCode::BAD_REQUEST,
                Alert::error(
                    "Invalid category",
                    &format!("Could not find a category with the ID {category_id:?}"),
                )
                .into_html(),
            )
                .into_response(),
            Error::NotFound => (
                StatusCode::NOT_FOUND,
                Alert::error(
                    "Not found",
                    "The item could not be found. Try refreshing the page \
                    to see if it has already been deleted.",
                )
                .into_html(),
            )
                .into_response(),
            error => {
                tracing::error!("An unexpected error occurred: {}", error);

                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Alert::error(
                        "Something went wrong",
                        "An unexpected error occurred, check the server logs \
                        for more details.",
                    )
                    .into_html(),
                )
                    .into_response()
            }
        }
    }
}
