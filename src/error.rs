//! Defines the app level error type and its conversions to JSON responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The request payload failed validation.
    ///
    /// Carries one human-readable message per failing field so the client
    /// can fix everything in a single round trip.
    #[error("invalid request payload: {}", .0.join(" "))]
    Validation(Vec<String>),

    /// The referenced project does not exist.
    ///
    /// Returned both for lookups by project ID and for expense operations
    /// scoped to a project that is not in the database.
    #[error("the requested project could not be found")]
    ProjectNotFound,

    /// The referenced expense does not exist.
    #[error("the requested expense could not be found")]
    ExpenseNotFound,

    /// Could not acquire the database lock.
    #[error("could not acquire the database lock")]
    DatabaseLock,

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    Sql(rusqlite::Error),
}

impl From<rusqlite::Error> for Error {
    fn from(error: rusqlite::Error) -> Self {
        tracing::error!("an unhandled SQL error occurred: {}", error);
        Error::Sql(error)
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::Validation(errors) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "errors": errors }))).into_response()
            }
            Error::ProjectNotFound => (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": "Project not found." })),
            )
                .into_response(),
            Error::ExpenseNotFound => (
                StatusCode::NOT_FOUND,
                Json(json!({ "error": "Expense not found." })),
            )
                .into_response(),
            // Any errors that are not handled above are unexpected and get
            // logged before being reported to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": error.to_string() })),
                )
                    .into_response()
            }
        }
    }
}

#[cfg(test)]
mod error_response_tests {
    use axum::{http::StatusCode, response::IntoResponse};

    use super::Error;

    #[test]
    fn validation_maps_to_bad_request() {
        let response = Error::Validation(vec!["Project name is required.".to_owned()])
            .into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn project_not_found_maps_to_not_found() {
        let response = Error::ProjectNotFound.into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn expense_not_found_maps_to_not_found() {
        let response = Error::ExpenseNotFound.into_response();

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[test]
    fn lock_error_maps_to_internal_server_error() {
        let response = Error::DatabaseLock.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
