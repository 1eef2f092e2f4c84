//! HTTP error response mapping.

use std::borrow::Cow;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use filialen_domain::error::{FilialenError, NotFoundError};

/// JSON error body returned for unreadable requests and unexpected failures.
#[derive(Serialize)]
struct ErrorBody {
    error: Cow<'static, str>,
}

/// Maps handler failures to an HTTP response with appropriate status code.
///
/// | error                       | status | body                       |
/// |-----------------------------|--------|----------------------------|
/// | `Validation`                | 400    | `{"<field>": "<message>"}` |
/// | unreadable JSON body        | 400    | `{"error": "..."}`         |
/// | `NotFound`                  | 404    | empty                      |
/// | `Storage`                   | 500    | `{"error": "..."}`         |
///
/// Other body rejections (e.g. a missing `Content-Type`) keep axum's status.
#[derive(Debug)]
pub enum ApiError {
    /// A domain or application failure.
    Domain(FilialenError),
    /// The request body could not be turned into the expected type.
    Body(JsonRejection),
}

impl ApiError {
    /// Shorthand for a missing record of kind `entity`.
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        Self::Domain(
            NotFoundError {
                entity,
                id: id.to_string(),
            }
            .into(),
        )
    }
}

impl From<FilialenError> for ApiError {
    fn from(err: FilialenError) -> Self {
        Self::Domain(err)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Body(rejection)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Domain(err) => domain_response(err),
            Self::Body(
                rejection @ (JsonRejection::JsonDataError(_) | JsonRejection::JsonSyntaxError(_)),
            ) => {
                let message = rejection.body_text();
                tracing::debug!(%message, "rejecting unreadable request body");
                (
                    StatusCode::BAD_REQUEST,
                    Json(ErrorBody {
                        error: Cow::Owned(message),
                    }),
                )
                    .into_response()
            }
            Self::Body(rejection) => rejection.into_response(),
        }
    }
}

fn domain_response(err: FilialenError) -> Response {
    match err {
        FilialenError::Validation(errors) => {
            tracing::debug!(%errors, "rejecting invalid request");
            (StatusCode::BAD_REQUEST, Json(errors)).into_response()
        }
        FilialenError::NotFound(err) => {
            tracing::debug!(%err, "resource not found");
            StatusCode::NOT_FOUND.into_response()
        }
        FilialenError::Storage(err) => {
            tracing::error!(error = %err, "storage error");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorBody {
                    error: Cow::Borrowed("internal server error"),
                }),
            )
                .into_response()
        }
    }
}
