//! Rendering of service failures as HTTP responses.
//!
//! | Failure | Status | Body |
//! |---|---|---|
//! | invalid or malformed JSON body | 400 | `{"error": ...}` |
//! | domain validation | 400 | `{"error": ...}` |
//! | missing entity or empty collection | 404 | `{"message": ...}` |
//! | malformed identifier, storage failure, reorder gap | 500 | `{"message": ...}` |

use crate::kanban::{domain::KanbanDomainError, services::KanbanServiceError};
use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// Message returned with every 500 response.
pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error. Check the server console";

/// Errors surfaced by request handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request body could not be parsed into the expected shape.
    #[error(transparent)]
    InvalidBody(#[from] JsonRejection),
    /// A service operation failed.
    #[error(transparent)]
    Service(#[from] KanbanServiceError),
}

impl From<KanbanDomainError> for ApiError {
    fn from(err: KanbanDomainError) -> Self {
        Self::Service(KanbanServiceError::Domain(err))
    }
}

#[derive(Debug, Serialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug, Serialize)]
struct MessageBody {
    message: String,
}

fn error_body(status: StatusCode, error: String) -> Response {
    (status, Json(ErrorBody { error })).into_response()
}

fn message_body(status: StatusCode, message: String) -> Response {
    (status, Json(MessageBody { message })).into_response()
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::InvalidBody(rejection) => {
                error_body(StatusCode::BAD_REQUEST, rejection.body_text())
            }
            Self::Service(KanbanServiceError::NotFound(missing)) => {
                message_body(StatusCode::NOT_FOUND, format!("{missing} not found"))
            }
            Self::Service(
                err @ (KanbanServiceError::Repository(_)
                | KanbanServiceError::ReorderGap { .. }
                | KanbanServiceError::Domain(KanbanDomainError::MalformedId(_))),
            ) => {
                error!(error = %err, "request failed");
                message_body(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    INTERNAL_ERROR_MESSAGE.to_owned(),
                )
            }
            Self::Service(KanbanServiceError::Domain(err)) => {
                error_body(StatusCode::BAD_REQUEST, err.to_string())
            }
        }
    }
}
