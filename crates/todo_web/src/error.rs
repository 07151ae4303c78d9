use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use std::fmt;
use thiserror::Error;
use todo_session::SessionError;

pub type Result<T, E = AppError> = std::result::Result<T, E>;

/// Which kind of name failed a length check; drives the message wording.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameKind {
    List,
    Todo,
}

impl fmt::Display for NameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NameKind::List => f.write_str("List name"),
            NameKind::Todo => f.write_str("Todo"),
        }
    }
}

/// Failures a visitor can cause. Each one is recovered by re-rendering or
/// redirecting with the message as a flash.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TodoError {
    #[error("{0} must be between 1 and 100 characters.")]
    InvalidLength(NameKind),

    #[error("List name must be unique.")]
    DuplicateName,

    #[error("The specified list was not found.")]
    ListNotFound(u64),

    #[error("The specified todo was not found.")]
    TodoNotFound { list_id: u64, todo_id: u64 },
}

/// Infrastructure failures that end the request with a 500.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Session storage error: {0}")]
    SessionError(#[from] SessionError),

    #[error("Internal server error: {0}")]
    InternalError(#[from] anyhow::Error),
}

#[derive(Serialize)]
struct JsonError {
    message: String,
    r#type: String,
}

#[derive(Serialize)]
struct JsonErrorWrapper {
    error: JsonError,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::SessionError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        tracing::error!("Request failed: {}", self);
        let error_response = JsonErrorWrapper {
            error: JsonError {
                message: self.to_string(),
                r#type: "api_error".to_string(),
            },
        };
        HttpResponse::build(self.status_code()).json(error_response)
    }
}
