//! Application error taxonomy and HTTP response mapping.
//!
//! Every fallible path in the service funnels into [`AppError`]. The HTTP
//! layer converts it into a JSON `{"error": "..."}` body with the status
//! code the API contract promises:
//!
//! | Variant            | Status | Typical source                          |
//! |--------------------|--------|-----------------------------------------|
//! | `Validation`       | 400    | empty content, invalid custom slug      |
//! | `Conflict`         | 400    | user-chosen slug already taken          |
//! | `NotFound`         | 404    | unknown slug or link id                 |
//! | `Unauthorized`     | 401    | bad admin password                      |
//! | `StoreUnavailable` | 500    | database I/O failure on a critical path |
//! | `Internal`         | 500    | anything else                           |
//!
//! Slug conflicts respond with 400 rather than 409: the caller is expected
//! to retry with a different value, same as any other validation failure.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use std::fmt;

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug)]
pub enum AppError {
    Validation { message: String },
    Conflict { message: String },
    NotFound { message: String },
    Unauthorized { message: String },
    StoreUnavailable { message: String },
    Internal { message: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self::Unauthorized {
            message: message.into(),
        }
    }

    pub fn store_unavailable(message: impl Into<String>) -> Self {
        Self::StoreUnavailable {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Status code this error maps to on the wire.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation { .. } | Self::Conflict { .. } => StatusCode::BAD_REQUEST,
            Self::NotFound { .. } => StatusCode::NOT_FOUND,
            Self::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            Self::StoreUnavailable { .. } | Self::Internal { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    fn message(&self) -> &str {
        match self {
            Self::Validation { message }
            | Self::Conflict { message }
            | Self::NotFound { message }
            | Self::Unauthorized { message }
            | Self::StoreUnavailable { message }
            | Self::Internal { message } => message,
        }
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for AppError {}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self, "request failed");
        }

        let body = ErrorBody {
            error: self.message().to_string(),
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error() {
            if db.is_unique_violation() {
                return AppError::conflict("Slug already exists, try another one");
            }
        }

        AppError::store_unavailable(format!("Database error: {e}"))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        let message = e
            .field_errors()
            .iter()
            .flat_map(|(field, errors)| {
                errors.iter().map(move |err| match &err.message {
                    Some(m) => format!("{field}: {m}"),
                    None => format!("{field}: invalid value"),
                })
            })
            .collect::<Vec<_>>()
            .join("; ");

        AppError::bad_request(message)
    }
}
