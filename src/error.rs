//! Application error type and its mapping onto HTTP responses.
//!
//! Every fallible operation in the service returns [`AppError`]. Handlers
//! propagate it with `?` and axum renders it through [`IntoResponse`]:
//!
//! | Variant      | Status | Body                                  |
//! |--------------|--------|---------------------------------------|
//! | `Validation` | 400    | `{"errors": ["validation errors"]}`   |
//! | `NotFound`   | 404    | `{"error": "<Entity> not found"}`     |
//! | `Internal`   | 500    | `{"error": "Internal server error"}`  |
//!
//! Validation reasons are not echoed to clients; they are logged instead so
//! the 400 body has a single shape on every endpoint.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use sqlx::error::ErrorKind;
use validator::ValidationErrors;

/// Body returned for every rejected write.
pub const VALIDATION_ERRORS: &str = "validation errors";

#[derive(Serialize)]
struct ValidationBody {
    errors: Vec<&'static str>,
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Input or constraint violation on a write. Nothing was persisted.
    #[error("{message}: {}", .reasons.join("; "))]
    Validation {
        message: String,
        reasons: Vec<String>,
    },

    /// The addressed entity does not exist.
    #[error("{entity} not found")]
    NotFound { entity: &'static str },

    #[error("{message}")]
    Internal { message: String },
}

impl AppError {
    pub fn bad_request(message: impl Into<String>, reasons: Vec<String>) -> Self {
        Self::Validation {
            message: message.into(),
            reasons,
        }
    }

    pub fn not_found(entity: &'static str) -> Self {
        Self::NotFound { entity }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// HTTP status this error is rendered with.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        match self {
            AppError::Validation { message, reasons } => {
                tracing::warn!(?reasons, "{}", message);
                (
                    status,
                    Json(ValidationBody {
                        errors: vec![VALIDATION_ERRORS],
                    }),
                )
                    .into_response()
            }
            AppError::NotFound { entity } => (
                status,
                Json(ErrorBody {
                    error: format!("{entity} not found"),
                }),
            )
                .into_response(),
            AppError::Internal { message } => {
                tracing::error!("{}", message);
                (
                    status,
                    Json(ErrorBody {
                        error: "Internal server error".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut reasons: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| match &e.message {
                    Some(message) => format!("{field}: {message}"),
                    None => format!("{field}: {}", e.code),
                })
            })
            .collect();
        reasons.sort();

        AppError::bad_request("Validation failed", reasons)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::bad_request("Invalid JSON body", vec![rejection.body_text()])
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        if let Some(db) = e.as_database_error() {
            let constraint = db.constraint().unwrap_or("unknown").to_string();
            match db.kind() {
                ErrorKind::ForeignKeyViolation => {
                    return AppError::bad_request(
                        "Referenced record does not exist",
                        vec![constraint],
                    );
                }
                ErrorKind::CheckViolation | ErrorKind::NotNullViolation => {
                    return AppError::bad_request("Constraint violation", vec![constraint]);
                }
                _ => {}
            }
        }

        AppError::internal(format!("Database error: {e}"))
    }
}
