//! Errors returned by the laporan store, handlers and pages.
//!
//! Every variant maps to one HTTP status and a `{error, message}` body.
//! Internal details (SQL errors, template failures) are logged, never sent.

use actix_web::{HttpResponse, ResponseError};
use std::fmt;

/// Failure of a laporan operation.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Query, insert or connection failure in PostgreSQL
    #[error("Database error: {0}")]
    Database(String),

    /// Rejected laporan input (blank field, malformed JSON)
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// HTML page could not be produced
    #[error("Render error: {0}")]
    Render(String),
}

impl ResponseError for AppError {
    fn error_response(&self) -> HttpResponse {
        let (status, error_code, response_message) = match self {
            AppError::Database(err_str) => {
                tracing::error!("Database error: {}", err_str);
                (
                    actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                    "DATABASE_ERROR",
                    "An internal database error occurred".to_string(),
                )
            }
            AppError::InvalidInput(_) => (
                actix_web::http::StatusCode::BAD_REQUEST,
                "INVALID_INPUT",
                self.to_string(),
            ),
            AppError::Render(err_str) => {
                tracing::error!("Render error: {}", err_str);
                (
                    actix_web::http::StatusCode::INTERNAL_SERVER_ERROR,
                    "RENDER_ERROR",
                    "The page could not be rendered".to_string(),
                )
            }
        };

        HttpResponse::build(status).json(ErrorResponse {
            error: error_code.to_string(),
            message: response_message,
        })
    }
}

/// JSON body of every error response, also published in the OpenAPI document.
#[derive(Debug, serde::Serialize, utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.error, self.message)
    }
}

/// Result of a laporan operation.
pub type AppResult<T> = Result<T, AppError>;

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::InvalidInput(format!("JSON parsing error: {}", err))
    }
}

impl From<crate::views::ViewError> for AppError {
    fn from(err: crate::views::ViewError) -> Self {
        AppError::Render(err.to_string())
    }
}

impl From<sea_orm::DbErr> for AppError {
    fn from(err: sea_orm::DbErr) -> Self {
        AppError::Database(err.to_string())
    }
}
