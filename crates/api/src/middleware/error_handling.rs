//! # Error Handling Middleware
//!
//! Maps domain errors to HTTP status codes and `{ "error": message }` bodies.
//! Validation problems are reported verbatim; store and internal failures are
//! logged and answered with a generic message.

use axum::{
    Json,
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use shiftcal_core::errors::ShiftError;

pub const INTERNAL_ERROR_MESSAGE: &str = "Internal server error";

/// Application error wrapper that provides HTTP status code mapping
///
/// # Example
///
/// ```
/// use axum::Json;
/// use shiftcal_api::middleware::error_handling::AppError;
/// use shiftcal_core::errors::ShiftError;
///
/// async fn handler(id: i64) -> Result<Json<i64>, AppError> {
///     if id < 0 {
///         return Err(AppError(ShiftError::validation("ID must not be negative")));
///     }
///     Ok(Json(id))
/// }
/// # fn main() {}
/// ```
#[derive(Debug)]
pub struct AppError(pub ShiftError);

impl AppError {
    pub fn status(&self) -> StatusCode {
        match &self.0 {
            ShiftError::NotFound(_) => StatusCode::NOT_FOUND,
            ShiftError::Validation(_) => StatusCode::BAD_REQUEST,
            ShiftError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ShiftError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let message = match self.0 {
            ShiftError::NotFound(message) | ShiftError::Validation(message) => message,
            ShiftError::Database(report) => {
                tracing::error!("Database error: {:?}", report);
                INTERNAL_ERROR_MESSAGE.to_string()
            }
            ShiftError::Internal(err) => {
                tracing::error!("Internal error: {}", err);
                INTERNAL_ERROR_MESSAGE.to_string()
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

/// Allows `?` on functions returning `Result<T, ShiftError>`.
impl From<ShiftError> for AppError {
    fn from(err: ShiftError) -> Self {
        AppError(err)
    }
}

/// Repository failures are store failures.
impl From<eyre::Report> for AppError {
    fn from(err: eyre::Report) -> Self {
        AppError(ShiftError::Database(err))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError(ShiftError::Validation(format!(
            "Invalid request body: {}",
            rejection.body_text()
        )))
    }
}

impl From<PathRejection> for AppError {
    fn from(rejection: PathRejection) -> Self {
        AppError(ShiftError::Validation(format!(
            "Invalid path parameter: {}",
            rejection.body_text()
        )))
    }
}

impl From<QueryRejection> for AppError {
    fn from(rejection: QueryRejection) -> Self {
        AppError(ShiftError::Validation(format!(
            "Invalid query: {}",
            rejection.body_text()
        )))
    }
}

/// Maps a ShiftError to an HTTP response
pub fn map_error(err: ShiftError) -> Response {
    AppError(err).into_response()
}
