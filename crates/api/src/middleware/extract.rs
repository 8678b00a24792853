//! Extractors whose rejections become `{ "error": ... }` 400 responses
//! instead of axum's plain-text 400/422 defaults.

use axum::extract::{FromRequest, FromRequestParts, Path, Query};

use crate::middleware::error_handling::AppError;

/// JSON request body.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// Path parameters, e.g. the numeric `{id}` segment.
#[derive(Debug, FromRequestParts)]
#[from_request(via(Path), rejection(AppError))]
pub struct ApiPath<T>(pub T);

/// Query string parameters.
#[derive(Debug, FromRequestParts)]
#[from_request(via(Query), rejection(AppError))]
pub struct ApiQuery<T>(pub T);
