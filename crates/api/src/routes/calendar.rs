use axum::{Router, routing::get};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new().route(
        "/api/calendar/:year/:month",
        get(handlers::calendar::get_month),
    )
}
