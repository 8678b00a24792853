use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/shifts",
            get(handlers::shift::list_shifts).post(handlers::shift::create_shift),
        )
        .route("/api/shifts/quick-add", post(handlers::shift::quick_add))
        .route(
            "/api/shifts/:id",
            get(handlers::shift::get_shift)
                .put(handlers::shift::update_shift)
                .delete(handlers::shift::delete_shift),
        )
}
