use axum::{Router, routing::get};
use std::sync::Arc;

use crate::{ApiState, handlers};

pub fn routes() -> Router<Arc<ApiState>> {
    Router::new()
        .route(
            "/api/shift-templates",
            get(handlers::shift_template::list_templates)
                .post(handlers::shift_template::create_template),
        )
        .route(
            "/api/shift-templates/:id",
            get(handlers::shift_template::get_template)
                .put(handlers::shift_template::update_template)
                .delete(handlers::shift_template::delete_template),
        )
}
