use axum::{Json, extract::State};
use chrono::Local;
use shiftcal_core::{
    calendar::{MonthView, month_view},
    models::shift::ShiftWithUser,
};
use shiftcal_db::repositories::shift as shift_repo;
use std::sync::Arc;

use crate::{
    ApiState,
    middleware::{error_handling::AppError, extract::ApiPath},
};

/// Month grid in the server's local time zone.
#[axum::debug_handler]
pub async fn get_month(
    State(state): State<Arc<ApiState>>,
    ApiPath((year, month)): ApiPath<(i32, u32)>,
) -> Result<Json<MonthView>, AppError> {
    let shifts: Vec<ShiftWithUser> = shift_repo::list_shifts(&state.db_pool)
        .await?
        .into_iter()
        .map(ShiftWithUser::from)
        .collect();

    let view = month_view(year, month, &shifts, &Local)?;
    Ok(Json(view))
}
