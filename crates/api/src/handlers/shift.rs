use axum::{Json, extract::State};
use chrono::{Datelike, Local};
use shiftcal_core::{
    errors::ShiftError,
    forms::quick_add,
    models::{
        CreatedResponse, MessageResponse,
        shift::{
            CreateShiftRequest, ListShiftsQuery, QuickAddRequest, QuickAddResponse,
            ShiftWithUser, UpdateShiftRequest,
        },
        shift_template::ShiftTemplate,
    },
};
use shiftcal_db::{
    DbPool,
    repositories::{shift as shift_repo, shift_template as template_repo, user as user_repo},
};
use std::sync::Arc;
use tracing::info;

use crate::{
    ApiState,
    middleware::{
        error_handling::AppError,
        extract::{ApiJson, ApiPath, ApiQuery},
    },
};

/// Rejects requests that reference a user who does not exist.
pub(crate) async fn ensure_user_exists(pool: &DbPool, user_id: i64) -> Result<(), AppError> {
    match user_repo::get_user_by_id(pool, user_id).await? {
        Some(_) => Ok(()),
        None => Err(ShiftError::validation(format!("User with ID {} does not exist", user_id)).into()),
    }
}

#[axum::debug_handler]
pub async fn list_shifts(
    State(state): State<Arc<ApiState>>,
    ApiQuery(query): ApiQuery<ListShiftsQuery>,
) -> Result<Json<Vec<ShiftWithUser>>, AppError> {
    let shifts = match query.user_id {
        Some(user_id) => shift_repo::list_shifts_by_user_id(&state.db_pool, user_id).await?,
        None => shift_repo::list_shifts(&state.db_pool).await?,
    };

    Ok(Json(shifts.into_iter().map(ShiftWithUser::from).collect()))
}

#[axum::debug_handler]
pub async fn get_shift(
    State(state): State<Arc<ApiState>>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<ShiftWithUser>, AppError> {
    let shift = shift_repo::get_shift_by_id(&state.db_pool, id)
        .await?
        .ok_or_else(|| ShiftError::not_found(format!("Shift with ID {} not found", id)))?;

    Ok(Json(shift.into()))
}

#[axum::debug_handler]
pub async fn create_shift(
    State(state): State<Arc<ApiState>>,
    ApiJson(payload): ApiJson<CreateShiftRequest>,
) -> Result<Json<CreatedResponse>, AppError> {
    let shift = payload.validate()?;
    ensure_user_exists(&state.db_pool, payload.user_id).await?;

    let id = shift_repo::create_shift(
        &state.db_pool,
        payload.user_id,
        &shift.title,
        shift.start_time,
        shift.end_time,
    )
    .await?;

    Ok(Json(CreatedResponse {
        id,
        message: "Shift created successfully".to_string(),
    }))
}

/// Applies a template to a list of `DD.MM` dates. All shifts are stored in
/// one transaction, so either every date gets its shift or none does.
#[axum::debug_handler]
pub async fn quick_add(
    State(state): State<Arc<ApiState>>,
    ApiJson(payload): ApiJson<QuickAddRequest>,
) -> Result<Json<QuickAddResponse>, AppError> {
    let year = payload.validate(Local::now().year())?;
    ensure_user_exists(&state.db_pool, payload.user_id).await?;

    let template: ShiftTemplate = template_repo::get_template_by_id(&state.db_pool, payload.template_id)
        .await?
        .ok_or_else(|| {
            ShiftError::validation(format!("Template with ID {} does not exist", payload.template_id))
        })?
        .into();
    if template.user_id != payload.user_id {
        return Err(ShiftError::validation("Template belongs to another user").into());
    }

    let (start, end) = template.times()?;
    let title = payload.title_or(&template.name);

    let shifts = quick_add::build_shifts(title, start, end, &payload.dates, year, &Local)?;
    let ids = shift_repo::create_shifts(&state.db_pool, payload.user_id, &shifts).await?;
    info!(
        "Quick add created {} shifts from template {} for user {}",
        ids.len(),
        template.id,
        payload.user_id
    );

    Ok(Json(QuickAddResponse {
        message: format!("Created {} shifts", ids.len()),
        ids,
    }))
}

#[axum::debug_handler]
pub async fn update_shift(
    State(state): State<Arc<ApiState>>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(payload): ApiJson<UpdateShiftRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let shift = payload.validate()?;

    let updated = shift_repo::update_shift(
        &state.db_pool,
        id,
        &shift.title,
        shift.start_time,
        shift.end_time,
    )
    .await?;
    if updated == 0 {
        return Err(ShiftError::not_found(format!("Shift with ID {} not found", id)).into());
    }

    Ok(Json(MessageResponse::new("Shift updated successfully")))
}

#[axum::debug_handler]
pub async fn delete_shift(
    State(state): State<Arc<ApiState>>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    let deleted = shift_repo::delete_shift(&state.db_pool, id).await?;
    if deleted == 0 {
        return Err(ShiftError::not_found(format!("Shift with ID {} not found", id)).into());
    }

    Ok(Json(MessageResponse::new("Shift deleted successfully")))
}
