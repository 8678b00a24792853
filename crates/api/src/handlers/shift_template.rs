use axum::{Json, extract::State};
use shiftcal_core::{
    errors::ShiftError,
    models::{
        CreatedResponse, MessageResponse,
        shift_template::{
            CreateShiftTemplateRequest, ListShiftTemplatesQuery, ShiftTemplate,
            UpdateShiftTemplateRequest,
        },
    },
};
use shiftcal_db::repositories::shift_template as template_repo;
use std::sync::Arc;

use crate::{
    ApiState,
    handlers::shift::ensure_user_exists,
    middleware::{
        error_handling::AppError,
        extract::{ApiJson, ApiPath, ApiQuery},
    },
};

#[axum::debug_handler]
pub async fn list_templates(
    State(state): State<Arc<ApiState>>,
    ApiQuery(query): ApiQuery<ListShiftTemplatesQuery>,
) -> Result<Json<Vec<ShiftTemplate>>, AppError> {
    let user_id = query
        .user_id
        .ok_or_else(|| ShiftError::validation("User ID is required"))?;

    let templates = template_repo::list_templates_by_user_id(&state.db_pool, user_id).await?;

    Ok(Json(templates.into_iter().map(ShiftTemplate::from).collect()))
}

#[axum::debug_handler]
pub async fn get_template(
    State(state): State<Arc<ApiState>>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<ShiftTemplate>, AppError> {
    let template = template_repo::get_template_by_id(&state.db_pool, id)
        .await?
        .ok_or_else(|| ShiftError::not_found(format!("Template with ID {} not found", id)))?;

    Ok(Json(template.into()))
}

#[axum::debug_handler]
pub async fn create_template(
    State(state): State<Arc<ApiState>>,
    ApiJson(payload): ApiJson<CreateShiftTemplateRequest>,
) -> Result<Json<CreatedResponse>, AppError> {
    let name = payload.validate()?;
    ensure_user_exists(&state.db_pool, payload.user_id).await?;

    let id = template_repo::create_template(
        &state.db_pool,
        payload.user_id,
        name,
        payload.start_time,
        payload.end_time,
    )
    .await?;

    Ok(Json(CreatedResponse {
        id,
        message: "Template created successfully".to_string(),
    }))
}

#[axum::debug_handler]
pub async fn update_template(
    State(state): State<Arc<ApiState>>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(payload): ApiJson<UpdateShiftTemplateRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let name = payload.validate()?;

    let updated = template_repo::update_template(
        &state.db_pool,
        id,
        name,
        payload.start_time,
        payload.end_time,
    )
    .await?;
    if updated == 0 {
        return Err(ShiftError::not_found(format!("Template with ID {} not found", id)).into());
    }

    Ok(Json(MessageResponse::new("Template updated successfully")))
}

#[axum::debug_handler]
pub async fn delete_template(
    State(state): State<Arc<ApiState>>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    let deleted = template_repo::delete_template(&state.db_pool, id).await?;
    if deleted == 0 {
        return Err(ShiftError::not_found(format!("Template with ID {} not found", id)).into());
    }

    Ok(Json(MessageResponse::new("Template deleted successfully")))
}
