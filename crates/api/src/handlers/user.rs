use axum::{Json, extract::State};
use chrono::Utc;
use shiftcal_core::{
    errors::ShiftError,
    models::{
        CreatedResponse, MessageResponse,
        user::{CreateUserRequest, UpdateUserRequest, User, contact_identifier},
    },
};
use shiftcal_db::repositories::user::{self as user_repo, UserLookup};
use std::sync::Arc;
use tracing::info;

use crate::{
    ApiState,
    middleware::{
        error_handling::AppError,
        extract::{ApiJson, ApiPath},
    },
};

#[axum::debug_handler]
pub async fn list_users(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<Vec<User>>, AppError> {
    let users = user_repo::list_users(&state.db_pool).await?;

    Ok(Json(users.into_iter().map(User::from).collect()))
}

#[axum::debug_handler]
pub async fn get_user(
    State(state): State<Arc<ApiState>>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<User>, AppError> {
    let user = user_repo::get_user_by_id(&state.db_pool, id)
        .await?
        .ok_or_else(|| ShiftError::not_found(format!("User with ID {} not found", id)))?;

    Ok(Json(user.into()))
}

/// Returns the id of the user with this name, creating the user first if
/// nobody has it yet (names compare case-insensitively).
#[axum::debug_handler]
pub async fn create_user(
    State(state): State<Arc<ApiState>>,
    ApiJson(payload): ApiJson<CreateUserRequest>,
) -> Result<Json<CreatedResponse>, AppError> {
    let (name, color) = payload.validate()?;

    let _creating = state.user_creation.lock().await;
    let email = contact_identifier(name, Utc::now());
    let response = match user_repo::find_or_create_user(&state.db_pool, name, &email, color).await? {
        UserLookup::Existing(id) => CreatedResponse {
            id,
            message: "User already exists".to_string(),
        },
        UserLookup::Created(id) => {
            info!("Created user {} ({})", id, name);
            CreatedResponse {
                id,
                message: "User created successfully".to_string(),
            }
        }
    };

    Ok(Json(response))
}

#[axum::debug_handler]
pub async fn update_user(
    State(state): State<Arc<ApiState>>,
    ApiPath(id): ApiPath<i64>,
    ApiJson(payload): ApiJson<UpdateUserRequest>,
) -> Result<Json<MessageResponse>, AppError> {
    let (name, color) = payload.validate()?;

    let updated = user_repo::update_user(&state.db_pool, id, name, color).await?;
    if updated == 0 {
        return Err(ShiftError::not_found(format!("User with ID {} not found", id)).into());
    }

    Ok(Json(MessageResponse::new("User updated successfully")))
}

#[axum::debug_handler]
pub async fn delete_user(
    State(state): State<Arc<ApiState>>,
    ApiPath(id): ApiPath<i64>,
) -> Result<Json<MessageResponse>, AppError> {
    let deleted = user_repo::delete_user(&state.db_pool, id).await?;
    if deleted == 0 {
        return Err(ShiftError::not_found(format!("User with ID {} not found", id)).into());
    }
    info!("Deleted user {} with their shifts and templates", id);

    Ok(Json(MessageResponse::new("User deleted successfully")))
}
