use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde_json::{json, Value};

use crate::error::{ApiError, ApiResult};
use crate::server::{AppState, RegisterPayload};
use crate::types::User;

pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<Vec<User>>> {
    let users = state
        .store
        .list_users()
        .await
        .map_err(|e| ApiError::from_store(e, "Failed to fetch users"))?;
    Ok(Json(users))
}

/// Register an account by email. Credentials are not stored here.
pub async fn register_user(
    State(state): State<AppState>,
    payload: Result<Json<RegisterPayload>, JsonRejection>,
) -> ApiResult<Json<Value>> {
    let email = payload
        .ok()
        .and_then(|Json(p)| p.email)
        .map(|e| e.trim().to_string())
        .filter(|e| !e.is_empty())
        .ok_or_else(|| ApiError::Validation("Email is required".into()))?;

    let user = state
        .store
        .create_user(&email)
        .await
        .map_err(|e| ApiError::from_store(e, "Failed to create user"))?;

    tracing::info!(user_id = user.id, "user registered");
    Ok(Json(json!({ "user": user })))
}
