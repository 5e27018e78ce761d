//! Account endpoints

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::ApiResult;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct DeleteUserRequest {
    pub username: String,
}

/// User as exposed over the API. Never carries the password hash.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub username: String,
    pub logged_in: bool,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

/// POST /user
pub async fn register(
    State(state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> ApiResult<(StatusCode, Json<UserResponse>)> {
    let user = state.auth.register(&req.username, &req.password).await?;

    tracing::info!(username = %user.username, "user registered");

    Ok((
        StatusCode::CREATED,
        Json(UserResponse {
            username: user.username,
            logged_in: user.logged_in,
        }),
    ))
}

/// GET /user
pub async fn list_users(State(state): State<AppState>) -> ApiResult<Json<Vec<UserResponse>>> {
    let users = state.auth.list_users().await?;

    let users = users
        .into_iter()
        .map(|u| UserResponse {
            username: u.username,
            logged_in: u.logged_in,
        })
        .collect();

    Ok(Json(users))
}

/// DELETE /user
pub async fn delete_user(
    State(state): State<AppState>,
    Json(req): Json<DeleteUserRequest>,
) -> ApiResult<Json<StatusResponse>> {
    state.auth.delete_account(&req.username).await?;

    tracing::info!(username = %req.username, "user deleted");

    Ok(Json(StatusResponse { status: "deleted" }))
}
