//! Session token endpoints

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::error::ApiResult;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Deserialize)]
pub struct InvalidateRequest {
    pub username: String,
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub jwt_token: String,
}

#[derive(Debug, Serialize)]
pub struct ValidateResponse {
    pub valid: bool,
}

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

/// POST /token
pub async fn login(
    State(state): State<AppState>,
    Json(req): Json<LoginRequest>,
) -> ApiResult<(StatusCode, Json<TokenResponse>)> {
    let token = state.auth.login(&req.username, &req.password).await?;

    tracing::info!(username = %req.username, "login succeeded");

    Ok((StatusCode::CREATED, Json(TokenResponse { jwt_token: token })))
}

/// DELETE /token
pub async fn invalidate(
    State(state): State<AppState>,
    Json(req): Json<InvalidateRequest>,
) -> ApiResult<Json<StatusResponse>> {
    state.auth.invalidate(&req.username).await?;

    tracing::info!(username = %req.username, "session invalidated");

    Ok(Json(StatusResponse {
        status: "invalidated",
    }))
}

/// GET /token/{jwt_token}
pub async fn validate(
    State(state): State<AppState>,
    Path(jwt_token): Path<String>,
) -> ApiResult<Json<ValidateResponse>> {
    let valid = state.auth.validate(&jwt_token).await?;

    Ok(Json(ValidateResponse { valid }))
}
