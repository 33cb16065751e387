// ============================================================================
// Gridiron API - Auth Handlers
// File: crates/gridiron-api/src/handlers/auth.rs
// ============================================================================
//! Authentication HTTP handlers (register, login, me)

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tracing::info;

use crate::dto::{LoginRequest, MessageResponse, RegisterRequest, TokenResponse, UserResponse};
use crate::error::ApiError;
use crate::extract::ValidatedJson;
use crate::middleware::AuthUser;
use crate::state::AuthState;

pub fn router(state: AuthState) -> Router {
    Router::new()
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/me", get(me))
        .with_state(state)
}

/// Register handler - POST /auth/register
pub async fn register(
    State(state): State<AuthState>,
    ValidatedJson(payload): ValidatedJson<RegisterRequest>,
) -> Result<(StatusCode, Json<MessageResponse>), ApiError> {
    let user = state.auth.register(&payload.username, &payload.password).await?;
    info!("User registered: {} ({})", user.username, user.id);

    Ok((
        StatusCode::CREATED,
        Json(MessageResponse::new("User registered successfully")),
    ))
}

/// Login handler - POST /auth/login
pub async fn login(
    State(state): State<AuthState>,
    ValidatedJson(payload): ValidatedJson<LoginRequest>,
) -> Result<Json<TokenResponse>, ApiError> {
    let result = state.auth.login(&payload.username, &payload.password).await?;

    Ok(Json(TokenResponse {
        access_token: result.access_token,
        token_type: "Bearer",
        expires_in: result.expires_in,
    }))
}

/// Current user - GET /auth/me
pub async fn me(
    State(state): State<AuthState>,
    user: AuthUser,
) -> Result<Json<UserResponse>, ApiError> {
    let user = state.auth.current_user(user.user_id).await?;
    Ok(Json(user.into()))
}
