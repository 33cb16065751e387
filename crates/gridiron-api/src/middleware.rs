// ============================================================================
// Gridiron API - Authentication Extractor
// File: crates/gridiron-api/src/middleware.rs
// ============================================================================
//! Bearer-token authentication
//!
//! `AuthUser` is both a handler argument and, through
//! `axum::middleware::from_extractor_with_state`, a guard for whole route
//! groups.

use std::sync::Arc;

use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
};

use gridiron_security::JwtService;
use gridiron_shared::EntityId;

use crate::error::ApiError;

const BEARER_PREFIX: &str = "Bearer ";

/// Identity carried by a valid access token
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: EntityId,
    pub username: String,
}

impl<S> FromRequestParts<S> for AuthUser
where
    Arc<JwtService>: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or_else(|| ApiError::Unauthorized("Missing authorization header".into()))?;

        let token = header
            .strip_prefix(BEARER_PREFIX)
            .map(str::trim)
            .filter(|token| !token.is_empty())
            .ok_or_else(|| ApiError::Unauthorized("Expected a Bearer token".into()))?;

        let jwt = Arc::<JwtService>::from_ref(state);
        let claims = jwt.validate_token(token)?;

        Ok(AuthUser {
            user_id: claims.user_id()?,
            username: claims.username,
        })
    }
}
