//! Team handlers

use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};

use gridiron_core::domain::{NewTeam, Team};
use gridiron_shared::EntityId;

use crate::error::ApiError;
use crate::extract::{ApiJson, ApiPath};
use crate::state::ApiState;

pub(super) fn routes() -> Router<ApiState> {
    Router::new()
        .route("/teams", get(list_teams).post(create_team))
        .route("/teams/{id}", get(get_team).delete(delete_team))
}

/// GET /api/teams
pub async fn list_teams(State(state): State<ApiState>) -> Result<Json<Vec<Team>>, ApiError> {
    Ok(Json(state.league.list_teams().await?))
}

/// POST /api/teams
pub async fn create_team(
    State(state): State<ApiState>,
    ApiJson(payload): ApiJson<NewTeam>,
) -> Result<(StatusCode, Json<Team>), ApiError> {
    let team = state.league.create_team(payload).await?;
    Ok((StatusCode::CREATED, Json(team)))
}

/// GET /api/teams/{id}
pub async fn get_team(
    State(state): State<ApiState>,
    ApiPath(id): ApiPath<EntityId>,
) -> Result<Json<Team>, ApiError> {
    Ok(Json(state.league.get_team(id).await?))
}

/// DELETE /api/teams/{id}
pub async fn delete_team(
    State(state): State<ApiState>,
    ApiPath(id): ApiPath<EntityId>,
) -> Result<StatusCode, ApiError> {
    state.league.delete_team(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
