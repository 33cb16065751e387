//! Player handlers

use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};

use gridiron_core::domain::{NewPlayer, Player};
use gridiron_shared::EntityId;

use crate::dto::PlayerQuery;
use crate::error::ApiError;
use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::state::ApiState;

pub(super) fn routes() -> Router<ApiState> {
    Router::new()
        .route("/players", get(list_players).post(create_player))
        .route("/players/{id}", get(get_player).delete(delete_player))
}

/// GET /api/players?team_id=&position=
pub async fn list_players(
    State(state): State<ApiState>,
    ApiQuery(query): ApiQuery<PlayerQuery>,
) -> Result<Json<Vec<Player>>, ApiError> {
    Ok(Json(state.league.list_players(query.into()).await?))
}

/// POST /api/players
pub async fn create_player(
    State(state): State<ApiState>,
    ApiJson(payload): ApiJson<NewPlayer>,
) -> Result<(StatusCode, Json<Player>), ApiError> {
    let player = state.league.create_player(payload).await?;
    Ok((StatusCode::CREATED, Json(player)))
}

/// GET /api/players/{id}
pub async fn get_player(
    State(state): State<ApiState>,
    ApiPath(id): ApiPath<EntityId>,
) -> Result<Json<Player>, ApiError> {
    Ok(Json(state.league.get_player(id).await?))
}

/// DELETE /api/players/{id}
pub async fn delete_player(
    State(state): State<ApiState>,
    ApiPath(id): ApiPath<EntityId>,
) -> Result<StatusCode, ApiError> {
    state.league.delete_player(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
