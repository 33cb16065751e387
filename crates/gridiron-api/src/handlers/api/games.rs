//! Game handlers

use axum::{
    extract::State,
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tracing::debug;

use gridiron_core::domain::{Game, GameResult, NewGame};
use gridiron_shared::EntityId;

use crate::dto::GameQuery;
use crate::error::ApiError;
use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::state::ApiState;

pub(super) fn routes() -> Router<ApiState> {
    Router::new()
        .route("/games", get(list_games).post(create_game))
        .route(
            "/games/{id}",
            get(get_game).put(record_result).delete(delete_game),
        )
}

/// GET /api/games?team=&week=&season=
pub async fn list_games(
    State(state): State<ApiState>,
    ApiQuery(query): ApiQuery<GameQuery>,
) -> Result<Json<Vec<Game>>, ApiError> {
    debug!("Listing games: {:?}", query);
    Ok(Json(state.league.list_games(query.into()).await?))
}

/// POST /api/games
pub async fn create_game(
    State(state): State<ApiState>,
    ApiJson(payload): ApiJson<NewGame>,
) -> Result<(StatusCode, Json<Game>), ApiError> {
    let game = state.league.create_game(payload).await?;
    Ok((StatusCode::CREATED, Json(game)))
}

/// GET /api/games/{id}
pub async fn get_game(
    State(state): State<ApiState>,
    ApiPath(id): ApiPath<EntityId>,
) -> Result<Json<Game>, ApiError> {
    Ok(Json(state.league.get_game(id).await?))
}

/// PUT /api/games/{id} - record the final score
pub async fn record_result(
    State(state): State<ApiState>,
    ApiPath(id): ApiPath<EntityId>,
    ApiJson(payload): ApiJson<GameResult>,
) -> Result<Json<Game>, ApiError> {
    Ok(Json(state.league.record_result(id, payload).await?))
}

/// DELETE /api/games/{id}
pub async fn delete_game(
    State(state): State<ApiState>,
    ApiPath(id): ApiPath<EntityId>,
) -> Result<StatusCode, ApiError> {
    state.league.delete_game(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
