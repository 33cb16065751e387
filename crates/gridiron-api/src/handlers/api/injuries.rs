//! Injury report handlers

use axum::{
    extract::State,
    http::StatusCode,
    routing::{delete, get},
    Json, Router,
};

use gridiron_core::domain::{Injury, InjuryFilter, NewInjury};
use gridiron_shared::EntityId;

use crate::dto::InjuryQuery;
use crate::error::ApiError;
use crate::extract::{ApiJson, ApiPath, ApiQuery};
use crate::state::ApiState;

pub(super) fn routes() -> Router<ApiState> {
    Router::new()
        .route("/injuries", get(list_injuries).post(report_injury))
        .route("/injuries/{id}", delete(delete_injury))
}

/// GET /api/injuries?team_id=&status=
pub async fn list_injuries(
    State(state): State<ApiState>,
    ApiQuery(query): ApiQuery<InjuryQuery>,
) -> Result<Json<Vec<Injury>>, ApiError> {
    let filter = InjuryFilter::try_from(query)?;
    Ok(Json(state.league.list_injuries(filter).await?))
}

/// POST /api/injuries
pub async fn report_injury(
    State(state): State<ApiState>,
    ApiJson(payload): ApiJson<NewInjury>,
) -> Result<(StatusCode, Json<Injury>), ApiError> {
    let injury = state.league.report_injury(payload).await?;
    Ok((StatusCode::CREATED, Json(injury)))
}

/// DELETE /api/injuries/{id}
pub async fn delete_injury(
    State(state): State<ApiState>,
    ApiPath(id): ApiPath<EntityId>,
) -> Result<StatusCode, ApiError> {
    state.league.delete_injury(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
