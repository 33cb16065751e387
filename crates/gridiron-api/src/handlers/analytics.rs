// ============================================================================
// Gridiron API - Analytics Handlers
// File: crates/gridiron-api/src/handlers/analytics.rs
// ============================================================================
//! `/analytics` route group: records, standings and leaderboards
//! (Bearer token required)

use axum::{
    extract::State,
    middleware::from_extractor_with_state,
    routing::get,
    Json, Router,
};

use gridiron_core::domain::{HeadToHead, StatLeader, TeamSummary, WeekSummary};
use gridiron_shared::EntityId;

use crate::dto::{HeadToHeadQuery, LeadersQuery, SeasonQuery};
use crate::error::ApiError;
use crate::extract::{ApiPath, ApiQuery};
use crate::middleware::AuthUser;
use crate::state::AnalyticsState;

pub fn router(state: AnalyticsState) -> Router {
    Router::new()
        .route("/teams/{id}", get(team_summary))
        .route("/standings", get(standings))
        .route("/weeks/{week}", get(week_summary))
        .route("/head-to-head", get(head_to_head))
        .route("/leaders", get(leaders))
        .route_layer(from_extractor_with_state::<AuthUser, _>(state.clone()))
        .with_state(state)
}

/// GET /analytics/teams/{id}?season=
pub async fn team_summary(
    State(state): State<AnalyticsState>,
    ApiPath(id): ApiPath<EntityId>,
    ApiQuery(query): ApiQuery<SeasonQuery>,
) -> Result<Json<TeamSummary>, ApiError> {
    Ok(Json(state.analytics.team_summary(id, query.season).await?))
}

/// GET /analytics/standings?season=
pub async fn standings(
    State(state): State<AnalyticsState>,
    ApiQuery(query): ApiQuery<SeasonQuery>,
) -> Result<Json<Vec<TeamSummary>>, ApiError> {
    Ok(Json(state.analytics.standings(query.season).await?))
}

/// GET /analytics/weeks/{week}?season=
pub async fn week_summary(
    State(state): State<AnalyticsState>,
    ApiPath(week): ApiPath<i32>,
    ApiQuery(query): ApiQuery<SeasonQuery>,
) -> Result<Json<WeekSummary>, ApiError> {
    Ok(Json(state.analytics.week_summary(week, query.season).await?))
}

/// GET /analytics/head-to-head?team_a=&team_b=&season=
pub async fn head_to_head(
    State(state): State<AnalyticsState>,
    ApiQuery(query): ApiQuery<HeadToHeadQuery>,
) -> Result<Json<HeadToHead>, ApiError> {
    let summary = state
        .analytics
        .head_to_head(query.team_a, query.team_b, query.season)
        .await?;
    Ok(Json(summary))
}

/// GET /analytics/leaders?stat=&limit=
pub async fn leaders(
    State(state): State<AnalyticsState>,
    ApiQuery(query): ApiQuery<LeadersQuery>,
) -> Result<Json<Vec<StatLeader>>, ApiError> {
    Ok(Json(state.analytics.leaders(query.stat, query.limit).await?))
}
