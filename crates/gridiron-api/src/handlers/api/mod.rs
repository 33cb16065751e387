//! `/api` route group: league data (Bearer token required)

pub mod games;
pub mod injuries;
pub mod players;
pub mod teams;

use axum::{middleware::from_extractor_with_state, Router};

use crate::middleware::AuthUser;
use crate::state::ApiState;

pub fn router(state: ApiState) -> Router {
    Router::new()
        .merge(games::routes())
        .merge(teams::routes())
        .merge(players::routes())
        .merge(injuries::routes())
        .route_layer(from_extractor_with_state::<AuthUser, _>(state.clone()))
        .with_state(state)
}
