//! Per route-group state
//!
//! Each group receives exactly the services it uses. The JWT service is
//! shared so the `AuthUser` extractor can pull it out via `FromRef`.

use std::sync::Arc;

use axum::extract::FromRef;

use gridiron_core::services::{AnalyticsService, AuthService, LeagueService};
use gridiron_security::JwtService;

#[derive(Clone, FromRef)]
pub struct AuthState {
    pub auth: Arc<AuthService>,
    pub jwt: Arc<JwtService>,
}

#[derive(Clone, FromRef)]
pub struct ApiState {
    pub league: Arc<LeagueService>,
    pub jwt: Arc<JwtService>,
}

#[derive(Clone, FromRef)]
pub struct AnalyticsState {
    pub analytics: Arc<AnalyticsService>,
    pub jwt: Arc<JwtService>,
}
