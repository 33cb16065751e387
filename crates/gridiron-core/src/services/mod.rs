//! Domain services (business logic)

pub mod auth_service;
pub mod league_service;
pub mod analytics_service;

pub use auth_service::{AuthService, LoginResult};
pub use league_service::LeagueService;
pub use analytics_service::AnalyticsService;
