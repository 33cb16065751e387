// ============================================================================
// Gridiron Server - Application Factory
// File: gridiron-app/gridiron-server/src/lib.rs
// ============================================================================
//! Builds the application: configuration, database binding, token manager,
//! and the three mounted route groups.
//!
//! Nothing here opens a connection. The database pool is lazy. A missing
//! `DATABASE_URI`, one for a database other than SQLite, or a missing secret
//! only fails the first request that needs it.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};

use gridiron_api::handlers::{analytics, api, auth, health};
use gridiron_api::{AnalyticsState, ApiState, AuthState};
use gridiron_core::repositories::{
    GameRepository, InjuryRepository, PlayerRepository, TeamRepository, UserRepository,
};
use gridiron_core::services::{AnalyticsService, AuthService, LeagueService};
use gridiron_infrastructure::{
    Database, PoolSettings, SqliteGameRepository, SqliteInjuryRepository, SqlitePlayerRepository,
    SqliteTeamRepository, SqliteUserRepository,
};
use gridiron_security::JwtService;
use gridiron_shared::config::AppConfig;
use gridiron_shared::database_uri::resolve_database_uri;
use gridiron_shared::AppError;

/// Prefixes of the mounted route groups, in mount order.
pub const MOUNTED_PREFIXES: [&str; 3] = ["/auth", "/api", "/analytics"];

/// Settings the factory resolved and bound onto the application.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub secret_key: Option<String>,
    /// Normalized `DATABASE_URI`; `None` when unset.
    pub database_uri: Option<String>,
    pub database_log_statements: bool,
    pub instance_path: PathBuf,
}

pub struct App {
    router: Router,
    database: Database,
    config: ResolvedConfig,
}

impl App {
    pub fn config(&self) -> &ResolvedConfig {
        &self.config
    }

    pub fn database(&self) -> &Database {
        &self.database
    }

    pub fn router(&self) -> Router {
        self.router.clone()
    }

    pub fn into_router(self) -> Router {
        self.router
    }
}

/// Load `.env` and the environment, then build the app.
/// Must be called from within a Tokio runtime.
pub fn create_app() -> Result<App, AppError> {
    // A missing or unreadable .env is not an error.
    dotenvy::dotenv().ok();
    let config = AppConfig::load()?;
    create_app_with(&config)
}

/// Build the app from an explicit configuration.
pub fn create_app_with(config: &AppConfig) -> Result<App, AppError> {
    let instance_path = config.resolve_instance_path(&default_instance_path())?;
    let database_uri = resolve_database_uri(config.database_uri(), &instance_path);

    let database = Database::bind(
        database_uri.as_deref(),
        PoolSettings {
            max_connections: config.database_max_connections,
            log_statements: config.database_log_statements,
        },
    )
    .map_err(|e| AppError::DatabaseError(e.to_string()))?;

    let jwt = Arc::new(JwtService::new(
        config.jwt_secret(),
        config.jwt_access_token_expires,
    ));
    if !jwt.is_configured() {
        warn!("No SECRET_KEY or JWT_SECRET_KEY set; token endpoints will fail");
    }

    // Repositories
    let users: Arc<dyn UserRepository> = Arc::new(SqliteUserRepository::new(database.clone()));
    let teams: Arc<dyn TeamRepository> = Arc::new(SqliteTeamRepository::new(database.clone()));
    let players: Arc<dyn PlayerRepository> =
        Arc::new(SqlitePlayerRepository::new(database.clone()));
    let games: Arc<dyn GameRepository> = Arc::new(SqliteGameRepository::new(database.clone()));
    let injuries: Arc<dyn InjuryRepository> =
        Arc::new(SqliteInjuryRepository::new(database.clone()));

    // Services
    let auth_service = Arc::new(AuthService::new(users, jwt.clone()));
    let league_service = Arc::new(LeagueService::new(
        teams.clone(),
        players.clone(),
        games.clone(),
        injuries,
    ));
    let analytics_service = Arc::new(AnalyticsService::new(teams, players, games));

    // Same order as MOUNTED_PREFIXES.
    let groups: [Router; MOUNTED_PREFIXES.len()] = [
        auth::router(AuthState {
            auth: auth_service,
            jwt: jwt.clone(),
        }),
        api::router(ApiState {
            league: league_service,
            jwt: jwt.clone(),
        }),
        analytics::router(AnalyticsState {
            analytics: analytics_service,
            jwt,
        }),
    ];
    let router = MOUNTED_PREFIXES
        .into_iter()
        .zip(groups)
        .fold(
            Router::new().route("/health", get(health::health_check)),
            |router, (prefix, group)| router.nest(prefix, group),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    info!(
        "Application built: database {}, routes mounted at {:?}",
        if database.is_bound() { "bound" } else { "unbound" },
        MOUNTED_PREFIXES
    );

    Ok(App {
        router,
        database,
        config: ResolvedConfig {
            secret_key: config.secret_key().map(str::to_string),
            database_uri,
            database_log_statements: config.database_log_statements,
            instance_path,
        },
    })
}

fn default_instance_path() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("instance")
}
