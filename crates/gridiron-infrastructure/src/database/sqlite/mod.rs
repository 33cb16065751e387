//! SQLite repository implementations

pub mod user_repo_impl;
pub mod team_repo_impl;
pub mod player_repo_impl;
pub mod game_repo_impl;
pub mod injury_repo_impl;

pub use user_repo_impl::SqliteUserRepository;
pub use team_repo_impl::SqliteTeamRepository;
pub use player_repo_impl::SqlitePlayerRepository;
pub use game_repo_impl::SqliteGameRepository;
pub use injury_repo_impl::SqliteInjuryRepository;

use tracing::error;

use gridiron_core::error::DomainError;

fn query_error(action: &str, e: sqlx::Error) -> DomainError {
    error!("Database error {}: {}", action, e);
    DomainError::DatabaseError(e.to_string())
}

fn is_unique_violation(e: &sqlx::Error) -> bool {
    matches!(e, sqlx::Error::Database(db) if db.is_unique_violation())
}

fn is_foreign_key_violation(e: &sqlx::Error) -> bool {
    matches!(e, sqlx::Error::Database(db) if db.is_foreign_key_violation())
}
