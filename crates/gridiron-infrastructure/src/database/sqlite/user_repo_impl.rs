// ============================================================================
// Gridiron Infrastructure - SQLite User Repository
// File: crates/gridiron-infrastructure/src/database/sqlite/user_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use tracing::{error, info};

use gridiron_core::domain::{NewUser, User};
use gridiron_core::error::DomainError;
use gridiron_core::repositories::UserRepository;
use gridiron_shared::EntityId;

use super::{is_unique_violation, query_error};
use crate::database::Database;

pub struct SqliteUserRepository {
    db: Database,
}

impl SqliteUserRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

// Internal row type for SQLx mapping
#[derive(Debug, FromRow)]
struct UserRow {
    id: i64,
    username: String,
    password_hash: String,
    created_at: DateTime<Utc>,
    last_login: Option<DateTime<Utc>>,
}

impl From<UserRow> for User {
    fn from(row: UserRow) -> Self {
        User {
            id: row.id,
            username: row.username,
            password_hash: row.password_hash,
            created_at: row.created_at,
            last_login: row.last_login,
        }
    }
}

#[async_trait]
impl UserRepository for SqliteUserRepository {
    async fn find_by_id(&self, id: EntityId) -> Result<Option<User>, DomainError> {
        let row: Option<UserRow> = sqlx::query_as(
            r#"
            SELECT id, username, password_hash, created_at, last_login
            FROM users
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(self.db.pool()?)
        .await
        .map_err(|e| query_error("finding user by id", e))?;

        Ok(row.map(Into::into))
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<User>, DomainError> {
        let row: Option<UserRow> = sqlx::query_as(
            r#"
            SELECT id, username, password_hash, created_at, last_login
            FROM users
            WHERE username = ?1 COLLATE NOCASE
            "#,
        )
        .bind(username)
        .fetch_optional(self.db.pool()?)
        .await
        .map_err(|e| query_error("finding user by username", e))?;

        Ok(row.map(Into::into))
    }

    async fn create(&self, user: &NewUser) -> Result<User, DomainError> {
        info!("Creating user: {}", user.username);

        let row: UserRow = sqlx::query_as(
            r#"
            INSERT INTO users (username, password_hash, created_at)
            VALUES (?1, ?2, ?3)
            RETURNING id, username, password_hash, created_at, last_login
            "#,
        )
        .bind(&user.username)
        .bind(&user.password_hash)
        .bind(Utc::now())
        .fetch_one(self.db.pool()?)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                DomainError::UsernameAlreadyExists(user.username.clone())
            } else {
                query_error("creating user", e)
            }
        })?;

        info!("User created successfully: {}", row.id);
        Ok(row.into())
    }

    async fn record_login(&self, id: EntityId, at: DateTime<Utc>) -> Result<(), DomainError> {
        sqlx::query("UPDATE users SET last_login = ?1 WHERE id = ?2")
            .bind(at)
            .bind(id)
            .execute(self.db.pool()?)
            .await
            .map_err(|e| {
                error!("Database error updating last login: {}", e);
                DomainError::DatabaseError(e.to_string())
            })?;

        Ok(())
    }
}
