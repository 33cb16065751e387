// ============================================================================
// Gridiron Infrastructure - SQLite Team Repository
// File: crates/gridiron-infrastructure/src/database/sqlite/team_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use tracing::info;

use gridiron_core::domain::{NewTeam, Team};
use gridiron_core::error::DomainError;
use gridiron_core::repositories::TeamRepository;
use gridiron_shared::EntityId;

use super::{is_unique_violation, query_error};
use crate::database::Database;

pub struct SqliteTeamRepository {
    db: Database,
}

impl SqliteTeamRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[derive(Debug, FromRow)]
struct TeamRow {
    id: i64,
    name: String,
    city: String,
    abbreviation: String,
    conference: Option<String>,
    division: Option<String>,
    created_at: DateTime<Utc>,
}

impl From<TeamRow> for Team {
    fn from(row: TeamRow) -> Self {
        Team {
            id: row.id,
            name: row.name,
            city: row.city,
            abbreviation: row.abbreviation,
            conference: row.conference,
            division: row.division,
            created_at: row.created_at,
        }
    }
}

#[async_trait]
impl TeamRepository for SqliteTeamRepository {
    async fn list(&self) -> Result<Vec<Team>, DomainError> {
        let rows: Vec<TeamRow> = sqlx::query_as(
            r#"
            SELECT id, name, city, abbreviation, conference, division, created_at
            FROM teams
            ORDER BY name, id
            "#,
        )
        .fetch_all(self.db.pool()?)
        .await
        .map_err(|e| query_error("listing teams", e))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: EntityId) -> Result<Option<Team>, DomainError> {
        let row: Option<TeamRow> = sqlx::query_as(
            r#"
            SELECT id, name, city, abbreviation, conference, division, created_at
            FROM teams
            WHERE id = ?1
            "#,
        )
        .bind(id)
        .fetch_optional(self.db.pool()?)
        .await
        .map_err(|e| query_error("finding team by id", e))?;

        Ok(row.map(Into::into))
    }

    async fn create(&self, team: &NewTeam) -> Result<Team, DomainError> {
        let row: TeamRow = sqlx::query_as(
            r#"
            INSERT INTO teams (name, city, abbreviation, conference, division, created_at)
            VALUES (?1, ?2, ?3, ?4, ?5, ?6)
            RETURNING id, name, city, abbreviation, conference, division, created_at
            "#,
        )
        .bind(&team.name)
        .bind(&team.city)
        .bind(&team.abbreviation)
        .bind(&team.conference)
        .bind(&team.division)
        .bind(Utc::now())
        .fetch_one(self.db.pool()?)
        .await
        .map_err(|e| {
            if is_unique_violation(&e) {
                DomainError::TeamNameAlreadyExists(team.name.clone())
            } else {
                query_error("creating team", e)
            }
        })?;

        Ok(row.into())
    }

    async fn delete(&self, id: EntityId) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM teams WHERE id = ?1")
            .bind(id)
            .execute(self.db.pool()?)
            .await
            .map_err(|e| query_error("deleting team", e))?;

        if result.rows_affected() > 0 {
            info!("Team {} deleted with its players, games and injuries", id);
        }
        Ok(result.rows_affected() > 0)
    }
}
