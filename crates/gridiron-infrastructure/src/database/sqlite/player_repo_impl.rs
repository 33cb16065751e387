// ============================================================================
// Gridiron Infrastructure - SQLite Player Repository
// File: crates/gridiron-infrastructure/src/database/sqlite/player_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use sqlx::FromRow;

use gridiron_core::domain::{NewPlayer, Player, PlayerFilter};
use gridiron_core::error::DomainError;
use gridiron_core::repositories::PlayerRepository;
use gridiron_shared::EntityId;

use super::{is_foreign_key_violation, query_error};
use crate::database::Database;

const SELECT_PLAYERS: &str = r#"
    SELECT p.id, p.team_id, t.name AS team_name, p.name, p.position, p.jersey_number,
           p.passing_yards, p.rushing_yards, p.receiving_yards, p.touchdowns
    FROM players p
    JOIN teams t ON t.id = p.team_id
"#;

pub struct SqlitePlayerRepository {
    db: Database,
}

impl SqlitePlayerRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[derive(Debug, FromRow)]
struct PlayerRow {
    id: i64,
    team_id: i64,
    team_name: String,
    name: String,
    position: String,
    jersey_number: Option<i32>,
    passing_yards: i32,
    rushing_yards: i32,
    receiving_yards: i32,
    touchdowns: i32,
}

impl From<PlayerRow> for Player {
    fn from(row: PlayerRow) -> Self {
        Player {
            id: row.id,
            team_id: row.team_id,
            team_name: row.team_name,
            name: row.name,
            position: row.position,
            jersey_number: row.jersey_number,
            passing_yards: row.passing_yards,
            rushing_yards: row.rushing_yards,
            receiving_yards: row.receiving_yards,
            touchdowns: row.touchdowns,
        }
    }
}

#[async_trait]
impl PlayerRepository for SqlitePlayerRepository {
    async fn list(&self, filter: &PlayerFilter) -> Result<Vec<Player>, DomainError> {
        let sql = format!(
            "{SELECT_PLAYERS}
            WHERE (?1 IS NULL OR p.team_id = ?1)
              AND (?2 IS NULL OR p.position = ?2)
            ORDER BY p.name, p.id"
        );
        let rows: Vec<PlayerRow> = sqlx::query_as(&sql)
            .bind(filter.team_id)
            .bind(&filter.position)
            .fetch_all(self.db.pool()?)
            .await
            .map_err(|e| query_error("listing players", e))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: EntityId) -> Result<Option<Player>, DomainError> {
        let sql = format!("{SELECT_PLAYERS} WHERE p.id = ?1");
        let row: Option<PlayerRow> = sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(self.db.pool()?)
            .await
            .map_err(|e| query_error("finding player by id", e))?;

        Ok(row.map(Into::into))
    }

    async fn create(&self, player: &NewPlayer) -> Result<Player, DomainError> {
        let result = sqlx::query(
            r#"
            INSERT INTO players (
                team_id, name, position, jersey_number,
                passing_yards, rushing_yards, receiving_yards, touchdowns
            )
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
            "#,
        )
        .bind(player.team_id)
        .bind(&player.name)
        .bind(&player.position)
        .bind(player.jersey_number)
        .bind(player.passing_yards)
        .bind(player.rushing_yards)
        .bind(player.receiving_yards)
        .bind(player.touchdowns)
        .execute(self.db.pool()?)
        .await
        .map_err(|e| {
            if is_foreign_key_violation(&e) {
                DomainError::UnknownReference(format!("team {} does not exist", player.team_id))
            } else {
                query_error("creating player", e)
            }
        })?;

        let id = result.last_insert_rowid();
        self.find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::DatabaseError(format!("player {} vanished after insert", id)))
    }

    async fn delete(&self, id: EntityId) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM players WHERE id = ?1")
            .bind(id)
            .execute(self.db.pool()?)
            .await
            .map_err(|e| query_error("deleting player", e))?;

        Ok(result.rows_affected() > 0)
    }
}
