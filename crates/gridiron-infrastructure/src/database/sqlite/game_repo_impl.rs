// ============================================================================
// Gridiron Infrastructure - SQLite Game Repository
// File: crates/gridiron-infrastructure/src/database/sqlite/game_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::FromRow;
use tracing::info;

use gridiron_core::domain::{Game, GameFilter, GameResult, NewGame};
use gridiron_core::error::DomainError;
use gridiron_core::repositories::GameRepository;
use gridiron_shared::EntityId;

use super::{is_foreign_key_violation, query_error};
use crate::database::Database;

const SELECT_GAMES: &str = r#"
    SELECT g.id, g.season, g.week, g.game_date,
           g.home_team_id, h.name AS home_team_name,
           g.away_team_id, a.name AS away_team_name,
           g.venue, g.home_score, g.away_score, g.attendance
    FROM games g
    JOIN teams h ON h.id = g.home_team_id
    JOIN teams a ON a.id = g.away_team_id
"#;

pub struct SqliteGameRepository {
    db: Database,
}

impl SqliteGameRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[derive(Debug, FromRow)]
struct GameRow {
    id: i64,
    season: i32,
    week: i32,
    game_date: Option<NaiveDate>,
    home_team_id: i64,
    home_team_name: String,
    away_team_id: i64,
    away_team_name: String,
    venue: Option<String>,
    home_score: Option<i32>,
    away_score: Option<i32>,
    attendance: Option<i64>,
}

impl From<GameRow> for Game {
    fn from(row: GameRow) -> Self {
        Game {
            id: row.id,
            season: row.season,
            week: row.week,
            game_date: row.game_date,
            home_team_id: row.home_team_id,
            home_team_name: row.home_team_name,
            away_team_id: row.away_team_id,
            away_team_name: row.away_team_name,
            venue: row.venue,
            home_score: row.home_score,
            away_score: row.away_score,
            attendance: row.attendance,
        }
    }
}

#[async_trait]
impl GameRepository for SqliteGameRepository {
    async fn list(&self, filter: &GameFilter) -> Result<Vec<Game>, DomainError> {
        let sql = format!(
            "{SELECT_GAMES}
            WHERE (?1 IS NULL
                   OR instr(lower(h.name), lower(?1)) > 0
                   OR instr(lower(a.name), lower(?1)) > 0)
              AND (?2 IS NULL OR g.week = ?2)
              AND (?3 IS NULL OR g.season = ?3)
            ORDER BY g.season, g.week, g.game_date, g.id"
        );
        let rows: Vec<GameRow> = sqlx::query_as(&sql)
            .bind(&filter.team)
            .bind(filter.week)
            .bind(filter.season)
            .fetch_all(self.db.pool()?)
            .await
            .map_err(|e| query_error("listing games", e))?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_by_id(&self, id: EntityId) -> Result<Option<Game>, DomainError> {
        let sql = format!("{SELECT_GAMES} WHERE g.id = ?1");
        let row: Option<GameRow> = sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(self.db.pool()?)
            .await
            .map_err(|e| query_error("finding game by id", e))?;

        Ok(row.map(Into::into))
    }

    async fn create(&self, game: &NewGame) -> Result<Game, DomainError> {
        let result = sqlx::query(
            r#"
            INSERT INTO games (
                season, week, game_date, home_team_id, away_team_id,
                venue, home_score, away_score, attendance
            )
            VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9)
            "#,
        )
        .bind(game.season)
        .bind(game.week)
        .bind(game.game_date)
        .bind(game.home_team_id)
        .bind(game.away_team_id)
        .bind(&game.venue)
        .bind(game.home_score)
        .bind(game.away_score)
        .bind(game.attendance)
        .execute(self.db.pool()?)
        .await
        .map_err(|e| {
            if is_foreign_key_violation(&e) {
                DomainError::UnknownReference("home or away team does not exist".into())
            } else {
                query_error("creating game", e)
            }
        })?;

        let id = result.last_insert_rowid();
        self.find_by_id(id)
            .await?
            .ok_or_else(|| DomainError::DatabaseError(format!("game {} vanished after insert", id)))
    }

    async fn record_result(
        &self,
        id: EntityId,
        result: &GameResult,
    ) -> Result<Option<Game>, DomainError> {
        let updated = sqlx::query(
            r#"
            UPDATE games
            SET home_score = ?1,
                away_score = ?2,
                attendance = COALESCE(?3, attendance)
            WHERE id = ?4
            "#,
        )
        .bind(result.home_score)
        .bind(result.away_score)
        .bind(result.attendance)
        .bind(id)
        .execute(self.db.pool()?)
        .await
        .map_err(|e| query_error("recording game result", e))?;

        if updated.rows_affected() == 0 {
            return Ok(None);
        }
        info!("Game {} final: {}-{}", id, result.home_score, result.away_score);
        self.find_by_id(id).await
    }

    async fn delete(&self, id: EntityId) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM games WHERE id = ?1")
            .bind(id)
            .execute(self.db.pool()?)
            .await
            .map_err(|e| query_error("deleting game", e))?;

        Ok(result.rows_affected() > 0)
    }
}
