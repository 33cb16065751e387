// ============================================================================
// Gridiron Infrastructure - SQLite Injury Repository
// File: crates/gridiron-infrastructure/src/database/sqlite/injury_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::FromRow;
use tracing::{error, info};

use gridiron_core::domain::{Injury, InjuryFilter, InjuryStatus};
use gridiron_core::error::DomainError;
use gridiron_core::repositories::InjuryRepository;
use gridiron_shared::EntityId;

use super::{is_foreign_key_violation, query_error};
use crate::database::Database;

const SELECT_INJURIES: &str = r#"
    SELECT i.id, i.player_id, p.name AS player_name, p.team_id, t.name AS team_name,
           i.status, i.description, i.reported_on
    FROM injuries i
    JOIN players p ON p.id = i.player_id
    JOIN teams t ON t.id = p.team_id
"#;

pub struct SqliteInjuryRepository {
    db: Database,
}

impl SqliteInjuryRepository {
    pub fn new(db: Database) -> Self {
        Self { db }
    }
}

#[derive(Debug, FromRow)]
struct InjuryRow {
    id: i64,
    player_id: i64,
    player_name: String,
    team_id: i64,
    team_name: String,
    status: String,
    description: String,
    reported_on: NaiveDate,
}

impl TryFrom<InjuryRow> for Injury {
    type Error = DomainError;

    fn try_from(row: InjuryRow) -> Result<Self, Self::Error> {
        let status = InjuryStatus::from_str(&row.status).ok_or_else(|| {
            error!("Injury {} has unknown status {:?}", row.id, row.status);
            DomainError::DatabaseError(format!("unknown injury status: {}", row.status))
        })?;

        Ok(Injury {
            id: row.id,
            player_id: row.player_id,
            player_name: row.player_name,
            team_id: row.team_id,
            team_name: row.team_name,
            status,
            description: row.description,
            reported_on: row.reported_on,
        })
    }
}

#[async_trait]
impl InjuryRepository for SqliteInjuryRepository {
    async fn list(&self, filter: &InjuryFilter) -> Result<Vec<Injury>, DomainError> {
        let sql = format!(
            "{SELECT_INJURIES}
            WHERE (?1 IS NULL OR p.team_id = ?1)
              AND (?2 IS NULL OR i.status = ?2)
            ORDER BY i.reported_on DESC, i.id DESC"
        );
        let rows: Vec<InjuryRow> = sqlx::query_as(&sql)
            .bind(filter.team_id)
            .bind(filter.status.map(|s| s.as_str()))
            .fetch_all(self.db.pool()?)
            .await
            .map_err(|e| query_error("listing injuries", e))?;

        rows.into_iter().map(Injury::try_from).collect()
    }

    async fn create(
        &self,
        player_id: EntityId,
        status: InjuryStatus,
        description: &str,
        reported_on: NaiveDate,
    ) -> Result<Injury, DomainError> {
        let result = sqlx::query(
            r#"
            INSERT INTO injuries (player_id, status, description, reported_on)
            VALUES (?1, ?2, ?3, ?4)
            "#,
        )
        .bind(player_id)
        .bind(status.as_str())
        .bind(description)
        .bind(reported_on)
        .execute(self.db.pool()?)
        .await
        .map_err(|e| {
            if is_foreign_key_violation(&e) {
                DomainError::UnknownReference(format!("player {} does not exist", player_id))
            } else {
                query_error("creating injury", e)
            }
        })?;

        let id = result.last_insert_rowid();
        info!("Injury {} reported for player {}: {}", id, player_id, status.as_str());

        let sql = format!("{SELECT_INJURIES} WHERE i.id = ?1");
        let row: InjuryRow = sqlx::query_as(&sql)
            .bind(id)
            .fetch_one(self.db.pool()?)
            .await
            .map_err(|e| query_error("loading created injury", e))?;

        row.try_into()
    }

    async fn delete(&self, id: EntityId) -> Result<bool, DomainError> {
        let result = sqlx::query("DELETE FROM injuries WHERE id = ?1")
            .bind(id)
            .execute(self.db.pool()?)
            .await
            .map_err(|e| query_error("deleting injury", e))?;

        Ok(result.rows_affected() > 0)
    }
}
