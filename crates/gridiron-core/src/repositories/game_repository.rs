//! Game repository trait (port)

use async_trait::async_trait;

use gridiron_shared::EntityId;

use crate::domain::{Game, GameFilter, GameResult, NewGame};
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GameRepository: Send + Sync {
    /// Matching games in chronological order (season, week, date, id).
    async fn list(&self, filter: &GameFilter) -> Result<Vec<Game>, DomainError>;
    async fn find_by_id(&self, id: EntityId) -> Result<Option<Game>, DomainError>;
    async fn create(&self, game: &NewGame) -> Result<Game, DomainError>;
    async fn record_result(
        &self,
        id: EntityId,
        result: &GameResult,
    ) -> Result<Option<Game>, DomainError>;
    async fn delete(&self, id: EntityId) -> Result<bool, DomainError>;
}
