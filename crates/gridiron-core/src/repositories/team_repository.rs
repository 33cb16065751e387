//! Team repository trait (port)

use async_trait::async_trait;

use gridiron_shared::EntityId;

use crate::domain::{NewTeam, Team};
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait TeamRepository: Send + Sync {
    /// All teams ordered by name.
    async fn list(&self) -> Result<Vec<Team>, DomainError>;
    async fn find_by_id(&self, id: EntityId) -> Result<Option<Team>, DomainError>;
    async fn create(&self, team: &NewTeam) -> Result<Team, DomainError>;
    /// `false` when no such team existed. Cascades to players, games, injuries.
    async fn delete(&self, id: EntityId) -> Result<bool, DomainError>;
}
