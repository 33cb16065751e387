//! Player repository trait (port)

use async_trait::async_trait;

use gridiron_shared::EntityId;

use crate::domain::{NewPlayer, Player, PlayerFilter};
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PlayerRepository: Send + Sync {
    async fn list(&self, filter: &PlayerFilter) -> Result<Vec<Player>, DomainError>;
    async fn find_by_id(&self, id: EntityId) -> Result<Option<Player>, DomainError>;
    async fn create(&self, player: &NewPlayer) -> Result<Player, DomainError>;
    async fn delete(&self, id: EntityId) -> Result<bool, DomainError>;
}
