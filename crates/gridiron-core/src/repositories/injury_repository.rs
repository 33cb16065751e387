//! Injury repository trait (port)

use async_trait::async_trait;
use chrono::NaiveDate;

use gridiron_shared::EntityId;

use crate::domain::{Injury, InjuryFilter, InjuryStatus};
use crate::error::DomainError;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait InjuryRepository: Send + Sync {
    /// Most recent reports first.
    async fn list(&self, filter: &InjuryFilter) -> Result<Vec<Injury>, DomainError>;
    async fn create(
        &self,
        player_id: EntityId,
        status: InjuryStatus,
        description: &str,
        reported_on: NaiveDate,
    ) -> Result<Injury, DomainError>;
    async fn delete(&self, id: EntityId) -> Result<bool, DomainError>;
}
