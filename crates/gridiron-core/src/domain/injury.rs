//! Injury report entity

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use gridiron_shared::EntityId;

/// Designation on the weekly injury report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InjuryStatus {
    Questionable,
    Doubtful,
    Out,
    InjuredReserve,
}

impl InjuryStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            InjuryStatus::Questionable => "questionable",
            InjuryStatus::Doubtful => "doubtful",
            InjuryStatus::Out => "out",
            InjuryStatus::InjuredReserve => "injured_reserve",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "questionable" => Some(InjuryStatus::Questionable),
            "doubtful" => Some(InjuryStatus::Doubtful),
            "out" => Some(InjuryStatus::Out),
            "injured_reserve" => Some(InjuryStatus::InjuredReserve),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Injury {
    pub id: EntityId,
    pub player_id: EntityId,
    pub player_name: String,
    pub team_id: EntityId,
    pub team_name: String,
    pub status: InjuryStatus,
    pub description: String,
    pub reported_on: NaiveDate,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Validate)]
pub struct NewInjury {
    pub player_id: EntityId,
    pub status: InjuryStatus,
    #[validate(length(min = 2, max = 500, message = "Description must be between 2 and 500 characters"))]
    pub description: String,
    /// Defaults to today when omitted.
    #[serde(default)]
    pub reported_on: Option<NaiveDate>,
}

impl NewInjury {
    pub fn normalized(self) -> Result<Self, validator::ValidationErrors> {
        let injury = Self {
            description: self.description.trim().to_string(),
            ..self
        };
        injury.validate()?;
        Ok(injury)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct InjuryFilter {
    pub team_id: Option<EntityId>,
    pub status: Option<InjuryStatus>,
}
