//! Player entity and season stat lines

use serde::{Deserialize, Serialize};
use validator::Validate;

use gridiron_shared::EntityId;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Player {
    pub id: EntityId,
    pub team_id: EntityId,
    pub team_name: String,
    pub name: String,
    pub position: String,
    pub jersey_number: Option<i32>,
    pub passing_yards: i32,
    pub rushing_yards: i32,
    pub receiving_yards: i32,
    pub touchdowns: i32,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Validate)]
pub struct NewPlayer {
    pub team_id: EntityId,
    #[validate(length(min = 2, max = 100, message = "Player name must be between 2 and 100 characters"))]
    pub name: String,
    #[validate(length(min = 1, max = 4, message = "Position must be between 1 and 4 characters"))]
    pub position: String,
    #[serde(default)]
    #[validate(range(min = 0, max = 99, message = "Jersey number must be between 0 and 99"))]
    pub jersey_number: Option<i32>,
    // Yardage can go negative (sacks, losses behind the line).
    #[serde(default)]
    pub passing_yards: i32,
    #[serde(default)]
    pub rushing_yards: i32,
    #[serde(default)]
    pub receiving_yards: i32,
    #[serde(default)]
    #[validate(range(min = 0, message = "Touchdowns cannot be negative"))]
    pub touchdowns: i32,
}

impl NewPlayer {
    pub fn normalized(self) -> Result<Self, validator::ValidationErrors> {
        let player = Self {
            name: self.name.trim().to_string(),
            position: self.position.trim().to_uppercase(),
            ..self
        };
        player.validate()?;
        Ok(player)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct PlayerFilter {
    pub team_id: Option<EntityId>,
    pub position: Option<String>,
}

/// Stat columns a leaderboard can rank by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatCategory {
    PassingYards,
    RushingYards,
    ReceivingYards,
    Touchdowns,
}

impl StatCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            StatCategory::PassingYards => "passing_yards",
            StatCategory::RushingYards => "rushing_yards",
            StatCategory::ReceivingYards => "receiving_yards",
            StatCategory::Touchdowns => "touchdowns",
        }
    }

    pub fn value(&self, player: &Player) -> i32 {
        match self {
            StatCategory::PassingYards => player.passing_yards,
            StatCategory::RushingYards => player.rushing_yards,
            StatCategory::ReceivingYards => player.receiving_yards,
            StatCategory::Touchdowns => player.touchdowns,
        }
    }
}
