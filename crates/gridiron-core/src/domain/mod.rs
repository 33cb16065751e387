//! # Gridiron Core - Domain Module
//!
//! League entities and the aggregates computed from them.

pub mod user;
pub mod team;
pub mod player;
pub mod game;
pub mod injury;
pub mod analytics;

// Re-export all entities and enums
pub use user::{NewUser, User};
pub use team::{NewTeam, Team};
pub use player::{NewPlayer, Player, PlayerFilter, StatCategory};
pub use game::{Game, GameFilter, GameResult, NewGame, Outcome};
pub use injury::{Injury, InjuryFilter, InjuryStatus, NewInjury};
pub use analytics::{HeadToHead, Record, StatLeader, TeamSummary, WeekSummary};
