//! Repository traits (ports)

pub mod user_repository;
pub mod team_repository;
pub mod player_repository;
pub mod game_repository;
pub mod injury_repository;

pub use user_repository::UserRepository;
pub use team_repository::TeamRepository;
pub use player_repository::PlayerRepository;
pub use game_repository::GameRepository;
pub use injury_repository::InjuryRepository;

#[cfg(test)]
pub use user_repository::MockUserRepository;
#[cfg(test)]
pub use team_repository::MockTeamRepository;
#[cfg(test)]
pub use player_repository::MockPlayerRepository;
#[cfg(test)]
pub use game_repository::MockGameRepository;
#[cfg(test)]
pub use injury_repository::MockInjuryRepository;
