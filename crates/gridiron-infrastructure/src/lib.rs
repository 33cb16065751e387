//! # Gridiron Infrastructure
//!
//! SQLite persistence (adapters) for the core repository traits.

pub mod database;

pub use database::{
    connect_options, Database, DatabaseError, PoolSettings, SqliteGameRepository,
    SqliteInjuryRepository, SqlitePlayerRepository, SqliteTeamRepository, SqliteUserRepository,
};
