//! Database module (SQLite adapters)

pub mod connection;
pub mod sqlite;

pub use connection::{connect_options, Database, DatabaseError, PoolSettings};
pub use sqlite::{
    SqliteGameRepository, SqliteInjuryRepository, SqlitePlayerRepository, SqliteTeamRepository,
    SqliteUserRepository,
};
