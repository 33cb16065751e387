//! Common types

/// Row id of every persisted entity (SQLite `INTEGER PRIMARY KEY`).
pub type EntityId = i64;
