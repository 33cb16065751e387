//! # Gridiron Shared
//!
//! Configuration, telemetry, and the types every other Gridiron crate leans on.

pub mod constants;
pub mod types;
pub mod telemetry;
pub mod config;
pub mod database_uri;
pub mod error;

pub use types::*;
pub use error::AppError;
