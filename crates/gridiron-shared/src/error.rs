//! Application error types

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    ConfigError(#[from] config::ConfigError),

    #[error("Invalid instance path {}: {source}", path.display())]
    InstancePath {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Instance path is not valid UTF-8: {}", .0.display())]
    NonUtf8Path(PathBuf),
}
