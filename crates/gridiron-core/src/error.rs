//! Domain errors

use thiserror::Error;

use gridiron_shared::EntityId;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("User not found")]
    UserNotFound,

    #[error("Invalid credentials")]
    InvalidCredentials,

    #[error("Username already exists: {0}")]
    UsernameAlreadyExists(String),

    #[error("Team not found: {0}")]
    TeamNotFound(EntityId),

    #[error("Team name already exists: {0}")]
    TeamNameAlreadyExists(String),

    #[error("Player not found: {0}")]
    PlayerNotFound(EntityId),

    #[error("Game not found: {0}")]
    GameNotFound(EntityId),

    #[error("Injury not found: {0}")]
    InjuryNotFound(EntityId),

    #[error("Unknown reference: {0}")]
    UnknownReference(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Password hash error: {0}")]
    PasswordHashError(String),

    #[error("Token generation error: {0}")]
    TokenGenerationError(String),

    #[error("Database is not configured")]
    DatabaseNotConfigured,

    #[error("Database is unavailable: {0}")]
    DatabaseUnavailable(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl From<validator::ValidationErrors> for DomainError {
    fn from(errors: validator::ValidationErrors) -> Self {
        DomainError::ValidationError(errors.to_string())
    }
}
