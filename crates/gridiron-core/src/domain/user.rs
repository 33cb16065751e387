//! User domain entity

use chrono::{DateTime, Utc};
use serde::Serialize;
use validator::{Validate, ValidationError};

use gridiron_shared::EntityId;

#[derive(Debug, Clone, Serialize)]
pub struct User {
    pub id: EntityId,
    pub username: String,
    #[serde(skip_serializing)]
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub last_login: Option<DateTime<Utc>>,
}

/// A user about to be inserted; the password is already hashed.
#[derive(Debug, Clone, PartialEq, Validate)]
pub struct NewUser {
    #[validate(
        length(min = 3, max = 80, message = "Username must be between 3 and 80 characters"),
        custom(function = "validate_username_chars")
    )]
    pub username: String,
    pub password_hash: String,
}

impl NewUser {
    pub fn new(username: &str, password_hash: String) -> Result<Self, validator::ValidationErrors> {
        let user = Self {
            username: username.trim().to_string(),
            password_hash,
        };
        user.validate()?;
        Ok(user)
    }
}

fn validate_username_chars(username: &str) -> Result<(), ValidationError> {
    let allowed = |c: char| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.');
    if username.chars().all(allowed) {
        Ok(())
    } else {
        let mut error = ValidationError::new("username_chars");
        error.message = Some("Username may only contain letters, digits, '_', '-' and '.'".into());
        Err(error)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_user_trims_username() {
        let user = NewUser::new("  coach_k ", "hash".into()).unwrap();
        assert_eq!(user.username, "coach_k");
    }

    #[test]
    fn rejects_short_or_odd_usernames() {
        assert!(NewUser::new("ab", "hash".into()).is_err());
        assert!(NewUser::new("coach k", "hash".into()).is_err());
        assert!(NewUser::new("coach!", "hash".into()).is_err());
    }
}
