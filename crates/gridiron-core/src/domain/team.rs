//! Team entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use gridiron_shared::EntityId;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Team {
    pub id: EntityId,
    pub name: String,
    pub city: String,
    pub abbreviation: String,
    pub conference: Option<String>,
    pub division: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Validate)]
pub struct NewTeam {
    #[validate(length(min = 2, max = 100, message = "Team name must be between 2 and 100 characters"))]
    pub name: String,
    #[validate(length(min = 1, max = 100, message = "City must be between 1 and 100 characters"))]
    pub city: String,
    #[validate(custom(function = "validate_abbreviation"))]
    pub abbreviation: String,
    #[serde(default)]
    #[validate(length(max = 50))]
    pub conference: Option<String>,
    #[serde(default)]
    #[validate(length(max = 50))]
    pub division: Option<String>,
}

impl NewTeam {
    /// Trim text fields, upper-case the abbreviation, then validate.
    pub fn normalized(self) -> Result<Self, validator::ValidationErrors> {
        let team = Self {
            name: self.name.trim().to_string(),
            city: self.city.trim().to_string(),
            abbreviation: self.abbreviation.trim().to_uppercase(),
            conference: trim_optional(self.conference),
            division: trim_optional(self.division),
        };
        team.validate()?;
        Ok(team)
    }
}

pub(crate) fn trim_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn validate_abbreviation(abbreviation: &str) -> Result<(), ValidationError> {
    let valid = (2..=4).contains(&abbreviation.len())
        && abbreviation.chars().all(|c| c.is_ascii_uppercase());
    if valid {
        Ok(())
    } else {
        let mut error = ValidationError::new("abbreviation");
        error.message = Some("Abbreviation must be 2 to 4 letters".into());
        Err(error)
    }
}
