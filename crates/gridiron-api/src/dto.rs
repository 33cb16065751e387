//! Request and response bodies

use std::fmt::Display;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{de, Deserialize, Deserializer, Serialize};
use validator::Validate;

use gridiron_core::domain::{
    GameFilter, InjuryFilter, InjuryStatus, PlayerFilter, StatCategory, User,
};
use gridiron_shared::EntityId;

use crate::error::ApiError;

// ----------------------------------------------------------------------------
// Auth
// ----------------------------------------------------------------------------

#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 3, max = 80, message = "Username must be between 3 and 80 characters"))]
    pub username: String,
    #[validate(length(min = 6, max = 128, message = "Password must be between 6 and 128 characters"))]
    pub password: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct TokenResponse {
    pub access_token: String,
    pub token_type: &'static str,
    pub expires_in: i64,
}

#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: EntityId,
    pub username: String,
    pub created_at: DateTime<Utc>,
    pub last_login: Option<DateTime<Utc>>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            created_at: user.created_at,
            last_login: user.last_login,
        }
    }
}

// ----------------------------------------------------------------------------
// Query strings
// ----------------------------------------------------------------------------
// Browsers send `?week=` for an untouched filter box, so blank values
// deserialize to `None` instead of failing.

#[derive(Debug, Default, Deserialize)]
pub struct GameQuery {
    #[serde(default)]
    pub team: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub week: Option<i32>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub season: Option<i32>,
}

impl From<GameQuery> for GameFilter {
    fn from(query: GameQuery) -> Self {
        GameFilter {
            team: query.team,
            week: query.week,
            season: query.season,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct PlayerQuery {
    #[serde(default, deserialize_with = "blank_as_none")]
    pub team_id: Option<EntityId>,
    #[serde(default)]
    pub position: Option<String>,
}

impl From<PlayerQuery> for PlayerFilter {
    fn from(query: PlayerQuery) -> Self {
        PlayerFilter {
            team_id: query.team_id,
            position: query.position,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct InjuryQuery {
    #[serde(default, deserialize_with = "blank_as_none")]
    pub team_id: Option<EntityId>,
    #[serde(default)]
    pub status: Option<String>,
}

impl TryFrom<InjuryQuery> for InjuryFilter {
    type Error = ApiError;

    fn try_from(query: InjuryQuery) -> Result<Self, Self::Error> {
        let status = match query.status.as_deref().map(str::trim) {
            None | Some("") => None,
            Some(raw) => Some(InjuryStatus::from_str(raw).ok_or_else(|| {
                ApiError::BadRequest(format!("Unknown injury status: {}", raw))
            })?),
        };
        Ok(InjuryFilter {
            team_id: query.team_id,
            status,
        })
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct SeasonQuery {
    #[serde(default, deserialize_with = "blank_as_none")]
    pub season: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub struct HeadToHeadQuery {
    pub team_a: EntityId,
    pub team_b: EntityId,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub season: Option<i32>,
}

#[derive(Debug, Deserialize)]
pub struct LeadersQuery {
    pub stat: StatCategory,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub limit: Option<u32>,
}

fn blank_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    match Option::<String>::deserialize(deserializer)?.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(raw) => raw.parse().map(Some).map_err(de::Error::custom),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::extract::Query;
    use axum::http::Uri;

    fn query<T: serde::de::DeserializeOwned>(uri: &str) -> Result<T, String> {
        let uri: Uri = uri.parse().unwrap();
        Query::<T>::try_from_uri(&uri)
            .map(|Query(value)| value)
            .map_err(|e| e.body_text())
    }

    #[test]
    fn blank_filters_are_ignored() {
        let parsed: GameQuery = query("/games?team=&week=&season=").unwrap();
        assert_eq!(parsed.week, None);
        assert_eq!(parsed.season, None);

        let parsed: GameQuery = query("/games?week=3&season=2024").unwrap();
        assert_eq!(parsed.week, Some(3));
        assert_eq!(parsed.season, Some(2024));
    }

    #[test]
    fn non_numeric_filter_is_an_error() {
        assert!(query::<GameQuery>("/games?week=three").is_err());
    }

    #[test]
    fn injury_status_is_checked() {
        let filter = InjuryFilter::try_from(InjuryQuery {
            team_id: Some(1),
            status: Some("out".into()),
        })
        .unwrap();
        assert_eq!(filter.status, Some(InjuryStatus::Out));

        assert!(InjuryFilter::try_from(InjuryQuery {
            team_id: None,
            status: Some("probable".into()),
        })
        .is_err());
    }

    #[test]
    fn leaders_query_parses_stat_names() {
        let parsed: LeadersQuery = query("/leaders?stat=receiving_yards&limit=5").unwrap();
        assert_eq!(parsed.stat, StatCategory::ReceivingYards);
        assert_eq!(parsed.limit, Some(5));
        assert!(query::<LeadersQuery>("/leaders?stat=sacks").is_err());
    }

    #[test]
    fn register_request_enforces_lengths() {
        let short = RegisterRequest {
            username: "ab".into(),
            password: "secret123".into(),
        };
        assert!(short.validate().is_err());

        let ok = RegisterRequest {
            username: "coach".into(),
            password: "secret123".into(),
        };
        assert!(ok.validate().is_ok());
    }
}
