//! Game entity
//!
//! A game is scheduled until both scores are recorded; only completed games
//! count toward records and analytics.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use gridiron_shared::EntityId;

use super::team::trim_optional;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Game {
    pub id: EntityId,
    pub season: i32,
    pub week: i32,
    pub game_date: Option<NaiveDate>,
    pub home_team_id: EntityId,
    pub home_team_name: String,
    pub away_team_id: EntityId,
    pub away_team_name: String,
    pub venue: Option<String>,
    pub home_score: Option<i32>,
    pub away_score: Option<i32>,
    pub attendance: Option<i64>,
}

/// Result of a completed game from one team's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Win,
    Loss,
    Tie,
}

impl Outcome {
    pub fn letter(&self) -> char {
        match self {
            Outcome::Win => 'W',
            Outcome::Loss => 'L',
            Outcome::Tie => 'T',
        }
    }
}

impl Game {
    pub fn scores(&self) -> Option<(i32, i32)> {
        self.home_score.zip(self.away_score)
    }

    pub fn is_completed(&self) -> bool {
        self.scores().is_some()
    }

    pub fn involves(&self, team_id: EntityId) -> bool {
        self.home_team_id == team_id || self.away_team_id == team_id
    }

    pub fn total_points(&self) -> Option<i64> {
        self.scores()
            .map(|(home, away)| i64::from(home) + i64::from(away))
    }

    pub fn margin(&self) -> Option<i64> {
        self.scores()
            .map(|(home, away)| (i64::from(home) - i64::from(away)).abs())
    }

    /// Points scored and allowed by `team_id`, if it played and the game is final.
    pub fn points_for(&self, team_id: EntityId) -> Option<(i32, i32)> {
        let (home, away) = self.scores()?;
        if self.home_team_id == team_id {
            Some((home, away))
        } else if self.away_team_id == team_id {
            Some((away, home))
        } else {
            None
        }
    }

    pub fn outcome_for(&self, team_id: EntityId) -> Option<Outcome> {
        let (scored, allowed) = self.points_for(team_id)?;
        Some(match scored.cmp(&allowed) {
            std::cmp::Ordering::Greater => Outcome::Win,
            std::cmp::Ordering::Less => Outcome::Loss,
            std::cmp::Ordering::Equal => Outcome::Tie,
        })
    }

    /// Chronological sort key.
    pub fn sort_key(&self) -> (i32, i32, Option<NaiveDate>, EntityId) {
        (self.season, self.week, self.game_date, self.id)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Validate)]
#[validate(schema(function = "validate_distinct_teams"))]
pub struct NewGame {
    #[validate(range(min = 1920, max = 2100, message = "Season must be a year between 1920 and 2100"))]
    pub season: i32,
    #[validate(range(min = 1, max = 18, message = "Week must be between 1 and 18"))]
    pub week: i32,
    #[serde(default)]
    pub game_date: Option<NaiveDate>,
    pub home_team_id: EntityId,
    pub away_team_id: EntityId,
    #[serde(default)]
    #[validate(length(max = 100))]
    pub venue: Option<String>,
    #[serde(default)]
    #[validate(range(min = 0, max = 999, message = "Scores must be between 0 and 999"))]
    pub home_score: Option<i32>,
    #[serde(default)]
    #[validate(range(min = 0, max = 999, message = "Scores must be between 0 and 999"))]
    pub away_score: Option<i32>,
    #[serde(default)]
    #[validate(range(min = 0, max = 10_000_000, message = "Attendance must be between 0 and 10,000,000"))]
    pub attendance: Option<i64>,
}

impl NewGame {
    pub fn normalized(self) -> Result<Self, validator::ValidationErrors> {
        let game = Self {
            venue: trim_optional(self.venue),
            ..self
        };
        game.validate()?;
        Ok(game)
    }
}

fn validate_distinct_teams(game: &NewGame) -> Result<(), ValidationError> {
    if game.home_team_id == game.away_team_id {
        let mut error = ValidationError::new("distinct_teams");
        error.message = Some("A team cannot play itself".into());
        return Err(error);
    }
    Ok(())
}

/// Final score (and gate) recorded after a game.
#[derive(Debug, Clone, PartialEq, Deserialize, Validate)]
pub struct GameResult {
    #[validate(range(min = 0, max = 999, message = "Scores must be between 0 and 999"))]
    pub home_score: i32,
    #[validate(range(min = 0, max = 999, message = "Scores must be between 0 and 999"))]
    pub away_score: i32,
    #[serde(default)]
    #[validate(range(min = 0, max = 10_000_000, message = "Attendance must be between 0 and 10,000,000"))]
    pub attendance: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct GameFilter {
    /// Case-insensitive substring of either team's name.
    pub team: Option<String>,
    pub week: Option<i32>,
    pub season: Option<i32>,
}

impl GameFilter {
    /// Drop blank team text so `?team=` behaves like no filter.
    pub fn normalized(self) -> Self {
        Self {
            team: trim_optional(self.team),
            ..self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn game(home: Option<i32>, away: Option<i32>) -> Game {
        Game {
            id: 1,
            season: 2024,
            week: 1,
            game_date: None,
            home_team_id: 10,
            home_team_name: "Dallas Cowboys".into(),
            away_team_id: 20,
            away_team_name: "New York Giants".into(),
            venue: None,
            home_score: home,
            away_score: away,
            attendance: None,
        }
    }

    #[test]
    fn outcome_is_seen_from_each_side() {
        let g = game(Some(27), Some(20));
        assert_eq!(g.outcome_for(10), Some(Outcome::Win));
        assert_eq!(g.outcome_for(20), Some(Outcome::Loss));
        assert_eq!(g.outcome_for(30), None);
        assert_eq!(g.points_for(20), Some((20, 27)));
        assert_eq!(g.margin(), Some(7));
        assert_eq!(g.total_points(), Some(47));
    }

    #[test]
    fn scheduled_game_has_no_outcome() {
        let g = game(Some(3), None);
        assert!(!g.is_completed());
        assert_eq!(g.outcome_for(10), None);
        assert_eq!(g.total_points(), None);
    }

    #[test]
    fn tie_is_a_tie_for_both() {
        let g = game(Some(17), Some(17));
        assert_eq!(g.outcome_for(10), Some(Outcome::Tie));
        assert_eq!(g.outcome_for(20), Some(Outcome::Tie));
    }

    fn new_game(home: EntityId, away: EntityId, week: i32) -> NewGame {
        NewGame {
            season: 2024,
            week,
            game_date: None,
            home_team_id: home,
            away_team_id: away,
            venue: Some("  AT&T Stadium ".into()),
            home_score: None,
            away_score: None,
            attendance: None,
        }
    }

    #[test]
    fn new_game_validation() {
        let ok = new_game(1, 2, 1).normalized().unwrap();
        assert_eq!(ok.venue.as_deref(), Some("AT&T Stadium"));

        assert!(new_game(1, 1, 1).normalized().is_err());
        assert!(new_game(1, 2, 0).normalized().is_err());
        assert!(new_game(1, 2, 19).normalized().is_err());
    }

    #[test]
    fn result_scores_and_attendance_are_bounded() {
        let result = |home_score, away_score, attendance| GameResult {
            home_score,
            away_score,
            attendance,
        };
        assert!(result(999, 0, Some(10_000_000)).validate().is_ok());
        assert!(result(1_000, 0, None).validate().is_err());
        assert!(result(i32::MAX, i32::MAX, None).validate().is_err());
        assert!(result(21, 14, Some(i64::MAX)).validate().is_err());
        assert!(result(-1, 14, None).validate().is_err());
    }

    #[test]
    fn totals_are_widened_before_adding() {
        let g = game(Some(i32::MAX), Some(i32::MAX));
        assert_eq!(g.total_points(), Some(2 * i64::from(i32::MAX)));
        assert_eq!(game(Some(i32::MIN), Some(i32::MAX)).margin(), Some(u32::MAX as i64));
    }

    #[test]
    fn blank_team_filter_is_dropped() {
        let filter = GameFilter {
            team: Some("  ".into()),
            week: Some(3),
            season: None,
        }
        .normalized();
        assert_eq!(filter.team, None);
        assert_eq!(filter.week, Some(3));
    }
}
