//! Read-only analytics over completed games and player stat lines

use std::sync::Arc;

use tracing::debug;

use gridiron_shared::constants::{DEFAULT_LEADERS_LIMIT, MAX_LEADERS_LIMIT, MAX_WEEK, MIN_WEEK};
use gridiron_shared::EntityId;

use crate::domain::analytics::{rank_standings, stat_leaders};
use crate::domain::{
    GameFilter, HeadToHead, PlayerFilter, StatCategory, StatLeader, Team, TeamSummary,
    WeekSummary,
};
use crate::error::DomainError;
use crate::repositories::{GameRepository, PlayerRepository, TeamRepository};

pub struct AnalyticsService {
    teams: Arc<dyn TeamRepository>,
    players: Arc<dyn PlayerRepository>,
    games: Arc<dyn GameRepository>,
}

impl AnalyticsService {
    pub fn new(
        teams: Arc<dyn TeamRepository>,
        players: Arc<dyn PlayerRepository>,
        games: Arc<dyn GameRepository>,
    ) -> Self {
        Self {
            teams,
            players,
            games,
        }
    }

    pub async fn team_summary(
        &self,
        team_id: EntityId,
        season: Option<i32>,
    ) -> Result<TeamSummary, DomainError> {
        let team = self.team(team_id).await?;
        let games = self.games.list(&season_filter(season)).await?;
        Ok(TeamSummary::compute(&team, season, &games))
    }

    pub async fn standings(&self, season: Option<i32>) -> Result<Vec<TeamSummary>, DomainError> {
        let teams = self.teams.list().await?;
        let games = self.games.list(&season_filter(season)).await?;
        debug!("Computing standings for {} teams over {} games", teams.len(), games.len());

        let mut summaries: Vec<TeamSummary> = teams
            .iter()
            .map(|team| TeamSummary::compute(team, season, &games))
            .collect();
        rank_standings(&mut summaries);
        Ok(summaries)
    }

    pub async fn week_summary(
        &self,
        week: i32,
        season: Option<i32>,
    ) -> Result<WeekSummary, DomainError> {
        if !(MIN_WEEK..=MAX_WEEK).contains(&week) {
            return Err(DomainError::ValidationError(format!(
                "week: Week must be between {} and {}",
                MIN_WEEK, MAX_WEEK
            )));
        }
        let filter = GameFilter {
            week: Some(week),
            season,
            ..GameFilter::default()
        };
        let games = self.games.list(&filter).await?;
        Ok(WeekSummary::compute(week, season, &games))
    }

    pub async fn head_to_head(
        &self,
        team_a: EntityId,
        team_b: EntityId,
        season: Option<i32>,
    ) -> Result<HeadToHead, DomainError> {
        if team_a == team_b {
            return Err(DomainError::ValidationError(
                "team_b: Head-to-head needs two different teams".into(),
            ));
        }
        let a = self.team(team_a).await?;
        let b = self.team(team_b).await?;
        let games = self.games.list(&season_filter(season)).await?;
        Ok(HeadToHead::compute(&a, &b, season, &games))
    }

    /// `limit` defaults to 10 and is clamped to 1..=50.
    pub async fn leaders(
        &self,
        stat: StatCategory,
        limit: Option<u32>,
    ) -> Result<Vec<StatLeader>, DomainError> {
        let limit = limit
            .unwrap_or(DEFAULT_LEADERS_LIMIT)
            .clamp(1, MAX_LEADERS_LIMIT);
        let players = self.players.list(&PlayerFilter::default()).await?;
        Ok(stat_leaders(&players, stat, limit as usize))
    }

    async fn team(&self, id: EntityId) -> Result<Team, DomainError> {
        self.teams
            .find_by_id(id)
            .await?
            .ok_or(DomainError::TeamNotFound(id))
    }
}

fn season_filter(season: Option<i32>) -> GameFilter {
    GameFilter {
        season,
        ..GameFilter::default()
    }
}
