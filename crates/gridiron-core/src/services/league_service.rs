// ============================================================================
// Gridiron Core - League Service
// File: crates/gridiron-core/src/services/league_service.rs
// ============================================================================
//! Teams, rosters, schedule and injury reports

use std::sync::Arc;

use chrono::Utc;
use tracing::{info, warn};
use validator::Validate;

use gridiron_shared::EntityId;

use crate::domain::{
    Game, GameFilter, GameResult, Injury, InjuryFilter, NewGame, NewInjury, NewPlayer, NewTeam,
    Player, PlayerFilter, Team,
};
use crate::error::DomainError;
use crate::repositories::{GameRepository, InjuryRepository, PlayerRepository, TeamRepository};

pub struct LeagueService {
    teams: Arc<dyn TeamRepository>,
    players: Arc<dyn PlayerRepository>,
    games: Arc<dyn GameRepository>,
    injuries: Arc<dyn InjuryRepository>,
}

impl LeagueService {
    pub fn new(
        teams: Arc<dyn TeamRepository>,
        players: Arc<dyn PlayerRepository>,
        games: Arc<dyn GameRepository>,
        injuries: Arc<dyn InjuryRepository>,
    ) -> Self {
        Self {
            teams,
            players,
            games,
            injuries,
        }
    }

    // ------------------------------------------------------------------
    // Teams
    // ------------------------------------------------------------------

    pub async fn list_teams(&self) -> Result<Vec<Team>, DomainError> {
        self.teams.list().await
    }

    pub async fn get_team(&self, id: EntityId) -> Result<Team, DomainError> {
        self.teams
            .find_by_id(id)
            .await?
            .ok_or(DomainError::TeamNotFound(id))
    }

    pub async fn create_team(&self, team: NewTeam) -> Result<Team, DomainError> {
        let team = team.normalized()?;
        let created = self.teams.create(&team).await?;
        info!("Team created: {} ({})", created.name, created.id);
        Ok(created)
    }

    pub async fn delete_team(&self, id: EntityId) -> Result<(), DomainError> {
        if !self.teams.delete(id).await? {
            return Err(DomainError::TeamNotFound(id));
        }
        info!("Team deleted: {}", id);
        Ok(())
    }

    // ------------------------------------------------------------------
    // Players
    // ------------------------------------------------------------------

    pub async fn list_players(&self, filter: PlayerFilter) -> Result<Vec<Player>, DomainError> {
        let filter = PlayerFilter {
            position: filter
                .position
                .map(|p| p.trim().to_uppercase())
                .filter(|p| !p.is_empty()),
            ..filter
        };
        self.players.list(&filter).await
    }

    pub async fn get_player(&self, id: EntityId) -> Result<Player, DomainError> {
        self.players
            .find_by_id(id)
            .await?
            .ok_or(DomainError::PlayerNotFound(id))
    }

    pub async fn create_player(&self, player: NewPlayer) -> Result<Player, DomainError> {
        let player = player.normalized()?;
        self.require_team(player.team_id, "team").await?;
        let created = self.players.create(&player).await?;
        info!("Player created: {} ({})", created.name, created.id);
        Ok(created)
    }

    pub async fn delete_player(&self, id: EntityId) -> Result<(), DomainError> {
        if !self.players.delete(id).await? {
            return Err(DomainError::PlayerNotFound(id));
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Games
    // ------------------------------------------------------------------

    pub async fn list_games(&self, filter: GameFilter) -> Result<Vec<Game>, DomainError> {
        self.games.list(&filter.normalized()).await
    }

    pub async fn get_game(&self, id: EntityId) -> Result<Game, DomainError> {
        self.games
            .find_by_id(id)
            .await?
            .ok_or(DomainError::GameNotFound(id))
    }

    pub async fn create_game(&self, game: NewGame) -> Result<Game, DomainError> {
        let game = game.normalized()?;
        self.require_team(game.home_team_id, "home team").await?;
        self.require_team(game.away_team_id, "away team").await?;
        let created = self.games.create(&game).await?;
        info!(
            "Game created: {} vs {} (season {}, week {})",
            created.home_team_name, created.away_team_name, created.season, created.week
        );
        Ok(created)
    }

    pub async fn record_result(
        &self,
        id: EntityId,
        result: GameResult,
    ) -> Result<Game, DomainError> {
        result.validate()?;
        let game = self
            .games
            .record_result(id, &result)
            .await?
            .ok_or(DomainError::GameNotFound(id))?;
        info!(
            "Result recorded for game {}: {} {} - {} {}",
            game.id, game.home_team_name, result.home_score, result.away_score, game.away_team_name
        );
        Ok(game)
    }

    pub async fn delete_game(&self, id: EntityId) -> Result<(), DomainError> {
        if !self.games.delete(id).await? {
            return Err(DomainError::GameNotFound(id));
        }
        Ok(())
    }

    // ------------------------------------------------------------------
    // Injuries
    // ------------------------------------------------------------------

    pub async fn list_injuries(&self, filter: InjuryFilter) -> Result<Vec<Injury>, DomainError> {
        self.injuries.list(&filter).await
    }

    pub async fn report_injury(&self, injury: NewInjury) -> Result<Injury, DomainError> {
        let injury = injury.normalized()?;
        if self.players.find_by_id(injury.player_id).await?.is_none() {
            warn!("Injury report for unknown player {}", injury.player_id);
            return Err(DomainError::UnknownReference(format!(
                "player {} does not exist",
                injury.player_id
            )));
        }
        let reported_on = injury
            .reported_on
            .unwrap_or_else(|| Utc::now().date_naive());
        self.injuries
            .create(injury.player_id, injury.status, &injury.description, reported_on)
            .await
    }

    pub async fn delete_injury(&self, id: EntityId) -> Result<(), DomainError> {
        if !self.injuries.delete(id).await? {
            return Err(DomainError::InjuryNotFound(id));
        }
        Ok(())
    }

    async fn require_team(&self, id: EntityId, role: &str) -> Result<(), DomainError> {
        if self.teams.find_by_id(id).await?.is_none() {
            warn!("Reference to unknown {} {}", role, id);
            return Err(DomainError::UnknownReference(format!(
                "{} {} does not exist",
                role, id
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::InjuryStatus;
    use crate::repositories::{
        MockGameRepository, MockInjuryRepository, MockPlayerRepository, MockTeamRepository,
    };

    struct Mocks {
        teams: MockTeamRepository,
        players: MockPlayerRepository,
        games: MockGameRepository,
        injuries: MockInjuryRepository,
    }

    impl Mocks {
        fn new() -> Self {
            Self {
                teams: MockTeamRepository::new(),
                players: MockPlayerRepository::new(),
                games: MockGameRepository::new(),
                injuries: MockInjuryRepository::new(),
            }
        }

        fn into_service(self) -> LeagueService {
            LeagueService::new(
                Arc::new(self.teams),
                Arc::new(self.players),
                Arc::new(self.games),
                Arc::new(self.injuries),
            )
        }
    }

    fn team(id: EntityId) -> Team {
        Team {
            id,
            name: format!("Team {id}"),
            city: "City".into(),
            abbreviation: "TM".into(),
            conference: None,
            division: None,
            created_at: Utc::now(),
        }
    }

    fn new_game(home: EntityId, away: EntityId) -> NewGame {
        NewGame {
            season: 2024,
            week: 1,
            game_date: None,
            home_team_id: home,
            away_team_id: away,
            venue: None,
            home_score: None,
            away_score: None,
            attendance: None,
        }
    }

    #[tokio::test]
    async fn create_game_requires_both_teams() {
        let mut mocks = Mocks::new();
        mocks
            .teams
            .expect_find_by_id()
            .returning(|id| Ok((id == 1).then(|| team(id))));
        mocks.games.expect_create().never();

        let err = mocks.into_service().create_game(new_game(1, 2)).await.unwrap_err();
        assert!(matches!(err, DomainError::UnknownReference(msg) if msg.contains("away team 2")));
    }

    #[tokio::test]
    async fn create_game_rejects_self_matchup_before_lookup() {
        let mut mocks = Mocks::new();
        mocks.teams.expect_find_by_id().never();

        let err = mocks.into_service().create_game(new_game(3, 3)).await.unwrap_err();
        assert!(matches!(err, DomainError::ValidationError(_)));
    }

    #[tokio::test]
    async fn delete_missing_team_is_not_found() {
        let mut mocks = Mocks::new();
        mocks.teams.expect_delete().returning(|_| Ok(false));

        let err = mocks.into_service().delete_team(42).await.unwrap_err();
        assert!(matches!(err, DomainError::TeamNotFound(42)));
    }

    #[tokio::test]
    async fn record_result_on_unknown_game_is_not_found() {
        let mut mocks = Mocks::new();
        mocks.games.expect_record_result().returning(|_, _| Ok(None));

        let result = GameResult {
            home_score: 21,
            away_score: 14,
            attendance: None,
        };
        let err = mocks.into_service().record_result(9, result).await.unwrap_err();
        assert!(matches!(err, DomainError::GameNotFound(9)));
    }

    #[tokio::test]
    async fn record_result_rejects_negative_score() {
        let mut mocks = Mocks::new();
        mocks.games.expect_record_result().never();

        let result = GameResult {
            home_score: -1,
            away_score: 14,
            attendance: None,
        };
        let err = mocks.into_service().record_result(9, result).await.unwrap_err();
        assert!(matches!(err, DomainError::ValidationError(_)));
    }

    #[tokio::test]
    async fn report_injury_defaults_to_today() {
        let mut mocks = Mocks::new();
        mocks.players.expect_find_by_id().returning(|id| {
            Ok(Some(Player {
                id,
                team_id: 1,
                team_name: "Team 1".into(),
                name: "Runner".into(),
                position: "RB".into(),
                jersey_number: Some(22),
                passing_yards: 0,
                rushing_yards: 0,
                receiving_yards: 0,
                touchdowns: 0,
            }))
        });
        let today = Utc::now().date_naive();
        mocks
            .injuries
            .expect_create()
            .withf(move |player_id, status, description, reported_on| {
                *player_id == 5
                    && *status == InjuryStatus::Out
                    && description.to_string() == "Hamstring"
                    && *reported_on == today
            })
            .returning(|player_id, status, description, reported_on| {
                Ok(Injury {
                    id: 1,
                    player_id,
                    player_name: "Runner".into(),
                    team_id: 1,
                    team_name: "Team 1".into(),
                    status,
                    description: description.to_string(),
                    reported_on,
                })
            });

        let injury = mocks
            .into_service()
            .report_injury(NewInjury {
                player_id: 5,
                status: InjuryStatus::Out,
                description: " Hamstring ".into(),
                reported_on: None,
            })
            .await
            .unwrap();
        assert_eq!(injury.reported_on, today);
    }

    #[tokio::test]
    async fn list_players_normalizes_position() {
        let mut mocks = Mocks::new();
        mocks
            .players
            .expect_list()
            .withf(|filter| filter.position.as_deref() == Some("QB") && filter.team_id == Some(3))
            .returning(|_| Ok(Vec::new()));

        let players = mocks
            .into_service()
            .list_players(PlayerFilter {
                team_id: Some(3),
                position: Some(" qb ".into()),
            })
            .await
            .unwrap();
        assert!(players.is_empty());
    }
}
