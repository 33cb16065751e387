//! Aggregates computed from completed games and player stat lines

use serde::Serialize;

use gridiron_shared::EntityId;

use super::game::{Game, Outcome};
use super::player::{Player, StatCategory};
use super::team::Team;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Record {
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
}

impl Record {
    pub fn add(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Win => self.wins += 1,
            Outcome::Loss => self.losses += 1,
            Outcome::Tie => self.ties += 1,
        }
    }

    pub fn games(&self) -> u32 {
        self.wins + self.losses + self.ties
    }

    /// Ties count as half a win.
    pub fn win_percentage(&self) -> f64 {
        match self.games() {
            0 => 0.0,
            games => round3((self.wins as f64 + 0.5 * self.ties as f64) / games as f64),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamSummary {
    pub team_id: EntityId,
    pub team_name: String,
    pub season: Option<i32>,
    pub games_played: u32,
    pub wins: u32,
    pub losses: u32,
    pub ties: u32,
    pub win_percentage: f64,
    pub points_for: i64,
    pub points_against: i64,
    pub point_differential: i64,
    pub average_points_for: f64,
    pub average_points_against: f64,
    pub home_record: Record,
    pub away_record: Record,
    pub average_attendance: Option<f64>,
    /// `W3`, `L1`, `T1`, or empty before the first completed game.
    pub streak: String,
}

impl TeamSummary {
    /// Summarize `team` over the completed games in `games` it took part in.
    pub fn compute(team: &Team, season: Option<i32>, games: &[Game]) -> Self {
        let mut played: Vec<&Game> = games
            .iter()
            .filter(|g| g.involves(team.id) && g.is_completed())
            .filter(|g| season.is_none_or(|s| g.season == s))
            .collect();
        played.sort_by_key(|g| g.sort_key());

        let mut record = Record::default();
        let mut home_record = Record::default();
        let mut away_record = Record::default();
        let (mut points_for, mut points_against) = (0i64, 0i64);
        let (mut attendance_total, mut attendance_games) = (0i64, 0u32);
        let mut outcomes = Vec::with_capacity(played.len());

        for game in &played {
            let (Some(outcome), Some((scored, allowed))) =
                (game.outcome_for(team.id), game.points_for(team.id))
            else {
                continue;
            };
            record.add(outcome);
            if game.home_team_id == team.id {
                home_record.add(outcome);
            } else {
                away_record.add(outcome);
            }
            points_for = points_for.saturating_add(i64::from(scored));
            points_against = points_against.saturating_add(i64::from(allowed));
            if let Some(attendance) = game.attendance {
                attendance_total = attendance_total.saturating_add(attendance);
                attendance_games += 1;
            }
            outcomes.push(outcome);
        }

        let games_played = record.games();
        Self {
            team_id: team.id,
            team_name: team.name.clone(),
            season,
            games_played,
            wins: record.wins,
            losses: record.losses,
            ties: record.ties,
            win_percentage: record.win_percentage(),
            points_for,
            points_against,
            point_differential: points_for.saturating_sub(points_against),
            average_points_for: average(points_for, games_played),
            average_points_against: average(points_against, games_played),
            home_record,
            away_record,
            average_attendance: (attendance_games > 0)
                .then(|| average(attendance_total, attendance_games)),
            streak: streak(&outcomes),
        }
    }
}

/// Current run of identical outcomes, most recent game last.
fn streak(outcomes: &[Outcome]) -> String {
    let Some(last) = outcomes.last() else {
        return String::new();
    };
    let length = outcomes.iter().rev().take_while(|o| *o == last).count();
    format!("{}{}", last.letter(), length)
}

/// Order summaries as a standings table: win percentage, then point
/// differential, then name.
pub fn rank_standings(summaries: &mut [TeamSummary]) {
    summaries.sort_by(|a, b| {
        b.win_percentage
            .total_cmp(&a.win_percentage)
            .then(b.point_differential.cmp(&a.point_differential))
            .then_with(|| a.team_name.cmp(&b.team_name))
    });
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeekSummary {
    pub season: Option<i32>,
    pub week: i32,
    pub games_scheduled: u32,
    pub games_completed: u32,
    pub total_points: i64,
    pub average_total_points: f64,
    pub average_margin: f64,
    pub highest_scoring_game: Option<Game>,
    pub closest_game: Option<Game>,
    pub total_attendance: i64,
}

impl WeekSummary {
    /// `games` are the week's games; ones from other weeks or seasons are ignored.
    pub fn compute(week: i32, season: Option<i32>, games: &[Game]) -> Self {
        let mut scheduled: Vec<&Game> = games
            .iter()
            .filter(|g| g.week == week && season.is_none_or(|s| g.season == s))
            .collect();
        scheduled.sort_by_key(|g| g.sort_key());
        let completed: Vec<&Game> = scheduled.iter().copied().filter(|g| g.is_completed()).collect();

        let games_completed = count(completed.len());
        let total_points = saturating_sum(completed.iter().filter_map(|g| g.total_points()));
        let total_margin = saturating_sum(completed.iter().filter_map(|g| g.margin()));

        // Earliest game wins ties in both directions.
        let highest_scoring_game = completed
            .iter()
            .copied()
            .rev()
            .max_by_key(|g| g.total_points())
            .cloned();
        let closest_game = completed.iter().copied().min_by_key(|g| g.margin()).cloned();

        Self {
            season,
            week,
            games_scheduled: count(scheduled.len()),
            games_completed,
            total_points,
            average_total_points: average(total_points, games_completed),
            average_margin: average(total_margin, games_completed),
            highest_scoring_game,
            closest_game,
            total_attendance: saturating_sum(scheduled.iter().filter_map(|g| g.attendance)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HeadToHead {
    pub team_a_id: EntityId,
    pub team_a_name: String,
    pub team_b_id: EntityId,
    pub team_b_name: String,
    pub team_a_wins: u32,
    pub team_b_wins: u32,
    pub ties: u32,
    pub games: Vec<Game>,
}

impl HeadToHead {
    pub fn compute(team_a: &Team, team_b: &Team, season: Option<i32>, games: &[Game]) -> Self {
        let mut meetings: Vec<Game> = games
            .iter()
            .filter(|g| g.involves(team_a.id) && g.involves(team_b.id) && g.is_completed())
            .filter(|g| season.is_none_or(|s| g.season == s))
            .cloned()
            .collect();
        meetings.sort_by_key(|g| g.sort_key());

        let mut record = Record::default();
        for outcome in meetings.iter().filter_map(|g| g.outcome_for(team_a.id)) {
            record.add(outcome);
        }

        Self {
            team_a_id: team_a.id,
            team_a_name: team_a.name.clone(),
            team_b_id: team_b.id,
            team_b_name: team_b.name.clone(),
            team_a_wins: record.wins,
            team_b_wins: record.losses,
            ties: record.ties,
            games: meetings,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StatLeader {
    pub rank: u32,
    pub player_id: EntityId,
    pub name: String,
    pub team_name: String,
    pub position: String,
    pub stat: StatCategory,
    pub value: i32,
}

/// Top `limit` players by `stat`, highest first; equal values rank by name.
pub fn stat_leaders(players: &[Player], stat: StatCategory, limit: usize) -> Vec<StatLeader> {
    let mut ranked: Vec<&Player> = players.iter().collect();
    ranked.sort_by(|a, b| {
        stat.value(b)
            .cmp(&stat.value(a))
            .then_with(|| a.name.cmp(&b.name))
    });

    ranked
        .into_iter()
        .take(limit)
        .zip(1..)
        .map(|(player, rank)| StatLeader {
            rank,
            player_id: player.id,
            name: player.name.clone(),
            team_name: player.team_name.clone(),
            position: player.position.clone(),
            stat,
            value: stat.value(player),
        })
        .collect()
}

fn saturating_sum(values: impl Iterator<Item = i64>) -> i64 {
    values.fold(0, i64::saturating_add)
}

fn count(len: usize) -> u32 {
    u32::try_from(len).unwrap_or(u32::MAX)
}

fn average(total: i64, count: u32) -> f64 {
    match count {
        0 => 0.0,
        n => round3(total as f64 / f64::from(n)),
    }
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
