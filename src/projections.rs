//! Projection of API wire models into flat display rows.
//!
//! These are the only data transformations in the application: the roster
//! projection flattens nested roster entries into table rows, and the player
//! detail projection assembles the three row-groups of the detail panel from
//! a profile and a single-season stat split. Both are pure; all fetching
//! happens in the effect layer.

use nhl_statsapi::{PlayerInfo, RosterEntry, StatSplit};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProjectionError {
    /// The splits sequence was empty: the player has no statistics for the
    /// current season (common for injured reserves and recent call-ups).
    #[error("player {0} has no single-season stats")]
    NoSeasonStats(i64),
}

/// One row of the roster table.
///
/// `player_id` is the row key carried for the later row-selection event; it
/// is never displayed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RosterRow {
    pub player_id: i64,
    pub name: String,
    pub number: String,
    pub position: String,
}

/// The detail panel content: exactly one row per group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerDetail {
    pub player_id: i64,
    pub full_name: String,
    pub bio: BioRow,
    pub stat_line: StatLineRow,
    pub time_on_ice: TimeOnIceRow,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BioRow {
    pub number: String,
    pub position: String,
    pub hometown: Option<String>,
    pub age: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatLineRow {
    pub points: i64,
    pub goals: i64,
    pub assists: i64,
    pub shots: i64,
    pub hits: i64,
    pub power_play_points: i64,
    pub games: i64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimeOnIceRow {
    pub overall: String,
    pub even_strength: String,
    pub power_play: String,
    pub short_handed: String,
}

/// Flatten roster entries into table rows, preserving API order.
pub fn project_roster(roster: &[RosterEntry]) -> Vec<RosterRow> {
    roster
        .iter()
        .map(|entry| RosterRow {
            player_id: entry.person.id,
            name: entry.person.full_name.clone(),
            number: entry.jersey_number.clone(),
            position: entry.position.name.clone(),
        })
        .collect()
}

/// Assemble the detail panel from a profile and the first stat split.
///
/// `points` is always computed from goals and assists; the API's own points
/// field is never trusted. The time-on-ice strings are pre-formatted by the
/// API and pass through unmodified.
pub fn project_player_detail(
    player_id: i64,
    info: &PlayerInfo,
    splits: &[StatSplit],
) -> Result<PlayerDetail, ProjectionError> {
    let split = splits
        .first()
        .ok_or(ProjectionError::NoSeasonStats(player_id))?;
    let stat = &split.stat;

    Ok(PlayerDetail {
        player_id,
        full_name: info.full_name.clone(),
        bio: BioRow {
            number: info.primary_number.clone(),
            position: info.primary_position.abbreviation.clone(),
            hometown: info.birth_state_province.clone(),
            age: info.current_age,
        },
        stat_line: StatLineRow {
            points: stat.goals + stat.assists,
            goals: stat.goals,
            assists: stat.assists,
            shots: stat.shots,
            hits: stat.hits,
            power_play_points: stat.power_play_points,
            games: stat.games,
        },
        time_on_ice: TimeOnIceRow {
            overall: stat.time_on_ice_per_game.clone(),
            even_strength: stat.even_time_on_ice_per_game.clone(),
            power_play: stat.power_play_time_on_ice_per_game.clone(),
            short_handed: stat.short_handed_time_on_ice_per_game.clone(),
        },
    })
}
