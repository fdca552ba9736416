//! Deterministic fixture data for tests, benchmarks, and mock mode.
//!
//! The fixtures mirror the shapes the stats API actually returns: a team
//! directory with unique ids, rosters in API order, skater profiles, and
//! single-season stat splits. Player 8480000 deliberately has no splits to
//! exercise the no-season-stats path.

use nhl_statsapi::{
    Person, PlayerInfo, Position, PositionAbbrev, RosterEntry, SkaterStat, StatSplit, Team,
};

/// Player id with an intentionally empty splits sequence.
pub const PLAYER_WITHOUT_STATS: i64 = 8480000;

/// Create a small team directory including the default team (id 15).
pub fn create_mock_teams() -> Vec<Team> {
    vec![
        team(6, "Boston Bruins"),
        team(8, "Montreal Canadiens"),
        team(10, "Toronto Maple Leafs"),
        team(15, "Washington Capitals"),
    ]
}

fn team(id: i64, name: &str) -> Team {
    Team {
        id,
        name: name.to_string(),
    }
}

/// Create a roster for a team. Team 15 gets a recognizable Capitals lineup;
/// other teams get a synthetic four-player roster derived from the team id.
pub fn create_mock_roster(team_id: i64) -> Vec<RosterEntry> {
    if team_id == 15 {
        return vec![
            roster_entry(8471214, "Alex Ovechkin", "8", "Left Wing"),
            roster_entry(8473563, "Nicklas Backstrom", "19", "Center"),
            roster_entry(8476880, "Tom Wilson", "43", "Right Wing"),
            roster_entry(8474590, "John Carlson", "74", "Defenseman"),
            roster_entry(PLAYER_WITHOUT_STATS, "Taxi Squad Callup", "", "Center"),
        ];
    }

    (0..4)
        .map(|i| {
            roster_entry(
                8470000 + team_id * 100 + i,
                &format!("Player {}-{}", team_id, i),
                &format!("{}", 10 + i),
                "Center",
            )
        })
        .collect()
}

fn roster_entry(id: i64, name: &str, number: &str, position: &str) -> RosterEntry {
    RosterEntry {
        person: Person {
            id,
            full_name: name.to_string(),
        },
        jersey_number: number.to_string(),
        position: Position {
            name: position.to_string(),
        },
    }
}

/// Create a profile for a player.
pub fn create_mock_player_info(player_id: i64) -> PlayerInfo {
    if player_id == 8471214 {
        return PlayerInfo {
            full_name: "Alex Ovechkin".to_string(),
            primary_number: "8".to_string(),
            primary_position: PositionAbbrev {
                abbreviation: "LW".to_string(),
            },
            birth_state_province: Some("Moscow".to_string()),
            current_age: 36,
        };
    }

    PlayerInfo {
        full_name: format!("Player {}", player_id),
        primary_number: format!("{}", player_id % 100),
        primary_position: PositionAbbrev {
            abbreviation: "C".to_string(),
        },
        birth_state_province: None,
        current_age: 25,
    }
}

/// Create the single-season splits for a player.
pub fn create_mock_splits(player_id: i64) -> Vec<StatSplit> {
    if player_id == PLAYER_WITHOUT_STATS {
        return Vec::new();
    }
    vec![create_mock_split((player_id % 40) + 1, (player_id % 50) + 1)]
}

/// Create one split with the given goals and assists and fixed secondary
/// stats, so tests can assert computed points without noise.
pub fn create_mock_split(goals: i64, assists: i64) -> StatSplit {
    StatSplit {
        stat: SkaterStat {
            goals,
            assists,
            shots: 180,
            hits: 40,
            power_play_points: 12,
            games: 65,
            time_on_ice_per_game: "18:32".to_string(),
            even_time_on_ice_per_game: "14:01".to_string(),
            power_play_time_on_ice_per_game: "3:45".to_string(),
            short_handed_time_on_ice_per_game: "0:46".to_string(),
        },
    }
}
