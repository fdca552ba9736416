//! Wire models for the stats API responses.
//!
//! Field names follow the API's camelCase JSON. Only the fields the dashboard
//! consumes are modeled; unknown fields are ignored during deserialization.

use serde::Deserialize;

/// One entry of the team directory (`GET /teams`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Team {
    pub id: i64,
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TeamsResponse {
    pub teams: Vec<Team>,
}

/// One entry of a team roster (`GET /teams/{id}/roster`).
///
/// `jerseyNumber` is occasionally absent for recent call-ups; it defaults to
/// an empty string rather than failing the whole roster.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RosterEntry {
    pub person: Person,
    #[serde(default)]
    pub jersey_number: String,
    pub position: Position,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Person {
    pub id: i64,
    pub full_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Position {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct RosterResponse {
    pub roster: Vec<RosterEntry>,
}

/// A player profile, the first element of `people` in `GET /people/{id}`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerInfo {
    pub full_name: String,
    #[serde(default)]
    pub primary_number: String,
    pub primary_position: PositionAbbrev,
    #[serde(default)]
    pub birth_state_province: Option<String>,
    pub current_age: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct PositionAbbrev {
    pub abbreviation: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PeopleResponse {
    pub people: Vec<PlayerInfo>,
}

/// One season/team segment of a player's statistics.
///
/// Skaters traded mid-season have one split per team; goalies have a
/// different stat shape that this model deliberately does not cover.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct StatSplit {
    pub stat: SkaterStat,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkaterStat {
    pub goals: i64,
    pub assists: i64,
    pub shots: i64,
    pub hits: i64,
    pub power_play_points: i64,
    pub games: i64,
    pub time_on_ice_per_game: String,
    pub even_time_on_ice_per_game: String,
    pub power_play_time_on_ice_per_game: String,
    pub short_handed_time_on_ice_per_game: String,
}

#[derive(Debug, Deserialize)]
pub(crate) struct StatsResponse {
    pub stats: Vec<StatsGroup>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct StatsGroup {
    #[serde(default)]
    pub splits: Vec<StatSplit>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_teams_response_deserializes() {
        let json = r#"{
            "teams": [
                {"id": 15, "name": "Washington Capitals", "venue": {"name": "Capital One Arena"}},
                {"id": 10, "name": "Toronto Maple Leafs"}
            ]
        }"#;

        let response: TeamsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.teams.len(), 2);
        assert_eq!(
            response.teams[0],
            Team {
                id: 15,
                name: "Washington Capitals".to_string()
            }
        );
    }

    #[test]
    fn test_roster_entry_deserializes() {
        let json = r#"{
            "person": {"id": 8471214, "fullName": "Alex Ovechkin", "link": "/api/v1/people/8471214"},
            "jerseyNumber": "8",
            "position": {"code": "L", "name": "Left Wing", "type": "Forward"}
        }"#;

        let entry: RosterEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.person.id, 8471214);
        assert_eq!(entry.person.full_name, "Alex Ovechkin");
        assert_eq!(entry.jersey_number, "8");
        assert_eq!(entry.position.name, "Left Wing");
    }

    #[test]
    fn test_roster_entry_without_jersey_number() {
        let json = r#"{
            "person": {"id": 8484123, "fullName": "Recent Callup"},
            "position": {"name": "Center"}
        }"#;

        let entry: RosterEntry = serde_json::from_str(json).unwrap();
        assert_eq!(entry.jersey_number, "");
    }

    #[test]
    fn test_player_info_deserializes() {
        let json = r#"{
            "people": [{
                "id": 8471214,
                "fullName": "Alex Ovechkin",
                "primaryNumber": "8",
                "currentAge": 36,
                "birthStateProvince": "Moscow",
                "primaryPosition": {"code": "L", "abbreviation": "LW"}
            }]
        }"#;

        let response: PeopleResponse = serde_json::from_str(json).unwrap();
        let info = &response.people[0];
        assert_eq!(info.full_name, "Alex Ovechkin");
        assert_eq!(info.primary_number, "8");
        assert_eq!(info.primary_position.abbreviation, "LW");
        assert_eq!(info.birth_state_province.as_deref(), Some("Moscow"));
        assert_eq!(info.current_age, 36);
    }

    #[test]
    fn test_player_info_null_birthplace() {
        // Many European players have no state/province in the API
        let json = r#"{
            "people": [{
                "fullName": "Nicklas Backstrom",
                "primaryNumber": "19",
                "currentAge": 34,
                "birthStateProvince": null,
                "primaryPosition": {"abbreviation": "C"}
            }]
        }"#;

        let response: PeopleResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.people[0].birth_state_province, None);
    }

    #[test]
    fn test_stat_split_deserializes() {
        let json = r#"{
            "stat": {
                "goals": 30,
                "assists": 40,
                "shots": 200,
                "hits": 50,
                "powerPlayPoints": 15,
                "games": 70,
                "timeOnIcePerGame": "18:32",
                "evenTimeOnIcePerGame": "14:01",
                "powerPlayTimeOnIcePerGame": "3:45",
                "shortHandedTimeOnIcePerGame": "0:46"
            }
        }"#;

        let split: StatSplit = serde_json::from_str(json).unwrap();
        assert_eq!(split.stat.goals, 30);
        assert_eq!(split.stat.assists, 40);
        assert_eq!(split.stat.power_play_points, 15);
        assert_eq!(split.stat.time_on_ice_per_game, "18:32");
    }

    #[test]
    fn test_stats_response_empty_splits() {
        // A player with no stats for the requested season
        let json = r#"{"stats": [{"type": {"displayName": "statsSingleSeason"}, "splits": []}]}"#;

        let response: StatsResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.stats.len(), 1);
        assert!(response.stats[0].splits.is_empty());
    }

    #[test]
    fn test_stats_response_empty_stats() {
        let json = r#"{"stats": []}"#;

        let response: StatsResponse = serde_json::from_str(json).unwrap();
        assert!(response.stats.is_empty());
    }

    #[test]
    fn test_goalie_shaped_split_is_rejected() {
        // Goalie splits carry save/shutout fields instead of the skater set;
        // they fail deserialization rather than producing a half-filled row.
        let json = r#"{
            "stat": {
                "games": 45,
                "wins": 30,
                "losses": 10,
                "savePercentage": 0.923,
                "goalAgainstAverage": 2.41
            }
        }"#;

        let result: Result<StatSplit, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
