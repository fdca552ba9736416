/// Mock stats API client for development and testing
use async_trait::async_trait;
use nhl_statsapi::{PlayerInfo, RosterEntry, StatSplit, StatsApiError, Team};
use tracing::info;

use crate::data_provider::RosterDataProvider;
use crate::fixtures;

/// Mock client that returns fixture data instead of making real API calls.
pub struct MockClient;

impl MockClient {
    pub fn new() -> Self {
        info!("Creating MockClient for development mode");
        Self
    }
}

impl Default for MockClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RosterDataProvider for MockClient {
    async fn teams(&self) -> Result<Vec<Team>, StatsApiError> {
        info!("MockClient: Returning mock team directory");
        Ok(fixtures::create_mock_teams())
    }

    async fn team_roster(&self, team_id: i64) -> Result<Vec<RosterEntry>, StatsApiError> {
        info!("MockClient: Returning mock roster for team {}", team_id);
        Ok(fixtures::create_mock_roster(team_id))
    }

    async fn player_info(&self, player_id: i64) -> Result<PlayerInfo, StatsApiError> {
        info!("MockClient: Returning mock profile for player {}", player_id);
        Ok(fixtures::create_mock_player_info(player_id))
    }

    async fn single_season_stats(&self, player_id: i64) -> Result<Vec<StatSplit>, StatsApiError> {
        info!("MockClient: Returning mock splits for player {}", player_id);
        Ok(fixtures::create_mock_splits(player_id))
    }
}
