/// Trait for providing roster data, abstracting over the real API client and
/// the mock implementation used by tests and mock mode.
use async_trait::async_trait;
use nhl_statsapi::{PlayerInfo, RosterEntry, StatSplit, StatsApiError, Team};

/// Data provider trait implemented by both the real `Client` and `MockClient`.
#[async_trait]
pub trait RosterDataProvider: Send + Sync {
    /// Get the full team directory
    async fn teams(&self) -> Result<Vec<Team>, StatsApiError>;

    /// Get the active roster for a team, in API order
    async fn team_roster(&self, team_id: i64) -> Result<Vec<RosterEntry>, StatsApiError>;

    /// Get a player's profile
    async fn player_info(&self, player_id: i64) -> Result<PlayerInfo, StatsApiError>;

    /// Get a player's single-season stat splits
    async fn single_season_stats(&self, player_id: i64) -> Result<Vec<StatSplit>, StatsApiError>;
}

#[async_trait]
impl RosterDataProvider for nhl_statsapi::Client {
    async fn teams(&self) -> Result<Vec<Team>, StatsApiError> {
        self.teams().await
    }

    async fn team_roster(&self, team_id: i64) -> Result<Vec<RosterEntry>, StatsApiError> {
        self.team_roster(team_id).await
    }

    async fn player_info(&self, player_id: i64) -> Result<PlayerInfo, StatsApiError> {
        self.player_info(player_id).await
    }

    async fn single_season_stats(&self, player_id: i64) -> Result<Vec<StatSplit>, StatsApiError> {
        self.single_season_stats(player_id).await
    }
}
