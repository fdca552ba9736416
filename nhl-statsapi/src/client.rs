use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::StatsApiError;
use crate::models::{
    PeopleResponse, PlayerInfo, RosterEntry, RosterResponse, StatSplit, StatsResponse, Team,
    TeamsResponse,
};

/// Production base URL for the legacy stats API.
pub const DEFAULT_BASE_URL: &str = "https://statsapi.web.nhl.com/api/v1";

/// No retries or fallbacks happen below this timeout; a slow upstream simply
/// surfaces as a request error.
const REQUEST_TIMEOUT_SECS: u64 = 10;

/// Asynchronous client for the stats API.
pub struct Client {
    http: reqwest::Client,
    base_url: String,
}

impl Client {
    /// Create a client against the production API.
    pub fn new() -> Result<Self, StatsApiError> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a client against an alternate base URL (used by tests).
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, StatsApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    /// Fetch the full team directory.
    pub async fn teams(&self) -> Result<Vec<Team>, StatsApiError> {
        let url = format!("{}/teams", self.base_url);
        let response: TeamsResponse = self.get_json(url).await?;
        Ok(response.teams)
    }

    /// Fetch the active roster for a team, in API order.
    pub async fn team_roster(&self, team_id: i64) -> Result<Vec<RosterEntry>, StatsApiError> {
        let url = format!("{}/teams/{}/roster", self.base_url, team_id);
        let response: RosterResponse = self.get_json(url).await?;
        Ok(response.roster)
    }

    /// Fetch a player's profile (the first element of the `people` array).
    pub async fn player_info(&self, player_id: i64) -> Result<PlayerInfo, StatsApiError> {
        let url = format!("{}/people/{}", self.base_url, player_id);
        let response: PeopleResponse = self.get_json(url.clone()).await?;
        response
            .people
            .into_iter()
            .next()
            .ok_or(StatsApiError::Malformed {
                url,
                message: "empty people array".to_string(),
            })
    }

    /// Fetch a player's single-season stat splits.
    ///
    /// Returns the splits of the first stats group; an empty `stats` array
    /// yields an empty vec, which callers must treat as "no season stats".
    pub async fn single_season_stats(
        &self,
        player_id: i64,
    ) -> Result<Vec<StatSplit>, StatsApiError> {
        let url = format!(
            "{}/people/{}/stats?stats=statsSingleSeason",
            self.base_url, player_id
        );
        let response: StatsResponse = self.get_json(url).await?;
        Ok(response
            .stats
            .into_iter()
            .next()
            .map(|group| group.splits)
            .unwrap_or_default())
    }

    async fn get_json<T: DeserializeOwned>(&self, url: String) -> Result<T, StatsApiError> {
        debug!("GET {}", url);
        let response = self.http.get(&url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(StatsApiError::Status {
                status: status.as_u16(),
                url,
            });
        }
        let body = response.text().await?;
        serde_json::from_str(&body).map_err(|e| StatsApiError::Malformed {
            url,
            message: e.to_string(),
        })
    }
}
