use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;

use super::action::Action;
use crate::cache;
use crate::data_provider::RosterDataProvider;
use crate::projections::{self, PlayerDetail};

/// Side effects returned by the reducer, executed by the runtime.
pub enum Effect {
    None,
    Action(Action),
    Batch(Vec<Effect>),
    Async(Pin<Box<dyn Future<Output = Action> + Send>>),
    FetchRoster(i64),
    RefreshRoster(i64),
    FetchPlayerDetail(i64),
}

/// Effect handler for data fetching operations
///
/// Holds the application's only client handle; each method returns an Effect
/// that will dispatch the appropriate *Loaded action when complete.
pub struct DataEffects {
    client: Arc<dyn RosterDataProvider>,
}

impl DataEffects {
    pub fn new(client: Arc<dyn RosterDataProvider>) -> Self {
        Self { client }
    }

    /// Fetch and project a team's roster (with caching)
    pub fn fetch_roster(&self, team_id: i64) -> Effect {
        let client = self.client.clone();
        Effect::Async(Box::pin(async move {
            let result = cache::fetch_roster_cached(client.as_ref(), team_id).await;
            Action::RosterLoaded(
                team_id,
                result
                    .map(|entries| projections::project_roster(&entries))
                    .map_err(|e| e.to_string()),
            )
        }))
    }

    /// Fetch and project a team's roster, invalidating the cache entry first
    pub fn refresh_roster(&self, team_id: i64) -> Effect {
        let client = self.client.clone();
        Effect::Async(Box::pin(async move {
            let result = cache::refresh_roster(client.as_ref(), team_id).await;
            Action::RosterLoaded(
                team_id,
                result
                    .map(|entries| projections::project_roster(&entries))
                    .map_err(|e| e.to_string()),
            )
        }))
    }

    /// Fetch and project a player's detail panel (with caching)
    ///
    /// Issues the two upstream requests (single-season stats, then profile)
    /// and assembles the three row-groups.
    pub fn fetch_player_detail(&self, player_id: i64) -> Effect {
        let client = self.client.clone();
        Effect::Async(Box::pin(async move {
            let result = load_player_detail(client.as_ref(), player_id).await;
            Action::PlayerDetailLoaded(player_id, result)
        }))
    }
}

async fn load_player_detail(
    client: &dyn RosterDataProvider,
    player_id: i64,
) -> Result<PlayerDetail, String> {
    let splits = cache::fetch_player_stats_cached(client, player_id)
        .await
        .map_err(|e| e.to_string())?;
    let info = cache::fetch_player_info_cached(client, player_id)
        .await
        .map_err(|e| e.to_string())?;
    projections::project_player_detail(player_id, &info, &splits).map_err(|e| e.to_string())
}
