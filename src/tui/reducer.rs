use std::sync::Arc;
use std::time::SystemTime;

use tracing::debug;

use super::action::Action;
use super::effects::Effect;
use super::state::{AppState, LoadingKey, PanelFocus};

/// Pure state reducer - like Redux reducer
///
/// Takes current state and an action, returns new state and an effect.
/// No I/O happens here; fetches are returned as `Effect` variants and
/// executed by the runtime.
pub fn reduce(state: AppState, action: Action) -> (AppState, Effect) {
    match action {
        Action::FocusTeams => {
            let mut new_state = state;
            new_state.navigation.focus = PanelFocus::Teams;
            (new_state, Effect::None)
        }

        Action::FocusRoster => {
            let mut new_state = state;
            // Nothing to navigate in an empty table
            if !new_state.data.roster.is_empty() {
                new_state.navigation.focus = PanelFocus::Roster;
            }
            (new_state, Effect::None)
        }

        Action::MoveUp => (move_cursor(state, -1), Effect::None),
        Action::MoveDown => (move_cursor(state, 1), Effect::None),

        Action::SelectTeam(team_id) => {
            debug!("ACTION: SelectTeam({})", team_id);
            let mut new_state = state;
            new_state.ui.selected_team_id = Some(team_id);
            new_state.ui.selected_player_id = None;
            if let Some(index) = new_state.data.teams.iter().position(|t| t.id == team_id) {
                new_state.ui.team_index = index;
            }
            // The table and detail panel are fully replaced on each selection
            new_state.data.roster = Arc::new(Vec::new());
            new_state.data.detail = Arc::new(None);
            new_state.ui.roster_index = 0;
            new_state.data.errors.remove("roster");
            new_state.data.errors.remove("detail");
            new_state.data.loading.insert(LoadingKey::Roster(team_id));
            (new_state, Effect::FetchRoster(team_id))
        }

        Action::SelectPlayer(player_id) => {
            debug!("ACTION: SelectPlayer({})", player_id);
            let mut new_state = state;
            new_state.ui.selected_player_id = Some(player_id);
            new_state.data.errors.remove("detail");
            new_state
                .data
                .loading
                .insert(LoadingKey::PlayerDetail(player_id));
            (new_state, Effect::FetchPlayerDetail(player_id))
        }

        Action::Refresh => {
            let mut new_state = state;
            match new_state.ui.selected_team_id {
                Some(team_id) => {
                    debug!("ACTION: Refresh roster for team {}", team_id);
                    new_state.data.loading.insert(LoadingKey::Roster(team_id));
                    (new_state, Effect::RefreshRoster(team_id))
                }
                None => (new_state, Effect::None),
            }
        }

        Action::RosterLoaded(team_id, result) => handle_roster_loaded(state, team_id, result),

        Action::PlayerDetailLoaded(player_id, result) => {
            handle_player_detail_loaded(state, player_id, result)
        }

        Action::SetStatusMessage { message, is_error } => {
            let mut new_state = state;
            if is_error {
                new_state.system.set_status_error_message(message);
            } else {
                new_state.system.set_status_message(message);
            }
            (new_state, Effect::None)
        }

        Action::Quit => (state, Effect::None),
    }
}

fn move_cursor(state: AppState, delta: i64) -> AppState {
    let mut new_state = state;
    match new_state.navigation.focus {
        PanelFocus::Teams => {
            new_state.ui.team_index =
                step_index(new_state.ui.team_index, delta, new_state.data.teams.len());
        }
        PanelFocus::Roster => {
            new_state.ui.roster_index = step_index(
                new_state.ui.roster_index,
                delta,
                new_state.data.roster.len(),
            );
        }
    }
    new_state
}

fn step_index(index: usize, delta: i64, len: usize) -> usize {
    if len == 0 {
        return 0;
    }
    let moved = index as i64 + delta;
    moved.clamp(0, len as i64 - 1) as usize
}

fn handle_roster_loaded(
    state: AppState,
    team_id: i64,
    result: Result<Vec<crate::projections::RosterRow>, String>,
) -> (AppState, Effect) {
    let mut new_state = state;
    new_state.data.loading.remove(&LoadingKey::Roster(team_id));

    // Drop stale responses for a team the user has already navigated away from
    if new_state.ui.selected_team_id != Some(team_id) {
        debug!("DATA: Dropping stale roster for team {}", team_id);
        return (new_state, Effect::None);
    }

    match result {
        Ok(rows) => {
            debug!("DATA: Loaded {} roster rows for team {}", rows.len(), team_id);
            new_state.data.roster = Arc::new(rows);
            new_state.ui.roster_index = 0;
            new_state.data.errors.remove("roster");
            new_state.system.last_refresh = Some(SystemTime::now());
            new_state.system.reset_status_message();
        }
        Err(e) => {
            debug!("DATA: Failed to load roster for team {}: {}", team_id, e);
            new_state.data.errors.insert("roster".to_string(), e.clone());
            new_state
                .system
                .set_status_error_message(format!("Failed to load roster: {}", e));
        }
    }

    (new_state, Effect::None)
}

fn handle_player_detail_loaded(
    state: AppState,
    player_id: i64,
    result: Result<crate::projections::PlayerDetail, String>,
) -> (AppState, Effect) {
    let mut new_state = state;
    new_state
        .data
        .loading
        .remove(&LoadingKey::PlayerDetail(player_id));

    // The detail panel is keyed to the most recently selected row
    if new_state.ui.selected_player_id != Some(player_id) {
        debug!("DATA: Dropping stale detail for player {}", player_id);
        return (new_state, Effect::None);
    }

    match result {
        Ok(detail) => {
            debug!("DATA: Loaded detail for player {}", player_id);
            new_state.data.detail = Arc::new(Some(detail));
            new_state.data.errors.remove("detail");
        }
        Err(e) => {
            debug!("DATA: Failed to load detail for player {}: {}", player_id, e);
            new_state.data.errors.insert("detail".to_string(), e.clone());
            new_state
                .system
                .set_status_error_message(format!("Failed to load player: {}", e));
        }
    }

    (new_state, Effect::None)
}
