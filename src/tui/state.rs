use std::collections::{HashMap, HashSet};
use std::sync::Arc;
use std::time::SystemTime;

use nhl_statsapi::Team;

use crate::config::Config;
use crate::projections::{PlayerDetail, RosterRow};

/// Root application state - single source of truth
///
/// All state changes happen through the reducer; the view renders from
/// immutable slices of this struct.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    /// Which panel has keyboard focus
    pub navigation: NavigationState,

    /// Application data (from the API, already projected into rows)
    pub data: DataState,

    /// Cursor positions and current selections
    pub ui: UiState,

    /// System state
    pub system: SystemState,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelFocus {
    #[default]
    Teams,
    Roster,
}

#[derive(Debug, Clone, Default)]
pub struct NavigationState {
    pub focus: PanelFocus,
}

#[derive(Debug, Clone, Default)]
pub struct DataState {
    /// Team directory, fetched once at startup and immutable afterwards.
    /// Wrapped in Arc to avoid deep clones on every reducer call.
    pub teams: Arc<Vec<Team>>,

    /// Rows of the currently displayed roster, fully replaced on each
    /// team selection.
    pub roster: Arc<Vec<RosterRow>>,

    /// Detail panel content, keyed to the most recently selected row.
    pub detail: Arc<Option<PlayerDetail>>,

    /// In-flight fetches, visible to the view as loading indicators.
    pub loading: HashSet<LoadingKey>,

    /// Last error per region ("roster", "detail").
    pub errors: HashMap<String, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum LoadingKey {
    Roster(i64),
    PlayerDetail(i64),
}

#[derive(Debug, Clone, Default)]
pub struct UiState {
    /// Team whose roster is (being) displayed.
    pub selected_team_id: Option<i64>,

    /// Player whose detail is (being) displayed.
    pub selected_player_id: Option<i64>,

    /// Cursor index within the team list.
    pub team_index: usize,

    /// Cursor index within the roster table.
    pub roster_index: usize,
}

/// Default help message shown in the status bar
pub const DEFAULT_STATUS_MESSAGE: &str =
    "Keys: ↑↓ move | Enter select | ←→ switch panel | r refresh | q quit";

#[derive(Debug, Clone, Default)]
pub struct SystemState {
    pub config: Config,
    pub last_refresh: Option<SystemTime>,
    pub status_message: Option<String>,
    pub status_is_error: bool,
}

impl SystemState {
    pub fn set_status_message(&mut self, message: String) {
        self.status_message = Some(message);
        self.status_is_error = false;
    }

    pub fn set_status_error_message(&mut self, message: String) {
        self.status_message = Some(message);
        self.status_is_error = true;
    }

    pub fn reset_status_message(&mut self) {
        self.status_message = Some(DEFAULT_STATUS_MESSAGE.to_string());
        self.status_is_error = false;
    }
}

impl AppState {
    /// True while any fetch for the given region is in flight.
    pub fn is_loading_roster(&self) -> bool {
        self.data
            .loading
            .iter()
            .any(|key| matches!(key, LoadingKey::Roster(_)))
    }

    pub fn is_loading_detail(&self) -> bool {
        self.data
            .loading
            .iter()
            .any(|key| matches!(key, LoadingKey::PlayerDetail(_)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_focus_is_teams() {
        let state = AppState::default();
        assert_eq!(state.navigation.focus, PanelFocus::Teams);
        assert!(state.data.teams.is_empty());
        assert!(state.data.detail.is_none());
    }

    #[test]
    fn test_set_status_message() {
        let mut state = SystemState::default();

        state.set_status_message("Test message".to_string());

        assert_eq!(state.status_message, Some("Test message".to_string()));
        assert!(!state.status_is_error);
    }

    #[test]
    fn test_set_status_error_message() {
        let mut state = SystemState::default();

        state.set_status_error_message("Error message".to_string());

        assert_eq!(state.status_message, Some("Error message".to_string()));
        assert!(state.status_is_error);
    }

    #[test]
    fn test_reset_status_message_clears_error_flag() {
        let mut state = SystemState::default();

        state.set_status_error_message("Error".to_string());
        state.reset_status_message();

        assert_eq!(state.status_message, Some(DEFAULT_STATUS_MESSAGE.to_string()));
        assert!(!state.status_is_error);
    }

    #[test]
    fn test_loading_helpers() {
        let mut state = AppState::default();
        assert!(!state.is_loading_roster());

        state.data.loading.insert(LoadingKey::Roster(15));
        assert!(state.is_loading_roster());
        assert!(!state.is_loading_detail());

        state.data.loading.insert(LoadingKey::PlayerDetail(8471214));
        assert!(state.is_loading_detail());
    }
}
