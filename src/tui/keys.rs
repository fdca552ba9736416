/// Keyboard event to action mapping
///
/// Converts crossterm KeyEvents into Actions based on the current state.
/// The key map is the whole event-handler registry of the dashboard: the
/// selection events carry the id looked up from the row under the cursor.
use crossterm::event::{KeyCode, KeyEvent};
use tracing::debug;

use super::action::Action;
use super::state::{AppState, PanelFocus};

pub fn key_to_action(key: KeyEvent, state: &AppState) -> Option<Action> {
    match key.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Action::Quit),
        KeyCode::Char('r') => Some(Action::Refresh),

        KeyCode::Up => Some(Action::MoveUp),
        KeyCode::Down => Some(Action::MoveDown),

        KeyCode::Left => match state.navigation.focus {
            PanelFocus::Roster => Some(Action::FocusTeams),
            PanelFocus::Teams => None,
        },
        KeyCode::Right | KeyCode::Tab => match state.navigation.focus {
            PanelFocus::Teams => Some(Action::FocusRoster),
            PanelFocus::Roster => None,
        },
        KeyCode::Esc => match state.navigation.focus {
            PanelFocus::Roster => {
                debug!("KEY: ESC in roster - returning to team list");
                Some(Action::FocusTeams)
            }
            PanelFocus::Teams => None,
        },

        KeyCode::Enter => match state.navigation.focus {
            // The dropdown analog: selecting a team replaces the table
            PanelFocus::Teams => state
                .data
                .teams
                .get(state.ui.team_index)
                .map(|team| Action::SelectTeam(team.id)),
            // Row selection: the action carries the row's key field
            PanelFocus::Roster => state
                .data
                .roster
                .get(state.ui.roster_index)
                .map(|row| Action::SelectPlayer(row.player_id)),
        },

        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;
    use crate::projections::project_roster;
    use crossterm::event::KeyModifiers;
    use std::sync::Arc;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    fn test_state() -> AppState {
        let mut state = AppState::default();
        state.data.teams = Arc::new(fixtures::create_mock_teams());
        state.data.roster = Arc::new(project_roster(&fixtures::create_mock_roster(15)));
        state
    }

    #[test]
    fn test_quit_key() {
        let state = test_state();
        assert!(matches!(
            key_to_action(key(KeyCode::Char('q')), &state),
            Some(Action::Quit)
        ));
    }

    #[test]
    fn test_arrow_keys_move_cursor() {
        let state = test_state();
        assert!(matches!(
            key_to_action(key(KeyCode::Up), &state),
            Some(Action::MoveUp)
        ));
        assert!(matches!(
            key_to_action(key(KeyCode::Down), &state),
            Some(Action::MoveDown)
        ));
    }

    #[test]
    fn test_enter_on_team_list_selects_highlighted_team() {
        let mut state = test_state();
        state.ui.team_index = 3; // Washington Capitals in the fixture directory

        let action = key_to_action(key(KeyCode::Enter), &state);

        assert!(matches!(action, Some(Action::SelectTeam(15))));
    }

    #[test]
    fn test_enter_on_roster_carries_row_key() {
        let mut state = test_state();
        state.navigation.focus = PanelFocus::Roster;
        state.ui.roster_index = 0;

        let action = key_to_action(key(KeyCode::Enter), &state);

        assert!(matches!(action, Some(Action::SelectPlayer(8471214))));
    }

    #[test]
    fn test_enter_on_empty_roster_does_nothing() {
        let mut state = test_state();
        state.navigation.focus = PanelFocus::Roster;
        state.data.roster = Arc::new(Vec::new());

        assert!(key_to_action(key(KeyCode::Enter), &state).is_none());
    }

    #[test]
    fn test_panel_switching() {
        let mut state = test_state();
        assert!(matches!(
            key_to_action(key(KeyCode::Right), &state),
            Some(Action::FocusRoster)
        ));
        assert!(key_to_action(key(KeyCode::Left), &state).is_none());

        state.navigation.focus = PanelFocus::Roster;
        assert!(matches!(
            key_to_action(key(KeyCode::Left), &state),
            Some(Action::FocusTeams)
        ));
        assert!(matches!(
            key_to_action(key(KeyCode::Esc), &state),
            Some(Action::FocusTeams)
        ));
    }

    #[test]
    fn test_unmapped_key_is_ignored() {
        let state = test_state();
        assert!(key_to_action(key(KeyCode::Char('x')), &state).is_none());
    }
}
