/// View composition - renders the whole dashboard from AppState
///
/// Layout mirrors the three regions of the dashboard: team list on the left,
/// roster table in the middle, player detail panel on the right, with a
/// status bar across the bottom.
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::{buffer::Buffer, Frame};

use super::state::{AppState, PanelFocus};
use super::widgets::{
    PlayerDetailPanel, RenderableWidget, RosterTable, StatusBar, TeamList,
};

/// Width of the team list column
const TEAM_LIST_WIDTH: u16 = 30;

/// Width of the detail panel column
const DETAIL_PANEL_WIDTH: u16 = 36;

pub fn render(frame: &mut Frame, state: &AppState) {
    let area = frame.area();
    let buf = frame.buffer_mut();
    render_to_buffer(area, buf, state);
}

/// Render into an arbitrary buffer (shared by the test helpers)
pub fn render_to_buffer(area: Rect, buf: &mut Buffer, state: &AppState) {
    let [content, status] =
        Layout::vertical([Constraint::Min(1), Constraint::Length(2)]).areas(area);
    let [teams_area, roster_area, detail_area] = Layout::horizontal([
        Constraint::Length(TEAM_LIST_WIDTH),
        Constraint::Min(20),
        Constraint::Length(DETAIL_PANEL_WIDTH),
    ])
    .areas(content);

    let theme = &state.system.config.theme;

    TeamList::new(
        &state.data.teams,
        state.ui.team_index,
        state.ui.selected_team_id,
        state.navigation.focus == PanelFocus::Teams,
    )
    .render(teams_area, buf, theme);

    let title = selected_team_name(state).unwrap_or("Roster");
    RosterTable::new(
        title,
        &state.data.roster,
        state.ui.roster_index,
        state.navigation.focus == PanelFocus::Roster,
        state.is_loading_roster(),
    )
    .render(roster_area, buf, theme);

    PlayerDetailPanel::new(
        state.data.detail.as_ref().as_ref(),
        state.is_loading_detail(),
    )
    .render(detail_area, buf, theme);

    StatusBar::new(state.system.status_message.as_deref(), state.system.status_is_error)
        .render(status, buf, theme);
}

fn selected_team_name(state: &AppState) -> Option<&str> {
    let team_id = state.ui.selected_team_id?;
    state
        .data
        .teams
        .iter()
        .find(|team| team.id == team_id)
        .map(|team| team.name.as_str())
}
