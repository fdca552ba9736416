/// Team list widget - the dropdown analog
///
/// Shows the full team directory with a navigation cursor. The team whose
/// roster is currently displayed is rendered bold.
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
};

use nhl_statsapi::Team;

use super::{render_section_header, RenderableWidget};
use crate::config::ThemeConfig;
use crate::team_abbrev::team_id_to_abbrev;

pub struct TeamList<'a> {
    pub teams: &'a [Team],
    /// Cursor index within the list
    pub cursor: usize,
    /// Team whose roster is currently displayed
    pub active_team_id: Option<i64>,
    /// Whether this panel has keyboard focus
    pub focused: bool,
}

impl<'a> TeamList<'a> {
    pub fn new(
        teams: &'a [Team],
        cursor: usize,
        active_team_id: Option<i64>,
        focused: bool,
    ) -> Self {
        Self {
            teams,
            cursor,
            active_team_id,
            focused,
        }
    }

    fn line_style(&self, index: usize, team: &Team, theme: &ThemeConfig) -> Style {
        let mut style = Style::default();
        if index == self.cursor {
            let fg = if self.focused {
                theme.selection_fg
            } else {
                theme.unfocused_selection_fg()
            };
            style = style.fg(fg);
        }
        if self.active_team_id == Some(team.id) {
            style = style.add_modifier(Modifier::BOLD);
        }
        style
    }
}

impl<'a> RenderableWidget for TeamList<'a> {
    fn render(&self, area: Rect, buf: &mut Buffer, theme: &ThemeConfig) {
        let mut y = area.y;
        y += render_section_header("Teams", area, y, buf);

        for (i, team) in self.teams.iter().enumerate() {
            if y >= area.bottom() {
                break;
            }
            let marker = if i == self.cursor { "►" } else { " " };
            let abbrev = team_id_to_abbrev(team.id).unwrap_or("");
            let line = format!("{} {:<4} {}", marker, abbrev, team.name);
            buf.set_string(area.x, y, line, self.line_style(i, team, theme));
            y += 1;
        }
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(self.teams.len() as u16 + 2)
    }
}
