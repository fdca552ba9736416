/// Widget-based rendering for the dashboard panels
///
/// Widgets render themselves directly into a ratatui Buffer, which keeps them
/// composable and testable: tests render into an off-screen buffer and assert
/// on the produced lines.

#[cfg(test)]
pub mod testing;

pub mod player_detail;
pub mod roster_table;
pub mod status_bar;
pub mod team_list;

pub use player_detail::PlayerDetailPanel;
pub use roster_table::RosterTable;
pub use status_bar::StatusBar;
pub use team_list::TeamList;

use ratatui::{buffer::Buffer, layout::Rect, style::Style};
use unicode_width::UnicodeWidthStr;

use crate::config::ThemeConfig;

/// Core trait for renderable widgets
pub trait RenderableWidget {
    /// Render this widget into the provided buffer
    fn render(&self, area: Rect, buf: &mut Buffer, theme: &ThemeConfig);

    /// Preferred height, if the widget has a natural one
    fn preferred_height(&self) -> Option<u16> {
        None
    }
}

/// Write a section header with an underline; returns the number of lines used.
pub fn render_section_header(text: &str, area: Rect, y: u16, buf: &mut Buffer) -> u16 {
    if y < area.bottom() {
        buf.set_string(area.x, y, text, Style::default());
    }
    if y + 1 < area.bottom() {
        buf.set_string(area.x, y + 1, "─".repeat(text.width()), Style::default());
    }
    2
}
