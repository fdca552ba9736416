/// Roster table widget
///
/// One row per roster entry, in API order. The row key (player id) is carried
/// in the row data, never rendered.
use ratatui::{buffer::Buffer, layout::Rect, style::Style};
use unicode_width::UnicodeWidthStr;

use super::{render_section_header, RenderableWidget};
use crate::config::ThemeConfig;
use crate::projections::RosterRow;

pub struct RosterTable<'a> {
    /// Panel title, normally the selected team's name
    pub title: &'a str,
    pub rows: &'a [RosterRow],
    pub cursor: usize,
    pub focused: bool,
    pub loading: bool,
}

impl<'a> RosterTable<'a> {
    pub fn new(
        title: &'a str,
        rows: &'a [RosterRow],
        cursor: usize,
        focused: bool,
        loading: bool,
    ) -> Self {
        Self {
            title,
            rows,
            cursor,
            focused,
            loading,
        }
    }

    fn name_column_width(&self) -> usize {
        self.rows
            .iter()
            .map(|row| row.name.width())
            .chain(std::iter::once("Name".width()))
            .max()
            .unwrap_or(4)
    }
}

impl<'a> RenderableWidget for RosterTable<'a> {
    fn render(&self, area: Rect, buf: &mut Buffer, theme: &ThemeConfig) {
        let mut y = area.y;
        y += render_section_header(self.title, area, y, buf);

        if self.loading {
            if y < area.bottom() {
                buf.set_string(area.x, y, "Loading roster...", Style::default());
            }
            return;
        }

        if self.rows.is_empty() {
            if y < area.bottom() {
                buf.set_string(area.x, y, "No roster loaded", Style::default());
            }
            return;
        }

        let name_width = self.name_column_width();
        if y < area.bottom() {
            let header = format!("  {:<name_width$}   # Position", "Name");
            buf.set_string(area.x, y, header, Style::default());
            y += 1;
        }

        for (i, row) in self.rows.iter().enumerate() {
            if y >= area.bottom() {
                break;
            }
            let marker = if i == self.cursor { "►" } else { " " };
            let line = format!(
                "{} {:<name_width$} {:>3} {}",
                marker, row.name, row.number, row.position
            );
            let style = if i == self.cursor {
                let fg = if self.focused {
                    theme.selection_fg
                } else {
                    theme.unfocused_selection_fg()
                };
                Style::default().fg(fg)
            } else {
                Style::default()
            };
            buf.set_string(area.x, y, line, style);
            y += 1;
        }
    }

    fn preferred_height(&self) -> Option<u16> {
        // Header block + column header + one line per row
        Some(self.rows.len() as u16 + 3)
    }
}
