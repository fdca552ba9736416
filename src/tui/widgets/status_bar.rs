/// Status bar widget - key help and error reporting
use ratatui::{buffer::Buffer, layout::Rect, style::Style};

use super::RenderableWidget;
use crate::config::ThemeConfig;

pub struct StatusBar<'a> {
    pub message: Option<&'a str>,
    pub is_error: bool,
}

impl<'a> StatusBar<'a> {
    pub fn new(message: Option<&'a str>, is_error: bool) -> Self {
        Self { message, is_error }
    }
}

impl<'a> RenderableWidget for StatusBar<'a> {
    fn render(&self, area: Rect, buf: &mut Buffer, theme: &ThemeConfig) {
        if area.height == 0 {
            return;
        }
        buf.set_string(
            area.x,
            area.y,
            "─".repeat(area.width as usize),
            Style::default(),
        );

        if area.height < 2 {
            return;
        }
        if let Some(message) = self.message {
            let style = if self.is_error {
                Style::default().fg(theme.error_fg)
            } else {
                Style::default()
            };
            buf.set_string(area.x, area.y + 1, message, style);
        }
    }

    fn preferred_height(&self) -> Option<u16> {
        Some(2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::widgets::testing::{assert_buffer, render_widget};

    #[test]
    fn test_status_bar_renders_message() {
        let widget = StatusBar::new(Some("Ready"), false);

        let buf = render_widget(&widget, 10, 2);

        assert_buffer(&buf, &["──────────", "Ready"]);
    }

    #[test]
    fn test_status_bar_without_message() {
        let widget = StatusBar::new(None, false);

        let buf = render_widget(&widget, 10, 2);

        assert_buffer(&buf, &["──────────", ""]);
    }
}
