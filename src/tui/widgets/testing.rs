/// Testing utilities for widget rendering
///
/// Widgets are tested by rendering into an off-screen buffer and comparing
/// the produced lines (right-trimmed) against expected text.
use ratatui::{buffer::Buffer, layout::Rect};

use super::RenderableWidget;
use crate::config::ThemeConfig;

/// Rendering width used by widget tests
pub const RENDER_WIDTH: u16 = 60;

pub fn test_theme() -> ThemeConfig {
    ThemeConfig::default()
}

/// Render a widget to a buffer and return it for assertions
pub fn render_widget(widget: &impl RenderableWidget, width: u16, height: u16) -> Buffer {
    let mut buf = Buffer::empty(Rect::new(0, 0, width, height));
    let theme = test_theme();
    widget.render(buf.area, &mut buf, &theme);
    buf
}

/// Extract the buffer content as right-trimmed lines
pub fn buffer_lines(buf: &Buffer) -> Vec<String> {
    let area = buf.area();
    (0..area.height)
        .map(|y| {
            (0..area.width)
                .map(|x| buf[(x, y)].symbol())
                .collect::<String>()
                .trim_end()
                .to_string()
        })
        .collect()
}

/// Assert the buffer matches the expected lines exactly
pub fn assert_buffer(buf: &Buffer, expected: &[&str]) {
    let actual = buffer_lines(buf);

    assert_eq!(
        actual.len(),
        expected.len(),
        "Buffer height mismatch: expected {} lines, got {}\nactual: {:#?}",
        expected.len(),
        actual.len(),
        actual
    );
    for (i, expected_line) in expected.iter().enumerate() {
        assert_eq!(
            actual[i], *expected_line,
            "Line {} mismatch\nactual buffer: {:#?}",
            i, actual
        );
    }
}
