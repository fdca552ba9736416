/// Player detail panel widget
///
/// Renders the three row-groups of a projected player detail: the bio card,
/// the single-season stat line (with computed points), and the time-on-ice
/// breakdown. Exactly one data row per group.
use ratatui::{buffer::Buffer, layout::Rect, style::Style};

use super::{render_section_header, RenderableWidget};
use crate::config::ThemeConfig;
use crate::projections::PlayerDetail;

pub struct PlayerDetailPanel<'a> {
    pub detail: Option<&'a PlayerDetail>,
    pub loading: bool,
}

impl<'a> PlayerDetailPanel<'a> {
    pub fn new(detail: Option<&'a PlayerDetail>, loading: bool) -> Self {
        Self { detail, loading }
    }
}

impl<'a> RenderableWidget for PlayerDetailPanel<'a> {
    fn render(&self, area: Rect, buf: &mut Buffer, _theme: &ThemeConfig) {
        let mut y = area.y;

        if self.loading {
            buf.set_string(area.x, y, "Loading player...", Style::default());
            return;
        }

        let detail = match self.detail {
            Some(detail) => detail,
            None => {
                buf.set_string(
                    area.x,
                    y,
                    "Select a roster row to see player details",
                    Style::default(),
                );
                return;
            }
        };

        y += render_section_header(&detail.full_name, area, y, buf);

        let bio = &detail.bio;
        let bio_lines = [
            format!("{:<10} #{}", "Number:", bio.number),
            format!("{:<10} {}", "Position:", bio.position),
            format!(
                "{:<10} {}",
                "Hometown:",
                bio.hometown.as_deref().unwrap_or("-")
            ),
            format!("{:<10} {}", "Age:", bio.age),
        ];
        for line in bio_lines {
            if y >= area.bottom() {
                return;
            }
            buf.set_string(area.x, y, line, Style::default());
            y += 1;
        }
        y += 1;

        if y < area.bottom() {
            y += render_section_header("Season stats", area, y, buf);
        }
        let stats = &detail.stat_line;
        if y < area.bottom() {
            let header = format!(
                "{:>4} {:>3} {:>3} {:>4} {:>4} {:>4} {:>3}",
                "PTS", "G", "A", "SOG", "HIT", "PPP", "GP"
            );
            buf.set_string(area.x, y, header, Style::default());
            y += 1;
        }
        if y < area.bottom() {
            let row = format!(
                "{:>4} {:>3} {:>3} {:>4} {:>4} {:>4} {:>3}",
                stats.points,
                stats.goals,
                stats.assists,
                stats.shots,
                stats.hits,
                stats.power_play_points,
                stats.games
            );
            buf.set_string(area.x, y, row, Style::default());
            y += 2;
        }

        if y < area.bottom() {
            y += render_section_header("Time on ice", area, y, buf);
        }
        let toi = &detail.time_on_ice;
        if y < area.bottom() {
            let header = format!("{:>6} {:>6} {:>6} {:>6}", "TOI", "Even", "PP", "PK");
            buf.set_string(area.x, y, header, Style::default());
            y += 1;
        }
        if y < area.bottom() {
            let row = format!(
                "{:>6} {:>6} {:>6} {:>6}",
                toi.overall, toi.even_strength, toi.power_play, toi.short_handed
            );
            buf.set_string(area.x, y, row, Style::default());
        }
    }

    fn preferred_height(&self) -> Option<u16> {
        match self.detail {
            // name(2) + bio(4) + blank + stats(4) + blank + toi(4)
            Some(_) => Some(16),
            None => Some(1),
        }
    }
}
