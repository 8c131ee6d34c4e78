use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;

use crate::sheet::vitals::{MAX_HP, MAX_MP, Vitals, group_digits};
use crate::ui::theme::Theme;

const HP_GLYPH: &str = "\u{2665}"; // ♥
const MP_GLYPH: &str = "\u{2726}"; // ✦

/// The two fluctuating gauges, rendered as tabular `current/max` pairs.
pub struct VitalsPanel<'a> {
    vitals: &'a Vitals,
    theme: &'a Theme,
}

impl<'a> VitalsPanel<'a> {
    pub fn new(vitals: &'a Vitals, theme: &'a Theme) -> Self {
        Self { vitals, theme }
    }

    fn gauge_line(&self, glyph: &'static str, label: &'static str, value: u32, max: u32) -> Line<'static> {
        let colors = &self.theme.colors;
        Line::from(vec![
            Span::styled(format!("{glyph} "), Style::default().fg(colors.accent())),
            Span::styled(
                format!("{label:<4}"),
                Style::default()
                    .fg(colors.accent())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("{:>6}/{}", group_digits(value), group_digits(max)),
                Style::default().fg(colors.text()),
            ),
        ])
    }
}

impl Widget for VitalsPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let lines = [
            self.gauge_line(HP_GLYPH, "HP", self.vitals.hp, MAX_HP),
            self.gauge_line(MP_GLYPH, "MP", self.vitals.mp, MAX_MP),
        ];
        for (row, line) in lines.into_iter().enumerate() {
            if row as u16 >= area.height {
                break;
            }
            buf.set_line(area.x + 1, area.y + row as u16, &line, area.width);
        }
    }
}
