use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Widget;

use crate::sheet::character::CURRENT_LOCATION;
use crate::ui::theme::Theme;

const BAR_MAX_WIDTH: u16 = 26;
const GAIN_GUTTER: u16 = 8;

/// Level label, year-progress bar and the transient `+N` experience pulse.
pub struct ExperienceBar<'a> {
    age: i32,
    progress: f64,
    gain: Option<u32>,
    theme: &'a Theme,
}

impl<'a> ExperienceBar<'a> {
    pub fn new(age: i32, progress: f64, gain: Option<u32>, theme: &'a Theme) -> Self {
        Self {
            age,
            progress: progress.clamp(0.0, 1.0),
            gain,
            theme,
        }
    }
}

impl Widget for ExperienceBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < 4 || area.height == 0 {
            return;
        }
        let colors = &self.theme.colors;

        buf.set_string(
            area.x,
            area.y,
            format!("Level {}", self.age),
            Style::default()
                .fg(colors.text())
                .add_modifier(Modifier::BOLD),
        );

        if area.height >= 2 {
            let bar_width = area
                .width
                .saturating_sub(GAIN_GUTTER)
                .min(BAR_MAX_WIDTH)
                .max(4);
            let filled = (self.progress * f64::from(bar_width)) as u16;
            let y = area.y + 1;
            for i in 0..bar_width {
                let style = if i < filled {
                    Style::default().fg(colors.background()).bg(colors.accent())
                } else {
                    Style::default()
                        .fg(colors.text())
                        .bg(colors.background_light())
                };
                buf[(area.x + i, y)].set_symbol(" ").set_style(style);
            }
            let percent = format!("{:.0}%", self.progress * 100.0);
            let label_x = area.x + (bar_width.saturating_sub(percent.len() as u16)) / 2;
            buf.set_string(label_x, y, &percent, Style::default().fg(colors.text()));

            if let Some(gain) = self.gain {
                let text = format!(" +{gain}");
                buf.set_string(
                    area.x + bar_width,
                    y,
                    &text,
                    Style::default()
                        .fg(colors.accent())
                        .add_modifier(Modifier::BOLD),
                );
            }
        }

        if area.height >= 3 {
            buf.set_string(
                area.x,
                area.y + 2,
                format!("Current Location: {CURRENT_LOCATION}"),
                Style::default().fg(colors.text_highlight()),
            );
        }
    }
}
