use std::f64::consts::TAU;

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::symbols;
use ratatui::text::Span;
use ratatui::widgets::canvas::{Canvas, Line as CanvasLine};
use ratatui::widgets::{Block, Widget};

use crate::sheet::skills::{SKILL_MAX, Skill};
use crate::ui::theme::Theme;

const RING_LEVELS: [f64; 3] = [0.33, 0.66, 1.0];
const LABEL_RADIUS: f64 = 1.22;
const LABEL_MAX_CHARS: usize = 14;

/// Soft skills as a spider chart: one spoke per skill, value polygon over
/// faint reference rings.
pub struct SkillRadar<'a> {
    skills: &'a [Skill],
    theme: &'a Theme,
}

impl<'a> SkillRadar<'a> {
    pub fn new(skills: &'a [Skill], theme: &'a Theme) -> Self {
        Self { skills, theme }
    }
}

fn spoke_point(index: usize, count: usize, radius: f64) -> (f64, f64) {
    // Spoke 0 points straight up, the rest proceed clockwise
    let angle = std::f64::consts::FRAC_PI_2 - TAU * index as f64 / count as f64;
    (radius * angle.cos(), radius * angle.sin())
}

impl Widget for SkillRadar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let block = Block::bordered()
            .title(" Soft Skills ")
            .border_style(Style::default().fg(colors.border()));

        let count = self.skills.len();
        if count < 3 {
            block.render(area, buf);
            return;
        }

        let values: Vec<f64> = self
            .skills
            .iter()
            .map(|s| f64::from(s.value.min(SKILL_MAX)) / f64::from(SKILL_MAX))
            .collect();

        let canvas = Canvas::default()
            .block(block)
            .marker(symbols::Marker::Braille)
            // Wider x range compensates for the 2:1 cell aspect
            .x_bounds([-2.1, 2.1])
            .y_bounds([-1.45, 1.45])
            .paint(|ctx| {
                let grid = colors.border();

                // Reference rings
                for level in RING_LEVELS {
                    for i in 0..count {
                        let (x1, y1) = spoke_point(i, count, level);
                        let (x2, y2) = spoke_point((i + 1) % count, count, level);
                        ctx.draw(&CanvasLine {
                            x1,
                            y1,
                            x2,
                            y2,
                            color: grid,
                        });
                    }
                }

                // Spokes
                for i in 0..count {
                    let (x, y) = spoke_point(i, count, 1.0);
                    ctx.draw(&CanvasLine {
                        x1: 0.0,
                        y1: 0.0,
                        x2: x,
                        y2: y,
                        color: grid,
                    });
                }

                // Value polygon
                for i in 0..count {
                    let (x1, y1) = spoke_point(i, count, values[i]);
                    let next = (i + 1) % count;
                    let (x2, y2) = spoke_point(next, count, values[next]);
                    ctx.draw(&CanvasLine {
                        x1,
                        y1,
                        x2,
                        y2,
                        color: colors.chart_primary(),
                    });
                }

                // Labels just past the spoke tips
                for (i, skill) in self.skills.iter().enumerate() {
                    let (x, y) = spoke_point(i, count, LABEL_RADIUS);
                    let label: String = skill.name.chars().take(LABEL_MAX_CHARS).collect();
                    // Nudge left-side labels so they grow away from the chart
                    let x = if x < -0.1 {
                        x - label.chars().count() as f64 * 0.04
                    } else {
                        x
                    };
                    ctx.print(
                        x,
                        y,
                        Span::styled(label, Style::default().fg(colors.text())),
                    );
                }
            });

        canvas.render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spoke_zero_points_up() {
        let (x, y) = spoke_point(0, 7, 1.0);
        assert!(x.abs() < 1e-9);
        assert!((y - 1.0).abs() < 1e-9);
    }

    #[test]
    fn spokes_stay_on_the_unit_circle() {
        for i in 0..7 {
            let (x, y) = spoke_point(i, 7, 1.0);
            let r = (x * x + y * y).sqrt();
            assert!((r - 1.0).abs() < 1e-9, "spoke {i}: r = {r}");
        }
    }
}
