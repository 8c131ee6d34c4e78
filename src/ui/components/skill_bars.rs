use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::Widget;

use crate::sheet::skills::{SKILL_MAX, Skill};
use crate::ui::theme::Theme;
use crate::ui::tooltip::TooltipContent;

const NAME_WIDTH: u16 = 23;
const VALUE_WIDTH: u16 = 4;

/// Hard skills as labelled horizontal bars, one row per skill.
pub struct SkillBars<'a> {
    skills: &'a [Skill],
    theme: &'a Theme,
}

impl<'a> SkillBars<'a> {
    pub fn new(skills: &'a [Skill], theme: &'a Theme) -> Self {
        Self { skills, theme }
    }
}

/// Tooltip regions, mirroring the row positions `render` uses.
pub fn hot_regions(area: Rect, skills: &[Skill]) -> Vec<(Rect, TooltipContent)> {
    skills
        .iter()
        .enumerate()
        .take(area.height.saturating_sub(1) as usize)
        .map(|(i, skill)| {
            (
                Rect::new(area.x, area.y + 1 + i as u16, area.width, 1),
                TooltipContent::new(
                    skill.name.clone(),
                    format!("{}/{SKILL_MAX}: {}", skill.value, skill.description),
                ),
            )
        })
        .collect()
}

impl Widget for SkillBars<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width < NAME_WIDTH + VALUE_WIDTH + 4 || area.height < 2 {
            return;
        }
        let colors = &self.theme.colors;

        buf.set_string(
            area.x,
            area.y,
            "Hard Skills",
            Style::default()
                .fg(colors.text())
                .add_modifier(Modifier::BOLD),
        );

        let bar_width = area.width - NAME_WIDTH - VALUE_WIDTH - 2;
        for (i, skill) in self.skills.iter().enumerate() {
            let y = area.y + 1 + i as u16;
            if y >= area.bottom() {
                break;
            }

            let name: String = skill.name.chars().take(NAME_WIDTH as usize - 1).collect();
            buf.set_string(area.x, y, &name, Style::default().fg(colors.text()));

            let filled =
                (u32::from(bar_width) * skill.value.min(SKILL_MAX) / SKILL_MAX) as u16;
            for b in 0..bar_width {
                let x = area.x + NAME_WIDTH + b;
                let style = if b < filled {
                    Style::default().bg(colors.chart_primary())
                } else {
                    Style::default().bg(colors.background_light())
                };
                buf[(x, y)].set_symbol(" ").set_style(style);
            }

            buf.set_string(
                area.x + NAME_WIDTH + bar_width + 1,
                y,
                format!("{:>3}", skill.value),
                Style::default().fg(colors.chart_secondary()),
            );
        }
    }
}
