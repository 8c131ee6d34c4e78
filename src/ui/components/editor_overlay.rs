use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Clear, Paragraph, Widget};

use crate::layout::model::{DragTarget, EffectiveLayout};
use crate::ui::theme::Theme;

/// Edit-mode debug readout: the effective coordinates for every draggable
/// element, the active gesture, key hints and the transient feedback line.
pub struct EditorOverlay<'a> {
    eff: &'a EffectiveLayout,
    dragging: Option<DragTarget>,
    feedback: Option<&'a str>,
    theme: &'a Theme,
}

impl<'a> EditorOverlay<'a> {
    pub fn new(
        eff: &'a EffectiveLayout,
        dragging: Option<DragTarget>,
        feedback: Option<&'a str>,
        theme: &'a Theme,
    ) -> Self {
        Self {
            eff,
            dragging,
            feedback,
            theme,
        }
    }
}

impl Widget for EditorOverlay<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;
        let eff = self.eff;

        Clear.render(area, buf);
        let block = Block::bordered()
            .title(" Layout Editor ")
            .border_style(Style::default().fg(colors.accent()))
            .style(Style::default().bg(colors.background()));
        let inner = block.inner(area);
        block.render(area, buf);

        let value_style = Style::default().fg(colors.text_highlight());
        let label_style = Style::default().fg(colors.text());

        let coord = |label: &'static str, text: String| {
            Line::from(vec![
                Span::styled(format!("{label:<14}"), label_style),
                Span::styled(text, value_style),
            ])
        };

        let mut lines = vec![
            coord(
                "sprite",
                format!(
                    "({}, {})  scale {:.2}",
                    eff.sprite_left, eff.sprite_top, eff.sprite_scale
                ),
            ),
            coord("exp bar", format!("({}, {})", eff.exp_bar_x, eff.exp_bar_y)),
            coord(
                "vitals",
                format!(
                    "({}, {})  pad {}",
                    eff.vitals_x, eff.vitals_y, eff.vitals_padding_top
                ),
            ),
            coord(
                "right column",
                format!("({}, {})", eff.right_column_x, eff.right_column_y),
            ),
        ];

        if let Some(target) = self.dragging {
            lines.push(Line::from(Span::styled(
                format!("dragging {}", target.label()),
                Style::default()
                    .fg(colors.accent())
                    .add_modifier(Modifier::BOLD),
            )));
        } else {
            lines.push(Line::from(""));
        }

        lines.push(Line::from(Span::styled(
            "[e] Done  [r] Reset all  [c] Copy for code  [+/-] Scale",
            Style::default().fg(colors.border()),
        )));

        if let Some(feedback) = self.feedback {
            lines.push(Line::from(Span::styled(
                feedback.to_string(),
                Style::default()
                    .fg(colors.text_highlight())
                    .add_modifier(Modifier::BOLD),
            )));
        }

        Paragraph::new(lines).render(inner, buf);
    }
}
