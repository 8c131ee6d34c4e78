use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Widget;

use crate::sheet::character::{BONUS_TRAIT, DETAILS, PASSIVE_PERKS, SIGNATURE_MOVE};
use crate::ui::theme::Theme;
use crate::ui::tooltip::TooltipContent;

/// One rendered row of the details column. The same row list drives both
/// drawing and tooltip hit-testing so the two can never disagree.
pub enum Row {
    Blank,
    Section(&'static str),
    Entry {
        prefix: Option<&'static str>,
        value: &'static str,
        tooltip: &'static str,
    },
}

pub fn rows() -> Vec<Row> {
    let mut rows = vec![Row::Section("Specialization")];
    for detail in DETAILS {
        rows.push(Row::Entry {
            prefix: Some(detail.label),
            value: detail.value,
            tooltip: detail.tooltip,
        });
    }

    rows.push(Row::Blank);
    rows.push(Row::Section("Signature Move"));
    rows.push(Row::Entry {
        prefix: None,
        value: SIGNATURE_MOVE.name,
        tooltip: SIGNATURE_MOVE.description,
    });

    rows.push(Row::Blank);
    rows.push(Row::Section("Passive Perks"));
    for perk in PASSIVE_PERKS {
        rows.push(Row::Entry {
            prefix: None,
            value: perk.name,
            tooltip: perk.description,
        });
    }

    rows.push(Row::Blank);
    rows.push(Row::Section("Bonus Trait"));
    rows.push(Row::Entry {
        prefix: None,
        value: BONUS_TRAIT.name,
        tooltip: BONUS_TRAIT.description,
    });

    rows
}

/// Rects (one text row each) that show a tooltip on hover or tap.
pub fn hot_regions(area: Rect) -> Vec<(Rect, TooltipContent)> {
    rows()
        .iter()
        .enumerate()
        .take(area.height as usize)
        .filter_map(|(i, row)| match row {
            Row::Entry { value, tooltip, .. } => Some((
                Rect::new(area.x, area.y + i as u16, area.width, 1),
                TooltipContent::new(*value, *tooltip),
            )),
            _ => None,
        })
        .collect()
}

pub struct DetailsPanel<'a> {
    theme: &'a Theme,
}

impl<'a> DetailsPanel<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

impl Widget for DetailsPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let colors = &self.theme.colors;

        for (i, row) in rows().iter().enumerate() {
            if i as u16 >= area.height {
                break;
            }
            let y = area.y + i as u16;
            let line = match row {
                Row::Blank => continue,
                Row::Section(title) => Line::from(Span::styled(
                    *title,
                    Style::default()
                        .fg(colors.accent())
                        .add_modifier(Modifier::BOLD),
                )),
                Row::Entry {
                    prefix,
                    value,
                    tooltip: _,
                } => {
                    let mut spans = vec![Span::styled("  ", Style::default())];
                    if let Some(prefix) = prefix {
                        spans.push(Span::styled(
                            format!("{prefix}: "),
                            Style::default().fg(colors.text()),
                        ));
                    }
                    spans.push(Span::styled(
                        *value,
                        Style::default()
                            .fg(colors.text_highlight())
                            .add_modifier(Modifier::UNDERLINED),
                    ));
                    Line::from(spans)
                }
            };
            buf.set_line(area.x, y, &line, area.width);
        }
    }
}
