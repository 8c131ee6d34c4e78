use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, Clear, Paragraph, Widget, Wrap};

use crate::ui::theme::Theme;
use crate::ui::tooltip::{TOOLTIP_MAX_HEIGHT, TOOLTIP_MAX_WIDTH, TooltipState, VIEWPORT_PADDING};

fn wrapped_line_count(text: &str, width: usize) -> usize {
    if width == 0 {
        return 0;
    }
    let chars = text.chars().count().max(1);
    chars.div_ceil(width)
}

/// Draw the floating info box over whatever was rendered below it.
pub fn render(state: &TooltipState, viewport: Rect, theme: &Theme, buf: &mut Buffer) {
    let Some((content, (x, y))) = state.visible() else {
        return;
    };
    let colors = &theme.colors;

    let width = TOOLTIP_MAX_WIDTH.min(viewport.width.saturating_sub(VIEWPORT_PADDING * 2));
    if width < 6 {
        return;
    }
    let text_width = usize::from(width - 2);
    let body_lines = wrapped_line_count(&content.body, text_width) as u16;
    let height = (body_lines + 2)
        .min(TOOLTIP_MAX_HEIGHT)
        .min(viewport.height.saturating_sub(VIEWPORT_PADDING * 2));
    if height < 3 {
        return;
    }

    // The clamp already bounded the position for the maximum box size; the
    // actual box only ever shrinks from there.
    let area = Rect::new(x, y, width, height).intersection(viewport);

    Clear.render(area, buf);
    let block = Block::bordered()
        .title(format!(" {} ", content.title))
        .title_style(
            Style::default()
                .fg(colors.text_highlight())
                .add_modifier(Modifier::BOLD),
        )
        .border_style(Style::default().fg(colors.border()))
        .style(Style::default().bg(colors.background_light()));
    let inner = block.inner(area);
    block.render(area, buf);

    Paragraph::new(content.body.as_str())
        .style(Style::default().fg(colors.text()))
        .wrap(Wrap { trim: true })
        .render(inner, buf);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_count_rounds_up() {
        assert_eq!(wrapped_line_count("", 10), 1);
        assert_eq!(wrapped_line_count("abcdefghij", 10), 1);
        assert_eq!(wrapped_line_count("abcdefghijk", 10), 2);
        assert_eq!(wrapped_line_count("anything", 0), 0);
    }
}
