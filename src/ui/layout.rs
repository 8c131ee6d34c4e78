use ratatui::layout::{Constraint, Direction, Layout, Position, Rect};

use crate::layout::model::{DragTarget, EffectiveLayout};

/// Fixed slot heights for the stacked (mobile) arrangement.
const EXP_BAR_HEIGHT: u16 = 4;
const VITALS_HEIGHT: u16 = 4;
const DETAILS_MIN_HEIGHT: u16 = 14;

/// Screen placement of every sheet element for one frame. Computed both by
/// the renderer and by the mouse dispatcher, so hit tests always agree with
/// what was drawn.
pub struct SheetLayout {
    pub header: Rect,
    pub sprite: Rect,
    pub exp_bar: Rect,
    pub vitals: Rect,
    pub details: Rect,
    pub radar: Rect,
    pub bars: Rect,
    pub footer: Rect,
    pub mobile: bool,
}

impl SheetLayout {
    pub fn new(area: Rect, mobile: bool, eff: &EffectiveLayout, sprite_size: (u16, u16)) -> Self {
        if mobile {
            Self::stacked(area, eff, sprite_size)
        } else {
            Self::columns(area, sprite_size)
        }
    }

    /// Desktop: fixed three-column arrangement; the offset layer does not
    /// apply here.
    fn columns(area: Rect, sprite_size: (u16, u16)) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(10),
                Constraint::Length(1),
            ])
            .split(area);

        let sprite_col_width = (sprite_size.0 + 4).max(16);
        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Length(sprite_col_width),
                Constraint::Percentage(40),
                Constraint::Min(30),
            ])
            .split(vertical[1]);

        let center = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(EXP_BAR_HEIGHT),
                Constraint::Length(VITALS_HEIGHT),
                Constraint::Min(DETAILS_MIN_HEIGHT),
            ])
            .split(columns[1]);

        let charts = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(55), Constraint::Min(8)])
            .split(columns[2]);

        let sprite = clip(
            Rect::new(
                columns[0].x + 2,
                columns[0].y + 1,
                sprite_size.0,
                sprite_size.1,
            ),
            columns[0],
        );

        Self {
            header: vertical[0],
            sprite,
            exp_bar: center[0],
            vitals: center[1],
            details: center[2],
            radar: charts[0],
            bars: charts[1],
            footer: vertical[2],
            mobile: false,
        }
    }

    /// Mobile: single stacked column. The sprite anchors absolutely inside
    /// the body; every other draggable element starts from its stacked slot
    /// and is shifted by its offset pair. Elements dragged past an edge are
    /// clipped, not pulled back.
    fn stacked(area: Rect, eff: &EffectiveLayout, sprite_size: (u16, u16)) -> Self {
        let vertical = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(10),
                Constraint::Length(1),
            ])
            .split(area);
        let body = vertical[1];

        let sprite_band = sprite_size.1.saturating_add(1);
        let slots = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(sprite_band),
                Constraint::Length(EXP_BAR_HEIGHT),
                Constraint::Length(VITALS_HEIGHT),
                Constraint::Min(DETAILS_MIN_HEIGHT),
                Constraint::Length(8),
            ])
            .split(body);

        let sprite = shift(
            Rect::new(body.x, body.y, sprite_size.0, sprite_size.1),
            eff.sprite_left,
            eff.sprite_top,
            body,
        );
        let exp_bar = shift(slots[1], eff.exp_bar_x, eff.exp_bar_y, body);
        let vitals = shift(
            slots[2],
            eff.vitals_x,
            eff.vitals_y + eff.vitals_padding_top,
            body,
        );
        let details = shift(slots[3], eff.right_column_x, eff.right_column_y, body);

        let charts = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(slots[4]);

        Self {
            header: vertical[0],
            sprite,
            exp_bar,
            vitals,
            details,
            radar: charts[0],
            bars: charts[1],
            footer: vertical[2],
            mobile: true,
        }
    }

    /// Which draggable element, if any, sits under the pointer.
    pub fn target_at(&self, column: u16, row: u16) -> Option<DragTarget> {
        let pos = Position::new(column, row);
        if self.sprite.contains(pos) {
            Some(DragTarget::Sprite)
        } else if self.exp_bar.contains(pos) {
            Some(DragTarget::ExperienceBar)
        } else if self.vitals.contains(pos) {
            Some(DragTarget::Vitals)
        } else if self.details.contains(pos) {
            Some(DragTarget::RightColumn)
        } else {
            None
        }
    }
}

/// Translate `rect` by a signed cell delta, then clip it to `bounds`. A rect
/// pushed fully outside collapses to zero size.
pub fn shift(rect: Rect, dx: i32, dy: i32, bounds: Rect) -> Rect {
    let left = i32::from(rect.x) + dx;
    let top = i32::from(rect.y) + dy;
    let right = left + i32::from(rect.width);
    let bottom = top + i32::from(rect.height);

    let left = left.max(i32::from(bounds.left()));
    let top = top.max(i32::from(bounds.top()));
    let right = right.min(i32::from(bounds.right()));
    let bottom = bottom.min(i32::from(bounds.bottom()));

    if right <= left || bottom <= top {
        return Rect::new(bounds.x, bounds.y, 0, 0);
    }
    Rect::new(
        left as u16,
        top as u16,
        (right - left) as u16,
        (bottom - top) as u16,
    )
}

fn clip(rect: Rect, bounds: Rect) -> Rect {
    shift(rect, 0, 0, bounds)
}

pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    const MIN_POPUP_WIDTH: u16 = 40;
    const MIN_POPUP_HEIGHT: u16 = 10;

    let requested_w = area.width.saturating_mul(percent_x.min(100)) / 100;
    let requested_h = area.height.saturating_mul(percent_y.min(100)) / 100;

    let target_w = requested_w.max(MIN_POPUP_WIDTH).min(area.width);
    let target_h = requested_h.max(MIN_POPUP_HEIGHT).min(area.height);

    let left = area
        .x
        .saturating_add((area.width.saturating_sub(target_w)) / 2);
    let top = area
        .y
        .saturating_add((area.height.saturating_sub(target_h)) / 2);

    Rect::new(left, top, target_w, target_h)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::model::{CanonicalLayout, LayoutOffsets, effective};

    fn eff_with(offsets: LayoutOffsets) -> EffectiveLayout {
        effective(&CanonicalLayout::default(), &offsets)
    }

    #[test]
    fn shift_moves_and_clips() {
        let bounds = Rect::new(0, 0, 100, 50);
        let rect = Rect::new(10, 10, 20, 5);

        let moved = shift(rect, 5, -3, bounds);
        assert_eq!(moved, Rect::new(15, 7, 20, 5));

        // Pushed past the left edge: cropped, not repositioned
        let cropped = shift(rect, -15, 0, bounds);
        assert_eq!(cropped, Rect::new(0, 10, 15, 5));

        // Fully off-screen collapses to nothing
        let gone = shift(rect, 200, 0, bounds);
        assert_eq!(gone.width, 0);
    }

    #[test]
    fn stacked_layout_applies_offsets() {
        let area = Rect::new(0, 0, 60, 50);
        let base = SheetLayout::new(area, true, &eff_with(LayoutOffsets::default()), (14, 11));
        let shifted = SheetLayout::new(
            area,
            true,
            &eff_with(LayoutOffsets {
                vitals_x: 10,
                vitals_y: 2,
                ..LayoutOffsets::default()
            }),
            (14, 11),
        );
        assert_eq!(shifted.vitals.x, base.vitals.x + 10);
        assert_eq!(shifted.vitals.y, base.vitals.y + 2);
        // Untouched elements stay put
        assert_eq!(shifted.exp_bar, base.exp_bar);
    }

    #[test]
    fn desktop_layout_ignores_offsets() {
        let area = Rect::new(0, 0, 140, 50);
        let base = SheetLayout::new(area, false, &eff_with(LayoutOffsets::default()), (14, 11));
        let dragged = SheetLayout::new(
            area,
            false,
            &eff_with(LayoutOffsets {
                exp_bar_x: 30,
                ..LayoutOffsets::default()
            }),
            (14, 11),
        );
        assert_eq!(base.exp_bar, dragged.exp_bar);
    }

    #[test]
    fn target_at_finds_each_draggable() {
        let area = Rect::new(0, 0, 60, 60);
        let layout = SheetLayout::new(area, true, &eff_with(LayoutOffsets::default()), (14, 11));

        let center = |r: Rect| (r.x + r.width / 2, r.y + r.height / 2);
        let (cx, cy) = center(layout.vitals);
        assert_eq!(layout.target_at(cx, cy), Some(DragTarget::Vitals));
        let (cx, cy) = center(layout.exp_bar);
        assert_eq!(layout.target_at(cx, cy), Some(DragTarget::ExperienceBar));
        let (cx, cy) = center(layout.details);
        assert_eq!(layout.target_at(cx, cy), Some(DragTarget::RightColumn));
        let (cx, cy) = center(layout.sprite);
        assert_eq!(layout.target_at(cx, cy), Some(DragTarget::Sprite));

        assert_eq!(layout.target_at(area.width - 1, 0), None);
    }

    #[test]
    fn centered_rect_stays_within_area() {
        let area = Rect::new(0, 0, 100, 40);
        let rect = centered_rect(50, 50, area);
        assert!(rect.right() <= area.right());
        assert!(rect.bottom() <= area.bottom());
    }
}
