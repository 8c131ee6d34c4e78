/// Cells between the pointer and the tooltip's top-left corner.
pub const CURSOR_OFFSET: u16 = 2;
/// Minimum inset kept between the tooltip box and every viewport edge.
pub const VIEWPORT_PADDING: u16 = 1;
pub const TOOLTIP_MAX_WIDTH: u16 = 42;
pub const TOOLTIP_MAX_HEIGHT: u16 = 10;

/// Offset the pointer position and clamp each axis independently so a box of
/// the maximum tooltip size stays inside the viewport inset. The lower bound
/// wins when the viewport is too small to honor both.
pub fn clamped_position(pointer: (u16, u16), viewport: (u16, u16)) -> (u16, u16) {
    let max_x = viewport
        .0
        .saturating_sub(VIEWPORT_PADDING + TOOLTIP_MAX_WIDTH);
    let max_y = viewport
        .1
        .saturating_sub(VIEWPORT_PADDING + TOOLTIP_MAX_HEIGHT);

    let x = pointer
        .0
        .saturating_add(CURSOR_OFFSET)
        .min(max_x)
        .max(VIEWPORT_PADDING);
    let y = pointer
        .1
        .saturating_add(CURSOR_OFFSET)
        .min(max_y)
        .max(VIEWPORT_PADDING);
    (x, y)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TooltipContent {
    pub title: String,
    pub body: String,
}

impl TooltipContent {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            body: body.into(),
        }
    }
}

/// Visibility state for the floating info box. Hover follows the pointer; a
/// click pins the box in place until the next click or dismissal.
#[derive(Debug, Default)]
pub struct TooltipState {
    content: Option<TooltipContent>,
    position: (u16, u16),
    pinned: bool,
}

impl TooltipState {
    /// Pointer entered (or moved within) a tooltip region.
    pub fn hover(&mut self, content: TooltipContent, pointer: (u16, u16), viewport: (u16, u16)) {
        if self.pinned {
            return;
        }
        self.position = clamped_position(pointer, viewport);
        self.content = Some(content);
    }

    /// Pointer moved off every region.
    pub fn leave(&mut self) {
        if !self.pinned {
            self.content = None;
        }
    }

    /// Tap toggle: pin the tooltip at the tap position, or hide it when the
    /// same region is tapped again.
    pub fn toggle_pin(
        &mut self,
        content: TooltipContent,
        pointer: (u16, u16),
        viewport: (u16, u16),
    ) {
        if self.pinned && self.content.as_ref() == Some(&content) {
            self.dismiss();
            return;
        }
        self.position = clamped_position(pointer, viewport);
        self.content = Some(content);
        self.pinned = true;
    }

    /// Safety dismissal (resize, tap outside, scroll).
    pub fn dismiss(&mut self) {
        self.content = None;
        self.pinned = false;
    }

    pub fn is_pinned(&self) -> bool {
        self.pinned
    }

    pub fn visible(&self) -> Option<(&TooltipContent, (u16, u16))> {
        self.content.as_ref().map(|c| (c, self.position))
    }
}
