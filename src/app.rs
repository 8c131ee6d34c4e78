use std::time::Instant;

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};
use rand::SeedableRng;
use rand::rngs::SmallRng;
use ratatui::layout::{Position, Rect};

use crate::clipboard;
use crate::config::Config;
use crate::layout::drag::DragController;
use crate::layout::editor::{Editor, SCALE_MAX, SCALE_MIN, SCALE_STEP, code_snippet};
use crate::layout::model::{self, CanonicalLayout, EffectiveLayout, LayoutOffsets};
use crate::layout::store::LayoutStore;
use crate::sheet::experience::ExperienceState;
use crate::sheet::skills::SkillsData;
use crate::sheet::vitals::Vitals;
use crate::ui::components::sprite::{SpriteAnimation, SpriteSheet};
use crate::ui::components::{details_panel, skill_bars};
use crate::ui::layout::SheetLayout;
use crate::ui::theme::Theme;
use crate::ui::tooltip::{TooltipContent, TooltipState};
use crate::view_mode::{ViewMode, ViewState};

pub struct App {
    pub config: Config,
    pub theme: &'static Theme,
    pub view: ViewState,
    pub canonical: CanonicalLayout,
    pub offsets: LayoutOffsets,
    pub store: Option<LayoutStore>,
    pub drag: DragController,
    pub editor: Editor,
    pub tooltip: TooltipState,
    pub sprite_sheet: SpriteSheet,
    pub sprite_anim: SpriteAnimation,
    pub experience: ExperienceState,
    pub vitals: Vitals,
    pub skills: SkillsData,
    pub viewport: (u16, u16),
    pub should_quit: bool,
    rng: SmallRng,
}

impl App {
    pub fn new() -> Self {
        let config = Config::load().unwrap_or_default();
        let loaded_theme = Theme::load(&config.theme).unwrap_or_default();
        let theme: &'static Theme = Box::leak(Box::new(loaded_theme));

        let store = LayoutStore::new().ok();
        let (canonical, offsets) = match store {
            Some(ref s) => (s.load_canonical(), s.load_offsets()),
            None => (CanonicalLayout::default(), LayoutOffsets::default()),
        };

        let viewport = crossterm::terminal::size().unwrap_or((80, 24));
        let view = ViewState::new(ViewMode::Auto, viewport.0, config.compact_width);

        let mut rng = SmallRng::from_entropy();
        let now = Instant::now();
        let today = chrono::Local::now().date_naive();
        let experience = ExperienceState::new(now, today, &mut rng);
        let vitals = Vitals::new(now, &mut rng);

        Self {
            config,
            theme,
            view,
            canonical,
            offsets,
            store,
            drag: DragController::default(),
            editor: Editor::default(),
            tooltip: TooltipState::default(),
            sprite_sheet: SpriteSheet::load(),
            sprite_anim: SpriteAnimation::new(now),
            experience,
            vitals,
            skills: SkillsData::load(),
            viewport,
            should_quit: false,
            rng,
        }
    }

    pub fn effective(&self) -> EffectiveLayout {
        model::effective(&self.canonical, &self.offsets)
    }

    pub fn sheet_layout(&self, area: Rect) -> SheetLayout {
        let eff = self.effective();
        let sprite_size = self.sprite_sheet.scaled_size(eff.sprite_scale);
        SheetLayout::new(area, self.view.is_mobile(), &eff, sprite_size)
    }

    pub fn on_tick(&mut self, now: Instant) {
        if self.config.animations {
            let today = chrono::Local::now().date_naive();
            self.experience.tick(now, today, &mut self.rng);
            self.vitals.tick(now, &mut self.rng);
            self.sprite_anim.tick(now, self.sprite_sheet.frame_count());
        }
        self.editor.tick(now);
    }

    pub fn on_resize(&mut self, width: u16, height: u16) {
        self.viewport = (width, height);
        self.view.on_resize(width);
        self.tooltip.dismiss();
        if self.editor.is_editing() && !self.view.is_mobile() {
            self.drag.end();
            self.editor.exit();
        }
    }

    pub fn set_view_mode(&mut self, mode: ViewMode) {
        self.view.set_mode(mode);
        self.tooltip.dismiss();
        if self.editor.is_editing() && !self.view.is_mobile() {
            self.drag.end();
            self.editor.exit();
        }
    }

    /// The edit toggle key: enter while viewing (mobile only), commit and
    /// exit while editing.
    pub fn toggle_edit(&mut self) {
        if self.editor.is_editing() {
            self.finish_editing();
        } else {
            self.editor.enter(self.view.is_mobile());
        }
    }

    pub fn finish_editing(&mut self) {
        self.drag.end();
        self.editor.finish(&mut self.canonical, &mut self.offsets);
        self.save_canonical();
        self.save_offsets();
    }

    pub fn reset_layout(&mut self) {
        if !self.editor.is_editing() {
            return;
        }
        self.editor.reset_all(&mut self.canonical, &mut self.offsets);
        if let Some(ref store) = self.store {
            store.clear_canonical();
        }
        self.save_offsets();
        self.editor.set_feedback("Layout reset to defaults", Instant::now());
    }

    pub fn copy_layout(&mut self) {
        if !self.editor.is_editing() {
            return;
        }
        let snippet = code_snippet(&self.effective());
        let feedback = match clipboard::copy_text(&snippet) {
            Ok(()) => "Copied layout to clipboard".to_string(),
            Err(e) => format!("Copy failed: {e}"),
        };
        self.editor.set_feedback(feedback, Instant::now());
    }

    pub fn adjust_scale(&mut self, steps: i32) {
        if !self.editor.is_editing() {
            return;
        }
        let scale = self.canonical.sprite_scale + f64::from(steps) * SCALE_STEP;
        self.canonical.sprite_scale = scale.clamp(SCALE_MIN, SCALE_MAX);
        self.save_canonical();
    }

    pub fn on_mouse(&mut self, mouse: MouseEvent) {
        let area = Rect::new(0, 0, self.viewport.0, self.viewport.1);
        let layout = self.sheet_layout(area);
        let pointer = (mouse.column, mouse.row);

        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if self.editor.is_editing() {
                    if let Some(target) = layout.target_at(mouse.column, mouse.row) {
                        self.tooltip.dismiss();
                        self.drag
                            .begin(true, target, mouse.column, mouse.row, &self.offsets);
                        return;
                    }
                }
                if let Some(content) = self.tooltip_at(&layout, mouse.column, mouse.row) {
                    self.tooltip.toggle_pin(content, pointer, self.viewport);
                } else {
                    self.tooltip.dismiss();
                }
            }
            MouseEventKind::Drag(MouseButton::Left) => {
                if self.drag.update(mouse.column, mouse.row, &mut self.offsets) {
                    self.save_offsets();
                }
            }
            MouseEventKind::Up(MouseButton::Left) => {
                self.drag.end();
            }
            MouseEventKind::Moved => {
                if self.drag.is_dragging() {
                    return;
                }
                match self.tooltip_at(&layout, mouse.column, mouse.row) {
                    Some(content) => self.tooltip.hover(content, pointer, self.viewport),
                    None => self.tooltip.leave(),
                }
            }
            MouseEventKind::ScrollUp | MouseEventKind::ScrollDown => {
                self.tooltip.dismiss();
            }
            _ => {}
        }
    }

    fn tooltip_at(&self, layout: &SheetLayout, column: u16, row: u16) -> Option<TooltipContent> {
        let pos = Position::new(column, row);
        details_panel::hot_regions(layout.details)
            .into_iter()
            .chain(skill_bars::hot_regions(layout.bars, &self.skills.hard))
            .find(|(rect, _)| rect.contains(pos))
            .map(|(_, content)| content)
    }

    fn save_offsets(&self) {
        if let Some(ref store) = self.store {
            let _ = store.save_offsets(&self.offsets);
        }
    }

    fn save_canonical(&self) {
        if let Some(ref store) = self.store {
            let _ = store.save_canonical(&self.canonical);
        }
    }
}
