use std::time::{Duration, Instant};

use crate::layout::model::{self, CanonicalLayout, EffectiveLayout, LayoutOffsets};

const FEEDBACK_TTL: Duration = Duration::from_millis(2000);

/// Sprite scale bounds for the edit-mode adjustment keys.
pub const SCALE_STEP: f64 = 0.05;
pub const SCALE_MIN: f64 = 0.5;
pub const SCALE_MAX: f64 = 2.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EditorMode {
    Viewing,
    Editing,
}

#[derive(Clone, Debug)]
struct Feedback {
    text: String,
    expires_at: Instant,
}

/// The edit-mode shell: viewing/editing state plus the transient feedback
/// line shown after clipboard and reset actions.
pub struct Editor {
    pub mode: EditorMode,
    feedback: Option<Feedback>,
}

impl Default for Editor {
    fn default() -> Self {
        Self {
            mode: EditorMode::Viewing,
            feedback: None,
        }
    }
}

impl Editor {
    pub fn is_editing(&self) -> bool {
        self.mode == EditorMode::Editing
    }

    /// Enter edit mode. Only available in the mobile arrangement; offsets
    /// continue from whatever was last persisted.
    pub fn enter(&mut self, is_mobile: bool) -> bool {
        if !is_mobile {
            return false;
        }
        self.mode = EditorMode::Editing;
        true
    }

    /// Done editing: flatten base + offsets into a new canonical layout and
    /// zero the offset layer. The caller persists both records.
    pub fn finish(&mut self, canonical: &mut CanonicalLayout, offsets: &mut LayoutOffsets) {
        *canonical = model::commit(canonical, offsets);
        *offsets = LayoutOffsets::default();
        self.mode = EditorMode::Viewing;
    }

    /// Leave edit mode without committing, e.g. when the arrangement flips
    /// back to desktop. Offsets keep whatever was last persisted.
    pub fn exit(&mut self) {
        self.mode = EditorMode::Viewing;
    }

    /// Reset all: revert the base layout to the hardcoded default and zero
    /// the offsets. Stays in edit mode; the caller deletes the stored
    /// canonical record.
    pub fn reset_all(&mut self, canonical: &mut CanonicalLayout, offsets: &mut LayoutOffsets) {
        if !self.is_editing() {
            return;
        }
        *canonical = CanonicalLayout::default();
        *offsets = LayoutOffsets::default();
    }

    pub fn set_feedback(&mut self, text: impl Into<String>, now: Instant) {
        self.feedback = Some(Feedback {
            text: text.into(),
            expires_at: now + FEEDBACK_TTL,
        });
    }

    /// Drop the feedback line once its display window has passed.
    pub fn tick(&mut self, now: Instant) {
        if let Some(ref feedback) = self.feedback {
            if now >= feedback.expires_at {
                self.feedback = None;
            }
        }
    }

    pub fn feedback_text(&self) -> Option<&str> {
        self.feedback.as_ref().map(|f| f.text.as_str())
    }
}

/// Render the current effective positions as a literal block suitable for
/// pasting back into the default layout constant.
pub fn code_snippet(eff: &EffectiveLayout) -> String {
    format!(
        "CanonicalLayout {{\n    \
         sprite_left: {},\n    \
         sprite_top: {},\n    \
         sprite_scale: {:.2},\n    \
         vitals_padding_top: {},\n    \
         exp_bar_x: {},\n    \
         exp_bar_y: {},\n    \
         vitals_x: {},\n    \
         vitals_y: {},\n    \
         right_column_x: {},\n    \
         right_column_y: {},\n\
         }}\n",
        eff.sprite_left,
        eff.sprite_top,
        eff.sprite_scale,
        eff.vitals_padding_top,
        eff.exp_bar_x,
        eff.exp_bar_y,
        eff.vitals_x,
        eff.vitals_y,
        eff.right_column_x,
        eff.right_column_y,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_requires_mobile() {
        let mut editor = Editor::default();
        assert!(!editor.enter(false));
        assert_eq!(editor.mode, EditorMode::Viewing);

        assert!(editor.enter(true));
        assert!(editor.is_editing());
    }

    #[test]
    fn finish_commits_and_zeroes() {
        let mut editor = Editor::default();
        editor.enter(true);

        let mut canonical = CanonicalLayout::default();
        let base_vitals_x = canonical.vitals_x;
        let base_vitals_y = canonical.vitals_y;
        let mut offsets = LayoutOffsets {
            vitals_x: 10,
            vitals_y: -5,
            ..LayoutOffsets::default()
        };

        editor.finish(&mut canonical, &mut offsets);
        assert_eq!(canonical.vitals_x, base_vitals_x + 10);
        assert_eq!(canonical.vitals_y, base_vitals_y - 5);
        assert!(offsets.is_zero());
        assert_eq!(editor.mode, EditorMode::Viewing);
    }

    #[test]
    fn reset_all_reverts_to_default_without_exiting() {
        let mut editor = Editor::default();
        editor.enter(true);

        let mut canonical = CanonicalLayout {
            sprite_left: 44,
            ..CanonicalLayout::default()
        };
        let mut offsets = LayoutOffsets {
            sprite_left: 3,
            ..LayoutOffsets::default()
        };

        editor.reset_all(&mut canonical, &mut offsets);
        assert_eq!(canonical, CanonicalLayout::default());
        assert!(offsets.is_zero());
        assert!(editor.is_editing());
    }

    #[test]
    fn reset_all_is_noop_while_viewing() {
        let mut editor = Editor::default();
        let mut canonical = CanonicalLayout {
            sprite_left: 44,
            ..CanonicalLayout::default()
        };
        let mut offsets = LayoutOffsets::default();
        editor.reset_all(&mut canonical, &mut offsets);
        assert_eq!(canonical.sprite_left, 44);
    }

    #[test]
    fn feedback_expires_after_ttl() {
        let mut editor = Editor::default();
        let now = Instant::now();
        editor.set_feedback("copied", now);
        assert_eq!(editor.feedback_text(), Some("copied"));

        editor.tick(now + Duration::from_millis(100));
        assert_eq!(editor.feedback_text(), Some("copied"));

        editor.tick(now + FEEDBACK_TTL);
        assert_eq!(editor.feedback_text(), None);
    }

    #[test]
    fn code_snippet_lists_every_field() {
        let eff = crate::layout::model::effective(
            &CanonicalLayout::default(),
            &LayoutOffsets {
                exp_bar_x: 21,
                ..LayoutOffsets::default()
            },
        );
        let snippet = code_snippet(&eff);
        assert!(snippet.starts_with("CanonicalLayout {"));
        assert!(snippet.contains("exp_bar_x: 21,"));
        assert!(snippet.contains("sprite_scale: 1.00,"));
        assert!(snippet.contains("right_column_y: 0,"));
    }
}
