use crate::layout::model::{DragTarget, LayoutOffsets};

/// One drag gesture: where it started and what the offsets looked like at
/// that moment. Deltas are always computed against this snapshot so event
/// coalescing or replay cannot compound.
#[derive(Clone, Copy, Debug)]
struct Gesture {
    target: DragTarget,
    origin: (u16, u16),
    snapshot: LayoutOffsets,
}

/// Mouse-drag state machine: `Idle` or one in-flight gesture. The handlers
/// are registered for the lifetime of the app; state gates whether drag
/// events do anything.
#[derive(Debug, Default)]
pub struct DragController {
    gesture: Option<Gesture>,
}

impl DragController {
    /// Start a gesture on `target`. No-op unless edit mode is active. A
    /// second begin before the previous button-up simply replaces the
    /// gesture; the terminal only reports one pointer.
    pub fn begin(
        &mut self,
        editing: bool,
        target: DragTarget,
        column: u16,
        row: u16,
        offsets: &LayoutOffsets,
    ) {
        if !editing {
            return;
        }
        self.gesture = Some(Gesture {
            target,
            origin: (column, row),
            snapshot: *offsets,
        });
    }

    /// Apply the pointer's current position to the offset layer. Returns
    /// true when offsets changed (the caller persists on every change).
    pub fn update(&mut self, column: u16, row: u16, offsets: &mut LayoutOffsets) -> bool {
        let Some(gesture) = self.gesture else {
            return false;
        };

        let dx = i32::from(column) - i32::from(gesture.origin.0);
        let dy = i32::from(row) - i32::from(gesture.origin.1);
        let (fx, fy) = gesture.target.fields();

        let new_x = gesture.snapshot.get(fx) + dx;
        let new_y = gesture.snapshot.get(fy) + dy;
        let changed = offsets.get(fx) != new_x || offsets.get(fy) != new_y;
        offsets.set(fx, new_x);
        offsets.set(fy, new_y);
        changed
    }

    /// Button released: back to idle. Returns true if a gesture was active.
    pub fn end(&mut self) -> bool {
        self.gesture.take().is_some()
    }

    pub fn is_dragging(&self) -> bool {
        self.gesture.is_some()
    }

    pub fn active_target(&self) -> Option<DragTarget> {
        self.gesture.map(|g| g.target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn begin_is_noop_outside_edit_mode() {
        let mut drag = DragController::default();
        let offsets = LayoutOffsets::default();
        drag.begin(false, DragTarget::Vitals, 10, 10, &offsets);
        assert!(!drag.is_dragging());

        let mut offsets = offsets;
        assert!(!drag.update(20, 20, &mut offsets));
        assert!(offsets.is_zero());
    }

    #[test]
    fn drag_applies_delta_against_snapshot() {
        let mut drag = DragController::default();
        let mut offsets = LayoutOffsets {
            vitals_x: 4,
            vitals_y: -1,
            ..LayoutOffsets::default()
        };

        drag.begin(true, DragTarget::Vitals, 50, 20, &offsets);
        assert!(drag.update(60, 15, &mut offsets));
        assert_eq!(offsets.vitals_x, 14); // 4 + (60 - 50)
        assert_eq!(offsets.vitals_y, -6); // -1 + (15 - 20)

        // Moves are absolute against the origin, not cumulative per event
        assert!(drag.update(55, 20, &mut offsets));
        assert_eq!(offsets.vitals_x, 9);
        assert_eq!(offsets.vitals_y, -1);

        // Same position twice reports no change
        assert!(!drag.update(55, 20, &mut offsets));
    }

    #[test]
    fn end_returns_to_idle() {
        let mut drag = DragController::default();
        let mut offsets = LayoutOffsets::default();
        drag.begin(true, DragTarget::Sprite, 0, 0, &offsets);
        assert!(drag.is_dragging());
        assert_eq!(drag.active_target(), Some(DragTarget::Sprite));

        assert!(drag.end());
        assert!(!drag.is_dragging());
        assert!(!drag.end());

        // Updates after the gesture ended do nothing
        assert!(!drag.update(30, 30, &mut offsets));
        assert!(offsets.is_zero());
    }

    #[test]
    fn new_begin_replaces_active_gesture() {
        let mut drag = DragController::default();
        let mut offsets = LayoutOffsets::default();
        drag.begin(true, DragTarget::Sprite, 0, 0, &offsets);
        drag.update(5, 5, &mut offsets);

        drag.begin(true, DragTarget::ExperienceBar, 100, 100, &offsets);
        drag.update(103, 99, &mut offsets);

        // Sprite kept its last value, exp bar moved from the new snapshot
        assert_eq!(offsets.sprite_left, 5);
        assert_eq!(offsets.sprite_top, 5);
        assert_eq!(offsets.exp_bar_x, 3);
        assert_eq!(offsets.exp_bar_y, -1);
    }

    #[test]
    fn untouched_fields_survive_a_drag() {
        let mut drag = DragController::default();
        let mut offsets = LayoutOffsets {
            right_column_x: 7,
            ..LayoutOffsets::default()
        };
        drag.begin(true, DragTarget::Vitals, 10, 10, &offsets);
        drag.update(12, 13, &mut offsets);
        assert_eq!(offsets.right_column_x, 7);
    }
}
