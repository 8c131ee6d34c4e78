use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const SCHEMA_VERSION: u32 = 2;

/// Committed base positions for the draggable elements of the compact layout.
/// Coordinates are terminal cells; the sprite anchor is absolute, the other
/// fields are translations applied to each element's stacked slot.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CanonicalLayout {
    pub schema_version: u32,
    pub sprite_left: i32,
    pub sprite_top: i32,
    pub sprite_scale: f64,
    pub vitals_padding_top: i32,
    pub exp_bar_x: i32,
    pub exp_bar_y: i32,
    pub vitals_x: i32,
    pub vitals_y: i32,
    pub right_column_x: i32,
    pub right_column_y: i32,
}

impl Default for CanonicalLayout {
    fn default() -> Self {
        Self {
            schema_version: SCHEMA_VERSION,
            sprite_left: 2,
            sprite_top: 2,
            sprite_scale: 1.0,
            vitals_padding_top: 1,
            exp_bar_x: 0,
            exp_bar_y: 0,
            vitals_x: 0,
            vitals_y: 0,
            right_column_x: 0,
            right_column_y: 0,
        }
    }
}

/// Distance dragged since the canonical layout was last committed.
/// Same shape as the positional subset of [`CanonicalLayout`], all zero at rest.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LayoutOffsets {
    #[serde(default)]
    pub sprite_left: i32,
    #[serde(default)]
    pub sprite_top: i32,
    #[serde(default)]
    pub vitals_padding_top: i32,
    #[serde(default)]
    pub exp_bar_x: i32,
    #[serde(default)]
    pub exp_bar_y: i32,
    #[serde(default)]
    pub vitals_x: i32,
    #[serde(default)]
    pub vitals_y: i32,
    #[serde(default)]
    pub right_column_x: i32,
    #[serde(default)]
    pub right_column_y: i32,
}

impl LayoutOffsets {
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }

    pub fn get(&self, field: OffsetField) -> i32 {
        match field {
            OffsetField::SpriteLeft => self.sprite_left,
            OffsetField::SpriteTop => self.sprite_top,
            OffsetField::VitalsPaddingTop => self.vitals_padding_top,
            OffsetField::ExpBarX => self.exp_bar_x,
            OffsetField::ExpBarY => self.exp_bar_y,
            OffsetField::VitalsX => self.vitals_x,
            OffsetField::VitalsY => self.vitals_y,
            OffsetField::RightColumnX => self.right_column_x,
            OffsetField::RightColumnY => self.right_column_y,
        }
    }

    pub fn set(&mut self, field: OffsetField, value: i32) {
        match field {
            OffsetField::SpriteLeft => self.sprite_left = value,
            OffsetField::SpriteTop => self.sprite_top = value,
            OffsetField::VitalsPaddingTop => self.vitals_padding_top = value,
            OffsetField::ExpBarX => self.exp_bar_x = value,
            OffsetField::ExpBarY => self.exp_bar_y = value,
            OffsetField::VitalsX => self.vitals_x = value,
            OffsetField::VitalsY => self.vitals_y = value,
            OffsetField::RightColumnX => self.right_column_x = value,
            OffsetField::RightColumnY => self.right_column_y = value,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OffsetField {
    SpriteLeft,
    SpriteTop,
    VitalsPaddingTop,
    ExpBarX,
    ExpBarY,
    VitalsX,
    VitalsY,
    RightColumnX,
    RightColumnY,
}

/// The elements a drag gesture can move. Each maps to the pair of offset
/// fields its horizontal and vertical motion accumulates into.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragTarget {
    Sprite,
    ExperienceBar,
    Vitals,
    RightColumn,
}

impl DragTarget {
    pub fn fields(self) -> (OffsetField, OffsetField) {
        match self {
            DragTarget::Sprite => (OffsetField::SpriteLeft, OffsetField::SpriteTop),
            DragTarget::ExperienceBar => (OffsetField::ExpBarX, OffsetField::ExpBarY),
            DragTarget::Vitals => (OffsetField::VitalsX, OffsetField::VitalsY),
            DragTarget::RightColumn => (OffsetField::RightColumnX, OffsetField::RightColumnY),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            DragTarget::Sprite => "sprite",
            DragTarget::ExperienceBar => "exp bar",
            DragTarget::Vitals => "vitals",
            DragTarget::RightColumn => "right column",
        }
    }
}

/// Canonical + offsets, the positions actually rendered. Derived on every
/// frame, never persisted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EffectiveLayout {
    pub sprite_left: i32,
    pub sprite_top: i32,
    pub sprite_scale: f64,
    pub vitals_padding_top: i32,
    pub exp_bar_x: i32,
    pub exp_bar_y: i32,
    pub vitals_x: i32,
    pub vitals_y: i32,
    pub right_column_x: i32,
    pub right_column_y: i32,
}

pub fn effective(canonical: &CanonicalLayout, offsets: &LayoutOffsets) -> EffectiveLayout {
    EffectiveLayout {
        sprite_left: canonical.sprite_left + offsets.sprite_left,
        sprite_top: canonical.sprite_top + offsets.sprite_top,
        sprite_scale: canonical.sprite_scale,
        vitals_padding_top: canonical.vitals_padding_top + offsets.vitals_padding_top,
        exp_bar_x: canonical.exp_bar_x + offsets.exp_bar_x,
        exp_bar_y: canonical.exp_bar_y + offsets.exp_bar_y,
        vitals_x: canonical.vitals_x + offsets.vitals_x,
        vitals_y: canonical.vitals_y + offsets.vitals_y,
        right_column_x: canonical.right_column_x + offsets.right_column_x,
        right_column_y: canonical.right_column_y + offsets.right_column_y,
    }
}

/// Flatten the offset layer into a new canonical layout. The result carries
/// the current schema version regardless of what was loaded.
pub fn commit(canonical: &CanonicalLayout, offsets: &LayoutOffsets) -> CanonicalLayout {
    let eff = effective(canonical, offsets);
    CanonicalLayout {
        schema_version: SCHEMA_VERSION,
        sprite_left: eff.sprite_left,
        sprite_top: eff.sprite_top,
        sprite_scale: eff.sprite_scale,
        vitals_padding_top: eff.vitals_padding_top,
        exp_bar_x: eff.exp_bar_x,
        exp_bar_y: eff.exp_bar_y,
        vitals_x: eff.vitals_x,
        vitals_y: eff.vitals_y,
        right_column_x: eff.right_column_x,
        right_column_y: eff.right_column_y,
    }
}

fn field_i32(value: &Value, key: &str) -> Option<i32> {
    value.get(key).and_then(Value::as_i64).map(|n| n as i32)
}

fn field_f64(value: &Value, key: &str) -> Option<f64> {
    value.get(key).and_then(Value::as_f64)
}

/// Migrate any partial JSON object into a complete offsets record. Missing or
/// non-numeric fields default to zero; a non-object yields the zero record.
pub fn migrate_offsets(value: &Value) -> LayoutOffsets {
    let zero = LayoutOffsets::default();
    if !value.is_object() {
        return zero;
    }
    LayoutOffsets {
        sprite_left: field_i32(value, "sprite_left").unwrap_or(zero.sprite_left),
        sprite_top: field_i32(value, "sprite_top").unwrap_or(zero.sprite_top),
        vitals_padding_top: field_i32(value, "vitals_padding_top")
            .unwrap_or(zero.vitals_padding_top),
        exp_bar_x: field_i32(value, "exp_bar_x").unwrap_or(zero.exp_bar_x),
        exp_bar_y: field_i32(value, "exp_bar_y").unwrap_or(zero.exp_bar_y),
        vitals_x: field_i32(value, "vitals_x").unwrap_or(zero.vitals_x),
        vitals_y: field_i32(value, "vitals_y").unwrap_or(zero.vitals_y),
        right_column_x: field_i32(value, "right_column_x").unwrap_or(zero.right_column_x),
        right_column_y: field_i32(value, "right_column_y").unwrap_or(zero.right_column_y),
    }
}

/// Migrate any partial JSON object into a canonical layout. The three legacy
/// fields (`sprite_left`, `sprite_top`, `vitals_padding_top`) are required:
/// if any is absent or non-numeric the record is treated as entirely absent.
/// Every other field defaults individually.
pub fn migrate_canonical(value: &Value) -> Option<CanonicalLayout> {
    let sprite_left = field_i32(value, "sprite_left")?;
    let sprite_top = field_i32(value, "sprite_top")?;
    let vitals_padding_top = field_i32(value, "vitals_padding_top")?;

    let defaults = CanonicalLayout::default();
    Some(CanonicalLayout {
        schema_version: SCHEMA_VERSION,
        sprite_left,
        sprite_top,
        sprite_scale: field_f64(value, "sprite_scale").unwrap_or(defaults.sprite_scale),
        vitals_padding_top,
        exp_bar_x: field_i32(value, "exp_bar_x").unwrap_or(defaults.exp_bar_x),
        exp_bar_y: field_i32(value, "exp_bar_y").unwrap_or(defaults.exp_bar_y),
        vitals_x: field_i32(value, "vitals_x").unwrap_or(defaults.vitals_x),
        vitals_y: field_i32(value, "vitals_y").unwrap_or(defaults.vitals_y),
        right_column_x: field_i32(value, "right_column_x").unwrap_or(defaults.right_column_x),
        right_column_y: field_i32(value, "right_column_y").unwrap_or(defaults.right_column_y),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn effective_is_fieldwise_sum() {
        let canonical = CanonicalLayout {
            sprite_left: 10,
            sprite_top: 4,
            exp_bar_x: -3,
            vitals_y: 7,
            ..CanonicalLayout::default()
        };
        let offsets = LayoutOffsets {
            sprite_left: 5,
            sprite_top: -2,
            exp_bar_x: 3,
            vitals_y: -7,
            ..LayoutOffsets::default()
        };

        let eff = effective(&canonical, &offsets);
        assert_eq!(eff.sprite_left, 15);
        assert_eq!(eff.sprite_top, 2);
        assert_eq!(eff.exp_bar_x, 0);
        assert_eq!(eff.vitals_y, 0);
        assert_eq!(eff.sprite_scale, canonical.sprite_scale);
    }

    #[test]
    fn commit_flattens_offsets() {
        let canonical = CanonicalLayout {
            vitals_x: 20,
            vitals_y: 30,
            ..CanonicalLayout::default()
        };
        let offsets = LayoutOffsets {
            vitals_x: 10,
            vitals_y: -5,
            ..LayoutOffsets::default()
        };

        let committed = commit(&canonical, &offsets);
        assert_eq!(committed.vitals_x, 30);
        assert_eq!(committed.vitals_y, 25);
        assert_eq!(committed.schema_version, SCHEMA_VERSION);

        // Committing with zero offsets is the identity
        assert_eq!(commit(&committed, &LayoutOffsets::default()), committed);
    }

    #[test]
    fn migrate_offsets_defaults_missing_fields() {
        let partial = json!({ "sprite_left": 8, "vitals_y": -4, "exp_bar_x": "junk" });
        let offsets = migrate_offsets(&partial);
        assert_eq!(offsets.sprite_left, 8);
        assert_eq!(offsets.vitals_y, -4);
        assert_eq!(offsets.exp_bar_x, 0);
        assert_eq!(offsets.right_column_x, 0);
    }

    #[test]
    fn migrate_offsets_rejects_non_object() {
        assert!(migrate_offsets(&json!([1, 2, 3])).is_zero());
        assert!(migrate_offsets(&json!("nope")).is_zero());
    }

    #[test]
    fn migrate_canonical_requires_legacy_fields() {
        // All three present: other fields default individually
        let ok = json!({ "sprite_left": 4, "sprite_top": 1, "vitals_padding_top": 2 });
        let layout = migrate_canonical(&ok).unwrap();
        assert_eq!(layout.sprite_left, 4);
        assert_eq!(layout.exp_bar_x, CanonicalLayout::default().exp_bar_x);
        assert_eq!(layout.sprite_scale, CanonicalLayout::default().sprite_scale);

        // Any missing legacy field rejects the whole record
        let missing = json!({ "sprite_left": 4, "sprite_top": 1 });
        assert!(migrate_canonical(&missing).is_none());

        // Non-numeric legacy field rejects too
        let bad = json!({ "sprite_left": "x", "sprite_top": 1, "vitals_padding_top": 2 });
        assert!(migrate_canonical(&bad).is_none());
    }

    #[test]
    fn migrate_canonical_keeps_extra_fields() {
        let full = json!({
            "sprite_left": 1,
            "sprite_top": 2,
            "vitals_padding_top": 3,
            "sprite_scale": 1.4,
            "right_column_x": -12,
            "right_column_y": 6,
        });
        let layout = migrate_canonical(&full).unwrap();
        assert_eq!(layout.sprite_scale, 1.4);
        assert_eq!(layout.right_column_x, -12);
        assert_eq!(layout.right_column_y, 6);
    }

    #[test]
    fn offset_fields_round_trip_through_accessors() {
        let mut offsets = LayoutOffsets::default();
        for field in [
            OffsetField::SpriteLeft,
            OffsetField::SpriteTop,
            OffsetField::VitalsPaddingTop,
            OffsetField::ExpBarX,
            OffsetField::ExpBarY,
            OffsetField::VitalsX,
            OffsetField::VitalsY,
            OffsetField::RightColumnX,
            OffsetField::RightColumnY,
        ] {
            offsets.set(field, 17);
            assert_eq!(offsets.get(field), 17);
            offsets.set(field, 0);
        }
        assert!(offsets.is_zero());
    }
}
