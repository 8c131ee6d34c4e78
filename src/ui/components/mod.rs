pub mod details_panel;
pub mod editor_overlay;
pub mod experience_bar;
pub mod skill_bars;
pub mod skill_radar;
pub mod sprite;
pub mod tooltip_view;
pub mod vitals_panel;
