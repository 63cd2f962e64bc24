//! GUI-specific constants for layout and status colors

/// Manager window limits
pub const WINDOW_MIN_WIDTH: f32 = 700.0;
pub const WINDOW_MIN_HEIGHT: f32 = 400.0;

/// Profile panel
pub const PROFILE_PANEL_WIDTH: f32 = 220.0;

/// Entry field widths
pub const NAME_FIELD_WIDTH: f32 = 160.0;
pub const AXIS_FIELD_WIDTH: f32 = 80.0;

/// Layout spacing
pub const SECTION_SPACING: f32 = 12.0;
pub const ITEM_SPACING: f32 = 6.0;

/// Status colors
pub const STATUS_OK: egui::Color32 = egui::Color32::from_rgb(0, 160, 0);
pub const STATUS_ERROR: egui::Color32 = egui::Color32::from_rgb(200, 0, 0);
pub const WARNING_TEXT: egui::Color32 = egui::Color32::from_rgb(200, 0, 0);
