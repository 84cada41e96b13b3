//! Colors and sizes for the GUI

use egui::Color32;

// Board
pub const BOARD_BG: Color32 = Color32::from_rgb(236, 232, 220);
pub const GRID_LINE: Color32 = Color32::from_rgb(70, 72, 80);
pub const LABEL: Color32 = Color32::from_rgb(150, 155, 165);

// Marks
pub const X_MARK: Color32 = Color32::from_rgb(210, 70, 60);
pub const O_MARK: Color32 = Color32::from_rgb(50, 110, 200);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(255, 180, 50);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);
pub const WIN_CELL_BG: Color32 = Color32::from_rgb(190, 240, 190);
pub const HINT: Color32 = Color32::from_rgb(150, 90, 220);

pub fn hover_invalid() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 50, 50, 60)
}

/// Translucent version of a mark color for previews
pub fn preview(color: Color32) -> Color32 {
    Color32::from_rgba_unmultiplied(color.r(), color.g(), color.b(), 90)
}

// Panels
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Status
pub const STATUS_OK: Color32 = Color32::from_rgb(80, 200, 120);
pub const STATUS_WARNING: Color32 = Color32::from_rgb(255, 180, 50);

// Sizes
pub const BOARD_MARGIN: f32 = 28.0;
pub const MARK_RATIO: f32 = 0.32;
pub const MARK_WIDTH_RATIO: f32 = 0.08;
pub const GRID_LINE_WIDTH: f32 = 1.5;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 4.0;
