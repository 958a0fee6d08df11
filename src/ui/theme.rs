//! Theme constants for the tic-tac-toe GUI

use egui::Color32;

// Board colors - classic look: black field, white grid
pub const BOARD_BG: Color32 = Color32::from_rgb(14, 14, 17);
pub const GRID_LINE: Color32 = Color32::from_rgb(235, 235, 240);
pub const WIN_CELL_BG: Color32 = Color32::from_rgb(32, 110, 52);

// Mark colors
pub const X_COLOR: Color32 = Color32::from_rgb(226, 72, 72);
pub const O_COLOR: Color32 = Color32::from_rgb(84, 132, 255);

// Markers
pub const LAST_MOVE_MARKER: Color32 = Color32::from_rgb(255, 200, 60);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);

// Panel colors - dark modern theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Status colors
pub const STATUS_OK: Color32 = Color32::from_rgb(80, 200, 120);
pub const STATUS_BUSY: Color32 = Color32::from_rgb(255, 180, 50);

// Sizes
pub const BOARD_MARGIN: f32 = 24.0;
pub const GRID_LINE_WIDTH: f32 = 2.0;
pub const MARK_STROKE_WIDTH: f32 = 6.0;
pub const MARK_INSET_RATIO: f32 = 0.22;
pub const LAST_MOVE_MARKER_RADIUS: f32 = 4.0;
