//! Theme constants for the Icebreaker GUI

use egui::Color32;

// Ice cell fills - the classic pale-cyan ice and the darker water
// revealed once a cell is broken
pub const ICE_CELL: Color32 = Color32::from_rgb(200, 255, 255);
pub const ICE_CELL_OUTLINE: Color32 = Color32::from_rgb(25, 40, 50);
pub const WATER_CELL: Color32 = Color32::from_rgb(0, 140, 180);
pub const WATER_CELL_DEEP: Color32 = Color32::from_rgb(0, 90, 130);

// Player disc colors (player 0 red, player 1 blue)
pub const PLAYER_COLORS: [Color32; 2] = [
    Color32::from_rgb(210, 50, 50),
    Color32::from_rgb(50, 80, 210),
];
pub const ACTIVE_RING: Color32 = Color32::from_rgb(255, 215, 80);

// Hover overlays
pub fn hover_valid() -> Color32 {
    Color32::from_rgba_unmultiplied(80, 220, 120, 90)
}

pub fn hover_invalid() -> Color32 {
    Color32::from_rgba_unmultiplied(255, 50, 50, 90)
}

// Panel colors - dark modern theme
pub const PANEL_BG: Color32 = Color32::from_rgb(25, 27, 31);
pub const CARD_BG: Color32 = Color32::from_rgb(35, 38, 43);
pub const BOARD_AREA_BG: Color32 = Color32::from_rgb(40, 42, 46);
pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 165, 175);
pub const TEXT_MUTED: Color32 = Color32::from_rgb(120, 125, 135);

// Status colors
pub const STATUS_OK: Color32 = Color32::from_rgb(80, 200, 120);
pub const STATUS_WARN: Color32 = Color32::from_rgb(255, 180, 50);
pub const WIN_HIGHLIGHT: Color32 = Color32::from_rgb(50, 220, 50);

// Message card backgrounds
pub const MESSAGE_BG: Color32 = Color32::from_rgb(80, 60, 30);
pub const GAME_OVER_BG: Color32 = Color32::from_rgb(45, 80, 55);

// Menu screens
pub const MENU_BG: Color32 = Color32::from_rgb(30, 45, 55);
pub const MENU_FRAME: Color32 = Color32::from_rgb(200, 255, 255);

// Sizes (cell footprint matches the original 70px boxes with 10px gaps)
pub const CELL_SIZE: f32 = 70.0;
pub const CELL_GAP: f32 = 10.0;
pub const CELL_CORNER_RADIUS: u8 = 6;
pub const PLAYER_RADIUS_RATIO: f32 = 0.36;
pub const BOARD_PADDING: f32 = 16.0;
