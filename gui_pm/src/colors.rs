use eframe::egui::Color32;

pub const WALL_COLOR: Color32 = Color32::LIGHT_GRAY;
pub const FLOOR_COLOR: Color32 = Color32::from_rgb(20, 20, 40);
pub const CELL_OUTLINE_COLOR: Color32 = Color32::from_rgba_premultiplied(60, 60, 60, 120);

pub const PACMAN_COLOR: Color32 = Color32::YELLOW;

pub const ERROR_COLOR: Color32 = Color32::RED;
