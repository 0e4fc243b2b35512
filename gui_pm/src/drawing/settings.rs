use crate::App;
use eframe::egui;
use eframe::egui::Ui;

/// Display options, kept for the lifetime of the window
#[derive(Clone, Debug, PartialEq)]
pub struct UiSettings {
    /// Show which cell the mouse is over in the menu bar
    pub show_pointer_cell: bool,
    /// Outline every cell of the grid
    pub cell_outlines: bool,
    pub dark_mode: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            show_pointer_cell: true,
            cell_outlines: false,
            dark_mode: true,
        }
    }
}

pub fn draw_settings(app: &mut App, ui: &mut Ui) {
    egui::Grid::new("settings_grid")
        .num_columns(1)
        .striped(true)
        .show(ui, |ui| {
            ui.checkbox(&mut app.ui_settings.show_pointer_cell, "Show pointer cell");
            ui.end_row();
            ui.checkbox(&mut app.ui_settings.cell_outlines, "Cell outlines");
            ui.end_row();
            ui.checkbox(&mut app.ui_settings.dark_mode, "Dark mode");
            ui.end_row();
            if ui.button("Reset").clicked() {
                app.ui_settings = UiSettings::default();
            }
            ui.end_row();
        });
}
