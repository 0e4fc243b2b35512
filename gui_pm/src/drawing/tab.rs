use crate::drawing::game::draw_grid;
use crate::drawing::settings::draw_settings;
use crate::keybindings::draw_keybindings;
use crate::transform::Transform;
use crate::App;
use eframe::egui::{Ui, WidgetText};
use egui_dock::TabViewer;

pub enum Tab {
    /// Main game grid
    Grid,
    /// User settings
    Settings,
    /// Keybindings
    Keybindings,
}

impl TabViewer for App {
    type Tab = Tab;

    fn title(&mut self, tab: &mut Self::Tab) -> WidgetText {
        match tab {
            Tab::Grid => "Grid",
            Tab::Settings => "Settings",
            Tab::Keybindings => "Keybindings",
        }
        .into()
    }

    fn ui(&mut self, ui: &mut Ui, tab: &mut Self::Tab) {
        match tab {
            Tab::Grid => {
                let rect = ui.max_rect();
                if let Some(grid) = self.state.grid() {
                    self.world_to_screen = Transform::for_grid(grid.size(), rect);
                }
                let painter = ui.painter_at(rect);
                draw_grid(self, &painter);
            }
            Tab::Settings => draw_settings(self, ui),
            Tab::Keybindings => draw_keybindings(ui),
        }
    }
}
