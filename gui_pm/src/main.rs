mod colors;

mod input;
mod keybindings;

mod drawing;
mod transform;

use crate::drawing::form::draw_size_form;
use crate::drawing::settings::UiSettings;
use crate::drawing::tab::Tab;
use crate::transform::Transform;
use anyhow::anyhow;
use core_pm::game_state::SessionState;
use eframe::egui;
use eframe::egui::{Align, Pos2, Visuals};
use egui_dock::{DockArea, DockState, NodeIndex, Style};
use gilrs::Gilrs;
use log::{info, warn};
use std::time::Duration;

fn main() -> eframe::Result {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    info!("Pacmaze gui starting up");

    let native_options = eframe::NativeOptions::default();
    eframe::run_native(
        "Pacmaze",
        native_options,
        Box::new(|cc| Ok(Box::new(App::new(cc)))),
    )
}

fn start_gamepads() -> anyhow::Result<Gilrs> {
    Gilrs::new().map_err(|e| anyhow!("couldn't start gamepad support: {e}"))
}

/// Stores all the data needed for the application
pub struct App {
    dock_state: Option<DockState<Tab>>,

    state: SessionState,
    /// What is currently typed in the rows field
    rows_field: String,

    pointer_pos: Option<Pos2>,
    world_to_screen: Transform,
    ui_settings: UiSettings,
    gilrs: Option<Gilrs>,
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.pointer_pos = ctx.pointer_latest_pos();
        ctx.set_visuals(if self.ui_settings.dark_mode {
            Visuals::dark()
        } else {
            Visuals::light()
        });

        self.read_input(ctx);
        self.draw_layout(ctx);

        if self.gilrs.is_some() {
            // gamepad events don't wake egui up on their own
            ctx.request_repaint_after(Duration::from_millis(30));
        }
    }
}

impl App {
    fn new(cc: &eframe::CreationContext<'_>) -> Self {
        cc.egui_ctx.set_visuals(Visuals::dark());

        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);

        cc.egui_ctx.set_fonts(fonts);

        let mut dock_state = DockState::new(vec![Tab::Grid]);
        let surface = dock_state.main_surface_mut();
        surface.split_right(
            NodeIndex::root(),
            0.75,
            vec![Tab::Settings, Tab::Keybindings],
        );

        let gilrs = match start_gamepads() {
            Ok(gilrs) => Some(gilrs),
            Err(e) => {
                warn!("{e:#}");
                None
            }
        };

        let state = SessionState::new();

        Self {
            dock_state: Some(dock_state),

            rows_field: state.rows_input().to_string(),
            state,

            pointer_pos: None,
            world_to_screen: Transform::default(),
            ui_settings: Default::default(),
            gilrs,
        }
    }

    /// Draw the main outer layout
    pub fn draw_layout(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("menu").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.with_layout(egui::Layout::left_to_right(Align::Center), |ui| {
                    draw_size_form(self, ui);
                });
                ui.with_layout(egui::Layout::right_to_left(Align::Center), |ui| {
                    ui.label(self.pointer_cell_text());
                });
            });
        });

        // take out dock_state to pass it to DockArea::new and allow tabs to use data from App
        let Some(mut dock_state) = self.dock_state.take() else {
            return;
        };
        DockArea::new(&mut dock_state)
            .style(Style::from_egui(ctx.style().as_ref()))
            .show(ctx, self);
        self.dock_state = Some(dock_state);
    }

    /// Which raw grid cell the mouse is over, for the menu bar
    fn pointer_cell_text(&self) -> String {
        if !self.ui_settings.show_pointer_cell {
            return String::new();
        }
        let (Some(pos), Some(grid)) = (self.pointer_pos, self.state.grid()) else {
            return String::new();
        };
        match self.world_to_screen.cell_at(pos, grid.size()) {
            Some((row, col)) => format!("row {row}, col {col}"),
            None => String::new(),
        }
    }
}
