use crate::keybindings::{button_key_code, key_code};
use crate::App;
use core_pm::game_state::Action;
use eframe::egui;
use eframe::egui::Event;
use gilrs::EventType;
use log::info;

impl App {
    pub fn read_input(&mut self, ctx: &egui::Context) {
        let mut codes = vec![];

        // gamepad events are always drained, so they don't pile up while typing
        if let Some(gilrs) = &mut self.gilrs {
            while let Some(gilrs::Event { event, .. }) = gilrs.next_event() {
                match event {
                    EventType::ButtonPressed(button, _) => codes.extend(button_key_code(button)),
                    EventType::Connected => {
                        info!("Gamepad connected")
                    }
                    EventType::Disconnected => {
                        info!("Gamepad disconnected")
                    }
                    _ => {}
                }
            }
        }

        // don't move the cursor while typing in the rows field
        if ctx.wants_keyboard_input() {
            return;
        }

        ctx.input(|i| {
            for event in &i.events {
                if let Event::Key {
                    key, pressed: true, ..
                } = event
                {
                    codes.extend(key_code(*key));
                }
            }
        });

        for code in codes {
            self.state.dispatch(Action::Move(code));
        }
    }
}
