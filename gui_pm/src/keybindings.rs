use core_pm::grid::Direction;
use eframe::egui::{Grid, Key, RichText, Ui};
use gilrs::Button;

/// Keyboard keys that move the cursor
pub const KEYBINDINGS: [(Key, Direction); 4] = [
    (Key::ArrowUp, Direction::Up),
    (Key::ArrowDown, Direction::Down),
    (Key::ArrowLeft, Direction::Left),
    (Key::ArrowRight, Direction::Right),
];

/// Gamepad buttons that move the cursor
pub const GAMEPAD_BINDINGS: [(Button, Direction); 4] = [
    (Button::DPadUp, Direction::Up),
    (Button::DPadDown, Direction::Down),
    (Button::DPadLeft, Direction::Left),
    (Button::DPadRight, Direction::Right),
];

/// The key code the core expects for an egui key, if it is bound
pub fn key_code(key: Key) -> Option<u32> {
    KEYBINDINGS
        .iter()
        .find(|(k, _)| *k == key)
        .map(|(_, dir)| dir.key_code() as u32)
}

/// Gamepad buttons are translated to the same key codes as the arrow keys
pub fn button_key_code(button: Button) -> Option<u32> {
    GAMEPAD_BINDINGS
        .iter()
        .find(|(b, _)| *b == button)
        .map(|(_, dir)| dir.key_code() as u32)
}

fn direction_icon(direction: Direction) -> &'static str {
    match direction {
        Direction::Up => egui_phosphor::regular::ARROW_UP,
        Direction::Down => egui_phosphor::regular::ARROW_DOWN,
        Direction::Left => egui_phosphor::regular::ARROW_LEFT,
        Direction::Right => egui_phosphor::regular::ARROW_RIGHT,
    }
}

pub fn draw_keybindings(ui: &mut Ui) {
    Grid::new("keybindings_grid")
        .num_columns(3)
        .striped(true)
        .show(ui, |ui| {
            ui.strong("Key");
            ui.strong("Gamepad");
            ui.strong("Moves");
            ui.end_row();
            let bindings = KEYBINDINGS.iter().zip(GAMEPAD_BINDINGS.iter());
            for ((key, direction), (button, _)) in bindings {
                ui.label(key.name());
                ui.label(format!("{button:?}"));
                ui.label(RichText::new(format!(
                    "{} {direction:?}",
                    direction_icon(*direction)
                )));
                ui.end_row();
            }
        });
    ui.label("Keys do nothing while the rows field is being edited");
}
