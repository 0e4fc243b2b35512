use crate::colors::ERROR_COLOR;
use crate::App;
use core_pm::game_state::{Action, Phase};
use eframe::egui::{Key, TextEdit, Ui};

/// The rows field and its submit button
///
/// Every edit is sent to the core as it happens; the grid is only built on submit.
pub fn draw_size_form(app: &mut App, ui: &mut Ui) {
    ui.label("Number of rows");
    let field = ui.add(TextEdit::singleline(&mut app.rows_field).desired_width(60.0));
    if field.changed() {
        app.state.dispatch(Action::SetSize(app.rows_field.clone()));
    }
    let entered = field.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));
    let submit = ui.button("Submit");
    if submit.clicked() || entered {
        // hand the arrow keys back to the grid
        submit.surrender_focus();
        app.state.dispatch(Action::Submit);
    }
    if app.state.phase() == Phase::Errored {
        let message = app.state.error_message().unwrap_or_default();
        ui.colored_label(ERROR_COLOR, message);
    }
}
