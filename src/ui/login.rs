//! Sign-in screen.

use eframe::egui::{self, Key, RichText, Ui};

use super::app::App;
use super::components::colors;

/// Show the login screen.
///
/// Returns `true` when a sign-in attempt should start.
pub fn show(app: &mut App, ui: &mut Ui) -> bool {
    let mut submit = false;

    ui.vertical_centered(|ui| {
        ui.add_space(60.0);

        ui.heading(RichText::new("Inqlusiv").size(32.0).strong());
        ui.label(RichText::new("People Operations Console").size(14.0).weak());

        ui.add_space(30.0);

        egui::Grid::new("login_grid")
            .num_columns(2)
            .spacing([20.0, 10.0])
            .show(ui, |ui| {
                ui.label("Email:");
                let email = ui.add(
                    egui::TextEdit::singleline(&mut app.login_form.email)
                        .desired_width(220.0)
                        .hint_text("you@company.com"),
                );
                ui.end_row();

                ui.label("Password:");
                let password = ui.add(
                    egui::TextEdit::singleline(&mut app.login_form.password)
                        .desired_width(220.0)
                        .password(true),
                );
                ui.end_row();

                let enter = ui.input(|i| i.key_pressed(Key::Enter));
                if (email.lost_focus() || password.lost_focus()) && enter {
                    submit = true;
                }
            });

        ui.add_space(20.0);

        ui.horizontal(|ui| {
            let available = ui.available_width();
            ui.add_space((available - 120.0).max(0.0) / 2.0);

            let busy = app.login_form.in_flight;
            if ui.add_enabled(!busy, egui::Button::new("Sign In")).clicked() {
                submit = true;
            }

            if busy {
                ui.spinner();
                ui.label("Signing in...");
            }
        });

        if let Some(error) = &app.login_form.error {
            ui.add_space(10.0);
            ui.colored_label(colors::ERROR, error);
        }
    });

    submit && !app.login_form.in_flight
}
