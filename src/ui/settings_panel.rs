//! Settings panel for server connection and UI preferences.

use eframe::egui::{self, RichText, Ui};

use super::app::App;
use super::components::{back_button, panel_header};

/// Show the settings panel.
///
/// Returns `true` if the back button was clicked.
pub fn show(app: &mut App, ui: &mut Ui) -> bool {
    let mut go_back = false;

    if back_button(ui) {
        go_back = true;
    }

    panel_header(ui, "Settings");

    egui::Frame::new()
        .fill(ui.style().visuals.extreme_bg_color)
        .inner_margin(egui::Margin::same(15))
        .corner_radius(egui::CornerRadius::same(8))
        .show(ui, |ui| {
            ui.label(RichText::new("Server Connection").strong());
            ui.add_space(10.0);

            egui::Grid::new("settings_grid")
                .num_columns(2)
                .spacing([20.0, 8.0])
                .show(ui, |ui| {
                    ui.label("Server URL:");
                    ui.add(egui::TextEdit::singleline(&mut app.settings_form.base_url_input).desired_width(280.0));
                    ui.end_row();

                    ui.label("Timeout (seconds):");
                    ui.add(egui::TextEdit::singleline(&mut app.settings_form.timeout_input).desired_width(80.0));
                    ui.end_row();
                });

            ui.add_space(10.0);
            ui.label(
                RichText::new("Connection changes take effect the next time the console starts.")
                    .small()
                    .weak(),
            );
        });

    ui.add_space(15.0);

    egui::Frame::new()
        .fill(ui.style().visuals.extreme_bg_color)
        .inner_margin(egui::Margin::same(15))
        .corner_radius(egui::CornerRadius::same(8))
        .show(ui, |ui| {
            ui.label(RichText::new("Sign-in").strong());
            ui.add_space(10.0);
            ui.checkbox(&mut app.settings_form.remember_email, "Remember last email address");
        });

    ui.add_space(20.0);

    if ui.button("Save Settings").clicked() {
        save_settings(app);
    }

    go_back
}

fn save_settings(app: &mut App) {
    let timeout = match app.settings_form.timeout_input.trim().parse::<u64>() {
        Ok(t) => t,
        Err(_) => {
            app.error_message = Some("Timeout must be a whole number of seconds".to_string());
            return;
        }
    };

    let mut candidate = app.config.clone();
    candidate.server.base_url = app.settings_form.base_url_input.trim().to_string();
    candidate.server.timeout_secs = timeout;
    candidate.ui.remember_email = app.settings_form.remember_email;
    if !candidate.ui.remember_email {
        candidate.ui.last_email.clear();
    }

    if let Err(e) = candidate.validate() {
        app.error_message = Some(e.to_string());
        return;
    }

    match candidate.save(&app.config_path) {
        Ok(()) => {
            app.config = candidate;
            app.success_message = Some("Settings saved".to_string());
            app.log_success("Settings saved");
        }
        Err(e) => {
            app.error_message = Some(format!("Failed to save settings: {}", e));
            app.log_error(format!("Failed to save settings: {}", e));
        }
    }
}
