//! Department management panel.

use eframe::egui::{self, Key, RichText, ScrollArea, Ui};
use egui_phosphor::regular::{ARROWS_CLOCKWISE, PLUS, TRASH};

use super::app::{App, DeleteTarget};
use super::components::{back_button, panel_header, styled_button_with_icon};

/// Show the department panel.
///
/// Returns `true` if the back button was clicked.
pub fn show(app: &mut App, ui: &mut Ui) -> bool {
    let mut go_back = false;

    if back_button(ui) {
        go_back = true;
    }

    panel_header(ui, "Manage Departments");

    // Add row
    ui.horizontal(|ui| {
        let response = ui.add(
            egui::TextEdit::singleline(&mut app.new_department_name)
                .desired_width(250.0)
                .hint_text("New department name"),
        );

        let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter));
        let can_add = !app.new_department_name.trim().is_empty();

        if (styled_button_with_icon(ui, PLUS, "Add").clicked() || submitted) && can_add {
            app.create_department();
        }

        ui.add_space(10.0);

        if styled_button_with_icon(ui, ARROWS_CLOCKWISE, "Refresh").clicked() {
            app.load_departments();
        }
    });

    ui.add_space(15.0);

    if app.departments.is_empty() {
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.label(RichText::new("No departments yet").size(18.0).weak());
            ui.add_space(10.0);
            ui.label("Add your first department above.");
        });
        return go_back;
    }

    let mut delete_request = None;

    ScrollArea::vertical().id_salt("dept_scroll").show(ui, |ui| {
        egui::Grid::new("departments_grid")
            .num_columns(3)
            .striped(true)
            .min_col_width(100.0)
            .spacing([20.0, 8.0])
            .show(ui, |ui| {
                // Header
                ui.strong("Name");
                ui.strong("Headcount");
                ui.strong("Actions");
                ui.end_row();

                // Data rows
                for dept in &app.departments {
                    ui.label(&dept.name);
                    ui.label(dept.headcount.to_string());
                    if ui.button(TRASH).clicked() {
                        delete_request = Some(DeleteTarget::Department(dept.id, dept.name.clone()));
                    }
                    ui.end_row();
                }
            });
    });

    if let Some(target) = delete_request {
        app.delete_target = Some(target);
        app.show_delete_confirm = true;
    }

    go_back
}
