//! Employee management panel with CRUD, search, and filter functionality.

use chrono::Local;
use eframe::egui::{self, Key, RichText, ScrollArea, Ui};
use egui_extras::DatePickerButton;
use egui_phosphor::regular::{ARROWS_CLOCKWISE, FILE_XLS, PENCIL, PLUS, TRASH};

use super::app::{App, DeleteTarget, EmployeeForm};
use super::components::{back_button, panel_header, styled_button_with_icon};

/// Show the employee panel.
///
/// Returns `true` if the back button was clicked.
pub fn show(app: &mut App, ui: &mut Ui) -> bool {
    let mut go_back = false;

    if back_button(ui) {
        go_back = true;
    }

    panel_header(ui, "Manage Employees");

    // Toolbar row 1: Action buttons
    ui.horizontal(|ui| {
        if styled_button_with_icon(ui, PLUS, "Add Employee").clicked() {
            app.employee_form = EmployeeForm {
                start_date: Some(Local::now().date_naive()),
                is_open: true,
                ..Default::default()
            };
        }

        ui.add_space(10.0);

        if styled_button_with_icon(ui, ARROWS_CLOCKWISE, "Refresh").clicked() {
            app.load_employees();
        }

        ui.add_space(10.0);

        if styled_button_with_icon(ui, FILE_XLS, "Export to Excel").clicked() {
            app.export_employees();
        }
    });

    ui.add_space(10.0);

    // Toolbar row 2: Search and filter (both applied server-side)
    ui.horizontal(|ui| {
        ui.label("Search:");
        let search = ui.add(
            egui::TextEdit::singleline(&mut app.employee_search)
                .desired_width(200.0)
                .hint_text("Name or email..."),
        );
        if search.lost_focus() && ui.input(|i| i.key_pressed(Key::Enter)) {
            app.load_employees();
        }

        ui.add_space(20.0);

        ui.label("Department:");
        let mut filter_changed = false;
        egui::ComboBox::from_id_salt("emp_dept_filter")
            .width(180.0)
            .selected_text(
                app.employee_dept_filter
                    .and_then(|id| app.departments.iter().find(|d| d.id == id))
                    .map(|d| d.name.as_str())
                    .unwrap_or("All"),
            )
            .show_ui(ui, |ui| {
                if ui.selectable_label(app.employee_dept_filter.is_none(), "All").clicked() {
                    app.employee_dept_filter = None;
                    filter_changed = true;
                }
                for dept in &app.departments {
                    if ui
                        .selectable_label(app.employee_dept_filter == Some(dept.id), &dept.name)
                        .clicked()
                    {
                        app.employee_dept_filter = Some(dept.id);
                        filter_changed = true;
                    }
                }
            });

        // Clear filters button
        if !app.employee_search.is_empty() || app.employee_dept_filter.is_some() {
            ui.add_space(10.0);
            if ui.button("Clear").clicked() {
                app.employee_search.clear();
                app.employee_dept_filter = None;
                filter_changed = true;
            }
        }

        if filter_changed {
            app.load_employees();
        }
    });

    ui.add_space(15.0);

    // Table
    show_table(app, ui);

    // Form dialog
    if app.employee_form.is_open {
        show_form_dialog(app, ui.ctx());
    }

    go_back
}

fn show_table(app: &mut App, ui: &mut Ui) {
    ui.label(format!(
        "Showing {} of {} employees",
        app.employees.len(),
        app.employee_total
    ));

    ui.add_space(10.0);

    let mut edit_request = None;
    let mut delete_request = None;

    ScrollArea::vertical().id_salt("employee_scroll").show(ui, |ui| {
        ui.add_space(4.0);
        egui::Grid::new("employees_grid")
            .num_columns(7)
            .striped(true)
            .min_col_width(60.0)
            .spacing([12.0, 8.0])
            .show(ui, |ui| {
                // Header
                ui.strong("Name");
                ui.strong("Email");
                ui.strong("Job Title");
                ui.strong("Department");
                ui.strong("Location");
                ui.strong("Start Date");
                ui.strong("Actions");
                ui.end_row();

                // Data rows
                for emp in &app.employees {
                    ui.label(emp.full_name());
                    ui.label(&emp.email);
                    ui.label(emp.job_title.as_deref().unwrap_or("-"));
                    ui.label(emp.department_name.as_deref().unwrap_or("-"));
                    ui.label(emp.location.as_deref().unwrap_or("-"));
                    ui.label(emp.start_date.map(|d| d.to_string()).unwrap_or_else(|| "-".to_string()));

                    ui.horizontal(|ui| {
                        if ui.button(PENCIL).clicked() {
                            edit_request = Some(EmployeeForm::edit(emp));
                        }
                        if ui.button(TRASH).clicked() {
                            delete_request = Some(DeleteTarget::Employee(emp.id, emp.full_name()));
                        }
                    });
                    ui.end_row();
                }
            });

        if app.employees.is_empty() {
            ui.add_space(20.0);
            ui.vertical_centered(|ui| {
                ui.label(RichText::new("No employees found").weak());
            });
        }
    });

    if let Some(form) = edit_request {
        app.employee_form = form;
    }
    if let Some(target) = delete_request {
        app.delete_target = Some(target);
        app.show_delete_confirm = true;
    }
}

fn show_form_dialog(app: &mut App, ctx: &egui::Context) {
    let title = if app.employee_form.is_editing {
        "Edit Employee"
    } else {
        "Add Employee"
    };

    let mut open = true;
    egui::Window::new(title)
        .collapsible(false)
        .resizable(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .open(&mut open)
        .show(ctx, |ui| {
            ui.add_space(10.0);

            egui::Grid::new("employee_form_grid")
                .num_columns(2)
                .spacing([20.0, 8.0])
                .show(ui, |ui| {
                    ui.label("First Name:");
                    ui.text_edit_singleline(&mut app.employee_form.first_name);
                    ui.end_row();

                    ui.label("Last Name:");
                    ui.text_edit_singleline(&mut app.employee_form.last_name);
                    ui.end_row();

                    ui.label("Email:");
                    ui.text_edit_singleline(&mut app.employee_form.email);
                    ui.end_row();

                    ui.label("Job Title:");
                    ui.text_edit_singleline(&mut app.employee_form.job_title);
                    ui.end_row();

                    ui.label("Gender:");
                    egui::ComboBox::from_id_salt("emp_gender_combo")
                        .selected_text(if app.employee_form.gender.is_empty() {
                            "Not specified"
                        } else {
                            app.employee_form.gender.as_str()
                        })
                        .show_ui(ui, |ui| {
                            for option in ["", "Female", "Male", "Non-binary"] {
                                let label = if option.is_empty() { "Not specified" } else { option };
                                ui.selectable_value(&mut app.employee_form.gender, option.to_string(), label);
                            }
                        });
                    ui.end_row();

                    ui.label("Location:");
                    ui.text_edit_singleline(&mut app.employee_form.location);
                    ui.end_row();

                    ui.label("Department:");
                    egui::ComboBox::from_id_salt("emp_form_dept")
                        .selected_text(
                            app.employee_form
                                .department_id
                                .and_then(|id| app.departments.iter().find(|d| d.id == id))
                                .map(|d| d.name.as_str())
                                .unwrap_or("None"),
                        )
                        .show_ui(ui, |ui| {
                            if ui
                                .selectable_label(app.employee_form.department_id.is_none(), "None")
                                .clicked()
                            {
                                app.employee_form.department_id = None;
                            }
                            for dept in &app.departments {
                                if ui
                                    .selectable_label(app.employee_form.department_id == Some(dept.id), &dept.name)
                                    .clicked()
                                {
                                    app.employee_form.department_id = Some(dept.id);
                                }
                            }
                        });
                    ui.end_row();

                    ui.label("Start Date:");
                    ui.horizontal(|ui| {
                        let mut has_date = app.employee_form.start_date.is_some();
                        if ui.checkbox(&mut has_date, "").changed() {
                            app.employee_form.start_date = has_date.then(|| Local::now().date_naive());
                        }
                        if let Some(date) = &mut app.employee_form.start_date {
                            ui.add(DatePickerButton::new(date).id_salt("emp_start_date"));
                        }
                    });
                    ui.end_row();
                });

            ui.add_space(15.0);
            ui.separator();
            ui.add_space(10.0);

            ui.horizontal(|ui| {
                if ui.button("Cancel").clicked() {
                    app.employee_form.reset();
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let can_save = !app.employee_form.first_name.trim().is_empty()
                        && !app.employee_form.last_name.trim().is_empty()
                        && !app.employee_form.email.trim().is_empty();

                    if ui.add_enabled(can_save, egui::Button::new("Save")).clicked() {
                        app.save_employee();
                        app.employee_form.is_open = false;
                    }
                });
            });
        });

    if !open {
        app.employee_form.reset();
    }
}
