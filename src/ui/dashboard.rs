//! Dashboard panel with stats, navigation cards, quick actions, and activity log.

use eframe::egui::{self, Color32, CornerRadius, Margin, RichText, ScrollArea, Ui};
use egui_phosphor::regular::{BUILDINGS, CHART_BAR, GEAR, USERS};

use super::app::{App, LogLevel, Panel};
use super::components::{dashboard_card, stat_card};

/// Show the dashboard panel.
///
/// Returns `Some(panel)` if navigation is requested.
pub fn show(app: &mut App, ui: &mut Ui) -> Option<Panel> {
    let mut next_panel = None;

    ui.vertical_centered(|ui| {
        ui.add_space(30.0);

        // Header
        ui.label(RichText::new("Inqlusiv").size(32.0).strong());
        ui.add_space(5.0);
        ui.label(RichText::new("People Operations Console").size(14.0).weak());

        ui.add_space(30.0);

        // Stat cards row
        ui.horizontal(|ui| {
            let available = ui.available_width();
            let start_offset = ((available - 680.0) / 2.0).max(0.0);
            ui.add_space(start_offset);

            let (employees, departments, open_roles, retention) = match &app.summary {
                Some(s) => (
                    s.total_employees.to_string(),
                    s.total_departments.to_string(),
                    s.open_roles.to_string(),
                    s.retention_rate.clone().unwrap_or_else(|| "-".to_string()),
                ),
                None => ("-".to_string(), "-".to_string(), "-".to_string(), "-".to_string()),
            };

            stat_card(ui, "Total Employees", &employees, "Active staff members");
            stat_card(ui, "Departments", &departments, "Active departments");
            stat_card(ui, "Open Roles", &open_roles, "Positions to fill");
            stat_card(ui, "Retention", &retention, "Trailing 12 months");
        });

        ui.add_space(30.0);

        // Navigation cards row
        let available = ui.available_width();
        let num_cards = 4.0;
        let spacing = 30.0;
        let total_spacing = spacing * (num_cards - 1.0);
        let card_width = ((available - total_spacing) / num_cards).clamp(150.0, 250.0);
        let card_height = card_width * 0.75;
        let card_size = egui::vec2(card_width, card_height);
        let total_width = card_width * num_cards + total_spacing;
        let start_offset = ((available - total_width) / 2.0).max(0.0);

        ui.horizontal(|ui| {
            ui.add_space(start_offset);

            if dashboard_card(ui, "Departments", "Organize staff groups", BUILDINGS, card_size).clicked() {
                next_panel = Some(Panel::Departments);
            }

            ui.add_space(spacing);

            if dashboard_card(ui, "Employees", "Staff records", USERS, card_size).clicked() {
                next_panel = Some(Panel::Employees);
            }

            ui.add_space(spacing);

            if dashboard_card(ui, "Surveys", "Engagement pulse", CHART_BAR, card_size).clicked() {
                next_panel = Some(Panel::Surveys);
            }

            ui.add_space(spacing);

            if dashboard_card(ui, "Settings", "Console configuration", GEAR, card_size).clicked() {
                next_panel = Some(Panel::Settings);
            }
        });

        ui.add_space(30.0);
    });

    // Two-column layout: Quick Actions | Recent Activity
    let available_width = ui.available_width();
    let column_width = (available_width - 40.0) / 2.0;

    ui.horizontal(|ui| {
        ui.add_space(10.0);

        // Left column - Quick Actions
        ui.vertical(|ui| {
            ui.set_width(column_width);

            egui::Frame::new()
                .fill(ui.style().visuals.extreme_bg_color)
                .inner_margin(Margin::same(15))
                .corner_radius(CornerRadius::same(8))
                .show(ui, |ui| {
                    ui.set_min_width(column_width - 30.0);

                    ui.label(RichText::new("Quick Actions").strong());
                    ui.add_space(10.0);

                    if ui.button("Refresh Stats").clicked() {
                        app.load_summary();
                    }

                    ui.add_space(5.0);

                    if ui.button("Export Employees").clicked() {
                        app.export_employees();
                    }

                    ui.add_space(5.0);

                    if ui.button("Add Employee").clicked() {
                        app.employee_form.reset();
                        app.employee_form.is_open = true;
                        next_panel = Some(Panel::Employees);
                    }
                });
        });

        ui.add_space(20.0);

        // Right column - Recent Activity
        ui.vertical(|ui| {
            ui.set_width(column_width);

            egui::Frame::new()
                .fill(ui.style().visuals.extreme_bg_color)
                .inner_margin(Margin::same(15))
                .corner_radius(CornerRadius::same(8))
                .show(ui, |ui| {
                    ui.set_min_width(column_width - 30.0);

                    ui.label(RichText::new("Recent Activity").strong());
                    ui.add_space(10.0);

                    ScrollArea::vertical().max_height(150.0).show(ui, |ui| {
                        let server_feed = app
                            .summary
                            .as_ref()
                            .map(|s| s.recent_activities.as_slice())
                            .unwrap_or_default();

                        if server_feed.is_empty() && app.log_messages.is_empty() {
                            ui.label(RichText::new("No recent activity").weak());
                            return;
                        }

                        for activity in server_feed.iter().take(10) {
                            ui.label(activity);
                        }

                        for entry in app.log_messages.iter().rev().take(10) {
                            let color = match entry.level {
                                LogLevel::Info => Color32::GRAY,
                                LogLevel::Success => Color32::from_rgb(100, 200, 100),
                                LogLevel::Warning => Color32::from_rgb(230, 180, 50),
                                LogLevel::Error => Color32::from_rgb(230, 100, 100),
                            };

                            ui.horizontal(|ui| {
                                ui.label(
                                    RichText::new(entry.timestamp.format("%H:%M:%S").to_string())
                                        .small()
                                        .color(Color32::DARK_GRAY),
                                );
                                ui.label(RichText::new(&entry.message).color(color));
                            });
                        }
                    });
                });
        });
    });

    ui.add_space(20.0);

    // Insights section fed by the backend's generated tips
    if let Some(summary) = &app.summary {
        let tips: Vec<&String> = summary.smart_tips.iter().chain(summary.tips.iter()).collect();
        if !tips.is_empty() {
            egui::Frame::new()
                .fill(ui.style().visuals.extreme_bg_color)
                .inner_margin(Margin::same(15))
                .outer_margin(Margin::symmetric(10, 0))
                .corner_radius(CornerRadius::same(8))
                .show(ui, |ui| {
                    ui.label(RichText::new("Insights").strong());
                    ui.add_space(10.0);
                    for tip in tips.iter().take(5) {
                        ui.label(format!("- {tip}"));
                    }
                });
        }
    }

    next_panel
}
