//! Survey listing panel.

use eframe::egui::{self, RichText, ScrollArea, Ui};
use egui_phosphor::regular::{ARROWS_CLOCKWISE, ROCKET_LAUNCH};

use super::app::App;
use super::components::{back_button, colors, panel_header, styled_button_with_icon};
use crate::models::survey::SurveyStatus;

/// Show the survey panel.
///
/// Returns `true` if the back button was clicked.
pub fn show(app: &mut App, ui: &mut Ui) -> bool {
    let mut go_back = false;

    if back_button(ui) {
        go_back = true;
    }

    panel_header(ui, "Engagement Surveys");

    ui.horizontal(|ui| {
        if styled_button_with_icon(ui, ARROWS_CLOCKWISE, "Refresh").clicked() {
            app.load_surveys();
        }
    });

    ui.add_space(15.0);

    if app.surveys.is_empty() {
        ui.vertical_centered(|ui| {
            ui.add_space(40.0);
            ui.label(RichText::new("No surveys yet").size(18.0).weak());
            ui.add_space(10.0);
            ui.label("Surveys created in the workspace will appear here.");
        });
        return go_back;
    }

    let mut launch_request = None;

    ScrollArea::vertical().id_salt("survey_scroll").show(ui, |ui| {
        egui::Grid::new("surveys_grid")
            .num_columns(5)
            .striped(true)
            .min_col_width(80.0)
            .spacing([20.0, 8.0])
            .show(ui, |ui| {
                // Header
                ui.strong("Title");
                ui.strong("Status");
                ui.strong("Deadline");
                ui.strong("Questions");
                ui.strong("Actions");
                ui.end_row();

                // Data rows
                for survey in &app.surveys {
                    ui.label(&survey.title);

                    let color = match survey.status {
                        SurveyStatus::Draft => colors::NEUTRAL,
                        SurveyStatus::Active => colors::SUCCESS,
                        SurveyStatus::Closed => colors::WARNING,
                    };
                    ui.colored_label(color, survey.status.label());

                    ui.label(
                        survey
                            .deadline
                            .map(|d| d.to_string())
                            .unwrap_or_else(|| "-".to_string()),
                    );
                    ui.label(survey.questions.len().to_string());

                    if survey.status == SurveyStatus::Draft {
                        if ui.button(format!("{ROCKET_LAUNCH} Launch")).clicked() {
                            launch_request = Some(survey.id);
                        }
                    } else {
                        ui.label("");
                    }
                    ui.end_row();
                }
            });
    });

    if let Some(id) = launch_request {
        app.launch_survey(id);
    }

    go_back
}
