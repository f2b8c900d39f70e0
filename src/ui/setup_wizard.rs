//! Five-step company onboarding wizard.

use eframe::egui::{self, Color32, RichText, Ui};
use egui_phosphor::regular::{FILE_CSV, PLUS, UPLOAD, X};

use crate::models::company::{
    AdminRole, CompanySetupRequest, FileAttachment, Industry, Metric, PreferenceKey, Preferences, Region,
};

/// Setup submission state.
#[derive(Default, Clone)]
pub enum SubmitState {
    #[default]
    Idle,
    InFlight,
    Failed(String),
    Done,
}

/// Everything collected across the five steps.
///
/// Owned exclusively by [`SetupWizard`]; panels read it and mutate it only
/// through the widgets and wizard methods. Discarded after a successful
/// submission, never persisted between runs.
#[derive(Default, Clone)]
pub struct WizardState {
    // Step 1: Company
    pub company_name: String,
    pub industry: Option<Industry>,
    pub region: Option<Region>,
    pub logo: Option<FileAttachment>,

    // Step 2: Admin
    pub admin_name: String,
    pub admin_title: String,
    pub admin_email: String,
    pub admin_role: Option<AdminRole>,

    // Step 3: Departments
    pub departments: Vec<String>,
    /// Input buffer for the next department name; never submitted.
    pub new_department: String,

    // Step 4: Bulk upload
    pub employee_file: Option<FileAttachment>,

    // Step 5: Preferences
    pub preferences: Preferences,
    pub selected_metrics: Vec<Metric>,
}

/// Wizard controller: step sequencing, state ownership, submission.
pub struct SetupWizard {
    /// Current step (1-5). Sole source of truth for the rendered panel.
    current_step: usize,
    pub state: WizardState,
    pub submit_state: SubmitState,
}

impl Default for SetupWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl SetupWizard {
    pub const FIRST_STEP: usize = 1;
    pub const TOTAL_STEPS: usize = 5;

    pub fn new() -> Self {
        Self {
            current_step: Self::FIRST_STEP,
            state: WizardState::default(),
            submit_state: SubmitState::default(),
        }
    }

    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Step labels shown in the progress stepper.
    pub fn step_label(step: usize) -> &'static str {
        match step {
            1 => "Company Profile",
            2 => "Admin Profile",
            3 => "Departments",
            4 => "Bulk Upload",
            5 => "Preferences",
            _ => "Setup",
        }
    }

    /// Move to the next step, or request submission from the last one.
    ///
    /// Returns `true` when the caller should start the submission. The
    /// step never goes past the last one, and nothing happens while a
    /// submission is already in flight.
    pub fn advance(&mut self) -> bool {
        if self.is_submitting() {
            return false;
        }
        if self.current_step < Self::TOTAL_STEPS {
            self.current_step += 1;
            false
        } else {
            true
        }
    }

    /// Move to the previous step; no-op on the first.
    pub fn back(&mut self) {
        if self.current_step > Self::FIRST_STEP {
            self.current_step -= 1;
        }
    }

    /// Append the trimmed input buffer to the department list.
    ///
    /// No-op when the trimmed buffer is empty or the name is already
    /// present (case-sensitive). The buffer is cleared only on success.
    pub fn add_department(&mut self) {
        let name = self.state.new_department.trim();
        if name.is_empty() || self.state.departments.iter().any(|d| d == name) {
            return;
        }
        self.state.departments.push(name.to_string());
        self.state.new_department.clear();
    }

    /// Remove a department by exact name; no-op when absent.
    pub fn remove_department(&mut self, name: &str) {
        if let Some(pos) = self.state.departments.iter().position(|d| d == name) {
            self.state.departments.remove(pos);
        }
    }

    /// Toggle a metric: add on first call, remove on the second.
    pub fn toggle_metric(&mut self, metric: Metric) {
        if let Some(pos) = self.state.selected_metrics.iter().position(|m| *m == metric) {
            self.state.selected_metrics.remove(pos);
        } else {
            self.state.selected_metrics.push(metric);
        }
    }

    /// Flip one preference toggle.
    pub fn toggle_preference(&mut self, key: PreferenceKey) {
        self.state.preferences.toggle(key);
    }

    pub fn is_submitting(&self) -> bool {
        matches!(self.submit_state, SubmitState::InFlight)
    }

    pub fn is_done(&self) -> bool {
        matches!(self.submit_state, SubmitState::Done)
    }

    /// Mark a submission as started.
    pub fn begin_submit(&mut self) {
        self.submit_state = SubmitState::InFlight;
    }

    /// Record the submission outcome.
    ///
    /// Failure keeps every collected field so the user can retry with the
    /// same data; only the in-flight flag is cleared.
    pub fn apply_submit_result(&mut self, result: Result<(), String>) {
        self.submit_state = match result {
            Ok(()) => SubmitState::Done,
            Err(e) => SubmitState::Failed(e),
        };
    }

    /// Snapshot the collected fields for submission.
    ///
    /// The transient department buffer stays behind, as do the logo and
    /// admin role, which the setup endpoint takes no parts for.
    pub fn payload(&self) -> CompanySetupRequest {
        CompanySetupRequest {
            company_name: self.state.company_name.clone(),
            industry: self.state.industry,
            region: self.state.region,
            admin_name: self.state.admin_name.clone(),
            admin_title: self.state.admin_title.clone(),
            admin_email: self.state.admin_email.clone(),
            departments: self.state.departments.clone(),
            preferences: self.state.preferences,
            selected_metrics: self.state.selected_metrics.clone(),
            employee_file: self.state.employee_file.clone(),
        }
    }
}

/// Render the wizard.
///
/// Returns `true` when the final step's action button was pressed and a
/// submission should start.
pub fn show(wizard: &mut SetupWizard, ui: &mut Ui) -> bool {
    let mut submit_requested = false;

    ui.vertical_centered(|ui| {
        ui.add_space(20.0);

        // Header
        ui.heading(RichText::new("Welcome to Inqlusiv").size(26.0).strong());
        ui.label(RichText::new("Let's set up your workspace").size(14.0).weak());

        ui.add_space(15.0);

        // Progress stepper
        ui.horizontal(|ui| {
            let available = ui.available_width();
            let start_offset = ((available - 560.0) / 2.0).max(0.0);
            ui.add_space(start_offset);

            for step in SetupWizard::FIRST_STEP..=SetupWizard::TOTAL_STEPS {
                let completed = step < wizard.current_step();
                let active = step == wizard.current_step();

                let marker = if completed {
                    RichText::new(format!("{step} ✓")).color(Color32::from_rgb(100, 200, 100))
                } else if active {
                    RichText::new(step.to_string()).strong()
                } else {
                    RichText::new(step.to_string()).weak()
                };

                ui.label(marker);
                let label = RichText::new(SetupWizard::step_label(step)).small();
                ui.label(if active { label.strong() } else { label.weak() });

                if step < SetupWizard::TOTAL_STEPS {
                    ui.separator();
                }
            }
        });

        ui.separator();
        ui.add_space(10.0);

        ui.heading(SetupWizard::step_label(wizard.current_step()));
        ui.add_space(20.0);

        // Step content
        match wizard.current_step() {
            1 => show_company_step(ui, wizard),
            2 => show_admin_step(ui, wizard),
            3 => show_departments_step(ui, wizard),
            4 => show_upload_step(ui, wizard),
            5 => show_preferences_step(ui, wizard),
            _ => {}
        }

        ui.add_space(30.0);
        ui.separator();

        // Navigation buttons
        ui.horizontal(|ui| {
            if wizard.current_step() > SetupWizard::FIRST_STEP
                && !wizard.is_submitting()
                && ui.button("< Back").clicked()
            {
                wizard.back();
            }

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                let last = wizard.current_step() == SetupWizard::TOTAL_STEPS;
                let label = if wizard.is_submitting() {
                    "Processing..."
                } else if last {
                    "Complete Setup"
                } else {
                    "Continue"
                };

                let enabled = !wizard.is_submitting();
                if ui.add_enabled(enabled, egui::Button::new(label)).clicked() && wizard.advance() {
                    submit_requested = true;
                }
            });
        });
    });

    submit_requested
}

fn show_company_step(ui: &mut Ui, wizard: &mut SetupWizard) {
    let state = &mut wizard.state;

    // Logo picker
    ui.horizontal(|ui| {
        if ui.button(format!("{UPLOAD} Upload Logo")).clicked()
            && let Some(file) = pick_file(&["png", "jpg", "jpeg"], "Images")
        {
            state.logo = Some(file);
        }

        match &state.logo {
            Some(logo) => {
                ui.label(RichText::new(&logo.file_name).weak());
            }
            None => {
                ui.label(RichText::new("No logo selected").weak());
            }
        }
    });

    ui.add_space(10.0);

    egui::Grid::new("company_grid")
        .num_columns(2)
        .spacing([20.0, 8.0])
        .striped(true)
        .show(ui, |ui| {
            ui.label("Company Name:");
            ui.add(egui::TextEdit::singleline(&mut state.company_name).hint_text("Acme Corporation"));
            ui.end_row();

            ui.label("Industry:");
            egui::ComboBox::from_id_salt("industry_combo")
                .selected_text(state.industry.map(|i| i.as_str()).unwrap_or("Select Industry"))
                .show_ui(ui, |ui| {
                    for industry in Industry::ALL {
                        ui.selectable_value(&mut state.industry, Some(industry), industry.as_str());
                    }
                });
            ui.end_row();

            ui.label("Region:");
            egui::ComboBox::from_id_salt("region_combo")
                .selected_text(state.region.map(|r| r.as_str()).unwrap_or("Select Region"))
                .show_ui(ui, |ui| {
                    for region in Region::ALL {
                        ui.selectable_value(&mut state.region, Some(region), region.as_str());
                    }
                });
            ui.end_row();
        });
}

fn show_admin_step(ui: &mut Ui, wizard: &mut SetupWizard) {
    let state = &mut wizard.state;

    egui::Grid::new("admin_grid")
        .num_columns(2)
        .spacing([20.0, 8.0])
        .striped(true)
        .show(ui, |ui| {
            ui.label("Full Name:");
            ui.add(egui::TextEdit::singleline(&mut state.admin_name).hint_text("John Doe"));
            ui.end_row();

            ui.label("Job Title:");
            ui.add(egui::TextEdit::singleline(&mut state.admin_title).hint_text("HR Director"));
            ui.end_row();

            ui.label("Email Address:");
            ui.add(egui::TextEdit::singleline(&mut state.admin_email).hint_text("john.doe@company.com"));
            ui.end_row();

            ui.label("Role:");
            egui::ComboBox::from_id_salt("admin_role_combo")
                .selected_text(state.admin_role.map(|r| r.as_str()).unwrap_or("Select Role"))
                .show_ui(ui, |ui| {
                    for role in AdminRole::ALL {
                        ui.selectable_value(&mut state.admin_role, Some(role), role.as_str());
                    }
                });
            ui.end_row();
        });
}

fn show_departments_step(ui: &mut Ui, wizard: &mut SetupWizard) {
    ui.horizontal(|ui| {
        let response = ui.add(
            egui::TextEdit::singleline(&mut wizard.state.new_department)
                .desired_width(250.0)
                .hint_text("Enter department name"),
        );

        let submitted = response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        if ui.button(format!("{PLUS} Add")).clicked() || submitted {
            wizard.add_department();
        }
    });

    ui.add_space(15.0);

    if wizard.state.departments.is_empty() {
        ui.label(RichText::new("No departments added yet").weak());
        return;
    }

    let mut to_remove = None;
    ui.horizontal_wrapped(|ui| {
        for dept in &wizard.state.departments {
            egui::Frame::group(ui.style()).show(ui, |ui| {
                ui.label(dept);
                if ui.small_button(X).clicked() {
                    to_remove = Some(dept.clone());
                }
            });
        }
    });

    if let Some(name) = to_remove {
        wizard.remove_department(&name);
    }
}

fn show_upload_step(ui: &mut Ui, wizard: &mut SetupWizard) {
    let state = &mut wizard.state;

    ui.label("Import your staff roster in one go.");
    ui.add_space(10.0);

    ui.vertical_centered(|ui| {
        let label = match &state.employee_file {
            Some(file) => file.file_name.clone(),
            None => "Choose a CSV file".to_string(),
        };

        if ui.button(format!("{FILE_CSV} {label}")).clicked()
            && let Some(file) = pick_file(&["csv", "xlsx"], "Spreadsheets")
        {
            state.employee_file = Some(file);
        }

        ui.add_space(5.0);
        // Size limit is advisory copy only; the backend enforces it.
        ui.label(RichText::new("Supported format: CSV (Max 10MB)").small().weak());
    });

    ui.add_space(20.0);

    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.label(RichText::new("CSV Format Requirements:").strong());
        ui.label("  - First Name, Last Name, Email, Department");
        ui.label("  - Include header row");
        ui.label("  - UTF-8 encoding recommended");
    });
}

fn show_preferences_step(ui: &mut Ui, wizard: &mut SetupWizard) {
    let prefs = &mut wizard.state.preferences;

    ui.label(RichText::new("Notifications").strong());
    ui.add_space(5.0);

    egui::Grid::new("prefs_grid")
        .num_columns(2)
        .spacing([20.0, 8.0])
        .show(ui, |ui| {
            ui.checkbox(&mut prefs.notifications, "Email Notifications");
            ui.label(RichText::new("Receive updates via email").small().weak());
            ui.end_row();

            ui.checkbox(&mut prefs.analytics, "Analytics Dashboard");
            ui.label(RichText::new("Enable advanced analytics").small().weak());
            ui.end_row();

            ui.checkbox(&mut prefs.auto_invite, "Auto-Invite Employees");
            ui.label(RichText::new("Send invites automatically").small().weak());
            ui.end_row();
        });

    ui.add_space(20.0);
    ui.label(RichText::new("Key Metrics to Track").strong());
    ui.add_space(5.0);

    let mut toggled = None;
    ui.horizontal_wrapped(|ui| {
        for metric in Metric::ALL {
            let selected = wizard.state.selected_metrics.contains(&metric);
            if ui.selectable_label(selected, metric.as_str()).clicked() {
                toggled = Some(metric);
            }
        }
    });

    if let Some(metric) = toggled {
        wizard.toggle_metric(metric);
    }
}

/// Open a native file dialog and read the chosen file into memory.
fn pick_file(extensions: &[&str], filter_name: &str) -> Option<FileAttachment> {
    let path = rfd::FileDialog::new().add_filter(filter_name, extensions).pick_file()?;

    let file_name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "upload".to_string());

    match std::fs::read(&path) {
        Ok(bytes) => Some(FileAttachment { file_name, bytes }),
        Err(e) => {
            tracing::warn!("Failed to read {:?}: {}", path, e);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wizard_with_departments(names: &[&str]) -> SetupWizard {
        let mut wizard = SetupWizard::new();
        for name in names {
            wizard.state.new_department = name.to_string();
            wizard.add_department();
        }
        wizard
    }

    #[test]
    fn test_add_department_preserves_insertion_order() {
        let wizard = wizard_with_departments(&["Engineering", "Sales", "People"]);
        assert_eq!(wizard.state.departments, vec!["Engineering", "Sales", "People"]);
    }

    #[test]
    fn test_add_department_rejects_empty_and_whitespace() {
        let mut wizard = SetupWizard::new();

        wizard.state.new_department = String::new();
        wizard.add_department();
        wizard.state.new_department = "  ".to_string();
        wizard.add_department();

        assert!(wizard.state.departments.is_empty());
    }

    #[test]
    fn test_add_department_suppresses_duplicates() {
        let wizard = wizard_with_departments(&["Engineering", "Engineering"]);
        assert_eq!(wizard.state.departments, vec!["Engineering"]);
    }

    #[test]
    fn test_add_department_trims_and_clears_buffer() {
        let mut wizard = SetupWizard::new();
        wizard.state.new_department = "  People Ops  ".to_string();
        wizard.add_department();

        assert_eq!(wizard.state.departments, vec!["People Ops"]);
        assert!(wizard.state.new_department.is_empty());
    }

    #[test]
    fn test_rejected_add_keeps_buffer() {
        let mut wizard = wizard_with_departments(&["Sales"]);
        wizard.state.new_department = "Sales".to_string();
        wizard.add_department();

        assert_eq!(wizard.state.new_department, "Sales");
        assert_eq!(wizard.state.departments, vec!["Sales"]);
    }

    #[test]
    fn test_duplicate_check_is_case_sensitive() {
        let wizard = wizard_with_departments(&["Sales", "sales"]);
        assert_eq!(wizard.state.departments, vec!["Sales", "sales"]);
    }

    #[test]
    fn test_remove_department() {
        let mut wizard = wizard_with_departments(&["Engineering", "Sales"]);

        wizard.remove_department("Engineering");
        assert_eq!(wizard.state.departments, vec!["Sales"]);

        // Absent name is a no-op
        wizard.remove_department("Marketing");
        assert_eq!(wizard.state.departments, vec!["Sales"]);
    }

    #[test]
    fn test_back_on_first_step_is_noop() {
        let mut wizard = SetupWizard::new();
        wizard.back();
        assert_eq!(wizard.current_step(), 1);
    }

    #[test]
    fn test_four_advances_reach_last_step() {
        let mut wizard = SetupWizard::new();
        for _ in 0..4 {
            assert!(!wizard.advance());
        }
        assert_eq!(wizard.current_step(), SetupWizard::TOTAL_STEPS);
    }

    #[test]
    fn test_advance_on_last_step_requests_submit_once() {
        let mut wizard = SetupWizard::new();
        for _ in 0..4 {
            wizard.advance();
        }

        assert!(wizard.advance());
        assert_eq!(wizard.current_step(), SetupWizard::TOTAL_STEPS);

        // In flight: further presses are swallowed
        wizard.begin_submit();
        assert!(!wizard.advance());
        assert_eq!(wizard.current_step(), SetupWizard::TOTAL_STEPS);
    }

    #[test]
    fn test_preference_toggle_pair_restores_original() {
        let mut wizard = SetupWizard::new();
        let original = wizard.state.preferences.notifications;

        wizard.toggle_preference(PreferenceKey::Notifications);
        wizard.toggle_preference(PreferenceKey::Notifications);

        assert_eq!(wizard.state.preferences.notifications, original);
    }

    #[test]
    fn test_metric_toggle_adds_then_removes() {
        let mut wizard = SetupWizard::new();

        wizard.toggle_metric(Metric::DeiIndex);
        assert_eq!(wizard.state.selected_metrics, vec![Metric::DeiIndex]);

        wizard.toggle_metric(Metric::DeiIndex);
        assert!(wizard.state.selected_metrics.is_empty());
    }

    #[test]
    fn test_failed_submit_preserves_state_for_retry() {
        let mut wizard = wizard_with_departments(&["Engineering"]);
        wizard.state.company_name = "Acme".to_string();
        wizard.state.admin_email = "jo@acme.com".to_string();
        for _ in 0..4 {
            wizard.advance();
        }
        let before = wizard.payload();

        assert!(wizard.advance());
        wizard.begin_submit();
        assert!(wizard.is_submitting());

        wizard.apply_submit_result(Err("connection refused".to_string()));
        assert!(!wizard.is_submitting());
        assert!(matches!(wizard.submit_state, SubmitState::Failed(_)));

        // Identical retry is possible
        let after = wizard.payload();
        assert_eq!(after.company_name, before.company_name);
        assert_eq!(after.departments, before.departments);
        assert_eq!(after.admin_email, before.admin_email);
        assert!(wizard.advance());
    }

    #[test]
    fn test_successful_submit_marks_done() {
        let mut wizard = SetupWizard::new();
        wizard.begin_submit();
        wizard.apply_submit_result(Ok(()));

        assert!(wizard.is_done());
        assert!(!wizard.is_submitting());
    }

    #[test]
    fn test_payload_excludes_buffer_logo_and_role() {
        let mut wizard = wizard_with_departments(&["Engineering"]);
        wizard.state.new_department = "Half-typed".to_string();
        wizard.state.logo = Some(FileAttachment {
            file_name: "logo.png".to_string(),
            bytes: vec![1, 2, 3],
        });
        wizard.state.admin_role = Some(AdminRole::HrDirector);

        let payload = wizard.payload();
        assert_eq!(payload.departments, vec!["Engineering"]);
        // The buffer and the unsubmitted fields stay out of the snapshot
        assert!(!payload.departments.iter().any(|d| d == "Half-typed"));
    }
}
