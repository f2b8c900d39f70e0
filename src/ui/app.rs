//! Root application state and screen routing.

use std::sync::Arc;

use chrono::{DateTime, Local, NaiveDate};
use eframe::egui::{self, Align, Layout, RichText};
use tokio::sync::mpsc;

use crate::auth::{LoginResponse, SessionCredentials, SetupStatus};
use crate::client::ApiClient;
use crate::config::AppConfig;
use crate::models::dashboard::DashboardSummary;
use crate::models::department::Department;
use crate::models::employee::{Employee, EmployeeDraft};
use crate::models::survey::Survey;

use super::components::colors;
use super::setup_wizard::SetupWizard;
use super::{dashboard, department_panel, employee_panel, login, settings_panel, setup_wizard, survey_panel};

/// Top-level screen, the desktop equivalent of the SPA routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    #[default]
    Login,
    Setup,
    Main,
}

/// Current panel inside the main screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Panel {
    #[default]
    Dashboard,
    Departments,
    Employees,
    Surveys,
    Settings,
}

impl Panel {
    /// Get the display name for the panel.
    pub fn name(&self) -> &'static str {
        match self {
            Panel::Dashboard => "Dashboard",
            Panel::Departments => "Departments",
            Panel::Employees => "Employees",
            Panel::Surveys => "Surveys",
            Panel::Settings => "Settings",
        }
    }
}

/// Messages from async tasks to the UI.
pub enum UiMessage {
    // Auth
    LoginFinished(Result<LoginResponse, String>),

    // Setup wizard
    SetupFinished(Result<(), String>),

    // Data loading
    SummaryLoaded(DashboardSummary),
    DepartmentsLoaded(Vec<Department>),
    EmployeesLoaded(Vec<Employee>, u64),
    SurveysLoaded(Vec<Survey>),
    LoadError(String),

    // CRUD operations
    DepartmentSaved(Department),
    DepartmentDeleted(i64),
    EmployeeSaved(Employee),
    EmployeeDeleted(i64),
    SurveyLaunched(i64),
    OperationFailed(String),
}

/// Login form state.
#[derive(Default)]
pub struct LoginForm {
    pub email: String,
    pub password: String,
    pub error: Option<String>,
    pub in_flight: bool,
}

/// Form state for employee create/edit.
#[derive(Default, Clone)]
pub struct EmployeeForm {
    pub id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub job_title: String,
    pub gender: String,
    pub start_date: Option<NaiveDate>,
    pub location: String,
    pub department_id: Option<i64>,
    pub is_open: bool,
    pub is_editing: bool,
}

impl EmployeeForm {
    /// Reset the form to default values.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Create a form pre-filled for editing an existing employee.
    pub fn edit(emp: &Employee) -> Self {
        Self {
            id: Some(emp.id),
            first_name: emp.first_name.clone(),
            last_name: emp.last_name.clone(),
            email: emp.email.clone(),
            job_title: emp.job_title.clone().unwrap_or_default(),
            gender: emp.gender.clone().unwrap_or_default(),
            start_date: emp.start_date,
            location: emp.location.clone().unwrap_or_default(),
            department_id: emp.department_id,
            is_open: true,
            is_editing: true,
        }
    }

    /// Build the request body, mapping empty inputs to omitted fields.
    pub fn to_draft(&self) -> EmployeeDraft {
        let optional = |s: &str| {
            let trimmed = s.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        };

        EmployeeDraft {
            first_name: self.first_name.trim().to_string(),
            last_name: self.last_name.trim().to_string(),
            email: self.email.trim().to_string(),
            job_title: optional(&self.job_title),
            gender: optional(&self.gender),
            start_date: self.start_date,
            location: optional(&self.location),
            department_id: self.department_id,
        }
    }
}

/// Log level for UI messages.
#[derive(Clone, Copy, Debug)]
pub enum LogLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// Log entry for display in the UI.
#[derive(Clone)]
pub struct LogEntry {
    pub timestamp: DateTime<Local>,
    pub message: String,
    pub level: LogLevel,
}

/// Target for delete confirmation dialog.
#[derive(Clone)]
pub enum DeleteTarget {
    Department(i64, String),
    Employee(i64, String),
}

/// Settings form state.
pub struct SettingsForm {
    pub base_url_input: String,
    pub timeout_input: String,
    pub remember_email: bool,
}

impl SettingsForm {
    fn from_config(config: &AppConfig) -> Self {
        Self {
            base_url_input: config.server.base_url.clone(),
            timeout_input: config.server.timeout_secs.to_string(),
            remember_email: config.ui.remember_email,
        }
    }
}

/// Main application state.
pub struct App {
    // Runtime and backend access
    pub rt: tokio::runtime::Runtime,
    pub client: Arc<ApiClient>,
    pub credentials: Arc<SessionCredentials>,

    // Message channel for async communication
    pub tx: mpsc::UnboundedSender<UiMessage>,
    pub rx: mpsc::UnboundedReceiver<UiMessage>,

    // Navigation
    pub screen: Screen,
    pub current_panel: Panel,

    // Screens
    pub login_form: LoginForm,
    pub wizard: SetupWizard,

    // Cached data
    pub summary: Option<DashboardSummary>,
    pub departments: Vec<Department>,
    pub employees: Vec<Employee>,
    pub employee_total: u64,
    pub surveys: Vec<Survey>,

    // Forms and filters
    pub employee_form: EmployeeForm,
    pub employee_search: String,
    pub employee_dept_filter: Option<i64>,
    pub new_department_name: String,
    pub settings_form: SettingsForm,

    // Dialogs
    pub show_delete_confirm: bool,
    pub delete_target: Option<DeleteTarget>,
    pub error_message: Option<String>,
    pub success_message: Option<String>,

    // Log messages
    pub log_messages: Vec<LogEntry>,

    // Configuration
    pub config: AppConfig,
    pub config_path: std::path::PathBuf,
}

impl App {
    pub fn new(config: AppConfig, config_path: std::path::PathBuf, rt: tokio::runtime::Runtime) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let credentials = Arc::new(SessionCredentials::new());
        let client = Arc::new(ApiClient::new(config.server.clone(), credentials.clone()));

        let mut login_form = LoginForm::default();
        if config.ui.remember_email {
            login_form.email = config.ui.last_email.clone();
        }

        Self {
            rt,
            client,
            credentials,
            tx,
            rx,
            screen: Screen::default(),
            current_panel: Panel::default(),
            login_form,
            wizard: SetupWizard::new(),
            summary: None,
            departments: Vec::new(),
            employees: Vec::new(),
            employee_total: 0,
            surveys: Vec::new(),
            employee_form: EmployeeForm::default(),
            employee_search: String::new(),
            employee_dept_filter: None,
            new_department_name: String::new(),
            settings_form: SettingsForm::from_config(&config),
            show_delete_confirm: false,
            delete_target: None,
            error_message: None,
            success_message: None,
            log_messages: Vec::new(),
            config,
            config_path,
        }
    }

    /// Log a message to the UI log.
    pub fn log(&mut self, level: LogLevel, message: impl Into<String>) {
        self.log_messages.push(LogEntry {
            timestamp: Local::now(),
            message: message.into(),
            level,
        });

        // Keep only last 100 messages
        if self.log_messages.len() > 100 {
            self.log_messages.remove(0);
        }
    }

    /// Log an info message.
    pub fn log_info(&mut self, message: impl Into<String>) {
        self.log(LogLevel::Info, message);
    }

    /// Log a success message.
    pub fn log_success(&mut self, message: impl Into<String>) {
        self.log(LogLevel::Success, message);
    }

    /// Log an error message.
    pub fn log_error(&mut self, message: impl Into<String>) {
        self.log(LogLevel::Error, message);
    }

    /// Start the login request.
    pub fn start_login(&mut self) {
        if self.login_form.in_flight {
            return;
        }
        self.login_form.in_flight = true;
        self.login_form.error = None;

        let client = self.client.clone();
        let tx = self.tx.clone();
        let email = self.login_form.email.trim().to_string();
        let password = self.login_form.password.clone();

        self.rt.spawn(async move {
            let result = client.login(&email, &password).await.map_err(|e| e.to_string());
            let _ = tx.send(UiMessage::LoginFinished(result));
        });
    }

    /// Start the wizard submission.
    ///
    /// The in-flight flag on the wizard is the only double-submit guard;
    /// there is no cancellation once the request has left.
    pub fn start_setup_submit(&mut self) {
        if self.wizard.is_submitting() {
            return;
        }
        self.wizard.begin_submit();

        let client = self.client.clone();
        let tx = self.tx.clone();
        let payload = self.wizard.payload();

        self.rt.spawn(async move {
            let result = client.setup_company(&payload).await.map_err(|e| e.to_string());
            let _ = tx.send(UiMessage::SetupFinished(result));
        });
    }

    /// Load the dashboard summary.
    pub fn load_summary(&mut self) {
        let client = self.client.clone();
        let tx = self.tx.clone();

        self.rt.spawn(async move {
            match client.dashboard_summary().await {
                Ok(summary) => {
                    let _ = tx.send(UiMessage::SummaryLoaded(summary));
                }
                Err(e) => {
                    let _ = tx.send(UiMessage::LoadError(e.to_string()));
                }
            }
        });
    }

    /// Load departments from the backend.
    pub fn load_departments(&mut self) {
        let client = self.client.clone();
        let tx = self.tx.clone();

        self.rt.spawn(async move {
            match client.list_departments().await {
                Ok(depts) => {
                    let _ = tx.send(UiMessage::DepartmentsLoaded(depts));
                }
                Err(e) => {
                    let _ = tx.send(UiMessage::LoadError(e.to_string()));
                }
            }
        });
    }

    /// Load employees using the current search and department filter.
    pub fn load_employees(&mut self) {
        let client = self.client.clone();
        let tx = self.tx.clone();
        let search = self.employee_search.clone();
        let dept = self.employee_dept_filter;

        self.rt.spawn(async move {
            match client.list_employees(Some(&search), dept).await {
                Ok(page) => {
                    let _ = tx.send(UiMessage::EmployeesLoaded(page.content, page.total_elements));
                }
                Err(e) => {
                    let _ = tx.send(UiMessage::LoadError(e.to_string()));
                }
            }
        });
    }

    /// Load surveys from the backend.
    pub fn load_surveys(&mut self) {
        let client = self.client.clone();
        let tx = self.tx.clone();

        self.rt.spawn(async move {
            match client.list_surveys().await {
                Ok(surveys) => {
                    let _ = tx.send(UiMessage::SurveysLoaded(surveys));
                }
                Err(e) => {
                    let _ = tx.send(UiMessage::LoadError(e.to_string()));
                }
            }
        });
    }

    /// Create a department from the panel input.
    pub fn create_department(&mut self) {
        let name = self.new_department_name.trim().to_string();
        if name.is_empty() {
            return;
        }

        let client = self.client.clone();
        let tx = self.tx.clone();

        self.rt.spawn(async move {
            match client.create_department(&name).await {
                Ok(dept) => {
                    let _ = tx.send(UiMessage::DepartmentSaved(dept));
                }
                Err(e) => {
                    let _ = tx.send(UiMessage::OperationFailed(e.to_string()));
                }
            }
        });
    }

    /// Delete a department.
    pub fn delete_department(&mut self, id: i64) {
        let client = self.client.clone();
        let tx = self.tx.clone();

        self.rt.spawn(async move {
            match client.delete_department(id).await {
                Ok(()) => {
                    let _ = tx.send(UiMessage::DepartmentDeleted(id));
                }
                Err(e) => {
                    let _ = tx.send(UiMessage::OperationFailed(e.to_string()));
                }
            }
        });
    }

    /// Create or update an employee from the form.
    pub fn save_employee(&mut self) {
        let client = self.client.clone();
        let tx = self.tx.clone();
        let draft = self.employee_form.to_draft();
        let id = self.employee_form.id;

        self.rt.spawn(async move {
            let result = match id {
                Some(id) => client.update_employee(id, &draft).await,
                None => client.create_employee(&draft).await,
            };
            match result {
                Ok(emp) => {
                    let _ = tx.send(UiMessage::EmployeeSaved(emp));
                }
                Err(e) => {
                    let _ = tx.send(UiMessage::OperationFailed(e.to_string()));
                }
            }
        });
    }

    /// Delete an employee.
    pub fn delete_employee(&mut self, id: i64) {
        let client = self.client.clone();
        let tx = self.tx.clone();

        self.rt.spawn(async move {
            match client.delete_employee(id).await {
                Ok(()) => {
                    let _ = tx.send(UiMessage::EmployeeDeleted(id));
                }
                Err(e) => {
                    let _ = tx.send(UiMessage::OperationFailed(e.to_string()));
                }
            }
        });
    }

    /// Launch a draft survey.
    pub fn launch_survey(&mut self, id: i64) {
        let client = self.client.clone();
        let tx = self.tx.clone();

        self.rt.spawn(async move {
            match client.launch_survey(id).await {
                Ok(()) => {
                    let _ = tx.send(UiMessage::SurveyLaunched(id));
                }
                Err(e) => {
                    let _ = tx.send(UiMessage::OperationFailed(e.to_string()));
                }
            }
        });
    }

    /// Export the employee roster to Excel.
    pub fn export_employees(&mut self) {
        let default_name = crate::export::generate_export_filename("employees");
        let Some(path) = crate::export::prompt_export_path(&default_name) else {
            return;
        };

        match crate::export::export_employees_to_excel(&self.employees, &path) {
            Ok(()) => {
                self.success_message = Some(format!("Exported to: {}", path.display()));
                self.log_success(format!("Exported employees: {}", path.display()));
            }
            Err(e) => {
                self.error_message = Some(format!("Export failed: {}", e));
                self.log_error(format!("Export failed: {}", e));
            }
        }
    }

    /// Remember the login email when the preference is on.
    fn persist_last_email(&mut self) {
        if !self.config.ui.remember_email {
            return;
        }
        self.config.ui.last_email = self.login_form.email.trim().to_string();
        if let Err(e) = self.config.save(&self.config_path) {
            tracing::warn!("Failed to save config: {}", e);
        }
    }

    /// Enter the main screen and load everything it shows.
    fn enter_main(&mut self) {
        self.screen = Screen::Main;
        self.current_panel = Panel::Dashboard;
        self.load_summary();
        self.load_departments();
        self.load_employees();
        self.load_surveys();
    }

    /// Drop the session and return to the login screen.
    pub fn sign_out(&mut self) {
        self.credentials.clear();
        self.screen = Screen::Login;
        self.login_form.password.clear();
        self.login_form.error = None;
        self.summary = None;
        self.departments.clear();
        self.employees.clear();
        self.surveys.clear();
        self.wizard = SetupWizard::new();
        self.log_info("Signed out");
    }

    /// Clear the activity log.
    pub fn clear_log(&mut self) {
        self.log_messages.clear();
    }

    /// Poll async operation results.
    fn poll_async_results(&mut self) {
        while let Ok(msg) = self.rx.try_recv() {
            match msg {
                UiMessage::LoginFinished(result) => {
                    self.login_form.in_flight = false;
                    match result {
                        Ok(resp) => {
                            self.credentials.set_token(&resp.token);
                            self.persist_last_email();
                            self.log_success(format!("Signed in as {:?}", resp.role()));
                            match resp.setup_status {
                                SetupStatus::Incomplete => {
                                    self.wizard = SetupWizard::new();
                                    self.screen = Screen::Setup;
                                }
                                SetupStatus::Complete => self.enter_main(),
                            }
                        }
                        Err(e) => {
                            tracing::warn!("Login failed: {}", e);
                            self.login_form.error = Some("Invalid credentials. Please try again.".to_string());
                        }
                    }
                }
                UiMessage::SetupFinished(result) => {
                    let failed = result.is_err();
                    if let Err(e) = &result {
                        tracing::warn!("Setup failed: {}", e);
                    }
                    self.wizard.apply_submit_result(result);
                    if failed {
                        // Collected fields are retained for a retry
                        self.error_message = Some("Failed to save setup. Please try again.".to_string());
                    } else {
                        self.log_success("Company setup completed");
                        self.enter_main();
                    }
                }
                UiMessage::SummaryLoaded(summary) => {
                    self.summary = Some(summary);
                }
                UiMessage::DepartmentsLoaded(depts) => {
                    self.departments = depts;
                }
                UiMessage::EmployeesLoaded(emps, total) => {
                    self.employees = emps;
                    self.employee_total = total;
                }
                UiMessage::SurveysLoaded(surveys) => {
                    self.surveys = surveys;
                }
                UiMessage::LoadError(e) => {
                    self.error_message = Some(e.clone());
                    self.log_error(e);
                }
                UiMessage::DepartmentSaved(dept) => {
                    self.success_message = Some(format!("Department '{}' created", dept.name));
                    self.new_department_name.clear();
                    self.load_departments();
                }
                UiMessage::DepartmentDeleted(id) => {
                    self.departments.retain(|d| d.id != id);
                    self.success_message = Some("Department deleted".to_string());
                    self.log_success("Department deleted");
                }
                UiMessage::EmployeeSaved(emp) => {
                    self.success_message = Some(format!("Employee '{}' saved", emp.full_name()));
                    self.employee_form.reset();
                    self.load_employees();
                    self.load_summary();
                }
                UiMessage::EmployeeDeleted(id) => {
                    self.employees.retain(|e| e.id != id);
                    self.success_message = Some("Employee deleted".to_string());
                    self.log_success("Employee deleted");
                }
                UiMessage::SurveyLaunched(id) => {
                    self.log_success(format!("Survey {} launched", id));
                    self.load_surveys();
                }
                UiMessage::OperationFailed(e) => {
                    self.error_message = Some(e.clone());
                    self.log_error(e);
                }
            }
        }
    }

    /// Render menu bar.
    fn show_menu_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("menu_bar").show(ctx, |ui| {
            egui::MenuBar::new().ui(ui, |ui| {
                ui.menu_button("Workspace", |ui| {
                    if ui.button("Refresh All").clicked() {
                        self.load_summary();
                        self.load_departments();
                        self.load_employees();
                        self.load_surveys();
                        ui.close();
                    }
                    ui.separator();
                    if ui.button("Sign Out").clicked() {
                        self.sign_out();
                        ui.close();
                    }
                });
                ui.menu_button("Tools", |ui| {
                    if ui.button("Export Employees").clicked() {
                        self.export_employees();
                        ui.close();
                    }
                    if ui.button("Settings").clicked() {
                        self.current_panel = Panel::Settings;
                        ui.close();
                    }
                });
            });
        });
    }

    /// Render status bar (display only, no interaction).
    fn show_status_bar(&self, ctx: &egui::Context) {
        egui::TopBottomPanel::bottom("status_bar")
            .min_height(28.0)
            .show(ctx, |ui| {
                ui.disable();
                ui.horizontal(|ui| {
                    ui.colored_label(colors::NEUTRAL, format!("Server: {}", self.config.server.base_url));

                    ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                        ui.label(RichText::new(self.current_panel.name()).weak());
                    });
                });
            });
    }

    /// Render modal dialogs (error, success, delete confirmation).
    fn show_dialogs(&mut self, ctx: &egui::Context) {
        // Error dialog
        if let Some(ref error) = self.error_message.clone() {
            egui::Window::new("Error")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.colored_label(colors::ERROR, error);
                    ui.add_space(10.0);
                    if ui.button("OK").clicked() {
                        self.error_message = None;
                    }
                });
        }

        // Success dialog
        if let Some(ref msg) = self.success_message.clone() {
            egui::Window::new("Success")
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.colored_label(colors::SUCCESS, msg);
                    ui.add_space(10.0);
                    if ui.button("OK").clicked() {
                        self.success_message = None;
                    }
                });
        }

        // Delete confirmation dialog
        if self.show_delete_confirm
            && let Some(ref target) = self.delete_target.clone()
        {
            let (title, message) = match target {
                DeleteTarget::Department(_, name) => ("Delete Department", format!("Delete department '{}'?", name)),
                DeleteTarget::Employee(_, name) => ("Delete Employee", format!("Delete employee '{}'?", name)),
            };

            egui::Window::new(title)
                .collapsible(false)
                .resizable(false)
                .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
                .show(ctx, |ui| {
                    ui.label(message);
                    ui.add_space(10.0);
                    ui.horizontal(|ui| {
                        if ui.button("Cancel").clicked() {
                            self.show_delete_confirm = false;
                            self.delete_target = None;
                        }
                        if ui.button("Delete").clicked() {
                            self.confirm_delete();
                            self.show_delete_confirm = false;
                            self.delete_target = None;
                        }
                    });
                });
        }
    }

    /// Execute the confirmed delete operation.
    fn confirm_delete(&mut self) {
        if let Some(target) = self.delete_target.take() {
            match target {
                DeleteTarget::Department(id, name) => {
                    self.log_info(format!("Deleting department: {}", name));
                    self.delete_department(id);
                }
                DeleteTarget::Employee(id, name) => {
                    self.log_info(format!("Deleting employee: {}", name));
                    self.delete_employee(id);
                }
            }
        }
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Poll async results
        self.poll_async_results();

        // Request repaint during async operations
        if self.login_form.in_flight || self.wizard.is_submitting() {
            ctx.request_repaint();
        }

        // Modal dialogs (error, success, delete confirmation)
        self.show_dialogs(ctx);

        match self.screen {
            Screen::Login => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    if login::show(self, ui) {
                        self.start_login();
                    }
                });
            }
            Screen::Setup => {
                egui::CentralPanel::default().show(ctx, |ui| {
                    if setup_wizard::show(&mut self.wizard, ui) {
                        self.start_setup_submit();
                    }
                });
            }
            Screen::Main => {
                self.show_menu_bar(ctx);
                self.show_status_bar(ctx);

                egui::CentralPanel::default().show(ctx, |ui| match self.current_panel {
                    Panel::Dashboard => {
                        if let Some(next) = dashboard::show(self, ui) {
                            self.current_panel = next;
                        }
                    }
                    Panel::Departments => {
                        if department_panel::show(self, ui) {
                            self.current_panel = Panel::Dashboard;
                        }
                    }
                    Panel::Employees => {
                        if employee_panel::show(self, ui) {
                            self.current_panel = Panel::Dashboard;
                        }
                    }
                    Panel::Surveys => {
                        if survey_panel::show(self, ui) {
                            self.current_panel = Panel::Dashboard;
                        }
                    }
                    Panel::Settings => {
                        if settings_panel::show(self, ui) {
                            self.current_panel = Panel::Dashboard;
                        }
                    }
                });
            }
        }
    }
}
