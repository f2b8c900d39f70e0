//! Inqlusiv backend HTTP client.

use std::sync::Arc;

use reqwest::multipart;
use reqwest::{Client, Response};

use crate::auth::{CredentialProvider, LoginRequest, LoginResponse};
use crate::config::ServerConfig;
use crate::error::{AppError, Result};
use crate::models::Page;
use crate::models::company::CompanySetupRequest;
use crate::models::dashboard::DashboardSummary;
use crate::models::department::{CreateDepartment, Department};
use crate::models::employee::{Employee, EmployeeDraft};
use crate::models::survey::Survey;

/// One part of the company setup form, in submission order.
///
/// Kept as plain data so the payload can be inspected in tests before it
/// is turned into a `reqwest` form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetupPart {
    Text { name: &'static str, value: String },
    File {
        name: &'static str,
        file_name: String,
        mime: &'static str,
        bytes: Vec<u8>,
    },
}

impl SetupPart {
    pub fn name(&self) -> &'static str {
        match self {
            SetupPart::Text { name, .. } => name,
            SetupPart::File { name, .. } => name,
        }
    }
}

/// Build the multipart body for `POST /api/company/setup`.
///
/// Scalar fields become text parts, `departments` and `selectedMetrics`
/// become one repeated part per element in insertion order, and the
/// preference booleans are stringified. The employee roster file is the
/// only file part; the endpoint takes no logo or admin-role part.
pub fn setup_parts(req: &CompanySetupRequest) -> Vec<SetupPart> {
    let mut parts = vec![
        SetupPart::Text {
            name: "companyName",
            value: req.company_name.clone(),
        },
        SetupPart::Text {
            name: "industry",
            value: req.industry.map(|i| i.as_str()).unwrap_or("").to_string(),
        },
        SetupPart::Text {
            name: "region",
            value: req.region.map(|r| r.as_str()).unwrap_or("").to_string(),
        },
        SetupPart::Text {
            name: "adminName",
            value: req.admin_name.clone(),
        },
        SetupPart::Text {
            name: "adminTitle",
            value: req.admin_title.clone(),
        },
        SetupPart::Text {
            name: "adminEmail",
            value: req.admin_email.clone(),
        },
    ];

    for dept in &req.departments {
        parts.push(SetupPart::Text {
            name: "departments",
            value: dept.clone(),
        });
    }

    parts.push(SetupPart::Text {
        name: "notifications",
        value: req.preferences.notifications.to_string(),
    });
    parts.push(SetupPart::Text {
        name: "analytics",
        value: req.preferences.analytics.to_string(),
    });
    parts.push(SetupPart::Text {
        name: "autoInvite",
        value: req.preferences.auto_invite.to_string(),
    });

    for metric in &req.selected_metrics {
        parts.push(SetupPart::Text {
            name: "selectedMetrics",
            value: metric.as_str().to_string(),
        });
    }

    if let Some(file) = &req.employee_file {
        parts.push(SetupPart::File {
            name: "employeeFile",
            file_name: file.file_name.clone(),
            mime: file.mime(),
            bytes: file.bytes.clone(),
        });
    }

    parts
}

/// Convert the inspected parts into a `reqwest` multipart form.
fn setup_form(req: &CompanySetupRequest) -> Result<multipart::Form> {
    let mut form = multipart::Form::new();

    for part in setup_parts(req) {
        form = match part {
            SetupPart::Text { name, value } => form.text(name, value),
            SetupPart::File {
                name,
                file_name,
                mime,
                bytes,
            } => {
                let file_part = multipart::Part::bytes(bytes)
                    .file_name(file_name)
                    .mime_str(mime)
                    .map_err(|e| AppError::parse(format!("Invalid content type: {e}")))?;
                form.part(name, file_part)
            }
        };
    }

    Ok(form)
}

/// Inqlusiv REST API client.
///
/// Wraps a shared `reqwest::Client`; the bearer credential is supplied by
/// an injected provider rather than read from ambient storage.
pub struct ApiClient {
    client: Client,
    server: ServerConfig,
    credentials: Arc<dyn CredentialProvider>,
}

impl ApiClient {
    /// Create a new client instance.
    pub fn new(server: ServerConfig, credentials: Arc<dyn CredentialProvider>) -> Self {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(server.timeout_secs))
            .build()
            .expect("Failed to build HTTP client");

        Self {
            client,
            server,
            credentials,
        }
    }

    fn url(&self, path: &str) -> String {
        self.server.endpoint(path)
    }

    /// Authorization header value for the current session.
    fn bearer(&self) -> Result<String> {
        let token = self.credentials.token().ok_or(AppError::Unauthorized)?;
        Ok(format!("Bearer {token}"))
    }

    /// Map a non-2xx response to an API error, passing 2xx through.
    async fn check(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        Err(AppError::api(status.as_u16(), body))
    }

    /// Authenticate against the backend.
    ///
    /// The response carries the session token, the company setup status
    /// used for routing, and a typed role claim.
    pub async fn login(&self, email: &str, password: &str) -> Result<LoginResponse> {
        let body = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };

        let response = self
            .client
            .post(self.url("/api/auth/login"))
            .json(&body)
            .send()
            .await?;

        let response = Self::check(response).await?;
        Ok(response.json().await?)
    }

    /// Submit the completed setup wizard as one multipart request.
    pub async fn setup_company(&self, req: &CompanySetupRequest) -> Result<()> {
        let form = setup_form(req)?;

        let response = self
            .client
            .post(self.url("/api/company/setup"))
            .header("Authorization", self.bearer()?)
            .multipart(form)
            .send()
            .await?;

        Self::check(response).await?;
        Ok(())
    }

    /// Fetch all departments with headcounts.
    pub async fn list_departments(&self) -> Result<Vec<Department>> {
        let response = self
            .client
            .get(self.url("/api/departments"))
            .header("Authorization", self.bearer()?)
            .send()
            .await?;

        let response = Self::check(response).await?;
        Ok(response.json().await?)
    }

    /// Create a department.
    pub async fn create_department(&self, name: &str) -> Result<Department> {
        let body = CreateDepartment {
            name: name.to_string(),
        };

        let response = self
            .client
            .post(self.url("/api/departments"))
            .header("Authorization", self.bearer()?)
            .json(&body)
            .send()
            .await?;

        let response = Self::check(response).await?;
        Ok(response.json().await?)
    }

    /// Delete a department.
    pub async fn delete_department(&self, id: i64) -> Result<()> {
        let response = self
            .client
            .delete(self.url(&format!("/api/departments/{id}")))
            .header("Authorization", self.bearer()?)
            .send()
            .await?;

        Self::check(response).await?;
        Ok(())
    }

    /// Fetch employees, optionally filtered by search text and department.
    pub async fn list_employees(&self, search: Option<&str>, department_id: Option<i64>) -> Result<Page<Employee>> {
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(s) = search {
            if !s.trim().is_empty() {
                query.push(("search", s.trim().to_string()));
            }
        }
        if let Some(id) = department_id {
            query.push(("departmentId", id.to_string()));
        }

        let response = self
            .client
            .get(self.url("/api/employees"))
            .header("Authorization", self.bearer()?)
            .query(&query)
            .send()
            .await?;

        let response = Self::check(response).await?;
        Ok(response.json().await?)
    }

    /// Create an employee.
    pub async fn create_employee(&self, draft: &EmployeeDraft) -> Result<Employee> {
        let response = self
            .client
            .post(self.url("/api/employees"))
            .header("Authorization", self.bearer()?)
            .json(draft)
            .send()
            .await?;

        let response = Self::check(response).await?;
        Ok(response.json().await?)
    }

    /// Update an existing employee.
    pub async fn update_employee(&self, id: i64, draft: &EmployeeDraft) -> Result<Employee> {
        let response = self
            .client
            .put(self.url(&format!("/api/employees/{id}")))
            .header("Authorization", self.bearer()?)
            .json(draft)
            .send()
            .await?;

        let response = Self::check(response).await?;
        Ok(response.json().await?)
    }

    /// Delete an employee.
    pub async fn delete_employee(&self, id: i64) -> Result<()> {
        let response = self
            .client
            .delete(self.url(&format!("/api/employees/{id}")))
            .header("Authorization", self.bearer()?)
            .send()
            .await?;

        Self::check(response).await?;
        Ok(())
    }

    /// Fetch the dashboard summary.
    pub async fn dashboard_summary(&self) -> Result<DashboardSummary> {
        let response = self
            .client
            .get(self.url("/api/dashboard/summary"))
            .header("Authorization", self.bearer()?)
            .send()
            .await?;

        let response = Self::check(response).await?;
        Ok(response.json().await?)
    }

    /// Fetch all surveys for the company.
    pub async fn list_surveys(&self) -> Result<Vec<Survey>> {
        let response = self
            .client
            .get(self.url("/api/surveys"))
            .header("Authorization", self.bearer()?)
            .send()
            .await?;

        let response = Self::check(response).await?;
        Ok(response.json().await?)
    }

    /// Launch a draft survey.
    pub async fn launch_survey(&self, id: i64) -> Result<()> {
        let response = self
            .client
            .post(self.url(&format!("/api/surveys/{id}/launch")))
            .header("Authorization", self.bearer()?)
            .send()
            .await?;

        Self::check(response).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::company::{FileAttachment, Industry, Metric, Region};

    fn text_values<'a>(parts: &'a [SetupPart], name: &str) -> Vec<&'a str> {
        parts
            .iter()
            .filter_map(|p| match p {
                SetupPart::Text { name: n, value } if *n == name => Some(value.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_setup_parts_scalar_fields_lead() {
        let req = CompanySetupRequest {
            company_name: "Acme".to_string(),
            industry: Some(Industry::Technology),
            region: Some(Region::NorthAmerica),
            admin_name: "Jo March".to_string(),
            admin_title: "HR Director".to_string(),
            admin_email: "jo@acme.com".to_string(),
            ..Default::default()
        };

        let parts = setup_parts(&req);
        let names: Vec<_> = parts.iter().map(|p| p.name()).collect();
        assert_eq!(
            &names[..6],
            &["companyName", "industry", "region", "adminName", "adminTitle", "adminEmail"]
        );
        assert_eq!(text_values(&parts, "industry"), vec!["Technology"]);
        assert_eq!(text_values(&parts, "region"), vec!["North America"]);
    }

    #[test]
    fn test_setup_parts_unselected_enums_send_empty_text() {
        let req = CompanySetupRequest::default();
        let parts = setup_parts(&req);

        assert_eq!(text_values(&parts, "industry"), vec![""]);
        assert_eq!(text_values(&parts, "region"), vec![""]);
    }

    #[test]
    fn test_setup_parts_repeat_departments_in_order() {
        let req = CompanySetupRequest {
            departments: vec!["Engineering".to_string(), "Sales".to_string(), "People".to_string()],
            ..Default::default()
        };

        let parts = setup_parts(&req);
        assert_eq!(text_values(&parts, "departments"), vec!["Engineering", "Sales", "People"]);
    }

    #[test]
    fn test_setup_parts_repeat_metrics_in_toggle_order() {
        let req = CompanySetupRequest {
            selected_metrics: vec![Metric::RetentionRate, Metric::DeiIndex],
            ..Default::default()
        };

        let parts = setup_parts(&req);
        assert_eq!(
            text_values(&parts, "selectedMetrics"),
            vec!["Retention Rate", "DEI Index"]
        );
    }

    #[test]
    fn test_setup_parts_stringify_preference_booleans() {
        let req = CompanySetupRequest::default();
        let parts = setup_parts(&req);

        assert_eq!(text_values(&parts, "notifications"), vec!["true"]);
        assert_eq!(text_values(&parts, "analytics"), vec!["true"]);
        assert_eq!(text_values(&parts, "autoInvite"), vec!["false"]);
    }

    #[test]
    fn test_setup_parts_file_only_when_picked() {
        let without = setup_parts(&CompanySetupRequest::default());
        assert!(without.iter().all(|p| p.name() != "employeeFile"));

        let req = CompanySetupRequest {
            employee_file: Some(FileAttachment {
                file_name: "staff.csv".to_string(),
                bytes: b"First Name,Last Name\n".to_vec(),
            }),
            ..Default::default()
        };
        let with = setup_parts(&req);

        let file = with.iter().find(|p| p.name() == "employeeFile").unwrap();
        match file {
            SetupPart::File { file_name, mime, .. } => {
                assert_eq!(file_name, "staff.csv");
                assert_eq!(*mime, "text/csv");
            }
            SetupPart::Text { .. } => panic!("employeeFile must be a file part"),
        }
    }

    #[test]
    fn test_setup_parts_never_carry_logo_or_admin_role() {
        let req = CompanySetupRequest {
            company_name: "Acme".to_string(),
            ..Default::default()
        };

        let parts = setup_parts(&req);
        assert!(parts.iter().all(|p| p.name() != "logo"));
        assert!(parts.iter().all(|p| p.name() != "adminRole"));
    }
}
