//! Employee DTOs for list, create, and update operations.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Employee as returned by the backend.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub job_title: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub department_id: Option<i64>,
    #[serde(default)]
    pub department_name: Option<String>,
}

impl Employee {
    /// Display name in "First Last" order.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// DTO for creating or updating an employee.
///
/// The backend takes the same shape for both; `None` fields are omitted.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub job_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department_id: Option<i64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_employee_deserializes_with_nulls() {
        let json = r#"{
            "id": 7,
            "firstName": "Grace",
            "lastName": "Hopper",
            "email": "grace@acme.com",
            "jobTitle": null,
            "departmentId": 2,
            "departmentName": "Engineering"
        }"#;

        let emp: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(emp.full_name(), "Grace Hopper");
        assert_eq!(emp.department_id, Some(2));
        assert!(emp.job_title.is_none());
        assert!(emp.start_date.is_none());
    }

    #[test]
    fn test_draft_omits_unset_fields() {
        let draft = EmployeeDraft {
            first_name: "Ada".to_string(),
            last_name: "Lovelace".to_string(),
            email: "ada@acme.com".to_string(),
            ..Default::default()
        };

        let json = serde_json::to_string(&draft).unwrap();
        assert!(json.contains("firstName"));
        assert!(!json.contains("jobTitle"));
        assert!(!json.contains("departmentId"));
    }
}
