//! Dashboard summary DTO.

use std::collections::HashMap;

use serde::Deserialize;

/// Aggregated stats for the dashboard home screen.
///
/// The backend computes everything; this is display data only.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    #[serde(default)]
    pub total_employees: i64,
    #[serde(default)]
    pub total_departments: i64,
    #[serde(default)]
    pub gender_distribution: HashMap<String, i64>,
    #[serde(default)]
    pub department_headcount: HashMap<String, i64>,
    #[serde(default)]
    pub open_roles: i64,
    #[serde(default)]
    pub retention_rate: Option<String>,
    #[serde(default)]
    pub average_survey_sentiment: Option<f64>,
    #[serde(default)]
    pub recent_activities: Vec<String>,
    #[serde(default)]
    pub tips: Vec<String>,
    #[serde(default)]
    pub smart_tips: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_deserializes_partial_payload() {
        let json = r#"{
            "totalEmployees": 42,
            "totalDepartments": 5,
            "openRoles": 3,
            "retentionRate": "94%",
            "recentActivities": ["Anna joined Engineering"],
            "departmentHeadcount": {"Engineering": 20}
        }"#;

        let summary: DashboardSummary = serde_json::from_str(json).unwrap();
        assert_eq!(summary.total_employees, 42);
        assert_eq!(summary.retention_rate.as_deref(), Some("94%"));
        assert_eq!(summary.department_headcount.get("Engineering"), Some(&20));
        assert!(summary.tips.is_empty());
    }
}
