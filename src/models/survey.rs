//! Survey DTOs.

use chrono::NaiveDate;
use serde::Deserialize;

/// Survey lifecycle state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum SurveyStatus {
    #[serde(rename = "DRAFT")]
    Draft,
    #[serde(rename = "ACTIVE")]
    Active,
    #[serde(rename = "CLOSED")]
    Closed,
}

impl SurveyStatus {
    pub fn label(&self) -> &'static str {
        match self {
            SurveyStatus::Draft => "Draft",
            SurveyStatus::Active => "Active",
            SurveyStatus::Closed => "Closed",
        }
    }
}

/// Survey question.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: i64,
    pub text: String,
    #[serde(default)]
    pub question_type: Option<String>,
}

/// Survey as returned by the backend.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Survey {
    pub id: i64,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub deadline: Option<NaiveDate>,
    pub status: SurveyStatus,
    #[serde(default)]
    pub questions: Vec<Question>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_survey_deserializes() {
        let json = r#"{
            "id": 3,
            "title": "Q3 Pulse",
            "description": "Quarterly engagement check",
            "deadline": "2026-09-30",
            "status": "ACTIVE",
            "questions": [{"id": 1, "text": "How are you feeling?"}]
        }"#;

        let survey: Survey = serde_json::from_str(json).unwrap();
        assert_eq!(survey.status, SurveyStatus::Active);
        assert_eq!(survey.questions.len(), 1);
        assert_eq!(survey.deadline, NaiveDate::from_ymd_opt(2026, 9, 30));
    }

    #[test]
    fn test_survey_without_optional_fields() {
        let json = r#"{"id": 1, "title": "Draft survey", "status": "DRAFT"}"#;
        let survey: Survey = serde_json::from_str(json).unwrap();

        assert_eq!(survey.status, SurveyStatus::Draft);
        assert!(survey.questions.is_empty());
        assert!(survey.deadline.is_none());
    }
}
