//! Data models mirroring the backend REST contracts.

pub mod company;
pub mod dashboard;
pub mod department;
pub mod employee;
pub mod survey;

use serde::Deserialize;

/// Spring-style page envelope returned by list endpoints.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    pub content: Vec<T>,
    #[serde(default)]
    pub total_elements: u64,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::employee::Employee;

    #[test]
    fn test_page_envelope_deserializes() {
        let json = r#"{
            "content": [
                {"id": 1, "firstName": "Ada", "lastName": "Lovelace", "email": "ada@acme.com"}
            ],
            "totalElements": 1,
            "totalPages": 1,
            "size": 20
        }"#;

        let page: Page<Employee> = serde_json::from_str(json).unwrap();
        assert_eq!(page.content.len(), 1);
        assert_eq!(page.total_elements, 1);
        assert_eq!(page.content[0].first_name, "Ada");
    }
}
