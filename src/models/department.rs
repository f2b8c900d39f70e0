//! Department DTOs.

use serde::{Deserialize, Serialize};

/// Department as returned by the backend, including derived headcount.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Department {
    pub id: i64,
    pub name: String,
    #[serde(default)]
    pub headcount: i64,
}

/// DTO for creating a department.
#[derive(Debug, Clone, Serialize)]
pub struct CreateDepartment {
    pub name: String,
}
