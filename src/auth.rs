//! Session credentials and auth-related types.

use std::sync::RwLock;

use serde::{Deserialize, Serialize};

/// Source of the bearer credential attached to authenticated requests.
///
/// Injected into the API client so controllers can be exercised in tests
/// without a real sign-in.
pub trait CredentialProvider: Send + Sync {
    /// Current session token, if signed in.
    fn token(&self) -> Option<String>;
}

/// In-memory session credentials, filled by login and cleared on logout.
///
/// Process-scoped only; nothing is written to disk.
#[derive(Default)]
pub struct SessionCredentials {
    token: RwLock<Option<String>>,
}

impl SessionCredentials {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store the token returned by a successful login.
    pub fn set_token(&self, token: impl Into<String>) {
        *self.token.write().expect("credential lock poisoned") = Some(token.into());
    }

    /// Drop the session.
    pub fn clear(&self) {
        *self.token.write().expect("credential lock poisoned") = None;
    }
}

impl CredentialProvider for SessionCredentials {
    fn token(&self) -> Option<String> {
        self.token.read().expect("credential lock poisoned").clone()
    }
}

/// User role, delivered as a typed claim in the login response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Role {
    #[default]
    #[serde(rename = "COMPANY_ADMIN")]
    CompanyAdmin,
    #[serde(rename = "HR_MANAGER")]
    HrManager,
    #[serde(rename = "MANAGER")]
    Manager,
    #[serde(rename = "EMPLOYEE")]
    Employee,
}

/// Whether the company has completed the setup wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SetupStatus {
    #[serde(rename = "COMPLETE")]
    Complete,
    #[serde(rename = "INCOMPLETE")]
    Incomplete,
}

/// Login request body.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Login response.
///
/// `role` is optional for compatibility with servers that predate the
/// typed claim; missing values fall back to `CompanyAdmin`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginResponse {
    pub token: String,
    pub setup_status: SetupStatus,
    #[serde(default)]
    pub role: Option<Role>,
}

impl LoginResponse {
    /// Effective role for routing decisions.
    pub fn role(&self) -> Role {
        self.role.unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_token_roundtrip() {
        let creds = SessionCredentials::new();
        assert!(creds.token().is_none());

        creds.set_token("mock-jwt-token-1");
        assert_eq!(creds.token().as_deref(), Some("mock-jwt-token-1"));

        creds.clear();
        assert!(creds.token().is_none());
    }

    #[test]
    fn test_login_response_without_role_claim() {
        let json = r#"{"token":"mock-jwt-token-1","setupStatus":"INCOMPLETE"}"#;
        let resp: LoginResponse = serde_json::from_str(json).unwrap();

        assert_eq!(resp.setup_status, SetupStatus::Incomplete);
        assert_eq!(resp.role(), Role::CompanyAdmin);
    }

    #[test]
    fn test_login_response_with_role_claim() {
        let json = r#"{"token":"t","setupStatus":"COMPLETE","role":"EMPLOYEE"}"#;
        let resp: LoginResponse = serde_json::from_str(json).unwrap();

        assert_eq!(resp.setup_status, SetupStatus::Complete);
        assert_eq!(resp.role(), Role::Employee);
    }
}
