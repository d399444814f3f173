//! Employee records as seen by the search engine.
//!
//! Records are owned by an external directory sync; this crate only reads them.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Opaque, stable employee identifier.
///
/// Directory exports use either numeric or string keys, so both deserialize
/// into the same textual form.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct EmployeeId(String);

impl EmployeeId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for EmployeeId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<u64> for EmployeeId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl<'de> Deserialize<'de> for EmployeeId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawId {
            Text(String),
            Number(u64),
        }

        Ok(match RawId::deserialize(deserializer)? {
            RawId::Text(id) => Self(id),
            RawId::Number(id) => Self::from(id),
        })
    }
}

/// A single employee as exported by the directory.
///
/// Accepts both camelCase and snake_case field names. `isActive` defaults to
/// `true` when an export omits it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: EmployeeId,
    #[serde(alias = "full_name")]
    pub full_name: String,
    pub email: Option<String>,
    #[serde(default = "default_active", alias = "is_active")]
    pub is_active: bool,
    pub department: Option<String>,
    #[serde(alias = "external_id")]
    pub external_id: Option<String>,
    #[serde(alias = "last_synced_at")]
    pub last_synced_at: Option<String>,
}

const fn default_active() -> bool {
    true
}

impl Employee {
    /// Create an active employee with no email or directory metadata.
    pub fn new(id: impl Into<EmployeeId>, full_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            full_name: full_name.into(),
            email: None,
            is_active: true,
            department: None,
            external_id: None,
            last_synced_at: None,
        }
    }

    #[must_use]
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    #[must_use]
    pub fn with_department(mut self, department: impl Into<String>) -> Self {
        self.department = Some(department.into());
        self
    }

    /// Mark the employee as deactivated.
    #[must_use]
    pub const fn inactive(mut self) -> Self {
        self.is_active = false;
        self
    }

    /// Email address, or `""` when the directory has none on file.
    pub fn email_or_empty(&self) -> &str {
        self.email.as_deref().unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::{check, let_assert};
    use rstest::rstest;

    #[rstest]
    #[case(r#"{"id": 7, "fullName": "Jane Doe"}"#)]
    #[case(r#"{"id": "7", "full_name": "Jane Doe", "is_active": true}"#)]
    fn deserializes_camel_and_snake_case(#[case] json: &str) {
        let_assert!(Ok(employee) = serde_json::from_str::<Employee>(json));
        check!(employee.id.as_str() == "7");
        check!(employee.full_name == "Jane Doe");
        check!(employee.is_active);
        check!(employee.email.is_none());
    }

    #[test]
    fn reads_inactive_flag_and_metadata() {
        let json = r#"{
            "id": "e-19",
            "fullName": "Maria Santos Garcia",
            "email": "maria@example.com",
            "isActive": false,
            "department": "Facilities",
            "externalId": "AD-0019",
            "lastSyncedAt": "2026-10-01T08:00:00Z"
        }"#;
        let_assert!(Ok(employee) = serde_json::from_str::<Employee>(json));
        check!(!employee.is_active);
        check!(employee.email_or_empty() == "maria@example.com");
        check!(employee.department.as_deref() == Some("Facilities"));
        check!(employee.external_id.as_deref() == Some("AD-0019"));
    }

    #[test]
    fn email_or_empty_without_email() {
        let employee = Employee::new("1", "John Smith");
        check!(employee.email_or_empty().is_empty());
    }
}
