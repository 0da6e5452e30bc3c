use crate::enums::EmployeeStatus;
use crate::shared::list_view::ListRecord;
use serde::{Deserialize, Serialize};

// ============================================================================
// Record
// ============================================================================

/// One employee card.
///
/// Department and contact data come from outer joins on the backend and may
/// be `null`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub contact: Option<String>,
    #[serde(default)]
    pub position: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub date_of_birth: Option<String>,
    #[serde(default)]
    pub gender: Option<String>,
    #[serde(default)]
    pub is_active: Option<bool>,
    /// "Active", "On-Leave" or "Inactive"
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub leaves_taken: i64,
    #[serde(default)]
    pub remaining_leaves: i64,
}

impl Employee {
    /// Status as shown on the card; a missing status reads as active.
    pub fn display_status(&self) -> EmployeeStatus {
        self.status
            .as_deref()
            .and_then(EmployeeStatus::from_code)
            .unwrap_or(EmployeeStatus::Active)
    }

    /// Up to two initials for the avatar
    pub fn initials(&self) -> String {
        let initials: String = self
            .name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .take(2)
            .collect::<String>()
            .to_uppercase();
        if initials.is_empty() {
            "?".to_string()
        } else {
            initials
        }
    }
}

impl ListRecord for Employee {
    fn record_id(&self) -> String {
        self.id.to_string()
    }

    fn field_value(&self, field: &str) -> Option<String> {
        match field {
            "id" => Some(self.id.to_string()),
            "name" => Some(self.name.clone()),
            "email" => self.email.clone(),
            "position" => self.position.clone(),
            "department" => self.department.clone(),
            // Same status the card badge shows
            "status" => Some(self.display_status().code().to_string()),
            _ => None,
        }
    }
}

// ============================================================================
// Response
// ============================================================================

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Pagination {
    pub current_page: usize,
    pub per_page: usize,
    pub total_pages: usize,
    pub total_count: usize,
    pub has_prev: bool,
    pub has_next: bool,
}

/// Body of `GET /api/employees`. On failure the backend sends only `error`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmployeeListResponse {
    #[serde(default)]
    pub employees: Vec<Employee>,
    #[serde(default)]
    pub pagination: Option<Pagination>,
    #[serde(default)]
    pub error: Option<String>,
}
