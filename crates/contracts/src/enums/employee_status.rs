use super::ParseStatusError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Employment state shown on the employee cards.
///
/// `OnLeave` is derived by the backend: an active employee with an approved
/// leave covering today.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EmployeeStatus {
    Active,
    #[serde(rename = "On-Leave")]
    OnLeave,
    Inactive,
}

impl EmployeeStatus {
    pub fn code(&self) -> &'static str {
        match self {
            EmployeeStatus::Active => "active",
            EmployeeStatus::OnLeave => "on-leave",
            EmployeeStatus::Inactive => "inactive",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            EmployeeStatus::Active => "Active",
            EmployeeStatus::OnLeave => "On-Leave",
            EmployeeStatus::Inactive => "Inactive",
        }
    }

    pub fn all() -> Vec<EmployeeStatus> {
        vec![
            EmployeeStatus::Active,
            EmployeeStatus::OnLeave,
            EmployeeStatus::Inactive,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "active" => Some(EmployeeStatus::Active),
            "on-leave" | "on leave" => Some(EmployeeStatus::OnLeave),
            "inactive" => Some(EmployeeStatus::Inactive),
            _ => None,
        }
    }
}

impl fmt::Display for EmployeeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for EmployeeStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| ParseStatusError {
            vocabulary: "employee",
            value: s.to_string(),
        })
    }
}
