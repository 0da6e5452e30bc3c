use super::ParseStatusError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Decision state of a leave application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LeaveStatus {
    Pending,
    Approved,
    #[serde(alias = "rejected")]
    Declined,
}

impl LeaveStatus {
    /// Код статуса, как его хранит backend
    pub fn code(&self) -> &'static str {
        match self {
            LeaveStatus::Pending => "pending",
            LeaveStatus::Approved => "approved",
            LeaveStatus::Declined => "declined",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            LeaveStatus::Pending => "Pending",
            LeaveStatus::Approved => "Approved",
            LeaveStatus::Declined => "Declined",
        }
    }

    /// CSS class of the status badge
    pub fn badge_class(&self) -> &'static str {
        match self {
            LeaveStatus::Pending => "status-pending",
            LeaveStatus::Approved => "status-approved",
            LeaveStatus::Declined => "status-declined",
        }
    }

    pub fn all() -> Vec<LeaveStatus> {
        vec![
            LeaveStatus::Pending,
            LeaveStatus::Approved,
            LeaveStatus::Declined,
        ]
    }

    /// Case-insensitive. The HR leave-request feed calls declined requests
    /// "Rejected", so that spelling is accepted too.
    pub fn from_code(code: &str) -> Option<Self> {
        match code.trim().to_lowercase().as_str() {
            "pending" => Some(LeaveStatus::Pending),
            "approved" => Some(LeaveStatus::Approved),
            "declined" | "rejected" => Some(LeaveStatus::Declined),
            _ => None,
        }
    }
}

impl fmt::Display for LeaveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for LeaveStatus {
    type Err = ParseStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s).ok_or_else(|| ParseStatusError {
            vocabulary: "leave",
            value: s.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code() {
        assert_eq!(LeaveStatus::from_code("Pending"), Some(LeaveStatus::Pending));
        assert_eq!(LeaveStatus::from_code(" APPROVED "), Some(LeaveStatus::Approved));
        assert_eq!(LeaveStatus::from_code("Rejected"), Some(LeaveStatus::Declined));
        assert_eq!(LeaveStatus::from_code("cancelled"), None);
    }

    #[test]
    fn test_from_str_error() {
        let err = "cancelled".parse::<LeaveStatus>().unwrap_err();
        assert_eq!(err.to_string(), "unknown leave status: \"cancelled\"");
        assert_eq!("declined".parse::<LeaveStatus>(), Ok(LeaveStatus::Declined));
    }

    #[test]
    fn test_serde_codes() {
        let status: LeaveStatus = serde_json::from_str("\"rejected\"").unwrap();
        assert_eq!(status, LeaveStatus::Declined);
        assert_eq!(serde_json::to_string(&LeaveStatus::Approved).unwrap(), "\"approved\"");
        assert_eq!(LeaveStatus::Declined.to_string(), "Declined");
    }
}
