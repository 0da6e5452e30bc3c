use crate::enums::LeaveStatus;
use crate::shared::list_view::ListRecord;
use serde::{Deserialize, Serialize};

/// A leave application as listed for HR.
///
/// The backend pre-formats `dates`, `duration`, `start_date` and `end_date`
/// for display ("Sep 20, 2025"); `applied_on` is `YYYY-MM-DD HH:MM`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveRequest {
    pub leave_id: i64,
    #[serde(default)]
    pub employee: Option<String>,
    #[serde(rename = "type", default)]
    pub leave_type: Option<String>,
    #[serde(default)]
    pub dates: Option<String>,
    #[serde(default)]
    pub duration: Option<String>,
    /// "Pending", "Approved" or "Rejected"
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub designation: Option<String>,
    #[serde(default)]
    pub department: Option<String>,
    #[serde(default)]
    pub applied_on: Option<String>,
    #[serde(default)]
    pub approver: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
    #[serde(default)]
    pub contact_info: Option<String>,
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
}

impl LeaveRequest {
    pub fn leave_status(&self) -> Option<LeaveStatus> {
        self.status.as_deref().and_then(LeaveStatus::from_code)
    }

    /// Only pending requests still await an HR decision
    pub fn is_actionable(&self) -> bool {
        self.leave_status() == Some(LeaveStatus::Pending)
    }
}

impl ListRecord for LeaveRequest {
    fn record_id(&self) -> String {
        self.leave_id.to_string()
    }

    fn field_value(&self, field: &str) -> Option<String> {
        match field {
            "id" => Some(self.leave_id.to_string()),
            "employee" => self.employee.clone(),
            "department" => self.department.clone(),
            "type" => self.leave_type.clone(),
            "status" => self.status.clone(),
            "appliedDate" => self.applied_on.clone(),
            "startDate" => self.start_date.clone(),
            "endDate" => self.end_date.clone(),
            _ => None,
        }
    }
}

/// Body of `GET /hr/leave-requests`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LeaveRequestListResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub leave_requests: Vec<LeaveRequest>,
    #[serde(default)]
    pub message: Option<String>,
}
