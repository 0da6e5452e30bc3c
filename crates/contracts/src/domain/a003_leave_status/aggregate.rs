use crate::enums::LeaveStatus;
use crate::shared::list_view::ListRecord;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LeaveLogEntry {
    pub time: String,
    pub entry: String,
}

/// One of the employee's leave requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaveStatusEntry {
    pub request_id: String,
    #[serde(default)]
    pub emp_name: String,
    #[serde(default)]
    pub emp_id: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub designation: String,
    #[serde(default)]
    pub leave_type: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub total_days: u32,
    #[serde(default)]
    pub applied_date: String,
    /// pending | approved | declined
    #[serde(default)]
    pub status: String,
    #[serde(default)]
    pub balance_before: String,
    #[serde(default)]
    pub balance_after: String,
    #[serde(default)]
    pub approver_name: String,
    #[serde(default)]
    pub approver_designation: String,
    /// `--` until a decision is made
    #[serde(default)]
    pub decision_date: String,
    #[serde(default)]
    pub remarks: String,
    #[serde(default)]
    pub documents: Vec<String>,
    #[serde(default)]
    pub logs: Vec<LeaveLogEntry>,
}

impl LeaveStatusEntry {
    pub fn leave_status(&self) -> Option<LeaveStatus> {
        LeaveStatus::from_code(&self.status)
    }

    pub fn is_decided(&self) -> bool {
        matches!(
            self.leave_status(),
            Some(LeaveStatus::Approved) | Some(LeaveStatus::Declined)
        )
    }
}

impl ListRecord for LeaveStatusEntry {
    fn record_id(&self) -> String {
        self.request_id.clone()
    }

    fn field_value(&self, field: &str) -> Option<String> {
        let value = match field {
            "requestId" => &self.request_id,
            "empName" => &self.emp_name,
            "department" => &self.department,
            "leaveType" => &self.leave_type,
            "status" => &self.status,
            "appliedDate" => &self.applied_date,
            "startDate" => &self.start_date,
            "endDate" => &self.end_date,
            "decisionDate" => &self.decision_date,
            _ => return None,
        };
        Some(value.clone())
    }
}

/// Body of `GET /api/leave-status`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LeaveStatusListResponse {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub requests: Vec<LeaveStatusEntry>,
    #[serde(default)]
    pub message: Option<String>,
}
