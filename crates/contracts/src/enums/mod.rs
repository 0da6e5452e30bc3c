pub mod employee_status;
pub mod leave_status;

pub use employee_status::EmployeeStatus;
pub use leave_status::LeaveStatus;

/// Returned when a status string is outside its vocabulary.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {vocabulary} status: {value:?}")]
pub struct ParseStatusError {
    pub vocabulary: &'static str,
    pub value: String,
}
