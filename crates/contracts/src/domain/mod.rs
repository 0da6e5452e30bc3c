pub mod a001_employee;
pub mod a002_leave_request;
pub mod a003_leave_status;
