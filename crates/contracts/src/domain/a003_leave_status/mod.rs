//! Leave status (employee view): the signed-in employee's own requests with
//! approval trail.

pub mod aggregate;
pub mod list_view;

pub use aggregate::{LeaveLogEntry, LeaveStatusEntry, LeaveStatusListResponse};
pub use list_view::{create_list_view, list_view_config, PAGE_SIZE};
