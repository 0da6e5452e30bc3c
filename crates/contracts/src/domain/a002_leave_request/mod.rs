//! Leave requests (HR view)
//!
//! Все заявки на отпуск для HR, `/hr/leave-requests`.

pub mod aggregate;
pub mod list_view;

pub use aggregate::{LeaveRequest, LeaveRequestListResponse};
pub use list_view::{create_list_view, list_view_config, PAGE_SIZE, REFRESH_INTERVAL_MS};
