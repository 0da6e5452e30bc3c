use crate::shared::list_page::ListPageState;
use contracts::domain::a002_leave_request::{create_list_view, LeaveRequest};

pub fn create_state() -> ListPageState<LeaveRequest> {
    ListPageState::new(create_list_view())
}
