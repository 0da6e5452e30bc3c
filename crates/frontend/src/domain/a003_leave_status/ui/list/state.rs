use crate::shared::list_page::ListPageState;
use contracts::domain::a003_leave_status::{create_list_view, LeaveStatusEntry};

pub fn create_state() -> ListPageState<LeaveStatusEntry> {
    ListPageState::new(create_list_view())
}
