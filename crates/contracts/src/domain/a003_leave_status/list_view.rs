use super::aggregate::LeaveStatusEntry;
use crate::shared::list_view::{Comparator, ListViewConfig, ListViewModel};

pub const PAGE_SIZE: usize = 5;

pub fn list_view_config() -> ListViewConfig<LeaveStatusEntry> {
    ListViewConfig::new("status", PAGE_SIZE)
        .with_status_vocabulary(&["pending", "approved", "declined"])
        .with_searchable_fields(&["requestId", "leaveType"])
        .with_sort_option(
            "appliedDateDesc",
            "Applied Date (Newest)",
            Comparator::DateDesc("appliedDate"),
        )
        .with_sort_option(
            "appliedDateAsc",
            "Applied Date (Oldest)",
            Comparator::DateAsc("appliedDate"),
        )
        .with_sort_option("startDateAsc", "Start Date", Comparator::DateAsc("startDate"))
        .with_sort_option("status", "Status", Comparator::TextAsc("status"))
}

pub fn create_list_view() -> ListViewModel<LeaveStatusEntry> {
    ListViewModel::new(list_view_config())
}
