use super::aggregate::LeaveRequest;
use crate::shared::list_view::{Comparator, ListViewConfig, ListViewModel};

pub const PAGE_SIZE: usize = 10;

/// The HR page refetches the whole list every 30 seconds.
pub const REFRESH_INTERVAL_MS: u32 = 30_000;

pub fn list_view_config() -> ListViewConfig<LeaveRequest> {
    ListViewConfig::new("status", PAGE_SIZE)
        .with_status_vocabulary(&["pending", "approved", "rejected"])
        .with_searchable_fields(&["employee", "department", "type"])
        .with_facet_fields(&["department"])
        .with_sort_option(
            "appliedDateDesc",
            "Applied (newest)",
            Comparator::DateDesc("appliedDate"),
        )
        .with_sort_option(
            "appliedDateAsc",
            "Applied (oldest)",
            Comparator::DateAsc("appliedDate"),
        )
        .with_sort_option("startDateAsc", "Start date", Comparator::DateAsc("startDate"))
        .with_sort_option("status", "Status", Comparator::TextAsc("status"))
}

pub fn create_list_view() -> ListViewModel<LeaveRequest> {
    ListViewModel::new(list_view_config())
}
