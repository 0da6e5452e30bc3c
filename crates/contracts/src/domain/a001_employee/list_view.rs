use super::aggregate::Employee;
use crate::shared::list_view::{Comparator, ListViewConfig, ListViewModel};

pub const PAGE_SIZE: usize = 8;

pub fn list_view_config() -> ListViewConfig<Employee> {
    ListViewConfig::new("status", PAGE_SIZE)
        .with_status_vocabulary(&["active", "on-leave", "inactive"])
        .with_searchable_fields(&["name", "department", "position", "email"])
        .with_facet_fields(&["department"])
        .with_sort_option("nameAsc", "Name (A-Z)", Comparator::TextAscIgnoreCase("name"))
        .with_sort_option("nameDesc", "Name (Z-A)", Comparator::Custom(compare_name_desc))
        .with_sort_option(
            "departmentAsc",
            "Department",
            Comparator::TextAscIgnoreCase("department"),
        )
        .with_sort_option("status", "Status", Comparator::TextAsc("status"))
}

pub fn create_list_view() -> ListViewModel<Employee> {
    ListViewModel::new(list_view_config())
}

fn compare_name_desc(a: &Employee, b: &Employee) -> std::cmp::Ordering {
    b.name.to_lowercase().cmp(&a.name.to_lowercase())
}
