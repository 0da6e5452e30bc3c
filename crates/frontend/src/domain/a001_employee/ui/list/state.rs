use crate::shared::list_page::ListPageState;
use contracts::domain::a001_employee::{create_list_view, Employee};

pub fn create_state() -> ListPageState<Employee> {
    ListPageState::new(create_list_view())
}
