//! Employees
//!
//! Сотрудники, как их отдаёт `/api/employees`, и конфигурация списка
//! сотрудников (карточки с фильтром по статусу и отделу).

pub mod aggregate;
pub mod list_view;

pub use aggregate::{Employee, EmployeeListResponse, Pagination};
pub use list_view::{create_list_view, list_view_config, PAGE_SIZE};
