pub mod date;
pub mod list_view;
