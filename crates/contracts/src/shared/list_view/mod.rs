//! Client-side list view model shared by the HR list pages: status filter,
//! free-text search, sorting and pagination over a fetched collection.

pub mod config;
pub mod criteria;
pub mod model;
pub mod page_result;
pub mod pager;
pub mod record;

pub use config::{Comparator, ListViewConfig, SortOption};
pub use criteria::{Criteria, StatusFilter};
pub use model::{derive_page, ListViewModel, StatusCounts};
pub use page_result::PageResult;
pub use pager::{page_window, PageLink};
pub use record::ListRecord;
