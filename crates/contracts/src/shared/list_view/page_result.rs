use serde::Serialize;

/// Snapshot of the visible page plus pagination metadata.
///
/// Always well-formed: an empty list yields no items, `total_pages == 0` and
/// `current_page == 1`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageResult<R> {
    pub items: Vec<R>,
    pub total_items: usize,
    pub total_pages: usize,
    /// 1-based
    pub current_page: usize,
    /// 1-based position of the first visible item, 0 when nothing is visible
    pub start_index: usize,
    /// 1-based position of the last visible item, 0 when nothing is visible
    pub end_index: usize,
    pub has_prev: bool,
    pub has_next: bool,
}

impl<R> PageResult<R> {
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            total_items: 0,
            total_pages: 0,
            current_page: 1,
            start_index: 0,
            end_index: 0,
            has_prev: false,
            has_next: false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// "Showing 6-10 of 23" style caption for the pagination footer.
    pub fn range_caption(&self, noun: &str) -> String {
        if self.total_items == 0 {
            String::new()
        } else if self.total_pages <= 1 {
            format!("Showing all {} {}", self.total_items, noun)
        } else {
            format!(
                "Showing {}-{} of {} {}",
                self.start_index, self.end_index, self.total_items, noun
            )
        }
    }
}

impl<R> Default for PageResult<R> {
    fn default() -> Self {
        Self::empty()
    }
}
