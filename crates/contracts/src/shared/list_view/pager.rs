use serde::Serialize;

/// One slot of the page-number strip under a list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PageLink {
    Page(usize),
    Gap,
}

/// Builds the page-number strip: first page, the neighbours of the current
/// page, last page, with gaps where pages are skipped.
///
/// `1 … 4 5 6 … 10` for page 5 of 10.
pub fn page_window(current_page: usize, total_pages: usize) -> Vec<PageLink> {
    if total_pages == 0 {
        return Vec::new();
    }

    let current = current_page.clamp(1, total_pages);
    let mut links = vec![PageLink::Page(1)];

    let start = current.saturating_sub(1).max(2);
    let end = (current + 1).min(total_pages - 1);

    if start > 2 {
        links.push(PageLink::Gap);
    }
    for page in start..=end {
        links.push(PageLink::Page(page));
    }
    if end < total_pages - 1 {
        links.push(PageLink::Gap);
    }
    if total_pages > 1 {
        links.push(PageLink::Page(total_pages));
    }

    links
}
