use super::config::ListViewConfig;
use super::criteria::{Criteria, StatusFilter};
use super::page_result::PageResult;
use super::record::ListRecord;
use serde::Serialize;
use std::collections::BTreeSet;

/// Count of records per status over the whole (unfiltered) collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatusCounts {
    pub total: usize,
    /// In vocabulary order
    pub by_status: Vec<(&'static str, usize)>,
}

impl StatusCounts {
    pub fn count(&self, code: &str) -> usize {
        self.by_status
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, n)| *n)
            .unwrap_or(0)
    }
}

/// Client-side list view model: owns the criteria, holds the last fetched
/// collection and derives the visible page from both.
///
/// Every mutator recomputes the page synchronously; the rendering layer
/// reads [`page_result`](Self::page_result) afterwards. No mutator fails:
/// unknown statuses, sort keys and out-of-range pages are normalized.
#[derive(Clone)]
pub struct ListViewModel<R> {
    config: ListViewConfig<R>,
    collection: Vec<R>,
    criteria: Criteria,
    result: PageResult<R>,
}

impl<R: ListRecord + Clone> ListViewModel<R> {
    pub fn new(config: ListViewConfig<R>) -> Self {
        let criteria = Criteria::new(config.default_sort_key);
        Self {
            config,
            collection: Vec::new(),
            criteria,
            result: PageResult::empty(),
        }
    }

    // ------------------------------------------------------------------------
    // Mutators
    // ------------------------------------------------------------------------

    /// Replaces the collection; the current page is clamped to the new
    /// page count.
    pub fn set_collection(&mut self, records: Vec<R>) {
        self.collection = records;
        self.recompute();
    }

    /// `"all"` or a vocabulary code (any case). Anything else means `"all"`.
    pub fn set_status_filter(&mut self, status: &str) {
        let filter = if status.trim().eq_ignore_ascii_case("all") {
            StatusFilter::All
        } else {
            match self.config.resolve_status(status) {
                Some(code) => StatusFilter::Only(code.to_string()),
                None => {
                    log::warn!("unknown status filter {:?}, showing all", status);
                    StatusFilter::All
                }
            }
        };
        self.criteria.status_filter = filter;
        self.reset_page();
    }

    pub fn set_search_term(&mut self, term: &str) {
        self.criteria.search_term = term.trim().to_string();
        self.reset_page();
    }

    /// Unknown keys fall back to the configured default sort key.
    pub fn set_sort_key(&mut self, key: &str) {
        let resolved = match self.config.resolve_sort_key(key) {
            Some(key) => key,
            None => {
                log::warn!(
                    "unknown sort key {:?}, using {:?}",
                    key,
                    self.config.default_sort_key
                );
                self.config.default_sort_key
            }
        };
        self.criteria.sort_key = resolved.to_string();
        self.reset_page();
    }

    /// Exact-value filter on a facet field; `"all"` or an empty value clears
    /// it. Fields outside the configured facets are ignored.
    pub fn set_facet_filter(&mut self, field: &str, value: &str) {
        let Some(field) = self.config.resolve_facet(field) else {
            log::warn!("ignoring filter on non-facet field {:?}", field);
            return;
        };
        let value = value.trim();
        if value.is_empty() || value.eq_ignore_ascii_case("all") {
            self.criteria.facet_filters.remove(field);
        } else {
            self.criteria
                .facet_filters
                .insert(field.to_string(), value.to_string());
        }
        self.reset_page();
    }

    /// Drops status, search and facet filters. The sort key is kept.
    pub fn clear_filters(&mut self) {
        self.criteria.status_filter = StatusFilter::All;
        self.criteria.search_term.clear();
        self.criteria.facet_filters.clear();
        self.reset_page();
    }

    /// Clamped to `[1, total_pages]`, or 1 when there is nothing to show.
    pub fn set_page(&mut self, page: usize) {
        self.criteria.page = page.max(1);
        self.recompute();
    }

    // ------------------------------------------------------------------------
    // Reads
    // ------------------------------------------------------------------------

    pub fn page_result(&self) -> &PageResult<R> {
        &self.result
    }

    pub fn criteria(&self) -> &Criteria {
        &self.criteria
    }

    pub fn config(&self) -> &ListViewConfig<R> {
        &self.config
    }

    pub fn find(&self, id: &str) -> Option<&R> {
        self.collection.iter().find(|r| r.record_id() == id)
    }

    /// Stat cards above the list are computed from the full collection,
    /// regardless of the active criteria.
    pub fn status_counts(&self) -> StatusCounts {
        let statuses: Vec<String> = self
            .collection
            .iter()
            .map(|r| normalize(&r.field_text(self.config.status_field)))
            .collect();

        let by_status = self
            .config
            .status_vocabulary
            .iter()
            .map(|code| (*code, statuses.iter().filter(|s| s.as_str() == *code).count()))
            .collect();

        StatusCounts {
            total: self.collection.len(),
            by_status,
        }
    }

    /// Sorted distinct values of a field, for filter drop-downs.
    pub fn facet_values(&self, field: &str) -> Vec<String> {
        self.collection
            .iter()
            .map(|r| r.field_text(field).trim().to_string())
            .filter(|v| !v.is_empty())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    fn reset_page(&mut self) {
        self.criteria.page = 1;
        self.recompute();
    }

    fn recompute(&mut self) {
        self.result = derive_page(&self.config, &self.collection, &self.criteria);
        self.criteria.page = self.result.current_page;
        log::debug!(
            "list recomputed: {} of {} records, page {}/{}",
            self.result.total_items,
            self.collection.len(),
            self.result.current_page,
            self.result.total_pages
        );
    }
}

// ============================================================================
// Derivation
// ============================================================================

/// Filter, search, sort and paginate, in that order.
///
/// Pure: the same configuration, records and criteria always give the same
/// page.
pub fn derive_page<R: ListRecord + Clone>(
    config: &ListViewConfig<R>,
    records: &[R],
    criteria: &Criteria,
) -> PageResult<R> {
    let needle = criteria.search_term.trim().to_lowercase();

    let mut visible: Vec<&R> = records
        .iter()
        .filter(|r| passes_filters(config, *r, criteria))
        .filter(|r| needle.is_empty() || matches_search(config, *r, &needle))
        .collect();

    if let Some(option) = config.sort_option(&criteria.sort_key) {
        // sort_by is stable
        visible.sort_by(|a, b| option.comparator.compare(*a, *b));
    }

    let page_size = config.page_size.max(1);
    let total_items = visible.len();
    let total_pages = total_items.div_ceil(page_size);
    let current_page = criteria.page.clamp(1, total_pages.max(1));
    let offset = (current_page - 1) * page_size;

    let items: Vec<R> = visible
        .into_iter()
        .skip(offset)
        .take(page_size)
        .cloned()
        .collect();

    let (start_index, end_index) = if items.is_empty() {
        (0, 0)
    } else {
        (offset + 1, offset + items.len())
    };

    PageResult {
        items,
        total_items,
        total_pages,
        current_page,
        start_index,
        end_index,
        has_prev: current_page > 1,
        has_next: current_page < total_pages,
    }
}

fn passes_filters<R: ListRecord>(config: &ListViewConfig<R>, record: &R, criteria: &Criteria) -> bool {
    if let StatusFilter::Only(code) = &criteria.status_filter {
        if normalize(&record.field_text(config.status_field)) != *code {
            return false;
        }
    }

    criteria
        .facet_filters
        .iter()
        .all(|(field, value)| normalize(&record.field_text(field)) == normalize(value))
}

fn matches_search<R: ListRecord>(config: &ListViewConfig<R>, record: &R, needle: &str) -> bool {
    config
        .searchable_fields
        .iter()
        .any(|field| record.field_text(field).to_lowercase().contains(needle))
}

fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::list_view::config::Comparator;

    #[derive(Debug, Clone, PartialEq)]
    struct Req {
        id: usize,
        employee: String,
        department: String,
        leave_type: String,
        status: String,
        applied: String,
        start: String,
    }

    impl ListRecord for Req {
        fn record_id(&self) -> String {
            self.id.to_string()
        }

        fn field_value(&self, field: &str) -> Option<String> {
            let value = match field {
                "employee" => &self.employee,
                "department" => &self.department,
                "type" => &self.leave_type,
                "status" => &self.status,
                "appliedDate" => &self.applied,
                "startDate" => &self.start,
                _ => return None,
            };
            Some(value.clone())
        }
    }

    fn req(id: usize, status: &str, department: &str, start: &str) -> Req {
        Req {
            id,
            employee: format!("Employee {}", id),
            department: department.to_string(),
            leave_type: "Casual Leave".to_string(),
            status: status.to_string(),
            applied: format!("2025-09-{:02}", id + 1),
            start: start.to_string(),
        }
    }

    fn config(page_size: usize) -> ListViewConfig<Req> {
        ListViewConfig::<Req>::new("status", page_size)
            .with_status_vocabulary(&["pending", "approved", "declined"])
            .with_searchable_fields(&["employee", "department", "type"])
            .with_facet_fields(&["department"])
            .with_sort_option("none", "Original order", Comparator::Custom(|_, _| std::cmp::Ordering::Equal))
            .with_sort_option("appliedDateDesc", "Newest", Comparator::DateDesc("appliedDate"))
            .with_sort_option("startDateAsc", "Start date", Comparator::DateAsc("startDate"))
            .with_sort_option("status", "Status", Comparator::TextAsc("status"))
    }

    fn five() -> Vec<Req> {
        vec![
            req(1, "pending", "Sales", "2025-10-01"),
            req(2, "approved", "Engineering", "2025-10-02"),
            req(3, "declined", "Acme Labs", "2025-10-03"),
            req(4, "approved", "Finance", "2025-10-04"),
            req(5, "pending", "HR", "2025-10-05"),
        ]
    }

    fn model(page_size: usize, records: Vec<Req>) -> ListViewModel<Req> {
        let mut vm = ListViewModel::new(config(page_size));
        vm.set_collection(records);
        vm
    }

    fn ids(result: &PageResult<Req>) -> Vec<usize> {
        result.items.iter().map(|r| r.id).collect()
    }

    #[test]
    fn test_status_filter_single_page() {
        let mut vm = model(2, five());
        vm.set_status_filter("approved");

        let page = vm.page_result();
        assert_eq!(page.total_items, 2);
        assert_eq!(page.total_pages, 1);
        assert_eq!(page.items.len(), 2);
        assert!(!page.has_next);
        assert!(!page.has_prev);
        assert_eq!(ids(page), vec![2, 4]);
    }

    #[test]
    fn test_search_matches_department() {
        let mut vm = model(2, five());
        vm.set_search_term("acme");

        let page = vm.page_result();
        assert_eq!(page.total_items, 1);
        assert_eq!(page.total_pages, 1);
        assert_eq!(ids(page), vec![3]);
    }

    #[test]
    fn test_search_is_case_insensitive_over_any_field() {
        let mut vm = model(10, five());
        vm.set_search_term("  EMPLOYEE 4 ");
        assert_eq!(ids(vm.page_result()), vec![4]);
        assert_eq!(vm.criteria().search_term, "EMPLOYEE 4");

        vm.set_search_term("casual");
        assert_eq!(vm.page_result().total_items, 5);

        vm.set_search_term("");
        assert_eq!(vm.page_result().total_items, 5);
    }

    #[test]
    fn test_sort_by_start_date() {
        let records = vec![
            req(1, "pending", "Sales", "2025-01-10"),
            req(2, "pending", "Sales", "2025-03-01"),
            req(3, "pending", "Sales", "2025-02-15"),
        ];
        let mut vm = model(2, records);
        vm.set_sort_key("startDateAsc");

        let starts: Vec<&str> = vm
            .page_result()
            .items
            .iter()
            .map(|r| r.start.as_str())
            .collect();
        assert_eq!(starts, vec!["2025-01-10", "2025-02-15"]);
    }

    #[test]
    fn test_set_page_clamps() {
        let mut vm = model(2, five());
        assert_eq!(vm.page_result().total_pages, 3);

        vm.set_page(99);
        let page = vm.page_result();
        assert_eq!(page.current_page, 3);
        assert_eq!(page.items.len(), 1);
        assert_eq!((page.start_index, page.end_index), (5, 5));
        assert!(page.has_prev);
        assert!(!page.has_next);

        vm.set_page(0);
        assert_eq!(vm.page_result().current_page, 1);
    }

    #[test]
    fn test_empty_collection() {
        let mut vm = model(2, five());
        vm.set_page(2);
        vm.set_collection(vec![]);

        let page = vm.page_result();
        assert!(page.items.is_empty());
        assert_eq!(page.total_items, 0);
        assert_eq!(page.total_pages, 0);
        assert_eq!(page.current_page, 1);
        assert_eq!((page.start_index, page.end_index), (0, 0));
        assert!(!page.has_prev);
        assert!(!page.has_next);
        assert_eq!(page, &PageResult::empty());
    }

    #[test]
    fn test_filter_change_resets_page() {
        let mut vm = model(2, five());
        vm.set_page(3);
        assert_eq!(vm.page_result().current_page, 3);

        vm.set_status_filter("pending");
        assert_eq!(vm.page_result().current_page, 1);

        vm.set_page(2);
        vm.set_search_term("employee");
        assert_eq!(vm.page_result().current_page, 1);

        vm.set_status_filter("all");
        vm.set_page(2);
        vm.set_sort_key("status");
        assert_eq!(vm.page_result().current_page, 1);

        vm.set_page(2);
        vm.set_facet_filter("department", "sales");
        assert_eq!(vm.page_result().current_page, 1);
    }

    #[test]
    fn test_set_page_keeps_other_criteria() {
        let mut vm = model(1, five());
        vm.set_status_filter("Pending");
        vm.set_search_term("employee");
        vm.set_sort_key("startDateAsc");
        vm.set_page(2);

        let criteria = vm.criteria();
        assert_eq!(criteria.status_filter, StatusFilter::Only("pending".into()));
        assert_eq!(criteria.search_term, "employee");
        assert_eq!(criteria.sort_key, "startDateAsc");
        assert_eq!(criteria.page, 2);
        assert_eq!(ids(vm.page_result()), vec![5]);
    }

    #[test]
    fn test_shrinking_collection_clamps_page() {
        let mut vm = model(2, five());
        vm.set_page(3);

        let mut fewer = five();
        fewer.truncate(3);
        vm.set_collection(fewer);

        assert_eq!(vm.page_result().current_page, 2);
        assert_eq!(vm.criteria().page, 2);
        assert_eq!(ids(vm.page_result()), vec![3]);
    }

    #[test]
    fn test_invalid_inputs_are_normalized() {
        let mut vm = model(2, five());

        vm.set_status_filter("archived");
        assert_eq!(vm.criteria().status_filter, StatusFilter::All);
        assert_eq!(vm.page_result().total_items, 5);

        vm.set_sort_key("salary");
        assert_eq!(vm.criteria().sort_key, "none");

        vm.set_facet_filter("employee", "Employee 1");
        assert!(vm.criteria().facet_filters.is_empty());
        assert_eq!(vm.page_result().total_items, 5);
    }

    #[test]
    fn test_missing_fields_do_not_fail() {
        #[derive(Clone)]
        struct Sparse(Option<&'static str>);

        impl ListRecord for Sparse {
            fn record_id(&self) -> String {
                self.0.unwrap_or("?").to_string()
            }

            fn field_value(&self, field: &str) -> Option<String> {
                match field {
                    "startDate" => self.0.map(str::to_string),
                    _ => None,
                }
            }
        }

        let config = ListViewConfig::<Sparse>::new("status", 5)
            .with_status_vocabulary(&["pending"])
            .with_searchable_fields(&["employee"])
            .with_sort_option("startDateAsc", "Start", Comparator::DateAsc("startDate"));
        let mut vm = ListViewModel::new(config);
        vm.set_collection(vec![Sparse(Some("2025-02-01")), Sparse(None)]);

        let order: Vec<String> = vm.page_result().items.iter().map(|r| r.record_id()).collect();
        assert_eq!(order, vec!["?".to_string(), "2025-02-01".to_string()]);

        vm.set_search_term("x");
        assert_eq!(vm.page_result().total_items, 0);

        vm.set_search_term("");
        vm.set_status_filter("pending");
        assert_eq!(vm.page_result().total_items, 0);
    }

    #[test]
    fn test_pages_cover_every_item_once() {
        let mut records = Vec::new();
        for id in 0..23 {
            let status = if id % 3 == 0 { "approved" } else { "pending" };
            records.push(req(id, status, "Sales", "2025-01-01"));
        }
        let page_size = 5;
        let mut vm = model(page_size, records);
        vm.set_sort_key("status");

        let total_pages = vm.page_result().total_pages;
        let total_items = vm.page_result().total_items;
        assert_eq!(total_pages, 5);

        let mut seen = Vec::new();
        for page in 1..=total_pages {
            vm.set_page(page);
            let result = vm.page_result();
            assert!(result.items.len() <= page_size);
            if page < total_pages {
                assert_eq!(result.items.len(), page_size);
            }
            seen.extend(ids(result));
        }

        assert_eq!(seen.len(), total_items);
        let unique: BTreeSet<usize> = seen.iter().copied().collect();
        assert_eq!(unique.len(), total_items);
    }

    #[test]
    fn test_sort_is_stable_across_pages() {
        // Equal status keys must keep their input order
        let records: Vec<Req> = (0..7)
            .map(|id| {
                let status = if id % 2 == 0 { "pending" } else { "approved" };
                req(id, status, "Sales", "2025-01-01")
            })
            .collect();
        let mut vm = model(3, records);
        vm.set_sort_key("status");

        let mut order = Vec::new();
        for page in 1..=vm.page_result().total_pages {
            vm.set_page(page);
            order.extend(ids(vm.page_result()));
        }
        assert_eq!(order, vec![1, 3, 5, 0, 2, 4, 6]);
    }

    #[test]
    fn test_result_depends_only_on_final_state() {
        let mut first = ListViewModel::new(config(2));
        first.set_collection(five());
        first.set_sort_key("appliedDateDesc");
        first.set_search_term("employee");
        first.set_status_filter("pending");

        let mut second = ListViewModel::new(config(2));
        second.set_status_filter("pending");
        second.set_search_term("employee");
        second.set_sort_key("appliedDateDesc");
        second.set_collection(five());

        assert_eq!(first.page_result(), second.page_result());
        assert_eq!(first.criteria(), second.criteria());
        assert_eq!(ids(first.page_result()), vec![5, 1]);
    }

    #[test]
    fn test_facet_filter_and_clear() {
        let mut vm = model(10, five());
        vm.set_facet_filter("department", "FINANCE");
        assert_eq!(ids(vm.page_result()), vec![4]);
        assert!(vm.criteria().has_active_filters());

        vm.set_facet_filter("department", "all");
        assert_eq!(vm.page_result().total_items, 5);

        vm.set_sort_key("status");
        vm.set_status_filter("declined");
        vm.set_search_term("acme");
        vm.set_facet_filter("department", "Acme Labs");
        assert_eq!(vm.page_result().total_items, 1);

        vm.clear_filters();
        assert!(!vm.criteria().has_active_filters());
        assert_eq!(vm.criteria().sort_key, "status");
        assert_eq!(vm.page_result().total_items, 5);
    }

    #[test]
    fn test_status_counts_and_facets_use_full_collection() {
        let mut records = five();
        records.push(req(6, "Approved", "Sales", "2025-10-06"));
        let mut vm = model(2, records);
        vm.set_status_filter("declined");

        let counts = vm.status_counts();
        assert_eq!(counts.total, 6);
        assert_eq!(counts.count("pending"), 2);
        assert_eq!(counts.count("approved"), 3);
        assert_eq!(counts.count("declined"), 1);
        assert_eq!(counts.count("cancelled"), 0);
        assert_eq!(
            counts.by_status.iter().map(|(c, _)| *c).collect::<Vec<_>>(),
            vec!["pending", "approved", "declined"]
        );

        assert_eq!(
            vm.facet_values("department"),
            vec!["Acme Labs", "Engineering", "Finance", "HR", "Sales"]
        );
        assert_eq!(vm.find("4").map(|r| r.department.as_str()), Some("Finance"));
        assert!(vm.find("42").is_none());
    }

    #[test]
    fn test_range_caption() {
        let mut vm = model(2, five());
        assert_eq!(vm.page_result().range_caption("requests"), "Showing 1-2 of 5 requests");
        vm.set_page(3);
        assert_eq!(vm.page_result().range_caption("requests"), "Showing 5-5 of 5 requests");
        vm.set_status_filter("approved");
        assert_eq!(vm.page_result().range_caption("requests"), "Showing all 2 requests");
        vm.set_collection(vec![]);
        assert_eq!(vm.page_result().range_caption("requests"), "");
    }
}
