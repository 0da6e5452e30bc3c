use super::record::ListRecord;
use crate::shared::date::parse_calendar_date;
use std::cmp::Ordering;

// ============================================================================
// Comparators
// ============================================================================

/// How two records are ordered for one sort key.
///
/// Field-based variants read values through [`ListRecord::field_value`].
/// Missing or unparseable values order lowest: first when ascending, last
/// when descending.
pub enum Comparator<R> {
    /// Calendar date, oldest first
    DateAsc(&'static str),
    /// Calendar date, newest first
    DateDesc(&'static str),
    /// Case-sensitive lexicographic
    TextAsc(&'static str),
    TextDesc(&'static str),
    /// Lexicographic on lower-cased values (names, departments)
    TextAscIgnoreCase(&'static str),
    Custom(fn(&R, &R) -> Ordering),
}

impl<R> Clone for Comparator<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for Comparator<R> {}

impl<R: ListRecord> Comparator<R> {
    pub fn compare(&self, a: &R, b: &R) -> Ordering {
        match *self {
            Comparator::DateAsc(field) => compare_dates(a, b, field),
            Comparator::DateDesc(field) => compare_dates(a, b, field).reverse(),
            Comparator::TextAsc(field) => a.field_text(field).cmp(&b.field_text(field)),
            Comparator::TextDesc(field) => b.field_text(field).cmp(&a.field_text(field)),
            Comparator::TextAscIgnoreCase(field) => a
                .field_text(field)
                .to_lowercase()
                .cmp(&b.field_text(field).to_lowercase()),
            Comparator::Custom(cmp) => cmp(a, b),
        }
    }
}

fn compare_dates<R: ListRecord>(a: &R, b: &R, field: &str) -> Ordering {
    let left = a.field_value(field).as_deref().and_then(parse_calendar_date);
    let right = b.field_value(field).as_deref().and_then(parse_calendar_date);
    // None < Some(_)
    left.cmp(&right)
}

/// One entry of a page's sort selector.
pub struct SortOption<R> {
    pub key: &'static str,
    pub label: &'static str,
    pub comparator: Comparator<R>,
}

impl<R> Clone for SortOption<R> {
    fn clone(&self) -> Self {
        Self {
            key: self.key,
            label: self.label,
            comparator: self.comparator,
        }
    }
}

// ============================================================================
// Configuration
// ============================================================================

/// Per-page configuration of a list view model.
pub struct ListViewConfig<R> {
    /// Field holding the record status
    pub status_field: &'static str,
    /// Lower-case status codes accepted by the status filter
    pub status_vocabulary: Vec<&'static str>,
    /// Fields matched by the free-text search, in display order
    pub searchable_fields: Vec<&'static str>,
    /// Fields that accept an exact-value filter (department drop-down etc.)
    pub facet_fields: Vec<&'static str>,
    pub sort_options: Vec<SortOption<R>>,
    pub default_sort_key: &'static str,
    pub page_size: usize,
}

impl<R> Clone for ListViewConfig<R> {
    fn clone(&self) -> Self {
        Self {
            status_field: self.status_field,
            status_vocabulary: self.status_vocabulary.clone(),
            searchable_fields: self.searchable_fields.clone(),
            facet_fields: self.facet_fields.clone(),
            sort_options: self.sort_options.clone(),
            default_sort_key: self.default_sort_key,
            page_size: self.page_size,
        }
    }
}

impl<R> ListViewConfig<R> {
    /// Page sizes below 1 are raised to 1.
    pub fn new(status_field: &'static str, page_size: usize) -> Self {
        Self {
            status_field,
            status_vocabulary: Vec::new(),
            searchable_fields: Vec::new(),
            facet_fields: Vec::new(),
            sort_options: Vec::new(),
            default_sort_key: "",
            page_size: page_size.max(1),
        }
    }

    pub fn with_status_vocabulary(mut self, codes: &[&'static str]) -> Self {
        self.status_vocabulary = codes.to_vec();
        self
    }

    pub fn with_searchable_fields(mut self, fields: &[&'static str]) -> Self {
        self.searchable_fields = fields.to_vec();
        self
    }

    pub fn with_facet_fields(mut self, fields: &[&'static str]) -> Self {
        self.facet_fields = fields.to_vec();
        self
    }

    /// Adds a sort option. The first option added becomes the default sort
    /// key unless [`with_default_sort_key`](Self::with_default_sort_key) says
    /// otherwise.
    pub fn with_sort_option(
        mut self,
        key: &'static str,
        label: &'static str,
        comparator: Comparator<R>,
    ) -> Self {
        if self.sort_options.is_empty() {
            self.default_sort_key = key;
        }
        self.sort_options.retain(|opt| opt.key != key);
        self.sort_options.push(SortOption {
            key,
            label,
            comparator,
        });
        self
    }

    /// Unknown keys are ignored.
    pub fn with_default_sort_key(mut self, key: &'static str) -> Self {
        if let Some(key) = self.resolve_sort_key(key) {
            self.default_sort_key = key;
        }
        self
    }

    pub fn sort_option(&self, key: &str) -> Option<&SortOption<R>> {
        self.sort_options.iter().find(|opt| opt.key == key)
    }

    /// Maps user input to a vocabulary code, case-insensitively.
    pub fn resolve_status(&self, status: &str) -> Option<&'static str> {
        let wanted = status.trim().to_lowercase();
        self.status_vocabulary
            .iter()
            .copied()
            .find(|code| *code == wanted)
    }

    pub fn resolve_sort_key(&self, key: &str) -> Option<&'static str> {
        self.sort_option(key).map(|opt| opt.key)
    }

    pub fn resolve_facet(&self, field: &str) -> Option<&'static str> {
        self.facet_fields.iter().copied().find(|f| *f == field)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Row {
        name: &'static str,
        date: Option<&'static str>,
    }

    impl ListRecord for Row {
        fn record_id(&self) -> String {
            self.name.to_string()
        }

        fn field_value(&self, field: &str) -> Option<String> {
            match field {
                "name" => Some(self.name.to_string()),
                "date" => self.date.map(str::to_string),
                _ => None,
            }
        }
    }

    fn row(name: &'static str, date: Option<&'static str>) -> Row {
        Row { name, date }
    }

    #[test]
    fn test_missing_dates_order_lowest() {
        let dated = row("a", Some("2025-01-10"));
        let undated = row("b", None);
        let garbage = row("c", Some("--"));

        let asc = Comparator::<Row>::DateAsc("date");
        assert_eq!(asc.compare(&undated, &dated), Ordering::Less);
        assert_eq!(asc.compare(&garbage, &undated), Ordering::Equal);

        let desc = Comparator::<Row>::DateDesc("date");
        assert_eq!(desc.compare(&undated, &dated), Ordering::Greater);
    }

    #[test]
    fn test_text_comparators() {
        let upper = row("Zed", None);
        let lower = row("alice", None);

        // Case-sensitive: 'Z' < 'a'
        assert_eq!(
            Comparator::<Row>::TextAsc("name").compare(&upper, &lower),
            Ordering::Less
        );
        assert_eq!(
            Comparator::<Row>::TextAscIgnoreCase("name").compare(&upper, &lower),
            Ordering::Greater
        );
        assert_eq!(
            Comparator::<Row>::TextDesc("name").compare(&upper, &lower),
            Ordering::Greater
        );
    }

    #[test]
    fn test_config_defaults_and_lookup() {
        let config = ListViewConfig::<Row>::new("status", 0)
            .with_status_vocabulary(&["pending", "approved"])
            .with_facet_fields(&["department"])
            .with_sort_option("nameAsc", "Name", Comparator::TextAsc("name"))
            .with_sort_option("dateAsc", "Date", Comparator::DateAsc("date"));

        assert_eq!(config.page_size, 1);
        assert_eq!(config.default_sort_key, "nameAsc");
        assert_eq!(config.resolve_status(" Approved "), Some("approved"));
        assert_eq!(config.resolve_status("declined"), None);
        assert_eq!(config.resolve_sort_key("dateAsc"), Some("dateAsc"));
        assert_eq!(config.resolve_sort_key("bogus"), None);
        assert_eq!(config.resolve_facet("department"), Some("department"));
        assert_eq!(config.resolve_facet("name"), None);

        let config = config
            .with_default_sort_key("dateAsc")
            .with_default_sort_key("bogus");
        assert_eq!(config.default_sort_key, "dateAsc");
    }
}
