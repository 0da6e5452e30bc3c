use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Status filter of a list: everything, or one vocabulary code.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum StatusFilter {
    #[default]
    All,
    Only(String),
}

impl StatusFilter {
    pub fn code(&self) -> &str {
        match self {
            StatusFilter::All => "all",
            StatusFilter::Only(code) => code,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, StatusFilter::All)
    }
}

/// The user-selected view state of one list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Criteria {
    pub status_filter: StatusFilter,
    /// Already trimmed; empty disables search
    pub search_term: String,
    pub sort_key: String,
    /// Exact-value filters keyed by facet field
    pub facet_filters: BTreeMap<String, String>,
    /// 1-based
    pub page: usize,
}

impl Criteria {
    pub fn new(sort_key: &str) -> Self {
        Self {
            status_filter: StatusFilter::All,
            search_term: String::new(),
            sort_key: sort_key.to_string(),
            facet_filters: BTreeMap::new(),
            page: 1,
        }
    }

    pub fn has_active_filters(&self) -> bool {
        !self.status_filter.is_all() || !self.search_term.is_empty() || !self.facet_filters.is_empty()
    }
}
