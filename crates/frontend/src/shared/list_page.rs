//! Glue between a list view model and the backend: loading flag, error
//! message and the fetch → `set_collection` step shared by all list pages.

use crate::shared::api_utils::ApiError;
use contracts::shared::list_view::{ListRecord, ListViewModel, PageResult};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;

pub struct ListPageState<R: Send + Sync + 'static> {
    pub view: RwSignal<ListViewModel<R>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl<R: Send + Sync + 'static> Clone for ListPageState<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R: Send + Sync + 'static> Copy for ListPageState<R> {}

impl<R> ListPageState<R>
where
    R: ListRecord + Clone + Send + Sync + 'static,
{
    pub fn new(view: ListViewModel<R>) -> Self {
        Self {
            view: RwSignal::new(view),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    /// Runs `fetch` and replaces the collection with its result.
    ///
    /// On error the list is emptied and the message kept for display. A
    /// slower, older fetch may still overwrite a newer one.
    pub fn reload<F, Fut>(self, what: &'static str, fetch: F)
    where
        F: FnOnce() -> Fut + 'static,
        Fut: Future<Output = Result<Vec<R>, ApiError>> + 'static,
    {
        spawn_local(async move {
            self.loading.set(true);
            match fetch().await {
                Ok(records) => {
                    log::debug!("{}: fetched {} records", what, records.len());
                    self.view.update(|vm| vm.set_collection(records));
                    self.error.set(None);
                }
                Err(e) => {
                    log::error!("{}: {}", what, e);
                    self.view.update(|vm| vm.set_collection(Vec::new()));
                    self.error.set(Some(e.to_string()));
                }
            }
            self.loading.set(false);
        });
    }

    /// Reactive read of the current page result
    pub fn with_page<T>(self, f: impl FnOnce(&PageResult<R>) -> T) -> T {
        self.view.with(|vm| f(vm.page_result()))
    }

    /// Reactive read of the current page items
    pub fn items(self) -> Vec<R> {
        self.with_page(|page| page.items.clone())
    }

    pub fn status_code(self) -> Signal<String> {
        Signal::derive(move || self.view.with(|vm| vm.criteria().status_filter.code().to_string()))
    }

    pub fn search_term(self) -> Signal<String> {
        Signal::derive(move || self.view.with(|vm| vm.criteria().search_term.clone()))
    }

    pub fn sort_key(self) -> Signal<String> {
        Signal::derive(move || self.view.with(|vm| vm.criteria().sort_key.clone()))
    }

    pub fn current_page(self) -> Signal<usize> {
        Signal::derive(move || self.with_page(|page| page.current_page))
    }

    pub fn total_pages(self) -> Signal<usize> {
        Signal::derive(move || self.with_page(|page| page.total_pages))
    }

    pub fn caption(self, noun: &'static str) -> Signal<String> {
        Signal::derive(move || self.with_page(|page| page.range_caption(noun)))
    }

    /// Counts aligned with [`status_options`]
    pub fn status_counts(self) -> Signal<Vec<usize>> {
        Signal::derive(move || {
            self.view.with(|vm| {
                let counts = vm.status_counts();
                std::iter::once(counts.total)
                    .chain(counts.by_status.iter().map(|(_, n)| *n))
                    .collect()
            })
        })
    }

    pub fn sort_options(self) -> Vec<(String, String)> {
        self.view.with_untracked(|vm| {
            vm.config()
                .sort_options
                .iter()
                .map(|opt| (opt.key.to_string(), opt.label.to_string()))
                .collect()
        })
    }

    pub fn set_status_filter(self) -> Callback<String> {
        Callback::new(move |code: String| self.view.update(|vm| vm.set_status_filter(&code)))
    }

    pub fn set_search_term(self) -> Callback<String> {
        Callback::new(move |term: String| self.view.update(|vm| vm.set_search_term(&term)))
    }

    pub fn set_sort_key(self) -> Callback<String> {
        Callback::new(move |key: String| self.view.update(|vm| vm.set_sort_key(&key)))
    }

    pub fn set_page(self) -> Callback<usize> {
        Callback::new(move |page: usize| self.view.update(|vm| vm.set_page(page)))
    }
}

/// "All" followed by one filter button per status code
pub fn status_options(labels: &[(&str, &str)]) -> Vec<(String, String)> {
    std::iter::once(("all".to_string(), "All".to_string()))
        .chain(
            labels
                .iter()
                .map(|(code, label)| (code.to_string(), label.to_string())),
        )
        .collect()
}
