use crate::shared::icons::icon;
use contracts::shared::list_view::{page_window, PageLink};
use leptos::prelude::*;

/// Pagination strip under a list: caption, prev/next and page numbers.
///
/// Pages are 1-based, as in the list view model.
#[component]
pub fn PaginationControls(
    /// Current page (1-based)
    #[prop(into)]
    current_page: Signal<usize>,

    /// Total number of pages (0 when the list is empty)
    #[prop(into)]
    total_pages: Signal<usize>,

    /// "Showing 1-10 of 42 requests"
    #[prop(into)]
    caption: Signal<String>,

    /// Callback when page changes
    on_page_change: Callback<usize>,
) -> impl IntoView {
    let has_prev = move || current_page.get() > 1;
    let has_next = move || current_page.get() < total_pages.get();

    view! {
        <div class="pagination-controls">
            <span class="pagination-info">{move || caption.get()}</span>
            <Show when=move || { total_pages.get() > 1 }>
                <div class="pagination-buttons">
                    <button
                        class="pagination-btn"
                        on:click=move |_| on_page_change.run(current_page.get_untracked().saturating_sub(1))
                        disabled=move || !has_prev()
                        title="Previous page"
                    >
                        {icon("chevron-left")}
                    </button>
                    {move || {
                        let current = current_page.get();
                        page_window(current, total_pages.get())
                            .into_iter()
                            .map(|link| match link {
                                PageLink::Page(page) => view! {
                                    <button
                                        class="pagination-btn"
                                        class:active=move || page == current
                                        on:click=move |_| on_page_change.run(page)
                                    >
                                        {page}
                                    </button>
                                }
                                .into_any(),
                                PageLink::Gap => view! { <span class="pagination-gap">"…"</span> }.into_any(),
                            })
                            .collect_view()
                    }}
                    <button
                        class="pagination-btn"
                        on:click=move |_| on_page_change.run(current_page.get_untracked() + 1)
                        disabled=move || !has_next()
                        title="Next page"
                    >
                        {icon("chevron-right")}
                    </button>
                </div>
            </Show>
        </div>
    }
}
