pub mod global_context;

use crate::shared::icons::icon;
use global_context::{AppGlobalContext, AppPage};
use leptos::prelude::*;

/// Sidebar with one entry per page plus the content area.
#[component]
pub fn Shell<C>(center: C) -> impl IntoView
where
    C: Fn() -> AnyView + 'static + Send + Sync,
{
    let ctx = use_context::<AppGlobalContext>().unwrap_or_default();

    view! {
        <div class="app-layout">
            <nav class="app-sidebar">
                <div class="app-title">"HR Leave Dashboard"</div>
                {AppPage::all()
                    .into_iter()
                    .map(|page| view! {
                        <button
                            class="nav-item"
                            class:active=move || ctx.active.get() == page
                            on:click=move |_| ctx.open(page)
                        >
                            {icon(page.icon_name())}
                            " "
                            {page.display_name()}
                        </button>
                    })
                    .collect_view()}
            </nav>
            <main class="app-main">{move || center()}</main>
        </div>
    }
}
