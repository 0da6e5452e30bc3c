/// Shared list page widgets: search box, status filter bar, sort selector
/// and match highlighting
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// Search debounce, ms
const SEARCH_DEBOUNCE_MS: i32 = 300;

/// Highlight every case-insensitive occurrence of `filter` in `text`
pub fn highlight_matches(text: &str, filter: &str) -> AnyView {
    let filter_lower = filter.trim().to_lowercase();
    let text_lower = text.to_lowercase();

    // Lower-casing must not shift byte offsets, otherwise slices would be wrong
    if filter_lower.is_empty()
        || text_lower.len() != text.len()
        || !text_lower.contains(&filter_lower)
    {
        return view! { <span>{text.to_string()}</span> }.into_any();
    }

    let mut parts: Vec<AnyView> = Vec::new();
    let mut last_pos = 0;

    while let Some(pos) = text_lower[last_pos..].find(&filter_lower) {
        let actual_pos = last_pos + pos;

        if actual_pos > last_pos {
            parts.push(view! { <span>{text[last_pos..actual_pos].to_string()}</span> }.into_any());
        }

        let match_end = actual_pos + filter_lower.len();
        parts.push(
            view! { <mark class="search-match">{text[actual_pos..match_end].to_string()}</mark> }
                .into_any(),
        );

        last_pos = match_end;
    }

    if last_pos < text.len() {
        parts.push(view! { <span>{text[last_pos..].to_string()}</span> }.into_any());
    }

    view! { <>{parts}</> }.into_any()
}

/// Search box with debounce and a clear button
#[component]
pub fn SearchInput(
    /// Current search term (for the "active" highlight)
    #[prop(into)]
    value: Signal<String>,
    /// Called with the new term after the debounce delay
    #[prop(into)]
    on_change: Callback<String>,
    #[prop(optional, into)]
    placeholder: String,
) -> impl IntoView {
    let placeholder = if placeholder.is_empty() {
        "Search...".to_string()
    } else {
        placeholder
    };

    // Локальное состояние для input (до debounce)
    let (input_value, set_input_value) = signal(String::new());
    let debounce_timeout = StoredValue::new(None::<i32>);

    // "Clear filters" снаружи сбрасывает и поле ввода
    Effect::new(move |_| {
        if value.get().is_empty() {
            set_input_value.set(String::new());
        }
    });

    let handle_input_change = move |new_value: String| {
        set_input_value.set(new_value.clone());

        let Some(window) = web_sys::window() else {
            on_change.run(new_value);
            return;
        };

        if let Some(timeout_id) = debounce_timeout.get_value() {
            window.clear_timeout_with_handle(timeout_id);
        }

        let closure = wasm_bindgen::closure::Closure::once_into_js(move || {
            on_change.run(new_value);
        });

        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            closure.unchecked_ref::<js_sys::Function>(),
            SEARCH_DEBOUNCE_MS,
        ) {
            Ok(timeout_id) => debounce_timeout.set_value(Some(timeout_id)),
            Err(e) => log::warn!("setTimeout failed: {:?}", e),
        }
    };

    let is_filter_active = move || !value.get().trim().is_empty();

    let clear_filter = move |_| {
        set_input_value.set(String::new());
        on_change.run(String::new());
    };

    view! {
        <div class="search-input">
            <input
                type="text"
                placeholder=placeholder
                class=move || {
                    if is_filter_active() {
                        "search-input__field search-input__field--active"
                    } else {
                        "search-input__field"
                    }
                }
                prop:value=move || input_value.get()
                on:input=move |ev| handle_input_change(event_target_value(&ev))
            />
            <Show when=move || !input_value.get().is_empty()>
                <button class="search-input__clear" on:click=clear_filter title="Clear">
                    {crate::shared::icons::icon("x")}
                </button>
            </Show>
        </div>
    }
}

/// One button per status plus "All"; each shows its count
#[component]
pub fn StatusFilterBar(
    /// (code, label) pairs, "all" first
    options: Vec<(String, String)>,
    /// Code of the active filter
    #[prop(into)]
    active: Signal<String>,
    /// Count per code, same order as `options`
    #[prop(into)]
    counts: Signal<Vec<usize>>,
    on_select: Callback<String>,
) -> impl IntoView {
    view! {
        <div class="filter-bar">
            {options
                .into_iter()
                .enumerate()
                .map(|(idx, (code, label))| {
                    let code_for_class = code.clone();
                    let code_for_click = code.clone();
                    view! {
                        <button
                            class="filter-btn"
                            class:active=move || active.get() == code_for_class
                            on:click=move |_| on_select.run(code_for_click.clone())
                        >
                            {label}
                            <span class="filter-btn__count">
                                {move || counts.get().get(idx).copied().unwrap_or(0)}
                            </span>
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}

/// Sort selector fed from the list configuration
#[component]
pub fn SortSelect(
    /// (key, label) pairs
    options: Vec<(String, String)>,
    #[prop(into)]
    value: Signal<String>,
    on_change: Callback<String>,
) -> impl IntoView {
    view! {
        <select
            class="sort-select"
            on:change=move |ev| on_change.run(event_target_value(&ev))
            prop:value=move || value.get()
        >
            {options
                .into_iter()
                .map(|(key, label)| {
                    let key_for_selected = key.clone();
                    view! {
                        <option value=key selected=move || value.get() == key_for_selected>
                            {label}
                        </option>
                    }
                })
                .collect_view()}
        </select>
    }
}
