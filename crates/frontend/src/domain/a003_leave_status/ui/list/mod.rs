pub mod state;

use self::state::create_state;
use crate::shared::api_utils::{api_url, get_json, ApiError};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::config::config;
use crate::shared::date_utils::{format_date, format_date_range};
use crate::shared::icons::icon;
use crate::shared::list_page::status_options;
use crate::shared::list_utils::{highlight_matches, SearchInput, SortSelect, StatusFilterBar};
use crate::shared::polling::spawn_refresh_loop;
use contracts::domain::a003_leave_status::{LeaveStatusEntry, LeaveStatusListResponse};
use contracts::enums::LeaveStatus;
use leptos::prelude::*;

pub async fn fetch_leave_status() -> Result<Vec<LeaveStatusEntry>, ApiError> {
    let response: LeaveStatusListResponse = get_json(&api_url("/api/leave-status")).await?;
    if !response.success {
        return Err(ApiError::Backend(
            response
                .message
                .unwrap_or_else(|| "Failed to load leave status".to_string()),
        ));
    }
    Ok(response.requests)
}

fn status_badge(raw: &str) -> impl IntoView {
    let (class, label) = match LeaveStatus::from_code(raw) {
        Some(status) => (status.badge_class(), status.display_name().to_string()),
        None => ("badge-muted", raw.to_string()),
    };
    view! { <span class=format!("badge {}", class)>{label}</span> }
}

/// Full record of the selected request, looked up by id in the current
/// collection so a refetch shows fresh data.
#[component]
#[allow(non_snake_case)]
fn LeaveStatusDetails(entry: LeaveStatusEntry, on_close: Callback<()>) -> impl IntoView {
    let decision_date = if entry.is_decided() {
        format_date(&entry.decision_date)
    } else {
        "Awaiting decision".to_string()
    };

    view! {
        <div class="details-panel">
            <div class="details-header">
                <h3>{entry.request_id.clone()} " · " {entry.leave_type.clone()}</h3>
                <button class="close-btn" title="Close" on:click=move |_| on_close.run(())>
                    {icon("x")}
                </button>
            </div>
            <dl class="details-grid">
                <dt>"Employee"</dt>
                <dd>{format!("{} ({})", entry.emp_name, entry.emp_id)}</dd>
                <dt>"Department"</dt>
                <dd>{format!("{}, {}", entry.department, entry.designation)}</dd>
                <dt>"Period"</dt>
                <dd>{format_date_range(&entry.start_date, &entry.end_date)} {format!(" ({} days)", entry.total_days)}</dd>
                <dt>"Applied"</dt>
                <dd>{format_date(&entry.applied_date)}</dd>
                <dt>"Status"</dt>
                <dd>{status_badge(&entry.status)}</dd>
                <dt>"Balance"</dt>
                <dd>{format!("{} → {}", entry.balance_before, entry.balance_after)}</dd>
                <dt>"Approver"</dt>
                <dd>{format!("{}, {}", entry.approver_name, entry.approver_designation)}</dd>
                <dt>"Decision date"</dt>
                <dd>{decision_date}</dd>
                <dt>"Remarks"</dt>
                <dd>{entry.remarks.clone()}</dd>
            </dl>
            {(!entry.documents.is_empty()).then(|| view! {
                <h4>"Documents"</h4>
                <ul class="details-documents">
                    {entry.documents.iter().map(|doc| view! { <li>{doc.clone()}</li> }).collect_view()}
                </ul>
            })}
            <h4>"Activity"</h4>
            <ul class="details-log">
                {entry
                    .logs
                    .iter()
                    .map(|item| view! {
                        <li>
                            <span class="log-time">{item.time.clone()}</span>
                            " "
                            <span class="log-entry">{item.entry.clone()}</span>
                        </li>
                    })
                    .collect_view()}
            </ul>
        </div>
    }
}

#[component]
#[allow(non_snake_case)]
pub fn LeaveStatusList() -> impl IntoView {
    let state = create_state();
    let load = move || state.reload("leave status", fetch_leave_status);
    let (selected_id, set_selected_id) = signal::<Option<String>>(None);

    Effect::new(move |_| load());
    spawn_refresh_loop(config().refresh_interval_ms, load);

    let statuses: Vec<(&str, &str)> = LeaveStatus::all()
        .iter()
        .map(|s| (s.code(), s.display_name()))
        .collect();

    let selected = Signal::derive(move || {
        selected_id
            .get()
            .and_then(|id| state.view.with(|vm| vm.find(&id).cloned()))
    });

    view! {
        <div class="leave-status-list">
            <div class="list-header">
                <h2>{icon("calendar")} " My Leave Status"</h2>
                <button class="refresh-btn" title="Refresh" on:click=move |_| load()>
                    {icon("refresh")}
                </button>
            </div>

            <StatusFilterBar
                options=status_options(&statuses)
                active=state.status_code()
                counts=state.status_counts()
                on_select=state.set_status_filter()
            />

            <div class="list-toolbar">
                <SearchInput
                    value=state.search_term()
                    on_change=state.set_search_term()
                    placeholder="Search by request id or leave type"
                />
                <SortSelect
                    options=state.sort_options()
                    value=state.sort_key()
                    on_change=state.set_sort_key()
                />
            </div>

            {move || state.error.get().map(|e| view! { <div class="error-banner">{e}</div> })}

            <Show
                when=move || state.with_page(|page| !page.is_empty())
                fallback=move || view! {
                    <div class="empty-state">
                        {move || if state.loading.get() {
                            "Loading your requests..."
                        } else {
                            "No leave requests to show."
                        }}
                    </div>
                }
            >
                <div class="status-cards">
                    <For
                        each=move || state.items()
                        key=|entry| entry.request_id.clone()
                        children=move |entry: LeaveStatusEntry| {
                            let id = entry.request_id.clone();
                            let request_id = entry.request_id.clone();
                            let leave_type = entry.leave_type.clone();
                            view! {
                                <div
                                    class="status-card"
                                    on:click=move |_| set_selected_id.set(Some(id.clone()))
                                >
                                    <div class="status-card__head">
                                        <span class="request-id">
                                            {move || highlight_matches(&request_id, &state.search_term().get())}
                                        </span>
                                        {status_badge(&entry.status)}
                                    </div>
                                    <div class="status-card__type">
                                        {move || highlight_matches(&leave_type, &state.search_term().get())}
                                    </div>
                                    <div class="status-card__dates">
                                        {format_date_range(&entry.start_date, &entry.end_date)}
                                    </div>
                                    <div class="status-card__applied">
                                        "Applied " {format_date(&entry.applied_date)}
                                    </div>
                                </div>
                            }
                        }
                    />
                </div>
            </Show>

            {move || selected.get().map(|entry| view! {
                <LeaveStatusDetails
                    entry=entry
                    on_close=Callback::new(move |_| set_selected_id.set(None))
                />
            })}

            <PaginationControls
                current_page=state.current_page()
                total_pages=state.total_pages()
                caption=state.caption("requests")
                on_page_change=state.set_page()
            />
        </div>
    }
}
