pub mod state;

use self::state::create_state;
use crate::shared::api_utils::{api_url, get_json, ApiError};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::config::config;
use crate::shared::date_utils::format_date;
use crate::shared::icons::icon;
use crate::shared::list_page::status_options;
use crate::shared::list_utils::{highlight_matches, SearchInput, SortSelect, StatusFilterBar};
use crate::shared::polling::spawn_refresh_loop;
use contracts::domain::a002_leave_request::{LeaveRequest, LeaveRequestListResponse};
use contracts::enums::LeaveStatus;
use leptos::prelude::*;

pub async fn fetch_leave_requests() -> Result<Vec<LeaveRequest>, ApiError> {
    let response: LeaveRequestListResponse = get_json(&api_url("/hr/leave-requests")).await?;
    if !response.success {
        return Err(ApiError::Backend(
            response
                .message
                .unwrap_or_else(|| "Failed to load leave requests".to_string()),
        ));
    }
    Ok(response.leave_requests)
}

/// Filter buttons in the order of the list's status vocabulary
const STATUS_FILTERS: &[(&str, &str)] = &[
    ("pending", "Pending"),
    ("approved", "Approved"),
    ("rejected", "Rejected"),
];

// HR видит статус "declined" как "Rejected"
fn hr_status_label(status: LeaveStatus) -> &'static str {
    match status {
        LeaveStatus::Declined => "Rejected",
        other => other.display_name(),
    }
}

#[component]
#[allow(non_snake_case)]
pub fn LeaveRequestList() -> impl IntoView {
    let state = create_state();
    let load = move || state.reload("leave requests", fetch_leave_requests);

    Effect::new(move |_| load());
    spawn_refresh_loop(config().refresh_interval_ms, load);

    let departments = Signal::derive(move || state.view.with(|vm| vm.facet_values("department")));
    let selected_department = Signal::derive(move || {
        state.view.with(|vm| {
            vm.criteria()
                .facet_filters
                .get("department")
                .cloned()
                .unwrap_or_else(|| "all".to_string())
        })
    });
    let has_filters = Signal::derive(move || state.view.with(|vm| vm.criteria().has_active_filters()));

    view! {
        <div class="leave-request-list">
            <div class="list-header">
                <h2>{icon("clipboard")} " Leave Requests"</h2>
                <button class="refresh-btn" title="Refresh" on:click=move |_| load()>
                    {icon("refresh")}
                </button>
            </div>

            <StatusFilterBar
                options=status_options(STATUS_FILTERS)
                active=state.status_code()
                counts=state.status_counts()
                on_select=state.set_status_filter()
            />

            <div class="list-toolbar">
                <SearchInput
                    value=state.search_term()
                    on_change=state.set_search_term()
                    placeholder="Search by employee, department or leave type"
                />
                <select
                    class="department-filter"
                    prop:value=move || selected_department.get()
                    on:change=move |ev| {
                        let department = event_target_value(&ev);
                        state.view.update(|vm| vm.set_facet_filter("department", &department));
                    }
                >
                    <option value="all">"All departments"</option>
                    {move || departments
                        .get()
                        .into_iter()
                        .map(|d| view! { <option value=d.clone()>{d.clone()}</option> })
                        .collect_view()}
                </select>
                <SortSelect
                    options=state.sort_options()
                    value=state.sort_key()
                    on_change=state.set_sort_key()
                />
            </div>

            {move || state.error.get().map(|e| view! { <div class="error-banner">{e}</div> })}

            <table class="data-table">
                <thead>
                    <tr>
                        <th>"Employee"</th>
                        <th>"Department"</th>
                        <th>"Type"</th>
                        <th>"Dates"</th>
                        <th>"Duration"</th>
                        <th>"Applied"</th>
                        <th>"Status"</th>
                    </tr>
                </thead>
                <tbody>
                    <Show
                        when=move || state.with_page(|page| !page.is_empty())
                        fallback=move || view! {
                            <tr>
                                <td colspan="7" class="empty-state">
                                    {move || if state.loading.get() {
                                        "Loading leave requests..."
                                    } else if has_filters.get() {
                                        "No leave requests match your current filters."
                                    } else {
                                        "No leave requests found."
                                    }}
                                </td>
                            </tr>
                        }
                    >
                        <For
                            each=move || state.items()
                            key=|req| req.leave_id
                            children=move |req: LeaveRequest| {
                                let employee = req.employee.clone().unwrap_or_default();
                                let leave_type = req.leave_type.clone().unwrap_or_default();
                                let status = req.leave_status();
                                let badge = status.map(|s| s.badge_class()).unwrap_or("badge-muted");
                                let label = status
                                    .map(hr_status_label)
                                    .map(str::to_string)
                                    .or_else(|| req.status.clone())
                                    .unwrap_or_default();
                                view! {
                                    <tr class:row-pending=req.is_actionable()>
                                        <td>
                                            <div class="employee-name">
                                                {move || highlight_matches(&employee, &state.search_term().get())}
                                            </div>
                                            <div class="employee-designation">
                                                {req.designation.clone().unwrap_or_default()}
                                            </div>
                                        </td>
                                        <td>{req.department.clone().unwrap_or_default()}</td>
                                        <td>{move || highlight_matches(&leave_type, &state.search_term().get())}</td>
                                        <td>{req.dates.clone().unwrap_or_default()}</td>
                                        <td>{req.duration.clone().unwrap_or_default()}</td>
                                        <td>{req.applied_on.as_deref().map(format_date).unwrap_or_default()}</td>
                                        <td><span class=format!("badge {}", badge)>{label}</span></td>
                                    </tr>
                                }
                            }
                        />
                    </Show>
                </tbody>
            </table>

            <PaginationControls
                current_page=state.current_page()
                total_pages=state.total_pages()
                caption=state.caption("requests")
                on_page_change=state.set_page()
            />
        </div>
    }
}
