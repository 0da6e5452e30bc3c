pub mod state;

use self::state::create_state;
use crate::shared::api_utils::{api_url, get_json, ApiError};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::config::config;
use crate::shared::icons::icon;
use crate::shared::list_page::status_options;
use crate::shared::list_utils::{highlight_matches, SearchInput, SortSelect, StatusFilterBar};
use crate::shared::polling::spawn_refresh_loop;
use contracts::domain::a001_employee::{Employee, EmployeeListResponse};
use contracts::enums::EmployeeStatus;
use leptos::prelude::*;
use serde::Serialize;

/// The backend paginates, but the list view model works on the whole
/// collection, so everything is requested in one page.
const FETCH_ALL_PER_PAGE: usize = 1000;

#[derive(Debug, Serialize)]
struct EmployeeQuery {
    page: usize,
    per_page: usize,
}

pub async fn fetch_employees() -> Result<Vec<Employee>, ApiError> {
    let query = serde_qs::to_string(&EmployeeQuery {
        page: 1,
        per_page: FETCH_ALL_PER_PAGE,
    })
    .map_err(|e| ApiError::Request(e.to_string()))?;

    let response: EmployeeListResponse = get_json(&api_url(&format!("/api/employees?{}", query))).await?;
    match response.error {
        Some(message) => Err(ApiError::Backend(message)),
        None => Ok(response.employees),
    }
}

#[component]
#[allow(non_snake_case)]
pub fn EmployeeList() -> impl IntoView {
    let state = create_state();
    let load = move || state.reload("employees", fetch_employees);

    // Загрузка при монтировании
    Effect::new(move |_| load());
    spawn_refresh_loop(config().refresh_interval_ms, load);

    let statuses: Vec<(&str, &str)> = EmployeeStatus::all()
        .iter()
        .map(|s| (s.code(), s.display_name()))
        .collect();

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
        <div class="employee-list">
            <div class="list-header">
                <h2>{icon("users")} " Employees"</h2>
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
                    placeholder="Search by name, department, position or email"
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
                <Show when=move || has_filters.get()>
                    <button class="clear-btn" on:click=move |_| state.view.update(|vm| vm.clear_filters())>
                        "Clear filters"
                    </button>
                </Show>
            </div>

            {move || state.error.get().map(|e| view! { <div class="error-banner">{e}</div> })}

            <Show
                when=move || state.with_page(|page| !page.is_empty())
                fallback=move || view! {
                    <div class="empty-state">
                        {move || if state.loading.get() {
                            "Loading employees..."
                        } else if has_filters.get() {
                            "No employees match your current filters."
                        } else {
                            "No employees found."
                        }}
                    </div>
                }
            >
                <div class="employee-grid">
                    <For
                        each=move || state.items()
                        key=|emp| emp.id
                        children=move |emp: Employee| {
                            let status = emp.display_status();
                            let name = emp.name.clone();
                            view! {
                                <div class="employee-card" data-id=emp.id.to_string()>
                                    <div class="employee-header">
                                        <div class="employee-avatar">{emp.initials()}</div>
                                        <div class="employee-info">
                                            <h3>{move || highlight_matches(&name, &state.search_term().get())}</h3>
                                            <p>{emp.position.clone().unwrap_or_else(|| "Employee".to_string())}</p>
                                            <div class="employee-department">
                                                {emp.department.clone().unwrap_or_else(|| "No Department".to_string())}
                                            </div>
                                        </div>
                                    </div>
                                    <div class="employee-stats">
                                        <div class="stat">
                                            <span class="stat-value">{emp.leaves_taken}</span>
                                            <span class="stat-label">"Leaves Taken"</span>
                                        </div>
                                        <div class="stat">
                                            <span class="stat-value">{emp.remaining_leaves}</span>
                                            <span class="stat-label">"Remaining"</span>
                                        </div>
                                    </div>
                                    <div class=format!("employee-status status-{}", status.code())>
                                        {status.display_name()}
                                    </div>
                                </div>
                            }
                        }
                    />
                </div>
            </Show>

            <PaginationControls
                current_page=state.current_page()
                total_pages=state.total_pages()
                caption=state.caption("employees")
                on_page_change=state.set_page()
            />
        </div>
    }
}
