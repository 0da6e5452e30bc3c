use leptos::prelude::*;
use std::collections::HashMap;
use web_sys::window;

/// Pages reachable from the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppPage {
    #[default]
    LeaveRequests,
    Employees,
    LeaveStatus,
}

impl AppPage {
    pub fn code(&self) -> &'static str {
        match self {
            AppPage::LeaveRequests => "leave_requests",
            AppPage::Employees => "employees",
            AppPage::LeaveStatus => "leave_status",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            AppPage::LeaveRequests => "Leave Requests",
            AppPage::Employees => "Employees",
            AppPage::LeaveStatus => "My Leave Status",
        }
    }

    pub fn icon_name(&self) -> &'static str {
        match self {
            AppPage::LeaveRequests => "clipboard",
            AppPage::Employees => "users",
            AppPage::LeaveStatus => "calendar",
        }
    }

    pub fn all() -> Vec<AppPage> {
        vec![AppPage::LeaveRequests, AppPage::Employees, AppPage::LeaveStatus]
    }

    pub fn from_code(code: &str) -> Option<AppPage> {
        Self::all().into_iter().find(|page| page.code() == code)
    }
}

#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active: RwSignal<AppPage>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active: RwSignal::new(AppPage::default()),
        }
    }

    pub fn open(&self, page: AppPage) {
        log::debug!("open page: {}", page.code());
        self.active.set(page);
    }

    /// Restores the active page from `?active=` and keeps the query string in
    /// sync afterwards.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let params: HashMap<String, String> =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(page) = params.get("active").and_then(|code| AppPage::from_code(code)) {
            self.active.set(page);
        }

        let this = *self;
        Effect::new(move |_| {
            let page = this.active.get();
            let query_string =
                serde_qs::to_string(&HashMap::from([("active", page.code())])).unwrap_or_default();
            let new_url = format!("?{}", query_string);

            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            // Only update URL if it actually changed
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }
}

impl Default for AppGlobalContext {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_codes_round_trip() {
        for page in AppPage::all() {
            assert_eq!(AppPage::from_code(page.code()), Some(page));
        }
        assert_eq!(AppPage::from_code("dashboard"), None);
    }

    #[test]
    fn test_open_switches_active_page() {
        let ctx = AppGlobalContext::new();
        assert_eq!(ctx.active.get_untracked(), AppPage::LeaveRequests);

        ctx.open(AppPage::Employees);
        assert_eq!(ctx.active.get_untracked(), AppPage::Employees);

        ctx.open(AppPage::LeaveStatus);
        assert_eq!(ctx.active.get_untracked(), AppPage::LeaveStatus);
    }
}
