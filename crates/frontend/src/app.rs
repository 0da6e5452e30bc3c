use crate::domain::a001_employee::ui::list::EmployeeList;
use crate::domain::a002_leave_request::ui::list::LeaveRequestList;
use crate::domain::a003_leave_status::ui::list::LeaveStatusList;
use crate::layout::global_context::{AppGlobalContext, AppPage};
use crate::layout::Shell;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    let ctx = AppGlobalContext::new();
    ctx.init_router_integration();
    provide_context(ctx);

    view! {
        <Shell center=move || match ctx.active.get() {
            AppPage::LeaveRequests => view! { <LeaveRequestList /> }.into_any(),
            AppPage::Employees => view! { <EmployeeList /> }.into_any(),
            AppPage::LeaveStatus => view! { <LeaveStatusList /> }.into_any(),
        } />
    }
}
