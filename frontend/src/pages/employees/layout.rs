use leptos::*;

use crate::components::layout::{Layout, NavItem};

#[component]
pub fn EmployeesFrame(children: Children) -> impl IntoView {
    view! { <Layout active=NavItem::Employees>{children()}</Layout> }
}

#[component]
pub fn EmployeesHeader(children: Children) -> impl IntoView {
    view! {
        <div class="flex flex-col gap-4 sm:flex-row sm:items-center sm:justify-between">
            <div>
                <h1 class="text-2xl font-bold text-fg">{"Employees"}</h1>
                <p class="text-sm text-fg-muted">{"Manage your employee directory"}</p>
            </div>
            {children()}
        </div>
    }
}
