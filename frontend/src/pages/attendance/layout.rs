use leptos::*;

use crate::components::layout::{Layout, NavItem};

#[component]
pub fn AttendanceFrame(children: Children) -> impl IntoView {
    view! { <Layout active=NavItem::Attendance>{children()}</Layout> }
}

#[component]
pub fn AttendanceHeader(children: Children) -> impl IntoView {
    view! {
        <div class="flex flex-col gap-4 sm:flex-row sm:items-center sm:justify-between">
            <div>
                <h1 class="text-2xl font-bold text-fg">{"Attendance"}</h1>
                <p class="text-sm text-fg-muted">{"Track daily attendance for your team"}</p>
            </div>
            {children()}
        </div>
    }
}
