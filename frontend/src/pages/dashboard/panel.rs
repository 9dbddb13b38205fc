use leptos::*;
use leptos_meta::Title;

use crate::components::layout::LoadingSpinner;
use crate::pages::dashboard::{
    components::{RecentAttendance, StatsSection},
    layout::DashboardFrame,
    view_model::use_dashboard_view_model,
};

#[component]
pub fn DashboardPage() -> impl IntoView {
    view! {
        <Title text="Dashboard | HRMS Lite"/>
        <DashboardFrame>
            <DashboardPanel/>
        </DashboardFrame>
    }
}

#[component]
pub fn DashboardPanel() -> impl IntoView {
    let vm = use_dashboard_view_model();
    let state = vm.state;
    let loading = Signal::derive(move || state.with(|s| s.loading));
    let stats = Signal::derive(move || state.with(|s| s.counters()));
    let recent = Signal::derive(move || state.with(|s| s.recent.clone()));

    view! {
        <Show when=move || !loading.get() fallback=|| view! { <LoadingSpinner/> }>
            <div class="space-y-6">
                <div>
                    <h1 class="text-2xl font-bold text-fg">{"Dashboard"}</h1>
                    <p class="text-sm text-fg-muted">{"Today's overview of your workforce"}</p>
                </div>
                <StatsSection stats=stats/>
                <RecentAttendance records=recent/>
            </div>
        </Show>
    }
}
