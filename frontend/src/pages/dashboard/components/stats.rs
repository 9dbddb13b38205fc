use leptos::*;

use crate::api::DashboardStats;

#[component]
pub fn StatsSection(#[prop(into)] stats: Signal<DashboardStats>) -> impl IntoView {
    view! {
        <div class="grid grid-cols-1 gap-4 sm:grid-cols-3">
            <StatCard label="Total Employees" value=Signal::derive(move || stats.get().total_employees)/>
            <StatCard label="Present Today" value=Signal::derive(move || stats.get().total_present_today)/>
            <StatCard label="Absent Today" value=Signal::derive(move || stats.get().total_absent_today)/>
        </div>
    }
}

#[component]
fn StatCard(label: &'static str, value: Signal<u64>) -> impl IntoView {
    view! {
        <div class="relative overflow-hidden p-6 rounded-2xl bg-surface-elevated border border-border shadow">
            <p class="text-xs font-bold text-fg-muted uppercase tracking-widest">{label}</p>
            <p class="mt-3 text-3xl font-extrabold text-fg" data-stat=label>{move || value.get()}</p>
        </div>
    }
}
