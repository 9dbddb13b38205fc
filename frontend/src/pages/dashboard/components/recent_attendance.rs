use leptos::*;

use crate::api::AttendanceRecord;
use crate::components::empty_state::EmptyState;
use crate::components::status_badge::StatusBadge;
use crate::utils::time::format_display_date;

#[component]
pub fn RecentAttendance(#[prop(into)] records: Signal<Vec<AttendanceRecord>>) -> impl IntoView {
    view! {
        <section class="bg-surface-elevated shadow rounded-lg p-6 space-y-4">
            <h2 class="text-base font-semibold text-fg">{"Recent Attendance"}</h2>
            <Show
                when=move || !records.with(Vec::is_empty)
                fallback=|| view! {
                    <EmptyState
                        title="No attendance records yet"
                        description=Some("Mark attendance to see recent activity here".to_string())
                    />
                }
            >
                <ul class="divide-y divide-border">
                    {move || {
                        records
                            .get()
                            .into_iter()
                            .map(|record| view! {
                                <li class="flex items-center justify-between py-3 text-sm">
                                    <div>
                                        <p class="font-medium text-fg">{record.employee_name.clone()}</p>
                                        <p class="text-fg-muted">
                                            {format!("{} · {}", record.employee_id, format_display_date(&record.date))}
                                        </p>
                                    </div>
                                    <StatusBadge status=record.status/>
                                </li>
                            })
                            .collect_view()
                    }}
                </ul>
            </Show>
        </section>
    }
}
