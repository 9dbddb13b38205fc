use leptos::*;

use crate::api::AttendanceRecord;
use crate::components::status_badge::StatusBadge;
use crate::state::attendance::total_present_days;
use crate::utils::time::format_display_date;

/// Rows come from `records`; the present-day totals always count over
/// `all_records`, whatever filter produced the rows.
#[component]
pub fn AttendanceTable(
    #[prop(into)] records: Signal<Vec<AttendanceRecord>>,
    #[prop(into)] all_records: Signal<Vec<AttendanceRecord>>,
) -> impl IntoView {
    view! {
        <div class="overflow-x-auto bg-surface-elevated shadow rounded-lg">
            <table class="min-w-full divide-y divide-border text-sm">
                <thead class="bg-surface-muted">
                    <tr>
                        <th class="px-4 py-3 text-left font-semibold text-fg-muted">{"Employee ID"}</th>
                        <th class="px-4 py-3 text-left font-semibold text-fg-muted">{"Name"}</th>
                        <th class="px-4 py-3 text-left font-semibold text-fg-muted">{"Date"}</th>
                        <th class="px-4 py-3 text-left font-semibold text-fg-muted">{"Status"}</th>
                        <th class="px-4 py-3 text-left font-semibold text-fg-muted">{"Total Present Days"}</th>
                    </tr>
                </thead>
                <tbody class="divide-y divide-border">
                    {move || {
                        records
                            .get()
                            .into_iter()
                            .map(|record| {
                                let present = all_records
                                    .with(|all| total_present_days(all, &record.employee_id));
                                view! {
                                    <tr>
                                        <td class="px-4 py-3 font-mono text-fg">{record.employee_id.clone()}</td>
                                        <td class="px-4 py-3 text-fg">{record.employee_name.clone()}</td>
                                        <td class="px-4 py-3 text-fg-muted">{format_display_date(&record.date)}</td>
                                        <td class="px-4 py-3"><StatusBadge status=record.status/></td>
                                        <td class="px-4 py-3 text-fg" data-present-days=present>{present}</td>
                                    </tr>
                                }
                            })
                            .collect_view()
                    }}
                </tbody>
            </table>
        </div>
    }
}
