use leptos::*;

use crate::api::AttendanceStatus;

fn badge_classes(status: AttendanceStatus) -> &'static str {
    match status {
        AttendanceStatus::Present => {
            "bg-status-success-bg text-status-success-text border-status-success-border"
        }
        AttendanceStatus::Absent => {
            "bg-status-error-bg text-status-error-text border-status-error-border"
        }
    }
}

#[component]
pub fn StatusBadge(status: AttendanceStatus) -> impl IntoView {
    view! {
        <span class=format!(
            "inline-flex items-center rounded-full border px-2.5 py-0.5 text-xs font-semibold {}",
            badge_classes(status),
        )>
            {status.as_str()}
        </span>
    }
}
