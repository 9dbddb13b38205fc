use leptos::ev::MouseEvent;
use leptos::*;
use leptos_meta::Title;

use crate::components::common::Button;
use crate::components::empty_state::EmptyState;
use crate::components::layout::LoadingSpinner;
use crate::pages::attendance::{
    components::{AttendanceFilterBar, AttendanceTable, MarkAttendanceDialog},
    layout::{AttendanceFrame, AttendanceHeader},
    utils::{empty_hint, empty_title},
    view_model::use_attendance_view_model,
};

#[component]
pub fn AttendancePage() -> impl IntoView {
    view! {
        <Title text="Attendance | HRMS Lite"/>
        <AttendanceFrame>
            <AttendancePanel/>
        </AttendanceFrame>
    }
}

#[component]
pub fn AttendancePanel() -> impl IntoView {
    let vm = use_attendance_view_model();
    let state = vm.state;
    let loading = Signal::derive(move || state.with(|s| s.loading));
    let can_mark = Signal::derive(move || state.with(|s| s.can_mark_attendance()));
    let filter_error = Signal::derive(move || state.with(|s| s.filter_error.clone()));
    let form_open = Signal::derive(move || state.with(|s| s.form_open));
    let form = Signal::derive(move || state.with(|s| s.form.clone()));
    let submitting = Signal::derive(move || state.with(|s| s.submitting));

    view! {
        <Show when=move || !loading.get() fallback=|| view! { <LoadingSpinner/> }>
            <div class="space-y-6">
                <AttendanceHeader>
                    <Button
                        disabled=Signal::derive(move || !can_mark.get())
                        test_id="open-mark-attendance"
                        on_click=move |_: MouseEvent| vm.open_form()
                    >
                        {"Mark Attendance"}
                    </Button>
                </AttendanceHeader>
                <AttendanceFilterBar
                    filter_date=vm.filter_date
                    error=filter_error
                    on_input=Callback::new(move |value| vm.set_filter_input(value))
                    on_clear=Callback::new(move |_| vm.clear_filter())
                />
                <Show
                    when=move || !vm.filtered.with(Vec::is_empty)
                    fallback=move || view! {
                        <EmptyState
                            title=Signal::derive(move || empty_title(vm.filter_date.get().is_some()).to_string())
                            description=Signal::derive(move || Some(empty_hint(can_mark.get()).to_string()))
                        />
                    }
                >
                    <AttendanceTable records=vm.filtered all_records=vm.attendance/>
                </Show>
            </div>
        </Show>
        <MarkAttendanceDialog
            is_open=form_open
            employees=vm.employees
            form=form
            submitting=submitting
            on_employee=Callback::new(move |value| vm.set_employee(value))
            on_date=Callback::new(move |value| vm.set_date(value))
            on_status=Callback::new(move |value| vm.set_status(value))
            on_submit=Callback::new(move |_| vm.submit())
            on_close=Callback::new(move |_| vm.close_form())
        />
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::AttendanceStatus;
    use crate::pages::attendance::view_model::AttendanceViewModel;
    use crate::state::attendance::AttendanceViewState;
    use crate::state::{apply, transition};
    use crate::test_support::helpers::{employee, record};
    use crate::test_support::ssr::render_to_string;
    use chrono::NaiveDate;

    fn seed(
        employees: Vec<crate::api::Employee>,
        records: Vec<crate::api::AttendanceRecord>,
        filter: Option<NaiveDate>,
    ) -> AttendanceViewModel {
        let vm = AttendanceViewModel::new();
        provide_context(vm);
        let ticket = transition(vm.state, AttendanceViewState::begin_load).unwrap();
        apply(vm.state, |s| {
            s.finish_load(ticket, Ok((employees, records)))
                .0
                .with_filter_date(filter)
        });
        vm
    }

    #[test]
    fn shows_spinner_until_loaded() {
        let html = render_to_string(|| {
            let vm = AttendanceViewModel::new();
            provide_context(vm);
            view! { <AttendancePanel/> }
        });
        assert!(html.contains("animate-spin"));
        assert!(!html.contains("Filter by date"));
    }

    #[test]
    fn renders_filtered_rows_with_full_totals() {
        let html = render_to_string(|| {
            let day = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
            seed(
                vec![employee("E1", "Ann")],
                vec![
                    record("E1", "Ann", "2024-01-01", AttendanceStatus::Present),
                    record("E1", "Ann", "2024-01-02", AttendanceStatus::Absent),
                ],
                Some(day),
            );
            view! { <AttendancePanel/> }
        });
        assert!(html.contains("Jan 1, 2024"));
        assert!(!html.contains("Jan 2, 2024"));
        assert!(html.contains("data-present-days=\"1\""));
        assert!(html.contains("Clear Filter"));
    }

    #[test]
    fn empty_states_reflect_filter_and_roster() {
        let html = render_to_string(|| {
            seed(Vec::new(), Vec::new(), None);
            view! { <AttendancePanel/> }
        });
        assert!(html.contains("No attendance records yet"));
        assert!(html.contains("Please add employees first"));

        let html = render_to_string(|| {
            seed(
                vec![employee("E1", "Ann")],
                vec![record("E1", "Ann", "2024-01-01", AttendanceStatus::Present)],
                NaiveDate::from_ymd_opt(2030, 1, 1),
            );
            view! { <AttendancePanel/> }
        });
        assert!(html.contains("No attendance records for this date"));
    }
}
