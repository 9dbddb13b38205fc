use leptos::ev::MouseEvent;
use leptos::*;
use leptos_meta::Title;

use crate::components::common::Button;
use crate::components::confirm_dialog::ConfirmDialog;
use crate::components::empty_state::EmptyState;
use crate::components::layout::LoadingSpinner;
use crate::pages::employees::{
    components::{employee_form::EmployeeField, AddEmployeeDialog, EmployeeTable},
    layout::{EmployeesFrame, EmployeesHeader},
    view_model::use_employees_view_model,
};

#[component]
pub fn EmployeesPage() -> impl IntoView {
    view! {
        <Title text="Employees | HRMS Lite"/>
        <EmployeesFrame>
            <EmployeesPanel/>
        </EmployeesFrame>
    }
}

fn delete_message(name: &str) -> String {
    format!(
        "Are you sure you want to delete {}? Their attendance records will be deleted too.",
        name
    )
}

#[component]
pub fn EmployeesPanel() -> impl IntoView {
    let vm = use_employees_view_model();
    let state = vm.state;
    let loading = Signal::derive(move || state.with(|s| s.loading));
    let form_open = Signal::derive(move || state.with(|s| s.form_open));
    let form = Signal::derive(move || state.with(|s| s.form.clone()));
    let submitting = Signal::derive(move || state.with(|s| s.submitting));
    let deleting = Signal::derive(move || state.with(|s| s.deleting));
    let confirm_open = Signal::derive(move || state.with(|s| s.pending_delete.is_some()));
    let confirm_message = Signal::derive(move || {
        state.with(|s| {
            s.pending_delete
                .as_ref()
                .map(|employee| delete_message(&employee.full_name))
                .unwrap_or_default()
        })
    });

    view! {
        <Show when=move || !loading.get() fallback=|| view! { <LoadingSpinner/> }>
            <div class="space-y-6">
                <EmployeesHeader>
                    <Button test_id="open-add-employee" on_click=move |_: MouseEvent| vm.open_form()>
                        {"Add Employee"}
                    </Button>
                </EmployeesHeader>
                <Show
                    when=move || !vm.employees.with(Vec::is_empty)
                    fallback=|| view! {
                        <EmptyState
                            title="No employees added yet"
                            description=Some("Click the \"Add Employee\" button to get started".to_string())
                        />
                    }
                >
                    <EmployeeTable
                        employees=vm.employees
                        deleting=deleting
                        on_delete=Callback::new(move |employee| vm.request_delete(employee))
                    />
                </Show>
            </div>
        </Show>
        <AddEmployeeDialog
            is_open=form_open
            form=form
            submitting=submitting
            on_change=Callback::new(move |(field, value): (EmployeeField, String)| {
                vm.edit_form(|form| field.assign(form, value))
            })
            on_submit=Callback::new(move |_| vm.submit())
            on_close=Callback::new(move |_| vm.close_form())
        />
        <ConfirmDialog
            is_open=confirm_open
            title="Delete Employee"
            message=confirm_message
            confirm_label="Delete"
            confirm_disabled=deleting
            destructive=true
            on_confirm=Callback::new(move |_| vm.confirm_delete())
            on_cancel=Callback::new(move |_| vm.cancel_delete())
        />
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::pages::employees::view_model::EmployeesViewModel;
    use crate::state::employees::EmployeesViewState;
    use crate::state::{apply, transition};
    use crate::test_support::helpers::employee;
    use crate::test_support::ssr::render_to_string;

    fn seed(employees: Vec<crate::api::Employee>) -> EmployeesViewModel {
        let vm = EmployeesViewModel::new();
        provide_context(vm);
        let ticket = transition(vm.state, EmployeesViewState::begin_load).unwrap();
        apply(vm.state, |s| s.finish_load(ticket, Ok(employees)).0);
        vm
    }

    #[test]
    fn lists_employees_once_loaded() {
        let html = render_to_string(|| {
            seed(vec![employee("E1", "Ann")]);
            view! { <EmployeesPanel/> }
        });
        assert!(html.contains("ann@example.com"));
        assert!(!html.contains("No employees added yet"));
    }

    #[test]
    fn empty_roster_shows_empty_state() {
        let html = render_to_string(|| {
            seed(Vec::new());
            view! { <EmployeesPanel/> }
        });
        assert!(html.contains("No employees added yet"));
    }

    #[test]
    fn pending_delete_opens_confirmation() {
        let html = render_to_string(|| {
            let vm = seed(vec![employee("E1", "Ann")]);
            vm.request_delete(employee("E1", "Ann"));
            view! { <EmployeesPanel/> }
        });
        assert!(html.contains("role=\"alertdialog\""));
        assert!(html.contains("Are you sure you want to delete Ann?"));
    }

    #[test]
    fn delete_message_mentions_attendance_cascade() {
        assert!(delete_message("Ann").contains("attendance records will be deleted too"));
    }
}
