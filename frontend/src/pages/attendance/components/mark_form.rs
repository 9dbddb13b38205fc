use leptos::ev::{MouseEvent, SubmitEvent};
use leptos::*;

use crate::api::{AttendanceStatus, Employee};
use crate::components::common::{Button, ButtonVariant};
use crate::components::dialog::FormDialog;
use crate::pages::attendance::utils::employee_option_label;
use crate::state::attendance::AttendanceForm;

#[component]
pub fn MarkAttendanceDialog(
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] employees: Signal<Vec<Employee>>,
    #[prop(into)] form: Signal<AttendanceForm>,
    #[prop(into)] submitting: Signal<bool>,
    on_employee: Callback<String>,
    on_date: Callback<String>,
    on_status: Callback<String>,
    on_submit: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let selected_employee = move || form.with(|f| f.employee_id.clone());
    let selected_status = move || {
        form.with(|f| f.status.map(|status| status.as_str()).unwrap_or_default())
    };

    view! {
        <FormDialog is_open=is_open title="Mark Attendance" on_close=on_close>
            <form
                class="space-y-4"
                on:submit=move |ev: SubmitEvent| {
                    ev.prevent_default();
                    on_submit.call(());
                }
            >
                <label class="flex flex-col gap-1 text-sm font-medium text-fg">
                    {"Employee"}
                    <select
                        class="rounded-md border border-border-strong bg-surface px-3 py-2 text-sm"
                        prop:value=selected_employee
                        on:change=move |ev| on_employee.call(event_target_value(&ev))
                    >
                        <option value="">{"Select an employee"}</option>
                        {move || {
                            employees
                                .get()
                                .into_iter()
                                .map(|employee| {
                                    let id = employee.employee_id.clone();
                                    let selected = move || form.with(|f| f.employee_id == id);
                                    view! {
                                        <option value=employee.employee_id.clone() selected=selected>
                                            {employee_option_label(&employee)}
                                        </option>
                                    }
                                })
                                .collect_view()
                        }}
                    </select>
                </label>
                <label class="flex flex-col gap-1 text-sm font-medium text-fg">
                    {"Date"}
                    <input
                        type="date"
                        class="rounded-md border border-border-strong bg-surface px-3 py-2 text-sm"
                        prop:value=move || form.with(|f| f.date.clone())
                        on:input=move |ev| on_date.call(event_target_value(&ev))
                    />
                </label>
                <label class="flex flex-col gap-1 text-sm font-medium text-fg">
                    {"Status"}
                    <select
                        class="rounded-md border border-border-strong bg-surface px-3 py-2 text-sm"
                        prop:value=selected_status
                        on:change=move |ev| on_status.call(event_target_value(&ev))
                    >
                        <option value="">{"Select a status"}</option>
                        {AttendanceStatus::ALL
                            .into_iter()
                            .map(|status| {
                                let selected = move || form.with(|f| f.status == Some(status));
                                view! {
                                    <option value=status.as_str() selected=selected>
                                        {status.as_str()}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </label>
                <div class="flex justify-end gap-2">
                    <Button variant=ButtonVariant::Outline on_click=move |_: MouseEvent| on_close.call(())>
                        {"Cancel"}
                    </Button>
                    <Button button_type="submit" loading=submitting test_id="submit-attendance">
                        {"Mark Attendance"}
                    </Button>
                </div>
            </form>
        </FormDialog>
    }
}
