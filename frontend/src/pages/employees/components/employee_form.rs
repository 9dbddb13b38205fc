use leptos::ev::{MouseEvent, SubmitEvent};
use leptos::*;

use crate::components::common::{Button, ButtonVariant};
use crate::components::dialog::FormDialog;
use crate::state::employees::EmployeeForm;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EmployeeField {
    FullName,
    Email,
    Department,
}

impl EmployeeField {
    pub fn assign(&self, form: &mut EmployeeForm, value: String) {
        match self {
            EmployeeField::FullName => form.full_name = value,
            EmployeeField::Email => form.email = value,
            EmployeeField::Department => form.department = value,
        }
    }

    fn read(&self, form: &EmployeeForm) -> String {
        match self {
            EmployeeField::FullName => form.full_name.clone(),
            EmployeeField::Email => form.email.clone(),
            EmployeeField::Department => form.department.clone(),
        }
    }
}

#[component]
pub fn AddEmployeeDialog(
    #[prop(into)] is_open: Signal<bool>,
    #[prop(into)] form: Signal<EmployeeForm>,
    #[prop(into)] submitting: Signal<bool>,
    on_change: Callback<(EmployeeField, String)>,
    on_submit: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    let field = move |field: EmployeeField, label: &'static str, input_type: &'static str, placeholder: &'static str| {
        view! {
            <label class="flex flex-col gap-1 text-sm font-medium text-fg">
                {label}
                <input
                    type=input_type
                    placeholder=placeholder
                    class="rounded-md border border-border-strong bg-surface px-3 py-2 text-sm"
                    prop:value=move || form.with(|f| field.read(f))
                    on:input=move |ev| on_change.call((field, event_target_value(&ev)))
                />
            </label>
        }
    };

    view! {
        <FormDialog is_open=is_open title="Add Employee" on_close=on_close>
            <form
                class="space-y-4"
                on:submit=move |ev: SubmitEvent| {
                    ev.prevent_default();
                    on_submit.call(());
                }
            >
                {field(EmployeeField::FullName, "Full Name", "text", "Jane Doe")}
                {field(EmployeeField::Email, "Email", "email", "jane@example.com")}
                {field(EmployeeField::Department, "Department", "text", "Engineering")}
                <div class="flex justify-end gap-2">
                    <Button variant=ButtonVariant::Outline on_click=move |_: MouseEvent| on_close.call(())>
                        {"Cancel"}
                    </Button>
                    <Button button_type="submit" loading=submitting test_id="submit-employee">
                        {"Add Employee"}
                    </Button>
                </div>
            </form>
        </FormDialog>
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn dialog_renders_three_inputs() {
        let html = render_to_string(|| {
            view! {
                <AddEmployeeDialog
                    is_open=Signal::derive(|| true)
                    form=Signal::derive(EmployeeForm::default)
                    submitting=Signal::derive(|| false)
                    on_change=Callback::new(|_| {})
                    on_submit=Callback::new(|_| {})
                    on_close=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("Full Name"));
        assert!(html.contains("type=\"email\""));
        assert!(html.contains("Department"));
        assert!(html.contains("data-testid=\"submit-employee\""));
    }
}
