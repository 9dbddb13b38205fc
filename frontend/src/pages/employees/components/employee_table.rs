use leptos::*;

use crate::api::Employee;

#[component]
pub fn EmployeeTable(
    #[prop(into)] employees: Signal<Vec<Employee>>,
    on_delete: Callback<Employee>,
    #[prop(into)] deleting: Signal<bool>,
) -> impl IntoView {
    view! {
        <div class="overflow-x-auto bg-surface-elevated shadow rounded-lg">
            <table class="min-w-full divide-y divide-border text-sm">
                <thead class="bg-surface-muted">
                    <tr>
                        <th class="px-4 py-3 text-left font-semibold text-fg-muted">{"Employee ID"}</th>
                        <th class="px-4 py-3 text-left font-semibold text-fg-muted">{"Full Name"}</th>
                        <th class="px-4 py-3 text-left font-semibold text-fg-muted">{"Email"}</th>
                        <th class="px-4 py-3 text-left font-semibold text-fg-muted">{"Department"}</th>
                        <th class="px-4 py-3 text-right font-semibold text-fg-muted">{"Actions"}</th>
                    </tr>
                </thead>
                <tbody class="divide-y divide-border">
                    <For
                        each=move || employees.get()
                        key=|employee| employee.employee_id.clone()
                        children=move |employee| {
                            let target = employee.clone();
                            view! {
                                <tr>
                                    <td class="px-4 py-3 font-mono text-fg">{employee.employee_id}</td>
                                    <td class="px-4 py-3 text-fg">{employee.full_name}</td>
                                    <td class="px-4 py-3 text-fg-muted">{employee.email}</td>
                                    <td class="px-4 py-3 text-fg-muted">{employee.department}</td>
                                    <td class="px-4 py-3 text-right">
                                        <button
                                            type="button"
                                            class="text-sm font-medium text-action-danger-bg hover:underline disabled:opacity-50"
                                            disabled=move || deleting.get()
                                            on:click=move |_| on_delete.call(target.clone())
                                        >
                                            {"Delete"}
                                        </button>
                                    </td>
                                </tr>
                            }
                        }
                    />
                </tbody>
            </table>
        </div>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::helpers::employee;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn renders_one_row_per_employee() {
        let html = render_to_string(|| {
            view! {
                <EmployeeTable
                    employees=Signal::derive(|| vec![employee("E1", "Ann"), employee("E2", "Bo")])
                    on_delete=Callback::new(|_| {})
                    deleting=Signal::derive(|| false)
                />
            }
        });
        assert!(html.contains("ann@example.com"));
        assert!(html.contains("bo@example.com"));
        assert_eq!(html.matches("Delete").count(), 2);
    }
}
