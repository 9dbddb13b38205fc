use leptos::*;

use crate::api::{ApiClient, Employee};
use crate::pages::employees::repository::EmployeesRepository;
use crate::state::employees::{EmployeeForm, EmployeesViewState};
use crate::state::toast::{use_toaster, Toaster};
use crate::state::{apply, transition, SubmitStep};

pub async fn load(
    repository: &EmployeesRepository,
    state: RwSignal<EmployeesViewState>,
    toaster: Toaster,
) {
    let Some(ticket) = transition(state, EmployeesViewState::begin_load) else {
        return;
    };
    let result = repository.list().await;
    if let Some(Some(notification)) = transition(state, |s| s.finish_load(ticket, result)) {
        toaster.push(notification);
    }
}

pub async fn submit(
    repository: &EmployeesRepository,
    state: RwSignal<EmployeesViewState>,
    toaster: Toaster,
) {
    let request = match transition(state, EmployeesViewState::begin_submit) {
        Some(SubmitStep::Send(request)) => request,
        Some(SubmitStep::Rejected(notification)) => {
            toaster.push(notification);
            return;
        }
        Some(SubmitStep::Busy) | None => return,
    };
    let result = repository.create(&request).await;
    let created = result.is_ok();
    if let Some(notification) = transition(state, |s| s.finish_submit(&result)) {
        toaster.push(notification);
    }
    if created {
        load(repository, state, toaster).await;
    }
}

/// Deletes the employee awaiting confirmation, then reloads on success.
pub async fn confirm_delete(
    repository: &EmployeesRepository,
    state: RwSignal<EmployeesViewState>,
    toaster: Toaster,
) {
    let Some(Some(employee_id)) = transition(state, EmployeesViewState::begin_delete) else {
        return;
    };
    let result = repository.delete(&employee_id).await;
    let deleted = result.is_ok();
    if let Some(notification) = transition(state, |s| s.finish_delete(&result)) {
        toaster.push(notification);
    }
    if deleted {
        load(repository, state, toaster).await;
    }
}

#[derive(Clone, Copy)]
pub struct EmployeesViewModel {
    pub state: RwSignal<EmployeesViewState>,
    pub employees: Memo<Vec<Employee>>,
    repository: StoredValue<EmployeesRepository>,
    toaster: Toaster,
}

impl EmployeesViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let state = create_rw_signal(EmployeesViewState::default());
        let employees = create_memo(move |_| state.with(|s| s.employees.clone()));

        let vm = Self {
            state,
            employees,
            repository: store_value(EmployeesRepository::new(api)),
            toaster: use_toaster(),
        };

        create_effect(move |_| vm.reload());
        vm
    }

    pub fn reload(&self) {
        let repository = self.repository.get_value();
        let (state, toaster) = (self.state, self.toaster);
        spawn_local(async move { load(&repository, state, toaster).await });
    }

    pub fn submit(&self) {
        let repository = self.repository.get_value();
        let (state, toaster) = (self.state, self.toaster);
        spawn_local(async move { submit(&repository, state, toaster).await });
    }

    pub fn confirm_delete(&self) {
        let repository = self.repository.get_value();
        let (state, toaster) = (self.state, self.toaster);
        spawn_local(async move { confirm_delete(&repository, state, toaster).await });
    }

    pub fn open_form(&self) {
        apply(self.state, EmployeesViewState::open_form);
    }

    pub fn close_form(&self) {
        apply(self.state, EmployeesViewState::close_form);
    }

    pub fn edit_form(&self, edit: impl FnOnce(&mut EmployeeForm)) {
        apply(self.state, |s| s.edit_form(edit));
    }

    pub fn request_delete(&self, employee: Employee) {
        apply(self.state, |s| s.request_delete(employee));
    }

    pub fn cancel_delete(&self) {
        apply(self.state, EmployeesViewState::cancel_delete);
    }
}

impl Default for EmployeesViewModel {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_employees_view_model() -> EmployeesViewModel {
    match use_context::<EmployeesViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = EmployeesViewModel::new();
            provide_context(vm);
            vm
        }
    }
}
