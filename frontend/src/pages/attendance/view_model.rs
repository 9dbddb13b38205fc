use chrono::NaiveDate;
use leptos::*;

use crate::api::{ApiClient, AttendanceRecord, AttendanceStatus, Employee};
use crate::pages::attendance::repository::AttendanceRepository;
use crate::state::attendance::{filter_by_date, AttendanceForm, AttendanceViewState};
use crate::state::toast::{use_toaster, Toaster};
use crate::state::{apply, transition, SubmitStep};
use crate::utils::time::today;

/// Fetches employees and attendance together and applies the outcome.
pub async fn load(
    repository: &AttendanceRepository,
    state: RwSignal<AttendanceViewState>,
    toaster: Toaster,
) {
    let Some(ticket) = transition(state, AttendanceViewState::begin_load) else {
        return;
    };
    let result = repository.load_view().await;
    if let Some(Some(notification)) = transition(state, |s| s.finish_load(ticket, result)) {
        toaster.push(notification);
    }
}

/// Validates the form, posts it and refreshes both lists on success.
pub async fn submit(
    repository: &AttendanceRepository,
    state: RwSignal<AttendanceViewState>,
    toaster: Toaster,
    today: NaiveDate,
) {
    let request = match transition(state, AttendanceViewState::begin_submit) {
        Some(SubmitStep::Send(request)) => request,
        Some(SubmitStep::Rejected(notification)) => {
            toaster.push(notification);
            return;
        }
        Some(SubmitStep::Busy) | None => return,
    };
    let result = repository.mark(&request).await;
    let created = result.is_ok();
    if let Some(notification) = transition(state, |s| s.finish_submit(today, &result)) {
        toaster.push(notification);
    }
    if created {
        load(repository, state, toaster).await;
    }
}

#[derive(Clone, Copy)]
pub struct AttendanceViewModel {
    pub state: RwSignal<AttendanceViewState>,
    pub employees: Memo<Vec<Employee>>,
    pub attendance: Memo<Vec<AttendanceRecord>>,
    pub filter_date: Memo<Option<NaiveDate>>,
    pub filtered: Memo<Vec<AttendanceRecord>>,
    repository: StoredValue<AttendanceRepository>,
    toaster: Toaster,
}

impl AttendanceViewModel {
    pub fn new() -> Self {
        let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let state = create_rw_signal(AttendanceViewState::new(today()));
        let employees = create_memo(move |_| state.with(|s| s.employees.clone()));
        let attendance = create_memo(move |_| state.with(|s| s.attendance.clone()));
        let filter_date = create_memo(move |_| state.with(|s| s.filter_date));
        let filtered =
            create_memo(move |_| attendance.with(|records| filter_by_date(records, filter_date.get())));

        let vm = Self {
            state,
            employees,
            attendance,
            filter_date,
            filtered,
            repository: store_value(AttendanceRepository::new(api)),
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
        spawn_local(async move { submit(&repository, state, toaster, today()).await });
    }

    pub fn set_filter_input(&self, value: String) {
        apply(self.state, |s| s.with_filter_input(&value));
    }

    pub fn clear_filter(&self) {
        apply(self.state, |s| s.with_filter_date(None));
    }

    pub fn open_form(&self) {
        apply(self.state, AttendanceViewState::open_form);
    }

    pub fn close_form(&self) {
        apply(self.state, AttendanceViewState::close_form);
    }

    pub fn edit_form(&self, edit: impl FnOnce(&mut AttendanceForm)) {
        apply(self.state, |s| s.edit_form(edit));
    }

    pub fn set_employee(&self, employee_id: String) {
        self.edit_form(|form| form.employee_id = employee_id);
    }

    pub fn set_date(&self, date: String) {
        self.edit_form(|form| form.date = date);
    }

    pub fn set_status(&self, value: String) {
        self.edit_form(|form| form.status = AttendanceStatus::from_input(&value));
    }

    pub fn total_present_days(&self, employee_id: &str) -> usize {
        self.state.with(|s| s.total_present_days(employee_id))
    }
}

impl Default for AttendanceViewModel {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_attendance_view_model() -> AttendanceViewModel {
    match use_context::<AttendanceViewModel>() {
        Some(vm) => vm,
        None => {
            let vm = AttendanceViewModel::new();
            provide_context(vm);
            vm
        }
    }
}
