use super::{toast::Notification, LoadSequence, LoadTicket, SubmitStep};
use crate::api::{ApiError, CreateEmployeeRequest, Employee};

pub const LOAD_FAILED: &str = "Failed to load employees";
pub const FIELDS_REQUIRED: &str = "All fields are required";
pub const ADD_SUCCEEDED: &str = "Employee added successfully";
pub const ADD_FAILED: &str = "Failed to add employee";
pub const DELETE_SUCCEEDED: &str = "Employee deleted successfully";
pub const DELETE_FAILED: &str = "Failed to delete employee";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EmployeeForm {
    pub full_name: String,
    pub email: String,
    pub department: String,
}

impl EmployeeForm {
    pub fn to_request(&self) -> Option<CreateEmployeeRequest> {
        let full_name = self.full_name.trim();
        let email = self.email.trim();
        let department = self.department.trim();
        if full_name.is_empty() || email.is_empty() || department.is_empty() {
            return None;
        }
        Some(CreateEmployeeRequest {
            full_name: full_name.to_string(),
            email: email.to_string(),
            department: department.to_string(),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeesViewState {
    pub employees: Vec<Employee>,
    pub form: EmployeeForm,
    pub form_open: bool,
    /// Employee awaiting delete confirmation.
    pub pending_delete: Option<Employee>,
    pub loading: bool,
    pub submitting: bool,
    pub deleting: bool,
    loads: LoadSequence,
}

impl Default for EmployeesViewState {
    fn default() -> Self {
        Self {
            employees: Vec::new(),
            form: EmployeeForm::default(),
            form_open: false,
            pending_delete: None,
            loading: true,
            submitting: false,
            deleting: false,
            loads: LoadSequence::default(),
        }
    }
}

impl EmployeesViewState {
    pub fn begin_load(mut self) -> (Self, LoadTicket) {
        let ticket = self.loads.issue();
        self.loading = true;
        (self, ticket)
    }

    pub fn finish_load(
        mut self,
        ticket: LoadTicket,
        result: Result<Vec<Employee>, ApiError>,
    ) -> (Self, Option<Notification>) {
        if !self.loads.is_current(ticket) {
            log::debug!("discarding stale employee load");
            return (self, None);
        }
        self.loading = false;
        match result {
            Ok(employees) => {
                self.employees = employees;
                (self, None)
            }
            Err(err) => {
                log::error!("Failed to load employees: {}", err);
                (self, Some(Notification::error(LOAD_FAILED)))
            }
        }
    }

    pub fn open_form(mut self) -> Self {
        self.form_open = true;
        self
    }

    pub fn close_form(mut self) -> Self {
        self.form_open = false;
        self
    }

    pub fn edit_form(mut self, edit: impl FnOnce(&mut EmployeeForm)) -> Self {
        edit(&mut self.form);
        self
    }

    pub fn begin_submit(mut self) -> (Self, SubmitStep<CreateEmployeeRequest>) {
        if self.submitting {
            return (self, SubmitStep::Busy);
        }
        match self.form.to_request() {
            Some(request) => {
                self.submitting = true;
                (self, SubmitStep::Send(request))
            }
            None => (self, SubmitStep::Rejected(Notification::error(FIELDS_REQUIRED))),
        }
    }

    pub fn finish_submit(mut self, result: &Result<Employee, ApiError>) -> (Self, Notification) {
        self.submitting = false;
        match result {
            Ok(_) => {
                self.form_open = false;
                self.form = EmployeeForm::default();
                (self, Notification::success(ADD_SUCCEEDED))
            }
            Err(err) => {
                log::error!("Failed to add employee: {}", err);
                (self, Notification::error(err.detail_or(ADD_FAILED)))
            }
        }
    }

    pub fn request_delete(mut self, employee: Employee) -> Self {
        if !self.deleting {
            self.pending_delete = Some(employee);
        }
        self
    }

    pub fn cancel_delete(mut self) -> Self {
        if !self.deleting {
            self.pending_delete = None;
        }
        self
    }

    /// Hands out the id to delete, or `None` when nothing is pending or a
    /// delete is already in flight.
    pub fn begin_delete(mut self) -> (Self, Option<String>) {
        if self.deleting {
            return (self, None);
        }
        let id = self
            .pending_delete
            .as_ref()
            .map(|employee| employee.employee_id.clone());
        self.deleting = id.is_some();
        (self, id)
    }

    pub fn finish_delete(mut self, result: &Result<(), ApiError>) -> (Self, Notification) {
        self.deleting = false;
        self.pending_delete = None;
        match result {
            Ok(()) => (self, Notification::success(DELETE_SUCCEEDED)),
            Err(err) => {
                log::error!("Failed to delete employee: {}", err);
                (self, Notification::error(DELETE_FAILED))
            }
        }
    }
}
