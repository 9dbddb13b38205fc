use chrono::NaiveDate;

use super::{toast::Notification, LoadSequence, LoadTicket, SubmitStep};
use crate::api::{ApiError, AttendanceRecord, AttendanceStatus, Employee, MarkAttendanceRequest};
use crate::utils::time::{format_iso_date, parse_date_input};

pub const LOAD_FAILED: &str = "Failed to load data";
pub const FIELDS_REQUIRED: &str = "All fields are required";
pub const MARK_SUCCEEDED: &str = "Attendance marked successfully";
pub const MARK_FAILED: &str = "Failed to mark attendance";

/// Pending values of the mark-attendance dialog, kept as entered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceForm {
    pub employee_id: String,
    pub date: String,
    pub status: Option<AttendanceStatus>,
}

impl AttendanceForm {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            employee_id: String::new(),
            date: format_iso_date(today),
            status: Some(AttendanceStatus::Present),
        }
    }

    pub fn to_request(&self) -> Result<MarkAttendanceRequest, ApiError> {
        let employee_id = self.employee_id.trim();
        let required = || ApiError::validation(FIELDS_REQUIRED);
        if employee_id.is_empty() {
            return Err(required());
        }
        let status = self.status.ok_or_else(required)?;
        let date = parse_date_input(&self.date)
            .map_err(ApiError::validation)?
            .ok_or_else(required)?;
        Ok(MarkAttendanceRequest {
            employee_id: employee_id.to_string(),
            date,
            status,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AttendanceViewState {
    pub employees: Vec<Employee>,
    pub attendance: Vec<AttendanceRecord>,
    pub filter_date: Option<NaiveDate>,
    pub filter_error: Option<String>,
    pub form: AttendanceForm,
    pub form_open: bool,
    pub loading: bool,
    pub submitting: bool,
    loads: LoadSequence,
}

impl AttendanceViewState {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            employees: Vec::new(),
            attendance: Vec::new(),
            filter_date: None,
            filter_error: None,
            form: AttendanceForm::new(today),
            form_open: false,
            loading: true,
            submitting: false,
            loads: LoadSequence::default(),
        }
    }

    pub fn begin_load(mut self) -> (Self, LoadTicket) {
        let ticket = self.loads.issue();
        self.loading = true;
        (self, ticket)
    }

    /// Lists are replaced wholesale on success and kept on failure. Responses
    /// for a superseded ticket are dropped without touching the state.
    pub fn finish_load(
        mut self,
        ticket: LoadTicket,
        result: Result<(Vec<Employee>, Vec<AttendanceRecord>), ApiError>,
    ) -> (Self, Option<Notification>) {
        if !self.loads.is_current(ticket) {
            log::debug!("discarding stale attendance load");
            return (self, None);
        }
        self.loading = false;
        match result {
            Ok((employees, attendance)) => {
                self.employees = employees;
                self.attendance = attendance;
                (self, None)
            }
            Err(err) => {
                log::error!("Failed to load attendance view: {}", err);
                (self, Some(Notification::error(LOAD_FAILED)))
            }
        }
    }

    pub fn with_filter_date(mut self, date: Option<NaiveDate>) -> Self {
        self.filter_date = date;
        self.filter_error = None;
        self
    }

    /// Applies the raw value of the filter input. Unparseable input keeps the
    /// current filter and records the problem.
    pub fn with_filter_input(self, value: &str) -> Self {
        match parse_date_input(value) {
            Ok(date) => self.with_filter_date(date),
            Err(message) => Self {
                filter_error: Some(message),
                ..self
            },
        }
    }

    pub fn filtered_attendance(&self) -> Vec<AttendanceRecord> {
        filter_by_date(&self.attendance, self.filter_date)
    }

    pub fn total_present_days(&self, employee_id: &str) -> usize {
        total_present_days(&self.attendance, employee_id)
    }

    pub fn can_mark_attendance(&self) -> bool {
        !self.employees.is_empty()
    }

    pub fn open_form(mut self) -> Self {
        if self.can_mark_attendance() {
            self.form_open = true;
        }
        self
    }

    /// Closing keeps whatever was typed so reopening resumes the entry.
    pub fn close_form(mut self) -> Self {
        self.form_open = false;
        self
    }

    pub fn edit_form(mut self, edit: impl FnOnce(&mut AttendanceForm)) -> Self {
        edit(&mut self.form);
        self
    }

    pub fn begin_submit(mut self) -> (Self, SubmitStep<MarkAttendanceRequest>) {
        if self.submitting {
            return (self, SubmitStep::Busy);
        }
        match self.form.to_request() {
            Ok(request) => {
                self.submitting = true;
                (self, SubmitStep::Send(request))
            }
            Err(err) => (self, SubmitStep::Rejected(Notification::error(err.error))),
        }
    }

    pub fn finish_submit(
        mut self,
        today: NaiveDate,
        result: &Result<AttendanceRecord, ApiError>,
    ) -> (Self, Notification) {
        self.submitting = false;
        match result {
            Ok(_) => {
                self.form_open = false;
                self.form = AttendanceForm::new(today);
                (self, Notification::success(MARK_SUCCEEDED))
            }
            Err(err) => {
                log::error!("Failed to mark attendance: {}", err);
                (self, Notification::error(err.detail_or(MARK_FAILED)))
            }
        }
    }
}

/// Records whose date string is exactly `date` as `YYYY-MM-DD`, in source
/// order, or every record when no date is given.
pub fn filter_by_date(records: &[AttendanceRecord], date: Option<NaiveDate>) -> Vec<AttendanceRecord> {
    match date {
        Some(date) => {
            let wanted = format_iso_date(date);
            records
                .iter()
                .filter(|record| record.date == wanted)
                .cloned()
                .collect()
        }
        None => records.to_vec(),
    }
}

pub fn total_present_days(records: &[AttendanceRecord], employee_id: &str) -> usize {
    records
        .iter()
        .filter(|record| {
            record.employee_id == employee_id && record.status == AttendanceStatus::Present
        })
        .count()
}
