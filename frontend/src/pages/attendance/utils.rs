use crate::api::Employee;

pub fn empty_title(filter_active: bool) -> &'static str {
    if filter_active {
        "No attendance records for this date"
    } else {
        "No attendance records yet"
    }
}

pub fn empty_hint(has_employees: bool) -> &'static str {
    if has_employees {
        "Click 'Mark Attendance' to add records"
    } else {
        "Please add employees first before marking attendance"
    }
}

/// Option label for the employee select, e.g. `E1 - Ann`.
pub fn employee_option_label(employee: &Employee) -> String {
    format!("{} - {}", employee.employee_id, employee.full_name)
}
