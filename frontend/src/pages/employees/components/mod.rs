pub mod employee_form;
pub mod employee_table;

pub use employee_form::AddEmployeeDialog;
pub use employee_table::EmployeeTable;
