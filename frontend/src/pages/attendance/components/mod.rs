pub mod filter_bar;
pub mod mark_form;
pub mod records_table;

pub use filter_bar::AttendanceFilterBar;
pub use mark_form::MarkAttendanceDialog;
pub use records_table::AttendanceTable;
