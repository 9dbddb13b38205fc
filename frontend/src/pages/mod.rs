pub mod attendance;
pub mod dashboard;
pub mod employees;
pub mod not_found;

pub use attendance::AttendancePage;
pub use dashboard::DashboardPage;
pub use employees::EmployeesPage;
pub use not_found::NotFoundPage;
