pub mod recent_attendance;
pub mod stats;

pub use recent_attendance::RecentAttendance;
pub use stats::StatsSection;
