use super::{toast::Notification, LoadSequence, LoadTicket};
use crate::api::{ApiError, AttendanceRecord, DashboardStats};

pub const LOAD_FAILED: &str = "Failed to load dashboard data";
/// Number of attendance records shown under "Recent Attendance".
pub const RECENT_LIMIT: usize = 10;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DashboardViewState {
    pub stats: Option<DashboardStats>,
    pub recent: Vec<AttendanceRecord>,
    pub loading: bool,
    loads: LoadSequence,
}

impl Default for DashboardViewState {
    fn default() -> Self {
        Self {
            stats: None,
            recent: Vec::new(),
            loading: true,
            loads: LoadSequence::default(),
        }
    }
}

impl DashboardViewState {
    pub fn begin_load(mut self) -> (Self, LoadTicket) {
        let ticket = self.loads.issue();
        self.loading = true;
        (self, ticket)
    }

    pub fn finish_load(
        mut self,
        ticket: LoadTicket,
        result: Result<(DashboardStats, Vec<AttendanceRecord>), ApiError>,
    ) -> (Self, Option<Notification>) {
        if !self.loads.is_current(ticket) {
            return (self, None);
        }
        self.loading = false;
        match result {
            Ok((stats, attendance)) => {
                self.stats = Some(stats);
                self.recent = attendance.into_iter().take(RECENT_LIMIT).collect();
                (self, None)
            }
            Err(err) => {
                log::error!("Failed to load dashboard: {}", err);
                (self, Some(Notification::error(LOAD_FAILED)))
            }
        }
    }

    /// Counters to display; unknown stats read as zero.
    pub fn counters(&self) -> DashboardStats {
        self.stats.unwrap_or_default()
    }
}
