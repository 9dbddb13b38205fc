use futures::future::try_join;
use std::rc::Rc;

use crate::api::{ApiClient, ApiError, AttendanceRecord, DashboardStats};

#[derive(Clone)]
pub struct DashboardRepository {
    client: Rc<ApiClient>,
}

impl DashboardRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    pub async fn load(&self) -> Result<(DashboardStats, Vec<AttendanceRecord>), ApiError> {
        try_join(self.client.get_dashboard_stats(), self.client.list_attendance()).await
    }
}
