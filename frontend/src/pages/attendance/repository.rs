use futures::future::try_join;
use std::rc::Rc;

use crate::api::{ApiClient, ApiError, AttendanceRecord, Employee, MarkAttendanceRequest};

#[derive(Clone)]
pub struct AttendanceRepository {
    client: Rc<ApiClient>,
}

impl AttendanceRepository {
    pub fn new(api: ApiClient) -> Self {
        Self {
            client: Rc::new(api),
        }
    }

    /// Both lists or neither: a failure on either side fails the whole load.
    pub async fn load_view(&self) -> Result<(Vec<Employee>, Vec<AttendanceRecord>), ApiError> {
        try_join(self.client.list_employees(), self.client.list_attendance()).await
    }

    pub async fn mark(&self, request: &MarkAttendanceRequest) -> Result<AttendanceRecord, ApiError> {
        self.client.mark_attendance(request).await
    }
}
