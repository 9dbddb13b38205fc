use super::{
    client::ApiClient,
    types::{ApiError, AttendanceRecord, MarkAttendanceRequest},
};

impl ApiClient {
    pub async fn list_attendance(&self) -> Result<Vec<AttendanceRecord>, ApiError> {
        let base_url = self.resolved_base_url().await;
        self.send(self.http_client().get(format!("{}/attendance", base_url)))
            .await?
            .json()
    }

    pub async fn mark_attendance(
        &self,
        request: &MarkAttendanceRequest,
    ) -> Result<AttendanceRecord, ApiError> {
        let base_url = self.resolved_base_url().await;
        self.send(
            self.http_client()
                .post(format!("{}/attendance", base_url))
                .json(request),
        )
        .await?
        .json()
    }
}
