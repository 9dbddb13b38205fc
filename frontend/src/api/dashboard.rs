use super::{
    client::ApiClient,
    types::{ApiError, DashboardStats},
};

impl ApiClient {
    pub async fn get_dashboard_stats(&self) -> Result<DashboardStats, ApiError> {
        let base_url = self.resolved_base_url().await;
        self.send(
            self.http_client()
                .get(format!("{}/dashboard/stats", base_url)),
        )
        .await?
        .json()
    }
}
