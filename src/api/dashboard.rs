//! Dashboard Endpoints

use super::ApiClient;
use crate::error::ApiError;
use crate::models::DashboardStats;

impl ApiClient {
    /// `GET /dashboard/stats`
    pub async fn dashboard_stats(&self) -> Result<DashboardStats, ApiError> {
        self.get_json("dashboard/stats").await
    }
}
