use contracts::dashboards::d400_admin_stats::{AdminStats, MonthlyPoint, MonthlySeriesResponse};
use contracts::shared::api_error::ApiError;

use crate::shared::api_utils::get_json;

pub async fn fetch_admin_stats() -> Result<AdminStats, ApiError> {
    get_json("/admin/stats", "Failed to fetch admin stats").await
}

/// Per-month users, sales and orders for the chart.
pub async fn fetch_monthly_series() -> Result<Vec<MonthlyPoint>, ApiError> {
    let response: MonthlySeriesResponse =
        get_json("/admin/statics", "Failed to fetch chart data").await?;
    Ok(response.into_points())
}
