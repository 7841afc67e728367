use contracts::domain::reports::{AnalyticsSummary, DailyStats};
use gloo_net::http::Method;

use crate::shared::api::{ApiClient, ApiError};

/// Daily report is served without authentication so it can be embedded in
/// external dashboards.
pub async fn fetch_daily(api: &ApiClient, date: &str) -> Result<DailyStats, ApiError> {
    let path = format!("/reports/daily/?date={}", urlencoding::encode(date));
    api.request(Method::GET, &path, false).await
}

pub async fn fetch_summary(
    api: &ApiClient,
    from: &str,
    to: &str,
) -> Result<AnalyticsSummary, ApiError> {
    let path = format!(
        "/admin/analytics/summary?from={}&to={}",
        urlencoding::encode(from),
        urlencoding::encode(to)
    );
    api.request(Method::GET, &path, true).await
}
