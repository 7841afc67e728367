use contracts::domain::diagnostics::{HealthStatus, SystemHealth};
use gloo_net::http::Method;

use crate::shared::api::{ApiClient, ApiError};

pub async fn fetch_liveness(api: &ApiClient) -> Result<HealthStatus, ApiError> {
    api.request(Method::GET, "/test/health/", false).await
}

pub async fn fetch_system_health(api: &ApiClient) -> Result<SystemHealth, ApiError> {
    api.request(Method::GET, "/test/health/system", false).await
}
