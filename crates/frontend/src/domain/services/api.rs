use contracts::domain::service::{Service, ServiceForm, ServiceList};
use gloo_net::http::Method;

use crate::shared::api::{ApiClient, ApiError};

pub async fn fetch_services(api: &ApiClient) -> Result<Vec<Service>, ApiError> {
    let list: ServiceList = api.request(Method::GET, "/admin/services", true).await?;
    Ok(list.services)
}

pub async fn create_service(api: &ApiClient, form: &ServiceForm) -> Result<serde_json::Value, ApiError> {
    api.request_json(Method::POST, "/admin/services", form, true)
        .await
}

pub async fn update_service(
    api: &ApiClient,
    id: &str,
    form: &ServiceForm,
) -> Result<serde_json::Value, ApiError> {
    api.request_json(Method::PUT, &format!("/admin/services/{}", id), form, true)
        .await
}

pub async fn delete_service(api: &ApiClient, id: &str) -> Result<serde_json::Value, ApiError> {
    api.request(Method::DELETE, &format!("/admin/services/{}", id), true)
        .await
}
