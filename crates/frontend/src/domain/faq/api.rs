use contracts::domain::faq::{Faq, FaqForm, FaqList};
use gloo_net::http::Method;

use crate::shared::api::{ApiClient, ApiError};

pub async fn fetch_faqs(api: &ApiClient) -> Result<Vec<Faq>, ApiError> {
    let list: FaqList = api.request(Method::GET, "/admin/faqs", true).await?;
    Ok(list.faqs)
}

pub async fn create_faq(api: &ApiClient, form: &FaqForm) -> Result<serde_json::Value, ApiError> {
    api.request_json(Method::POST, "/admin/faqs", form, true).await
}

pub async fn update_faq(
    api: &ApiClient,
    id: &str,
    form: &FaqForm,
) -> Result<serde_json::Value, ApiError> {
    api.request_json(Method::PUT, &format!("/admin/faqs/{}", id), form, true)
        .await
}

pub async fn delete_faq(api: &ApiClient, id: &str) -> Result<serde_json::Value, ApiError> {
    api.request(Method::DELETE, &format!("/admin/faqs/{}", id), true)
        .await
}
