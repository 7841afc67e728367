use contracts::domain::offer::{Offer, OfferForm, OfferList};
use gloo_net::http::Method;

use crate::shared::api::{ApiClient, ApiError};

pub async fn fetch_offers(api: &ApiClient) -> Result<Vec<Offer>, ApiError> {
    let list: OfferList = api.request(Method::GET, "/admin/offers", true).await?;
    Ok(list.offers)
}

pub async fn create_offer(api: &ApiClient, form: &OfferForm) -> Result<serde_json::Value, ApiError> {
    api.request_json(Method::POST, "/admin/offers", form, true)
        .await
}

pub async fn update_offer(
    api: &ApiClient,
    id: &str,
    form: &OfferForm,
) -> Result<serde_json::Value, ApiError> {
    api.request_json(Method::PUT, &format!("/admin/offers/{}", id), form, true)
        .await
}

pub async fn delete_offer(api: &ApiClient, id: &str) -> Result<serde_json::Value, ApiError> {
    api.request(Method::DELETE, &format!("/admin/offers/{}", id), true)
        .await
}
