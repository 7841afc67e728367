use contracts::domain::doctor::{Doctor, DoctorForm, DoctorList};
use gloo_net::http::Method;

use crate::shared::api::{ApiClient, ApiError};

pub async fn fetch_doctors(api: &ApiClient) -> Result<Vec<Doctor>, ApiError> {
    let list: DoctorList = api.request(Method::GET, "/admin/doctors", true).await?;
    Ok(list.doctors)
}

pub async fn create_doctor(api: &ApiClient, form: &DoctorForm) -> Result<serde_json::Value, ApiError> {
    api.request_json(Method::POST, "/admin/doctors", form, true)
        .await
}

pub async fn update_doctor(
    api: &ApiClient,
    id: &str,
    form: &DoctorForm,
) -> Result<serde_json::Value, ApiError> {
    api.request_json(Method::PUT, &format!("/admin/doctors/{}", id), form, true)
        .await
}

pub async fn delete_doctor(api: &ApiClient, id: &str) -> Result<serde_json::Value, ApiError> {
    api.request(Method::DELETE, &format!("/admin/doctors/{}", id), true)
        .await
}
