use contracts::domain::appointment::{
    Appointment, AppointmentForm, AppointmentList, AppointmentStatusUpdate,
};
use gloo_net::http::Method;

use crate::shared::api::{ApiClient, ApiError};

pub async fn fetch_appointments(api: &ApiClient) -> Result<Vec<Appointment>, ApiError> {
    let list: AppointmentList = api.request(Method::GET, "/admin/appointments", true).await?;
    Ok(list.appointments)
}

pub async fn create_appointment(
    api: &ApiClient,
    form: &AppointmentForm,
) -> Result<serde_json::Value, ApiError> {
    api.request_json(Method::POST, "/admin/appointments", form, true)
        .await
}

pub async fn update_status(
    api: &ApiClient,
    id: &str,
    status: &str,
) -> Result<serde_json::Value, ApiError> {
    let body = AppointmentStatusUpdate {
        status: status.to_string(),
    };
    api.request_json(
        Method::PATCH,
        &format!("/admin/appointments/{}", id),
        &body,
        true,
    )
    .await
}

pub async fn delete_appointment(api: &ApiClient, id: &str) -> Result<serde_json::Value, ApiError> {
    api.request(Method::DELETE, &format!("/admin/appointments/{}", id), true)
        .await
}
