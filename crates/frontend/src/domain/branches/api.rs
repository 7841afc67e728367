use contracts::domain::branch::{Branch, BranchForm, BranchList};
use gloo_net::http::Method;

use crate::shared::api::{ApiClient, ApiError};

pub async fn fetch_branches(api: &ApiClient) -> Result<Vec<Branch>, ApiError> {
    let list: BranchList = api.request(Method::GET, "/admin/branches", true).await?;
    Ok(list.branches)
}

pub async fn create_branch(api: &ApiClient, form: &BranchForm) -> Result<serde_json::Value, ApiError> {
    api.request_json(Method::POST, "/admin/branches", form, true)
        .await
}

pub async fn update_branch(
    api: &ApiClient,
    id: &str,
    form: &BranchForm,
) -> Result<serde_json::Value, ApiError> {
    api.request_json(Method::PUT, &format!("/admin/branches/{}", id), form, true)
        .await
}

pub async fn delete_branch(api: &ApiClient, id: &str) -> Result<serde_json::Value, ApiError> {
    api.request(Method::DELETE, &format!("/admin/branches/{}", id), true)
        .await
}
