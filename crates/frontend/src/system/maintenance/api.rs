use contracts::domain::maintenance::{CsvImportResult, MaintenanceResult};
use gloo_net::http::Method;

use crate::shared::api::{ApiClient, ApiError};

/// Runs one of the `/admin/db/*` actions. `action` is the path segment,
/// e.g. "init" or "drop-all-tables".
pub async fn run_db_action(api: &ApiClient, action: &str) -> Result<MaintenanceResult, ApiError> {
    api.request(Method::POST, &format!("/admin/db/{}", action), true)
        .await
}

/// Bulk import from CSV files. Every part is optional; the backend skips
/// the ones that are missing.
pub async fn import_csv(
    api: &ApiClient,
    branches: Option<&web_sys::File>,
    doctors: Option<&web_sys::File>,
    services: Option<&web_sys::File>,
) -> Result<CsvImportResult, ApiError> {
    let form = web_sys::FormData::new().map_err(|_| ApiError::unexpected())?;
    for (name, file) in [
        ("branches_file", branches),
        ("doctors_file", doctors),
        ("services_file", services),
    ] {
        if let Some(file) = file {
            form.append_with_blob(name, file)
                .map_err(|_| ApiError::unexpected())?;
        }
    }
    api.upload("/admin/csv-import/import-from-csv", form, true)
        .await
}
