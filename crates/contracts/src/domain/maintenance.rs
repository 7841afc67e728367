use serde::Deserialize;

/// Outcome of the `/admin/db/*` maintenance endpoints (init, clean,
/// drop-all-tables, add-sample-data, create-core-tables).
#[derive(Debug, Clone, Deserialize)]
pub struct MaintenanceResult {
    pub success: bool,
    pub message: String,
    #[serde(default)]
    pub details: serde_json::Value,
}

/// Outcome of `POST /admin/csv-import/import-from-csv`.
#[derive(Debug, Clone, Deserialize)]
pub struct CsvImportResult {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub imported: serde_json::Value,
}
