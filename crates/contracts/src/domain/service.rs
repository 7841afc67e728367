use serde::{Deserialize, Serialize};

/// Medical service row as returned by `GET /admin/services`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Service {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub base_price: Option<f64>,
    #[serde(default)]
    pub duration_minutes: Option<i32>,
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Form payload for `POST /admin/services` and `PUT /admin/services/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ServiceForm {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_price: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration_minutes: Option<i32>,
    pub is_active: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServiceList {
    pub services: Vec<Service>,
}
