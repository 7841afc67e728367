use serde::{Deserialize, Serialize};

/// Promotional offer row as returned by `GET /admin/offers`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Offer {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    /// "percentage" or "fixed".
    pub discount_type: String,
    pub discount_value: f64,
    pub start_date: String,
    pub end_date: String,
    #[serde(default)]
    pub related_service_id: Option<String>,
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Form payload for `POST /admin/offers` and `PUT /admin/offers/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct OfferForm {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub discount_type: String,
    pub discount_value: f64,
    pub start_date: String,
    pub end_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub related_service_id: Option<String>,
    pub is_active: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OfferList {
    pub offers: Vec<Offer>,
}
