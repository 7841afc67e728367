use serde::{Deserialize, Serialize};

/// FAQ row as returned by `GET /admin/faqs`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Faq {
    pub id: String,
    pub question: String,
    pub answer: String,
    #[serde(default)]
    pub tags: Vec<String>,
    pub is_active: bool,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// Form payload for `POST /admin/faqs` and `PUT /admin/faqs/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct FaqForm {
    pub question: String,
    pub answer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    pub is_active: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FaqList {
    pub faqs: Vec<Faq>,
}
