use serde::{Deserialize, Serialize};

/// Knowledge-base document source as returned by `GET /admin/rag/sources`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentSource {
    pub id: String,
    pub title: String,
    pub source_type: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub language: Option<String>,
    #[serde(default)]
    pub created_at: Option<String>,
}

/// Form payload for `POST /admin/rag/sources`.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SourceForm {
    pub title: String,
    pub source_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SourceList {
    pub sources: Vec<DocumentSource>,
}

/// Result of `POST /admin/rag/sources/{id}/ingest` (multipart file upload).
#[derive(Debug, Clone, Deserialize)]
pub struct IngestResult {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub chunks: Option<u32>,
}
