use contracts::domain::knowledge::{DocumentSource, IngestResult, SourceForm, SourceList};
use gloo_net::http::Method;

use crate::shared::api::{ApiClient, ApiError};

pub async fn fetch_sources(api: &ApiClient) -> Result<Vec<DocumentSource>, ApiError> {
    let list: SourceList = api.request(Method::GET, "/admin/rag/sources", true).await?;
    Ok(list.sources)
}

pub async fn create_source(
    api: &ApiClient,
    form: &SourceForm,
) -> Result<DocumentSource, ApiError> {
    api.request_json(Method::POST, "/admin/rag/sources", form, true)
        .await
}

/// Upload a document into an existing source. Multipart body; the browser
/// sets the content type and boundary.
pub async fn ingest_file(
    api: &ApiClient,
    source_id: &str,
    file: &web_sys::File,
) -> Result<IngestResult, ApiError> {
    let form = web_sys::FormData::new().map_err(|_| ApiError::unexpected())?;
    form.append_with_blob("file", file)
        .map_err(|_| ApiError::unexpected())?;
    api.upload(&format!("/admin/rag/sources/{}/ingest", source_id), form, true)
        .await
}
