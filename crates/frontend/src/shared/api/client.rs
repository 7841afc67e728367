//! The request executor shared by every backend-facing function.
//!
//! One JSON path, one multipart path. No retries, no explicit timeout, no
//! de-duplication: each page guards double-submits with its own in-flight
//! flags, and a late response simply overwrites an earlier one.

use gloo_net::http::{Method, Request, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::config::{ApiConfig, API_KEY_HEADER};
use super::error::ApiError;

/// Shared handle to the backend. Cheap to clone; provided to the whole app
/// through Leptos context.
#[derive(Clone)]
pub struct ApiClient {
    config: ApiConfig,
}

impl ApiClient {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    pub fn base_url(&self) -> &str {
        &self.config.base_url
    }

    /// Body-less request (GET, DELETE, bare POST).
    pub async fn request<T>(
        &self,
        method: Method,
        path: &str,
        requires_auth: bool,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let request = self
            .builder(method, path, requires_auth, false)
            .build()
            .map_err(|e| {
                log::error!("failed to build request for {}: {}", path, e);
                ApiError::unexpected()
            })?;
        self.execute(path, request).await
    }

    /// Request with a JSON body (`Content-Type: application/json`).
    pub async fn request_json<T, B>(
        &self,
        method: Method,
        path: &str,
        body: &B,
        requires_auth: bool,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let request = self
            .builder(method, path, requires_auth, false)
            .json(body)
            .map_err(|e| {
                log::error!("failed to serialize body for {}: {}", path, e);
                ApiError::unexpected()
            })?;
        self.execute(path, request).await
    }

    /// Multipart upload. The body is a browser `FormData`; the runtime picks
    /// the content type and boundary itself, so none is set here.
    pub async fn upload<T>(
        &self,
        path: &str,
        form: web_sys::FormData,
        requires_auth: bool,
    ) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        let request = self
            .builder(Method::POST, path, requires_auth, true)
            .body(form)
            .map_err(|e| {
                log::error!("failed to attach form data for {}: {}", path, e);
                ApiError::unexpected()
            })?;
        self.execute(path, request).await
    }

    fn builder(
        &self,
        method: Method,
        path: &str,
        requires_auth: bool,
        multipart: bool,
    ) -> RequestBuilder {
        let url = format!("{}{}", self.config.base_url, path);
        let mut builder = RequestBuilder::new(&url).method(method);
        for (name, value) in request_headers(&self.config, requires_auth, multipart) {
            builder = builder.header(name, &value);
        }
        builder
    }

    async fn execute<T>(&self, path: &str, request: Request) -> Result<T, ApiError>
    where
        T: DeserializeOwned,
    {
        log::debug!("API request: {}", request.url());

        let response = request.send().await.map_err(|e| {
            log::error!("API request to {} failed: {}", path, e);
            ApiError::transport()
        })?;

        if !response.ok() {
            let status = response.status();
            let status_text = response.status_text();
            let body = response.text().await.unwrap_or_default();
            let err = ApiError::from_response(status, &status_text, &body);
            log::error!("API error on {}: HTTP {}: {}", path, status, err.message);
            return Err(err);
        }

        response.json::<T>().await.map_err(|e| {
            log::error!("undecodable response from {}: {}", path, e);
            ApiError::unexpected()
        })
    }
}

/// Headers attached to every request. All calls declare a JSON content type
/// except multipart uploads, where the browser supplies the boundary. The
/// key header is attached exactly when the endpoint requires auth and a key
/// is configured; unauthenticated endpoints never carry it.
fn request_headers(
    config: &ApiConfig,
    requires_auth: bool,
    multipart: bool,
) -> Vec<(&'static str, String)> {
    let mut headers = Vec::new();
    if !multipart {
        headers.push(("Content-Type", "application/json".to_string()));
    }
    if requires_auth {
        if let Some(key) = config.api_key.as_deref() {
            headers.push((API_KEY_HEADER, key.to_string()));
        }
    }
    headers
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(key: Option<&str>) -> ApiConfig {
        ApiConfig {
            base_url: "http://localhost:8000".to_string(),
            api_key: key.map(str::to_string),
        }
    }

    fn key_header(headers: &[(&'static str, String)]) -> Option<String> {
        headers
            .iter()
            .find(|(name, _)| *name == "X-API-Key")
            .map(|(_, value)| value.clone())
    }

    #[test]
    fn admin_calls_carry_the_key_header() {
        let headers = request_headers(&config(Some("secret")), true, false);
        assert_eq!(key_header(&headers), Some("secret".to_string()));
    }

    #[test]
    fn public_calls_never_carry_the_key_header() {
        let headers = request_headers(&config(Some("secret")), false, false);
        assert_eq!(key_header(&headers), None);
    }

    #[test]
    fn missing_key_means_no_header_rather_than_a_fallback() {
        let headers = request_headers(&config(None), true, false);
        assert_eq!(key_header(&headers), None);
    }

    #[test]
    fn body_less_requests_still_declare_json_content_type() {
        let headers = request_headers(&config(None), false, false);
        assert_eq!(
            headers,
            vec![("Content-Type", "application/json".to_string())]
        );
    }

    #[test]
    fn uploads_leave_the_content_type_to_the_browser() {
        let headers = request_headers(&config(Some("secret")), true, true);
        assert_eq!(headers, vec![("X-API-Key", "secret".to_string())]);
    }
}
