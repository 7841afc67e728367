//! Backend connection settings.
//!
//! Resolved once at startup from compile-time environment variables (the CSR
//! analogue of build-time `NEXT_PUBLIC_*` vars) and handed to [`ApiClient`]
//! explicitly — there is no mutable module-level state.
//!
//! [`ApiClient`]: super::ApiClient

/// Header carrying the static admin key on authenticated endpoints.
pub const API_KEY_HEADER: &str = "X-API-Key";

/// Local backend used during development.
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

// Deployed backends are addressed by bare service name; the hosting platform
// serves them under this domain.
const HOSTED_DOMAIN: &str = "onrender.com";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    /// Admin API key. `None` means admin endpoints are called without the
    /// key header and rely on the backend to reject them. There is no
    /// bundled fallback key.
    pub api_key: Option<String>,
}

impl ApiConfig {
    /// Read `CLINIC_API_BASE` / `CLINIC_API_KEY` baked in at compile time.
    pub fn from_env() -> Self {
        let raw_base = option_env!("CLINIC_API_BASE").unwrap_or(DEFAULT_API_BASE);
        Self {
            base_url: normalize_base_url(raw_base),
            api_key: option_env!("CLINIC_API_KEY").map(str::to_string),
        }
    }
}

/// A value without an explicit scheme is treated as a bare hosting service
/// name and rewritten to a fully-qualified HTTPS URL; anything already
/// carrying `http://` or `https://` is used as-is.
pub fn normalize_base_url(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
        trimmed.to_string()
    } else {
        format!("https://{}.{}", trimmed, HOSTED_DOMAIN)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_service_name_becomes_hosted_https_url() {
        assert_eq!(
            normalize_base_url("clinic-bot-api"),
            "https://clinic-bot-api.onrender.com"
        );
    }

    #[test]
    fn qualified_urls_pass_through() {
        assert_eq!(
            normalize_base_url("http://localhost:8000"),
            "http://localhost:8000"
        );
        assert_eq!(
            normalize_base_url("https://api.clinic.sa"),
            "https://api.clinic.sa"
        );
    }

    #[test]
    fn trailing_slash_is_dropped_before_path_concatenation() {
        assert_eq!(
            normalize_base_url("http://localhost:8000/"),
            "http://localhost:8000"
        );
    }
}
