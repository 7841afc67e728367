//! Error contract of the API client.
//!
//! Every failure mode collapses into an [`ApiError`] whose `message` is safe
//! to show to the user verbatim. Pages never see raw transport exceptions.

use std::fmt;

/// Advisory shown when the backend is unreachable at the network level.
pub const ERR_CANNOT_CONNECT: &str =
    "لا يمكن الاتصال بالخادم. تأكد من أن الباك إند يعمل";

/// Generic fallback for failures that carry no usable message.
pub const ERR_UNEXPECTED: &str = "حدث خطأ غير متوقع";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorKind {
    /// The request never reached the backend (connection refused, DNS, CORS).
    Transport,
    /// The backend answered with a non-success status.
    Http(u16),
    /// Anything else: serialization bugs, undecodable success bodies.
    Unknown,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub kind: ApiErrorKind,
    pub message: String,
}

impl ApiError {
    pub fn transport() -> Self {
        Self {
            kind: ApiErrorKind::Transport,
            message: ERR_CANNOT_CONNECT.to_string(),
        }
    }

    pub fn unexpected() -> Self {
        Self {
            kind: ApiErrorKind::Unknown,
            message: ERR_UNEXPECTED.to_string(),
        }
    }

    /// Build the error for a non-success HTTP response.
    pub fn from_response(status: u16, status_text: &str, body: &str) -> Self {
        Self {
            kind: ApiErrorKind::Http(status),
            message: http_error_message(status, status_text, body),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for ApiError {}

/// Extract a human-readable message from an error response body.
///
/// A JSON body yields its `detail` field, then `message`, then the generic
/// fallback. A non-JSON body is shown raw; an empty one is replaced by a
/// synthesized status line. Malformed JSON must never cause a secondary
/// error.
pub fn http_error_message(status: u16, status_text: &str, body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(detail) = value.get("detail").and_then(|v| v.as_str()) {
            return detail.to_string();
        }
        if let Some(message) = value.get("message").and_then(|v| v.as_str()) {
            return message.to_string();
        }
        return ERR_UNEXPECTED.to_string();
    }

    if body.trim().is_empty() {
        format!("HTTP {}: {}", status, status_text)
    } else {
        body.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn detail_field_wins() {
        assert_eq!(
            http_error_message(404, "Not Found", r#"{"detail": "Not found"}"#),
            "Not found"
        );
    }

    #[test]
    fn message_field_is_second_choice() {
        assert_eq!(
            http_error_message(400, "Bad Request", r#"{"message": "اسم الفرع مطلوب"}"#),
            "اسم الفرع مطلوب"
        );
        // detail still wins when both are present
        assert_eq!(
            http_error_message(400, "Bad Request", r#"{"detail": "a", "message": "b"}"#),
            "a"
        );
    }

    #[test]
    fn json_without_known_fields_falls_back_to_generic() {
        assert_eq!(
            http_error_message(500, "Internal Server Error", r#"{"error": 1}"#),
            ERR_UNEXPECTED
        );
    }

    #[test]
    fn malformed_json_falls_back_to_raw_text() {
        assert_eq!(
            http_error_message(502, "Bad Gateway", "<html>upstream timeout</html>"),
            "<html>upstream timeout</html>"
        );
        assert_eq!(
            http_error_message(500, "Internal Server Error", "{truncated"),
            "{truncated"
        );
    }

    #[test]
    fn empty_body_synthesizes_status_line() {
        assert_eq!(
            http_error_message(503, "Service Unavailable", ""),
            "HTTP 503: Service Unavailable"
        );
        assert_eq!(http_error_message(404, "Not Found", "  \n"), "HTTP 404: Not Found");
    }

    #[test]
    fn transport_error_uses_fixed_advisory() {
        let err = ApiError::transport();
        assert_eq!(err.kind, ApiErrorKind::Transport);
        assert_eq!(err.message, ERR_CANNOT_CONNECT);
    }

    #[test]
    fn http_error_carries_status() {
        let err = ApiError::from_response(404, "Not Found", r#"{"detail": "Not found"}"#);
        assert_eq!(err.kind, ApiErrorKind::Http(404));
        assert_eq!(err.message, "Not found");
        assert_eq!(err.to_string(), "Not found");
    }
}
