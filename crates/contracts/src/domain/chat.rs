use serde::{Deserialize, Serialize};

/// Body of `POST /test/chat` — the manual chat-testing console.
///
/// Wire names follow the backend: the user id travels as `user_id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    pub user_id: String,
    pub channel: String,
}

impl ChatRequest {
    pub fn new(message: impl Into<String>, user_id: impl Into<String>, channel: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            user_id: user_id.into(),
            channel: channel.into(),
        }
    }
}

/// Bot reply from `POST /test/chat`.
#[derive(Debug, Clone, Deserialize)]
pub struct ChatResponse {
    pub reply: String,
    #[serde(default)]
    pub intent: Option<String>,
    #[serde(default)]
    pub unrecognized: bool,
    #[serde(default)]
    pub needs_handoff: bool,
    #[serde(default)]
    pub db_context_used: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_uses_backend_wire_names() {
        let req = ChatRequest::new("hello", "u1", "whatsapp");
        let value = serde_json::to_value(&req).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "message": "hello",
                "user_id": "u1",
                "channel": "whatsapp"
            })
        );
    }

    #[test]
    fn response_defaults_optional_flags() {
        let resp: ChatResponse = serde_json::from_str(r#"{"reply": "أهلاً"}"#).unwrap();
        assert_eq!(resp.reply, "أهلاً");
        assert!(resp.intent.is_none());
        assert!(!resp.needs_handoff);
        assert!(!resp.db_context_used);
    }
}
