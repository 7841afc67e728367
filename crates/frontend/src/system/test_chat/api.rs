use contracts::domain::chat::{ChatRequest, ChatResponse};
use gloo_net::http::Method;

use crate::shared::api::{ApiClient, ApiError};

/// Talk to the bot exactly like an end user would; the chat test endpoint is
/// public and must not receive the admin key.
pub async fn send_chat(
    api: &ApiClient,
    message: &str,
    user_id: &str,
    channel: &str,
) -> Result<ChatResponse, ApiError> {
    let body = ChatRequest::new(message, user_id, channel);
    api.request_json(Method::POST, "/test/chat", &body, false)
        .await
}
