//! `fetch`-backed chat endpoint transport.

use platform_host::{ChatTransport, ChatTransportFuture, ChatTransportReply, CHAT_ENDPOINT_PATH};
use serde::Serialize;

use crate::bridge::http_post_json;

#[derive(Debug, Serialize)]
struct ChatRequestBody<'a> {
    message: &'a str,
}

#[derive(Debug, Clone)]
/// Browser chat transport that POSTs `{ "message": ... }` to the chat endpoint.
pub struct WebChatTransport {
    endpoint: String,
}

impl WebChatTransport {
    /// Creates a transport posting to a custom site-relative endpoint.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
        }
    }
}

impl Default for WebChatTransport {
    fn default() -> Self {
        Self::with_endpoint(CHAT_ENDPOINT_PATH)
    }
}

impl ChatTransport for WebChatTransport {
    fn send_message<'a>(
        &'a self,
        message: &'a str,
    ) -> ChatTransportFuture<'a, Result<ChatTransportReply, String>> {
        Box::pin(async move {
            let body = serde_json::to_string(&ChatRequestBody { message })
                .map_err(|e| e.to_string())?;
            let response = http_post_json(&self.endpoint, &body).await?;
            if response.is_success() {
                Ok(ChatTransportReply::Answered(response.body))
            } else {
                Ok(ChatTransportReply::Rejected(response.status))
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn request_body_matches_endpoint_contract() {
        let body = serde_json::to_string(&ChatRequestBody { message: "hi" }).expect("encode");
        assert_eq!(body, r#"{"message":"hi"}"#);
    }

    #[test]
    fn native_targets_surface_a_transport_error() {
        let transport = WebChatTransport::default();
        let result = block_on(transport.send_message("hello"));
        assert!(result.is_err());
    }
}
