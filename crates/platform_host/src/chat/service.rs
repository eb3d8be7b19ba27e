//! Chat transport service contracts and adapters.

use std::{cell::RefCell, collections::VecDeque, future::Future, pin::Pin, rc::Rc};

/// Site-relative path of the optional chat endpoint.
pub const CHAT_ENDPOINT_PATH: &str = "/api/chat";

/// Object-safe boxed future used by [`ChatTransport`] async methods.
pub type ChatTransportFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Outcome of a chat request that reached the endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatTransportReply {
    /// The endpoint answered with a success status and this JSON body.
    Answered(String),
    /// The endpoint answered with a non-success HTTP status.
    Rejected(u16),
}

/// Host service that posts one user message to the chat endpoint.
///
/// `Err` is reserved for transport failures (no network, aborted request). A reachable endpoint
/// that refuses the request yields [`ChatTransportReply::Rejected`].
pub trait ChatTransport {
    /// Sends `message` and resolves with the endpoint reply.
    fn send_message<'a>(
        &'a self,
        message: &'a str,
    ) -> ChatTransportFuture<'a, Result<ChatTransportReply, String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Transport for hosts without a chat backend; behaves like a missing endpoint (HTTP 404).
pub struct OfflineChatTransport;

impl ChatTransport for OfflineChatTransport {
    fn send_message<'a>(
        &'a self,
        _message: &'a str,
    ) -> ChatTransportFuture<'a, Result<ChatTransportReply, String>> {
        Box::pin(async { Ok(ChatTransportReply::Rejected(404)) })
    }
}

#[derive(Debug, Clone, Default)]
/// Test transport replaying queued outcomes and recording every sent message.
pub struct ScriptedChatTransport {
    replies: Rc<RefCell<VecDeque<Result<ChatTransportReply, String>>>>,
    sent: Rc<RefCell<Vec<String>>>,
}

impl ScriptedChatTransport {
    /// Queues the outcome returned by the next unanswered send.
    pub fn push_reply(&self, reply: Result<ChatTransportReply, String>) {
        self.replies.borrow_mut().push_back(reply);
    }

    /// Returns every message sent so far.
    pub fn sent_messages(&self) -> Vec<String> {
        self.sent.borrow().clone()
    }
}

impl ChatTransport for ScriptedChatTransport {
    fn send_message<'a>(
        &'a self,
        message: &'a str,
    ) -> ChatTransportFuture<'a, Result<ChatTransportReply, String>> {
        Box::pin(async move {
            self.sent.borrow_mut().push(message.to_string());
            self.replies
                .borrow_mut()
                .pop_front()
                .unwrap_or(Ok(ChatTransportReply::Rejected(404)))
        })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn offline_transport_looks_like_a_missing_endpoint() {
        let reply = block_on(OfflineChatTransport.send_message("hello")).expect("send");
        assert_eq!(reply, ChatTransportReply::Rejected(404));
    }

    #[test]
    fn scripted_transport_replays_in_order_and_records_messages() {
        let transport = ScriptedChatTransport::default();
        transport.push_reply(Ok(ChatTransportReply::Answered("{}".to_string())));
        transport.push_reply(Err("offline".to_string()));
        let transport_obj: &dyn ChatTransport = &transport;

        assert_eq!(
            block_on(transport_obj.send_message("one")),
            Ok(ChatTransportReply::Answered("{}".to_string()))
        );
        assert_eq!(
            block_on(transport_obj.send_message("two")),
            Err("offline".to_string())
        );
        assert_eq!(
            block_on(transport_obj.send_message("three")),
            Ok(ChatTransportReply::Rejected(404))
        );
        assert_eq!(transport.sent_messages(), vec!["one", "two", "three"]);
    }
}
