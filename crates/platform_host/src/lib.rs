//! Typed host-domain contracts shared by the portfolio desktop runtime and its browser adapters.
//!
//! This crate is the API-first boundary for everything the shell reads from or writes to the
//! outside world: the settings blob, the static content document, and the optional chat
//! endpoint. Concrete browser adapters live in `platform_host_web`; tests use the in-memory
//! adapters exported here.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

pub mod chat;
pub mod content;
pub mod host;
pub mod storage;
pub mod time;

pub use chat::service::{
    ChatTransport, ChatTransportFuture, ChatTransportReply, OfflineChatTransport,
    ScriptedChatTransport, CHAT_ENDPOINT_PATH,
};
pub use content::source::{
    ContentSource, ContentSourceFuture, NoopContentSource, StaticContentSource,
    CONTENT_DOCUMENT_PATH,
};
pub use host::{HostServices, HostStrategy};
pub use storage::prefs::{
    load_pref_with, save_pref_with, MemoryPrefsStore, NoopPrefsStore, PrefsStore, PrefsStoreFuture,
};
pub use time::ClockSnapshot;
