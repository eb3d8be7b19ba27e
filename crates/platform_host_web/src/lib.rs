//! Browser (`wasm32`) implementations of [`platform_host`] service contracts.
//!
//! This crate wires the settings blob to `localStorage` and the content document and chat
//! endpoint to `fetch`. The private `bridge` module holds the request helpers (`bridge::http`)
//! and the `fetch` call itself (`bridge::interop`), which has a native stand-in for tests.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

/// Host-strategy selection and the host service bundle factory used by the entry layer.
pub mod adapters;
mod bridge;
pub mod chat;
pub mod content;
pub mod storage;

pub use adapters::{build_host_services, host_strategy_name, selected_host_strategy};
pub use chat::WebChatTransport;
pub use content::WebContentSource;
pub use storage::local_prefs::WebPrefsStore;
