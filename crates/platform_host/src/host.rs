//! Host service bundle handed from the entry layer to the desktop runtime.

use std::rc::Rc;

use crate::{
    ChatTransport, ContentSource, NoopContentSource, NoopPrefsStore, OfflineChatTransport,
    PrefsStore,
};

/// Stable host strategy selected for the current build.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostStrategy {
    /// Browser-backed composition (`localStorage`, `fetch`).
    Browser,
    /// In-memory composition used by tests and non-browser targets.
    Memory,
}

impl HostStrategy {
    /// Returns a stable string token for diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Browser => "browser",
            Self::Memory => "memory",
        }
    }
}

/// Host service bundle injected into the desktop runtime.
///
/// Environment-specific adapter selection happens before this bundle crosses into
/// `desktop_runtime`, so the runtime and panel crates never import browser types.
#[derive(Clone)]
pub struct HostServices {
    /// Settings blob storage.
    pub prefs: Rc<dyn PrefsStore>,
    /// Static content document source.
    pub content: Rc<dyn ContentSource>,
    /// Chat endpoint transport.
    pub chat: Rc<dyn ChatTransport>,
    /// Strategy identifier for diagnostics.
    pub host_strategy: HostStrategy,
}

impl HostServices {
    /// Bundle with no persistence, no content, and an unreachable chat endpoint.
    pub fn offline() -> Self {
        Self {
            prefs: Rc::new(NoopPrefsStore),
            content: Rc::new(NoopContentSource),
            chat: Rc::new(OfflineChatTransport),
            host_strategy: HostStrategy::Memory,
        }
    }
}

impl std::fmt::Debug for HostServices {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HostServices")
            .field("host_strategy", &self.host_strategy)
            .finish_non_exhaustive()
    }
}
