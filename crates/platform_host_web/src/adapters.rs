use std::rc::Rc;

use platform_host::{
    HostServices, HostStrategy, MemoryPrefsStore, NoopContentSource, OfflineChatTransport,
};

use crate::{WebChatTransport, WebContentSource, WebPrefsStore};

/// Returns the host strategy for the active target.
pub const fn selected_host_strategy() -> HostStrategy {
    #[cfg(target_arch = "wasm32")]
    {
        HostStrategy::Browser
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        HostStrategy::Memory
    }
}

/// Returns the selected host strategy as a stable string token.
pub fn host_strategy_name() -> &'static str {
    selected_host_strategy().as_str()
}

/// Builds the host service bundle for the selected strategy.
///
/// Browser builds talk to `localStorage` and `fetch`; every other target gets an in-memory
/// settings store, no content document, and an unreachable chat endpoint.
pub fn build_host_services() -> HostServices {
    match selected_host_strategy() {
        HostStrategy::Browser => HostServices {
            prefs: Rc::new(WebPrefsStore),
            content: Rc::new(WebContentSource::default()),
            chat: Rc::new(WebChatTransport::default()),
            host_strategy: HostStrategy::Browser,
        },
        HostStrategy::Memory => HostServices {
            prefs: Rc::new(MemoryPrefsStore::default()),
            content: Rc::new(NoopContentSource),
            chat: Rc::new(OfflineChatTransport),
            host_strategy: HostStrategy::Memory,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn native_builds_select_the_memory_strategy() {
        assert_eq!(host_strategy_name(), "memory");
        let services = build_host_services();
        assert_eq!(services.host_strategy, HostStrategy::Memory);
    }
}
