//! Settings blob persisted in `window.localStorage`.
//!
//! Storage calls are synchronous in the browser; they are wrapped in ready futures to satisfy the
//! async [`platform_host::PrefsStore`] contract. Non-browser builds read nothing and drop writes.

use platform_host::{PrefsStore, PrefsStoreFuture};

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Result<web_sys::Storage, String> {
    web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .ok_or_else(|| "localStorage unavailable".to_string())
}

#[cfg(target_arch = "wasm32")]
fn read_item(key: &str) -> Result<Option<String>, String> {
    local_storage()?
        .get_item(key)
        .map_err(|err| format!("localStorage get_item failed: {err:?}"))
}

#[cfg(not(target_arch = "wasm32"))]
fn read_item(_key: &str) -> Result<Option<String>, String> {
    Ok(None)
}

#[cfg(target_arch = "wasm32")]
fn write_item(key: &str, raw_json: &str) -> Result<(), String> {
    local_storage()?
        .set_item(key, raw_json)
        .map_err(|err| format!("localStorage set_item failed: {err:?}"))
}

#[cfg(not(target_arch = "wasm32"))]
fn write_item(_key: &str, _raw_json: &str) -> Result<(), String> {
    Ok(())
}

#[derive(Debug, Clone, Copy, Default)]
/// Browser preference store backed by `window.localStorage`.
pub struct WebPrefsStore;

impl PrefsStore for WebPrefsStore {
    fn load_pref<'a>(
        &'a self,
        key: &'a str,
    ) -> PrefsStoreFuture<'a, Result<Option<String>, String>> {
        Box::pin(async move { read_item(key) })
    }

    fn save_pref<'a>(
        &'a self,
        key: &'a str,
        raw_json: &'a str,
    ) -> PrefsStoreFuture<'a, Result<(), String>> {
        Box::pin(async move { write_item(key, raw_json) })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn native_builds_read_nothing_and_accept_writes() {
        let store = WebPrefsStore;
        block_on(store.save_pref("sanjayos-settings", "{}")).expect("save");
        assert_eq!(block_on(store.load_pref("sanjayos-settings")).expect("load"), None);
    }
}
