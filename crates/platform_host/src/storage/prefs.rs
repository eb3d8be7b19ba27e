//! Settings-blob storage contracts and adapters.
//!
//! Each key holds one JSON document. The desktop keeps every user setting in a single blob, so
//! in practice only `sanjayos-settings` is ever read or written.

use std::{cell::RefCell, collections::HashMap, future::Future, pin::Pin, rc::Rc};

use serde::{de::DeserializeOwned, Serialize};

/// Boxed future returned by [`PrefsStore`] methods so the trait stays object safe.
pub type PrefsStoreFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Persistent JSON-text storage keyed by string.
pub trait PrefsStore {
    /// Reads the text stored under `key`; `Ok(None)` when nothing was saved yet.
    fn load_pref<'a>(
        &'a self,
        key: &'a str,
    ) -> PrefsStoreFuture<'a, Result<Option<String>, String>>;

    /// Overwrites the text stored under `key`.
    fn save_pref<'a>(
        &'a self,
        key: &'a str,
        raw_json: &'a str,
    ) -> PrefsStoreFuture<'a, Result<(), String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Store that accepts writes and always reads back nothing.
pub struct NoopPrefsStore;

impl PrefsStore for NoopPrefsStore {
    fn load_pref<'a>(&'a self, _: &'a str) -> PrefsStoreFuture<'a, Result<Option<String>, String>> {
        Box::pin(async { Ok(None) })
    }

    fn save_pref<'a>(&'a self, _: &'a str, _: &'a str) -> PrefsStoreFuture<'a, Result<(), String>> {
        Box::pin(async { Ok(()) })
    }
}

#[derive(Debug, Clone, Default)]
/// Map-backed store for tests and non-browser hosts. Clones share one map.
pub struct MemoryPrefsStore {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemoryPrefsStore {
    /// Returns the stored text for `key` synchronously.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn put(&self, key: &str, raw_json: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_owned(), raw_json.to_owned());
    }
}

impl PrefsStore for MemoryPrefsStore {
    fn load_pref<'a>(
        &'a self,
        key: &'a str,
    ) -> PrefsStoreFuture<'a, Result<Option<String>, String>> {
        Box::pin(async move { Ok(self.raw(key)) })
    }

    fn save_pref<'a>(
        &'a self,
        key: &'a str,
        raw_json: &'a str,
    ) -> PrefsStoreFuture<'a, Result<(), String>> {
        Box::pin(async move {
            self.put(key, raw_json);
            Ok(())
        })
    }
}

/// Loads `key` and decodes it as `T`.
///
/// # Errors
///
/// Returns the store error, or the `serde_json` message when the stored text is not a valid `T`.
pub async fn load_pref_with<S, T>(store: &S, key: &str) -> Result<Option<T>, String>
where
    S: PrefsStore + ?Sized,
    T: DeserializeOwned,
{
    match store.load_pref(key).await? {
        Some(raw) => serde_json::from_str(&raw)
            .map(Some)
            .map_err(|err| err.to_string()),
        None => Ok(None),
    }
}

/// Encodes `value` as JSON and saves it under `key`.
///
/// # Errors
///
/// Returns the `serde_json` message or the store error.
pub async fn save_pref_with<S, T>(store: &S, key: &str, value: &T) -> Result<(), String>
where
    S: PrefsStore + ?Sized,
    T: Serialize,
{
    let raw = serde_json::to_string(value).map_err(|err| err.to_string())?;
    store.save_pref(key, &raw).await
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;
    use serde::{Deserialize, Serialize};

    use super::*;

    #[derive(Debug, PartialEq, Serialize, Deserialize)]
    struct Blob {
        sounds: bool,
        wallpaper: String,
    }

    #[test]
    fn memory_store_keeps_the_last_write() {
        let store = MemoryPrefsStore::default();
        let dyn_store: &dyn PrefsStore = &store;

        block_on(dyn_store.save_pref("blob", r#"{"sounds":false}"#)).expect("first save");
        block_on(dyn_store.save_pref("blob", r#"{"sounds":true}"#)).expect("second save");

        assert_eq!(store.raw("blob").as_deref(), Some(r#"{"sounds":true}"#));
        assert_eq!(block_on(dyn_store.load_pref("other")).expect("load"), None);
    }

    #[test]
    fn typed_values_are_visible_through_clones() {
        let store = MemoryPrefsStore::default();
        let clone = store.clone();
        let blob = Blob {
            sounds: true,
            wallpaper: "tech".to_string(),
        };

        block_on(save_pref_with(&store, "blob", &blob)).expect("save typed");
        let loaded: Option<Blob> = block_on(load_pref_with(&clone, "blob")).expect("load typed");

        assert_eq!(loaded, Some(blob));
    }

    #[test]
    fn corrupt_text_is_a_decode_error() {
        let store = MemoryPrefsStore::default();
        block_on(store.save_pref("blob", "{not json")).expect("save");

        assert!(block_on(load_pref_with::<_, Blob>(&store, "blob")).is_err());
    }

    #[test]
    fn noop_store_forgets_writes() {
        let store = NoopPrefsStore;
        block_on(store.save_pref("blob", "{}")).expect("save");

        assert_eq!(block_on(store.load_pref("blob")).expect("load"), None);
    }
}
