//! Content source service contracts and adapters.

use std::{future::Future, pin::Pin, rc::Rc};

/// Site-relative path of the static portfolio content document.
pub const CONTENT_DOCUMENT_PATH: &str = "/data/content.json";

/// Object-safe boxed future used by [`ContentSource`] async methods.
pub type ContentSourceFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a>>;

/// Host service that yields the raw JSON text of the static content document.
///
/// Decoding is left to the caller so the host layer stays agnostic to the document shape.
pub trait ContentSource {
    /// Loads the raw content document.
    fn load_document(&self) -> ContentSourceFuture<'_, Result<String, String>>;
}

#[derive(Debug, Clone, Copy, Default)]
/// Content source for hosts without a document; every load fails.
pub struct NoopContentSource;

impl ContentSource for NoopContentSource {
    fn load_document(&self) -> ContentSourceFuture<'_, Result<String, String>> {
        Box::pin(async { Err("content source unavailable".to_string()) })
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory content source returning a fixed document.
pub struct StaticContentSource {
    raw_json: Rc<str>,
}

impl StaticContentSource {
    /// Creates a source that always yields `raw_json`.
    pub fn new(raw_json: impl Into<String>) -> Self {
        Self {
            raw_json: Rc::from(raw_json.into()),
        }
    }
}

impl ContentSource for StaticContentSource {
    fn load_document(&self) -> ContentSourceFuture<'_, Result<String, String>> {
        let raw = self.raw_json.to_string();
        Box::pin(async move { Ok(raw) })
    }
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;

    #[test]
    fn static_source_yields_its_document() {
        let source = StaticContentSource::new(r#"{"user":{}}"#);
        let source_obj: &dyn ContentSource = &source;
        assert_eq!(
            block_on(source_obj.load_document()).expect("load"),
            r#"{"user":{}}"#
        );
    }

    #[test]
    fn noop_source_reports_unavailable() {
        let err = block_on(NoopContentSource.load_document()).expect_err("noop fails");
        assert!(err.contains("unavailable"));
    }
}
