//! `fetch`-backed static content document source.

use platform_host::{ContentSource, ContentSourceFuture, CONTENT_DOCUMENT_PATH};

use crate::bridge::http_get_text;

#[derive(Debug, Clone)]
/// Browser content source that GETs the static content document.
pub struct WebContentSource {
    path: String,
}

impl WebContentSource {
    /// Creates a source reading from a custom site-relative path.
    pub fn with_path(path: impl Into<String>) -> Self {
        Self { path: path.into() }
    }
}

impl Default for WebContentSource {
    fn default() -> Self {
        Self::with_path(CONTENT_DOCUMENT_PATH)
    }
}

impl ContentSource for WebContentSource {
    fn load_document(&self) -> ContentSourceFuture<'_, Result<String, String>> {
        Box::pin(async move {
            let response = http_get_text(&self.path).await?;
            if !response.is_success() {
                return Err(format!("GET {} returned HTTP {}", self.path, response.status));
            }
            Ok(response.body)
        })
    }
}
