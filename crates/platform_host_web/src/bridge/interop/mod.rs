//! `fetch` glue with a native stand-in so the HTTP helpers compile off the browser.

use super::http::HttpResponse;

#[cfg(target_arch = "wasm32")]
#[path = "wasm.rs"]
mod target;

#[cfg(not(target_arch = "wasm32"))]
#[path = "non_wasm.rs"]
mod target;

pub async fn fetch_text(
    method: &str,
    path: &str,
    json_body: Option<&str>,
) -> Result<HttpResponse, String> {
    target::fetch_text(method, path, json_body).await
}
