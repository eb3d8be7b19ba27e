/// Status and body of a completed HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

pub(crate) async fn http_get_text(path: &str) -> Result<HttpResponse, String> {
    super::interop::fetch_text("GET", path, None).await
}

pub(crate) async fn http_post_json(path: &str, body: &str) -> Result<HttpResponse, String> {
    super::interop::fetch_text("POST", path, Some(body)).await
}
