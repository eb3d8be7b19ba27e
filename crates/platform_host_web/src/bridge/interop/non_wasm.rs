use crate::bridge::HttpResponse;

pub async fn fetch_text(
    method: &str,
    path: &str,
    _json_body: Option<&str>,
) -> Result<HttpResponse, String> {
    Err(format!("{method} {path}: fetch is only available in the browser"))
}
