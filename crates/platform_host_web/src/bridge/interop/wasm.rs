use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Request, RequestInit, RequestMode, Response};

use crate::bridge::HttpResponse;

fn js_error(context: &str, err: JsValue) -> String {
    format!("{context}: {err:?}")
}

pub async fn fetch_text(
    method: &str,
    path: &str,
    json_body: Option<&str>,
) -> Result<HttpResponse, String> {
    let window = web_sys::window().ok_or_else(|| "window unavailable".to_string())?;

    let init = RequestInit::new();
    init.set_method(method);
    init.set_mode(RequestMode::SameOrigin);
    if let Some(body) = json_body {
        init.set_body(&JsValue::from_str(body));
    }

    let request = Request::new_with_str_and_init(path, &init)
        .map_err(|err| js_error("request build failed", err))?;
    request
        .headers()
        .set("Accept", "application/json")
        .map_err(|err| js_error("request header failed", err))?;
    if json_body.is_some() {
        request
            .headers()
            .set("Content-Type", "application/json")
            .map_err(|err| js_error("request header failed", err))?;
    }

    let response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(|err| js_error("fetch failed", err))?;
    let response: Response = response
        .dyn_into()
        .map_err(|err| js_error("fetch returned a non-response", err))?;
    let status = response.status();

    let text_promise = response
        .text()
        .map_err(|err| js_error("response body unavailable", err))?;
    let body = JsFuture::from(text_promise)
        .await
        .map_err(|err| js_error("response body read failed", err))?
        .as_string()
        .unwrap_or_default();

    Ok(HttpResponse { status, body })
}
