//! Browser bridge modules split by transport domain.

mod http;
mod interop;

pub(crate) use http::{http_get_text, http_post_json, HttpResponse};
