// src/presentation/http/controllers/root.rs
use axum::{Json, http::HeaderMap};
use headers::{Host, HeaderMapExt};
use std::collections::BTreeMap;

const FORWARDED_PROTO: &str = "x-forwarded-proto";

/// Absolute base URL of the request, honouring a reverse proxy's scheme.
fn base_url(headers: &HeaderMap) -> String {
    let scheme = headers
        .get(FORWARDED_PROTO)
        .and_then(|value| value.to_str().ok())
        .filter(|value| matches!(*value, "http" | "https"))
        .unwrap_or("http");
    let host = headers
        .typed_get::<Host>()
        .map(|host| host.to_string())
        .unwrap_or_else(|| "localhost".into());
    format!("{scheme}://{host}")
}

#[utoipa::path(
    get,
    path = "/viewset/",
    responses(
        (status = 200, description = "Resource name to collection URL.", body = BTreeMap<String, String>,
         example = json!({ "article": "http://localhost:8000/viewset/article/" }))
    ),
    tag = "Articles"
)]
pub async fn api_root(headers: HeaderMap) -> Json<BTreeMap<&'static str, String>> {
    let base = base_url(&headers);
    Json(BTreeMap::from([("article", format!("{base}/viewset/article/"))]))
}
