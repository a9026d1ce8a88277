use axum::http::HeaderMap;

/// Derive the request's base URL from its Host header.
///
/// Mirrors how the short URL should reflect whatever host the client
/// actually reached. Returns `None` when the header is absent or not
/// valid UTF-8, in which case callers fall back to the configured base URL.
pub(crate) fn request_base_url(headers: &HeaderMap) -> Option<String> {
    let host = headers.get(axum::http::header::HOST)?.to_str().ok()?;
    if host.is_empty() {
        return None;
    }
    Some(format!("http://{}", host))
}
