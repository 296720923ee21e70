//! Inbound request inspection.
//!
//! # Responsibilities
//! - Resolve the client address from the trusted edge header
//! - Reconstruct the original request URL for the event log
//! - Correlate a request ID for tracing spans
//!
//! # Design Decisions
//! - Nothing here mutates the request: forwarded headers stay verbatim
//! - The request ID lives only in the tracing span, never in relayed headers

use axum::body::Body;
use axum::http::{header, HeaderMap, HeaderName, Request};
use tracing::Span;
use uuid::Uuid;

/// Header used to correlate requests across hops.
pub const X_REQUEST_ID: &str = "x-request-id";

/// Placeholder when the edge header is absent.
pub const UNKNOWN_CLIENT: &str = "unknown";

/// Client address from `header`, or "unknown".
pub fn client_ip(headers: &HeaderMap, header: &HeaderName) -> String {
    headers
        .get(header)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .unwrap_or(UNKNOWN_CLIENT)
        .to_string()
}

/// The URL the caller asked for, as `scheme://host/path?query`.
///
/// Absolute-form request targets are used as-is; otherwise the Host header
/// (or HTTP/2 authority) supplies the host, and `x-forwarded-proto` the scheme.
pub fn original_url<B>(request: &Request<B>) -> String {
    let uri = request.uri();
    if uri.scheme().is_some() && uri.authority().is_some() {
        return uri.to_string();
    }

    let headers = request.headers();
    let host = headers
        .get(header::HOST)
        .and_then(|v| v.to_str().ok())
        .or_else(|| uri.authority().map(|a| a.as_str()))
        .unwrap_or("localhost");
    let scheme = headers
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("http");
    let path_and_query = uri.path_and_query().map(|pq| pq.as_str()).unwrap_or("/");

    format!("{scheme}://{host}{path_and_query}")
}

/// Inbound `x-request-id`, or a fresh UUID v4.
pub fn request_id(headers: &HeaderMap) -> String {
    headers
        .get(X_REQUEST_ID)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| Uuid::new_v4().to_string())
}

/// Span factory for `TraceLayer`.
pub fn make_span(request: &Request<Body>) -> Span {
    tracing::info_span!(
        "request",
        request_id = %request_id(request.headers()),
        method = %request.method(),
        path = %request.uri().path(),
    )
}
