//! Forwarding of non-diagnostic requests.

use std::time::Instant;

use axum::body::Body;
use axum::http::{header, HeaderValue, Request, Uri, Version};
use axum::response::{IntoResponse, Response};
use hyper::body::Incoming;
use serde_json::{json, Value};

use crate::error::ProxyError;
use crate::http::request::{client_ip, original_url};
use crate::http::server::AppState;
use crate::logs::entry::fields;
use crate::logs::{LogEntry, LogStore, EVENT_COMPLETED, EVENT_FAILED, EVENT_RECEIVED};
use crate::observability::metrics;

/// Appends events for a single proxied request.
struct EventRecorder<'a> {
    store: &'a LogStore,
    request_url: String,
    client_ip: String,
    echo: bool,
}

impl EventRecorder<'_> {
    fn record(&self, message: &str, data: Value) {
        let entry = LogEntry::new(
            message,
            fields(data),
            self.request_url.clone(),
            self.client_ip.clone(),
        );
        if self.echo {
            if let Ok(line) = serde_json::to_string(&entry) {
                tracing::info!(target: "relay_proxy::events", entry = %line, "{message}");
            }
        }
        let held = self.store.append(entry);
        tracing::trace!(held, "Event appended");
    }
}

/// Forward a request to the upstream and relay its response.
pub async fn forward(state: &AppState, request: Request<Body>) -> Response {
    let start_time = Instant::now();
    let method = request.method().clone();

    let events = EventRecorder {
        store: &state.logs,
        request_url: original_url(&request),
        client_ip: client_ip(request.headers(), &state.client_ip_header),
        echo: state.echo_events,
    };
    events.record(
        EVENT_RECEIVED,
        json!({ "path": request.uri().path(), "method": method.as_str() }),
    );

    match send_upstream(state, request).await {
        Ok((target, response)) => {
            let status = response.status();
            tracing::debug!(status = %status, url = %target, "Upstream responded");
            events.record(
                EVENT_COMPLETED,
                json!({ "status": status.as_u16(), "url": target.to_string() }),
            );
            metrics::record_request(method.as_str(), status.as_u16(), start_time);

            let (parts, body) = response.into_parts();
            Response::from_parts(parts, Body::new(body))
        }
        Err(err) => {
            let detail = err.detail();
            tracing::error!(method = %method, error = %detail, "Upstream request failed");
            events.record(EVENT_FAILED, json!({ "error": detail }));
            metrics::record_upstream_failure(method.as_str());
            metrics::record_request(method.as_str(), 500, start_time);
            err.into_response()
        }
    }
}

/// Rewrite the target and send. Method, headers and body are passed through.
async fn send_upstream(
    state: &AppState,
    request: Request<Body>,
) -> Result<(Uri, hyper::Response<Incoming>), ProxyError> {
    let (mut parts, body) = request.into_parts();

    let target = state.upstream.target_uri(&parts.uri)?;
    parts.uri = target.clone();
    // The client speaks HTTP/1 to the upstream whatever the inbound version.
    parts.version = Version::HTTP_11;

    if state.rewrite_host {
        let host = HeaderValue::from_str(state.upstream.authority().as_str())
            .map_err(axum::http::Error::from)?;
        parts.headers.insert(header::HOST, host);
    }

    let response = state.client.request(Request::from_parts(parts, body)).await?;
    Ok((target, response))
}
