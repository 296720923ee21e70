//! Responses for the log viewer, the JSON listing, clearing and health.

use axum::extract::Query;
use axum::http::{header, HeaderValue, Uri};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};

use crate::diagnostics::page::LOG_PAGE;
use crate::logs::{LogEntry, LogStore};

/// Content type of the viewer page.
pub const HTML_CONTENT_TYPE: &str = "text/html;charset=UTF-8";

#[derive(Debug, Serialize, Deserialize)]
pub struct LogsResponse {
    pub success: bool,
    pub data: Vec<LogEntry>,
    pub total: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ClearResponse {
    pub success: bool,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub logs: usize,
}

/// Query string accepted by the listing.
#[derive(Debug, Default, Deserialize)]
pub struct ListParams {
    pub limit: Option<usize>,
}

impl ListParams {
    /// Parse from a request URI; malformed queries fall back to defaults.
    pub fn from_uri(uri: &Uri) -> Self {
        Query::<ListParams>::try_from_uri(uri)
            .map(|Query(params)| params)
            .unwrap_or_default()
    }

    /// Effective limit, clamped to `1..=max`.
    pub fn effective_limit(&self, max: usize) -> usize {
        self.limit.map_or(max, |n| n.clamp(1, max.max(1)))
    }
}

pub fn log_page() -> Response {
    (
        [(header::CONTENT_TYPE, HeaderValue::from_static(HTML_CONTENT_TYPE))],
        LOG_PAGE,
    )
        .into_response()
}

pub fn list_logs(store: &LogStore, params: &ListParams, max: usize) -> Response {
    let (data, total) = store.snapshot(params.effective_limit(max));
    Json(LogsResponse {
        success: true,
        data,
        total,
    })
    .into_response()
}

pub fn clear_logs(store: &LogStore) -> Response {
    let dropped = store.len();
    store.clear();
    tracing::info!(dropped, "Event log cleared");
    Json(ClearResponse { success: true }).into_response()
}

pub fn health(store: &LogStore) -> Response {
    Json(HealthResponse {
        status: "healthy".to_string(),
        logs: store.len(),
    })
    .into_response()
}
