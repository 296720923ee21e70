//! Request-path errors and their client-facing rendering.

use axum::http::uri::InvalidUriParts;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use std::error::Error as _;
use thiserror::Error;

/// Body returned to callers on any forwarding failure.
pub const PROXY_ERROR_MESSAGE: &str = "Proxy error";

/// A request could not be relayed to the upstream.
///
/// Upstream responses with 4xx/5xx status codes are relayed as-is and
/// never become a `ProxyError`.
#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("cannot build upstream target: {0}")]
    InvalidTarget(#[from] InvalidUriParts),
    #[error("cannot build upstream request: {0}")]
    Request(#[from] axum::http::Error),
    #[error("upstream transport failure: {0}")]
    Transport(#[from] hyper_util::client::legacy::Error),
}

impl ProxyError {
    /// Detailed description for the event log, including the source chain.
    pub fn detail(&self) -> String {
        let mut detail = self.to_string();
        let mut source = self.source().and_then(|e| e.source());
        while let Some(cause) = source {
            detail.push_str(": ");
            detail.push_str(&cause.to_string());
            source = cause.source();
        }
        detail
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({ "error": PROXY_ERROR_MESSAGE })),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Uri;

    fn invalid_target() -> ProxyError {
        let mut broken = Uri::from_static("/only/path").into_parts();
        broken.scheme = Some(axum::http::uri::Scheme::HTTP);
        ProxyError::from(Uri::from_parts(broken).unwrap_err())
    }

    #[tokio::test]
    async fn renders_uniform_500() {
        let response = invalid_target().into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = axum::body::to_bytes(response.into_body(), 1024).await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value, json!({ "error": "Proxy error" }));
    }

    #[test]
    fn detail_mentions_the_cause() {
        assert!(invalid_target().detail().starts_with("cannot build upstream target"));
    }
}
