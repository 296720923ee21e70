//! The fixed upstream origin and target URL construction.

use axum::http::uri::{Authority, InvalidUri, InvalidUriParts, PathAndQuery, Scheme};
use axum::http::Uri;
use thiserror::Error;

/// Reasons an upstream origin is rejected.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("invalid upstream origin `{origin}`: {source}")]
    InvalidUri {
        origin: String,
        #[source]
        source: InvalidUri,
    },
    #[error("upstream origin `{0}` must use the http scheme")]
    UnsupportedScheme(String),
    #[error("upstream origin `{0}` has no host")]
    MissingHost(String),
    #[error("upstream origin `{0}` must not carry a path or query")]
    UnexpectedPath(String),
}

/// Scheme and authority of the single upstream server.
#[derive(Debug, Clone)]
pub struct Upstream {
    authority: Authority,
    origin: String,
}

impl Upstream {
    /// Parse an origin of the form `http://host[:port]`.
    /// A single trailing slash is tolerated.
    pub fn parse(origin: &str) -> Result<Self, UpstreamError> {
        let trimmed = origin.trim().trim_end_matches('/');
        let uri: Uri = trimmed.parse().map_err(|source| UpstreamError::InvalidUri {
            origin: origin.to_string(),
            source,
        })?;

        if uri.scheme() != Some(&Scheme::HTTP) {
            return Err(UpstreamError::UnsupportedScheme(origin.to_string()));
        }
        let authority = uri
            .authority()
            .cloned()
            .ok_or_else(|| UpstreamError::MissingHost(origin.to_string()))?;
        if (!uri.path().is_empty() && uri.path() != "/") || uri.query().is_some() {
            return Err(UpstreamError::UnexpectedPath(origin.to_string()));
        }

        Ok(Self {
            origin: format!("http://{authority}"),
            authority,
        })
    }

    /// Upstream URI for an inbound request: origin + path + query, unchanged.
    pub fn target_uri(&self, inbound: &Uri) -> Result<Uri, InvalidUriParts> {
        let mut parts = inbound.clone().into_parts();
        parts.scheme = Some(Scheme::HTTP);
        parts.authority = Some(self.authority.clone());
        if parts.path_and_query.is_none() {
            parts.path_and_query = Some(PathAndQuery::from_static("/"));
        }
        Uri::from_parts(parts)
    }

    /// Host and port, as sent when the Host header is rewritten.
    pub fn authority(&self) -> &Authority {
        &self.authority
    }

    /// Normalized `http://host[:port]` form.
    pub fn origin(&self) -> &str {
        &self.origin
    }
}
