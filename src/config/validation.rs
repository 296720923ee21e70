//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Validate addresses, the upstream origin and value ranges
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: ProxyConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::net::SocketAddr;

use axum::http::HeaderName;
use thiserror::Error;

use crate::config::schema::ProxyConfig;
use crate::proxy::upstream::{Upstream, UpstreamError};

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// A single semantic problem in the configuration.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("{field}: `{value}` is not a socket address")]
    InvalidAddress { field: &'static str, value: String },
    #[error("upstream.origin: {0}")]
    Upstream(#[from] UpstreamError),
    #[error("logs.max_entries must be greater than zero")]
    ZeroCapacity,
    #[error("logs.api_limit must be between 1 and logs.max_entries ({max}), got {value}")]
    ApiLimitOutOfRange { value: usize, max: usize },
    #[error("logs.client_ip_header: `{0}` is not a valid header name")]
    InvalidHeader(String),
    #[error("observability.log_level: unknown level `{0}`")]
    UnknownLogLevel(String),
}

/// Check a parsed configuration, collecting every problem found.
pub fn validate_config(config: &ProxyConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.bind_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field: "listener.bind_address",
            value: config.listener.bind_address.clone(),
        });
    }

    if let Err(e) = Upstream::parse(&config.upstream.origin) {
        errors.push(e.into());
    }

    let logs = &config.logs;
    if logs.max_entries == 0 {
        errors.push(ValidationError::ZeroCapacity);
    } else if logs.api_limit == 0 || logs.api_limit > logs.max_entries {
        errors.push(ValidationError::ApiLimitOutOfRange {
            value: logs.api_limit,
            max: logs.max_entries,
        });
    }
    if HeaderName::from_bytes(logs.client_ip_header.as_bytes()).is_err() {
        errors.push(ValidationError::InvalidHeader(logs.client_ip_header.clone()));
    }

    let obs = &config.observability;
    if !LOG_LEVELS.contains(&obs.log_level.to_ascii_lowercase().as_str()) {
        errors.push(ValidationError::UnknownLogLevel(obs.log_level.clone()));
    }
    if obs.metrics_enabled && obs.metrics_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidAddress {
            field: "observability.metrics_address",
            value: obs.metrics_address.clone(),
        });
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
