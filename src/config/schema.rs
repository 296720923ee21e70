//! Configuration schema definitions.
//!
//! This module defines the complete configuration structure for the proxy.
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::logs::MAX_LOG_ENTRIES;

/// Root configuration for the relay proxy.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ProxyConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// The single upstream every non-diagnostic request is forwarded to.
    pub upstream: UpstreamConfig,

    /// In-memory event log settings.
    pub logs: LogsConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// Upstream origin configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UpstreamConfig {
    /// Origin as `http://host[:port]`, without path or query.
    pub origin: String,

    /// Replace the inbound Host header with the upstream authority.
    /// Off by default: headers are forwarded verbatim.
    pub rewrite_host: bool,
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            origin: "http://api1.123h.top:5000".to_string(),
            rewrite_host: false,
        }
    }
}

/// Event log configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LogsConfig {
    /// Maximum entries retained in memory.
    pub max_entries: usize,

    /// Maximum entries returned by the JSON listing.
    pub api_limit: usize,

    /// Trusted header carrying the client address, set by the edge network.
    pub client_ip_header: String,

    /// Mirror every appended entry to the process log.
    pub echo: bool,
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            max_entries: MAX_LOG_ENTRIES,
            api_limit: 100,
            client_ip_header: "cf-connecting-ip".to_string(),
            echo: true,
        }
    }
}

/// Output format of the process log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Process log format.
    pub log_format: LogFormat,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_format: LogFormat::Pretty,
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}
