//! Relay proxy library.
//!
//! Forwards every request to one fixed upstream origin and keeps a bounded,
//! in-memory log of proxy events behind `/_logs` and `/_health`.

pub mod config;
pub mod diagnostics;
pub mod error;
pub mod http;
pub mod lifecycle;
pub mod logs;
pub mod observability;
pub mod proxy;
pub mod routing;

pub use config::schema::ProxyConfig;
pub use error::ProxyError;
pub use http::HttpServer;
pub use lifecycle::Shutdown;
pub use logs::{LogEntry, LogStore};
