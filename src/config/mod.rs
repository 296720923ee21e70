//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → validation.rs (semantic checks)
//!     → ProxyConfig (validated, immutable)
//!     → consumed once by HttpServer at startup
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded; the upstream is fixed for the process lifetime
//! - All fields have defaults to allow minimal configs
//! - Validation separates syntactic (serde) from semantic checks

pub mod loader;
pub mod schema;
pub mod validation;

pub use loader::{load_config, load_or_default, ConfigError};
pub use schema::{ListenerConfig, LogFormat, LogsConfig, ObservabilityConfig, ProxyConfig, UpstreamConfig};
