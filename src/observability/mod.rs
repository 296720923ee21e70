//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → logging.rs (structured log events, pretty or JSON)
//!     → metrics.rs (counters, gauges, histograms)
//!
//! Consumers:
//!     → stdout log aggregation
//!     → Metrics endpoint (Prometheus scrape)
//! ```
//!
//! # Design Decisions
//! - Request ID carried on the per-request span only
//! - Metrics are cheap and no-ops until an exporter is installed

pub mod logging;
pub mod metrics;
